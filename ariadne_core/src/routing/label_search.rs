use tracing::debug;

use crate::{
    error::RoutingError,
    label::{Label, LabelState},
    priority_queue::PriorityQueue,
    stopwatch::Stopwatch,
};

use super::{
    astar_heuristic::AStarHeuristic, routing_path_builder::build_path,
    routing_request::ShortestPathRequest, search_observer::SearchObserver,
    shortest_path_solution::ShortestPathSolution,
};

/// Label-setting search shared by Dijkstra and A*.
///
/// Every label gets its heuristic estimate before the loop starts and keeps
/// it for the whole run. Labels are indexed by node id, so when origin and
/// destination are the same node they share one label.
pub(crate) fn label_search<H>(
    request: &ShortestPathRequest,
    heuristic: &H,
    observer: &mut dyn SearchObserver,
) -> Result<Vec<Label>, RoutingError>
where
    H: AStarHeuristic + ?Sized,
{
    let graph = request.graph();
    let weighting = request.weighting();
    let origin = request.origin().id();
    let destination = request.destination().id();

    let mut labels: Vec<Label> = graph
        .nodes()
        .iter()
        .map(|node| {
            let label = if node.id() == origin {
                Label::with_cost(origin, 0.0, None)
            } else {
                Label::new(node.id())
            };
            label.with_estimate(heuristic.estimate(node))
        })
        .collect();

    let mut queue = PriorityQueue::new(graph.size());
    queue.insert(origin, labels[origin].key())?;
    observer.origin_processed(request.origin());

    let mut iterations = 0;
    while !labels[destination].is_marked() && !queue.is_empty() {
        let (current, _) = queue.delete_min()?;
        iterations += 1;

        labels[current].mark();
        observer.node_marked(graph.node(current));

        if current == destination {
            break;
        }

        let current_cost = labels[current].cost();
        for arc in graph.successors(current) {
            let next = arc.destination();
            if labels[next].is_marked() || !weighting.is_allowed(arc) {
                continue;
            }

            let arc_cost = weighting.cost(arc);
            debug_assert!(arc_cost >= 0.0, "arc {} has negative cost {}", arc.id(), arc_cost);

            let candidate_cost = current_cost + arc_cost;
            let label = &mut labels[next];
            if candidate_cost >= label.cost() {
                continue;
            }

            if label.state() == LabelState::Unseen {
                if next == destination {
                    observer.destination_reached(graph.node(next));
                } else {
                    observer.node_reached(graph.node(next));
                }
            } else {
                queue.remove(next)?;
            }

            label.change_parent(arc.id(), candidate_cost);
            queue.insert(next, label.key())?;
        }
    }

    debug!(
        origin,
        destination,
        iterations,
        found = labels[destination].is_marked(),
        "label search finished"
    );

    Ok(labels)
}

/// Runs [`label_search`] and turns the destination label into a solution.
pub(crate) fn solve<'a, H>(
    algorithm: &'static str,
    request: &ShortestPathRequest<'a>,
    heuristic: &H,
    observer: &mut dyn SearchObserver,
) -> Result<ShortestPathSolution<'a>, RoutingError>
where
    H: AStarHeuristic + ?Sized,
{
    let stopwatch = Stopwatch::start(algorithm);

    let labels = label_search(request, heuristic, observer)?;
    let solution = if labels[request.destination().id()].is_marked() {
        let path = build_path(request, &labels)?;
        ShortestPathSolution::feasible(request, path, algorithm)
    } else {
        ShortestPathSolution::infeasible(request, algorithm)
    };

    Ok(solution.with_solving_time(stopwatch.stop()))
}
