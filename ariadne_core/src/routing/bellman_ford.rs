use tracing::debug;

use crate::{error::RoutingError, label::Label, stopwatch::Stopwatch};

use super::{
    routing_path_builder::build_path, routing_request::ShortestPathRequest,
    search_observer::{NoopObserver, SearchObserver},
    shortest_path_algorithm::ShortestPathAlgorithm,
    shortest_path_solution::ShortestPathSolution,
};

/// Relaxes every allowed arc until no label improves. Slow, but its result
/// does not depend on any extraction order, which makes it the reference the
/// label-setting searches are checked against.
pub struct BellmanFord;

impl BellmanFord {
    fn relax_all(
        &self,
        request: &ShortestPathRequest,
        observer: &mut dyn SearchObserver,
    ) -> Vec<Label> {
        let graph = request.graph();
        let weighting = request.weighting();
        let origin = request.origin().id();
        let destination = request.destination().id();

        let mut labels: Vec<Label> = (0..graph.size()).map(Label::new).collect();
        labels[origin] = Label::with_cost(origin, 0.0, None);
        observer.origin_processed(request.origin());

        let mut rounds = 0;
        let mut improved = true;
        // With nonnegative costs, a round without improvement happens after at
        // most `size` rounds
        while improved && rounds < graph.size() {
            improved = false;
            rounds += 1;

            for arc in graph.arcs() {
                let from = arc.origin();
                let to = arc.destination();
                if !labels[from].cost().is_finite() || !weighting.is_allowed(arc) {
                    continue;
                }

                let candidate_cost = labels[from].cost() + weighting.cost(arc);
                if candidate_cost >= labels[to].cost() {
                    continue;
                }

                if labels[to].parent().is_none() && to != origin {
                    if to == destination {
                        observer.destination_reached(graph.node(to));
                    } else {
                        observer.node_reached(graph.node(to));
                    }
                }

                labels[to].change_parent(arc.id(), candidate_cost);
                improved = true;
            }
        }

        debug!(origin, destination, rounds, "bellman-ford finished");

        labels
    }

    /// Optimal cost from the origin of `request` to every node of the graph,
    /// infinite for unreachable nodes.
    pub fn costs_from(&self, request: &ShortestPathRequest) -> Vec<f64> {
        self.relax_all(request, &mut NoopObserver)
            .iter()
            .map(Label::cost)
            .collect()
    }
}

impl ShortestPathAlgorithm for BellmanFord {
    fn name(&self) -> &'static str {
        "bellman-ford"
    }

    fn run_with_observer<'a>(
        &self,
        request: &ShortestPathRequest<'a>,
        observer: &mut dyn SearchObserver,
    ) -> Result<ShortestPathSolution<'a>, RoutingError> {
        let stopwatch = Stopwatch::start(self.name());

        let labels = self.relax_all(request, observer);
        let solution = if labels[request.destination().id()].cost().is_finite() {
            let path = build_path(request, &labels)?;
            ShortestPathSolution::feasible(request, path, self.name())
        } else {
            ShortestPathSolution::infeasible(request, self.name())
        };

        Ok(solution.with_solving_time(stopwatch.stop()))
    }
}
