use crate::error::RoutingError;

use super::{
    astar_heuristic::CrowFlyHeuristic, label_search::solve, routing_request::ShortestPathRequest,
    search_observer::SearchObserver, shortest_path_algorithm::ShortestPathAlgorithm,
    shortest_path_solution::ShortestPathSolution,
};

/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The label search with every label estimated by a [`CrowFlyHeuristic`]
/// towards the destination of the request.
pub struct AStar;

impl ShortestPathAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn run_with_observer<'a>(
        &self,
        request: &ShortestPathRequest<'a>,
        observer: &mut dyn SearchObserver,
    ) -> Result<ShortestPathSolution<'a>, RoutingError> {
        let heuristic = CrowFlyHeuristic::new(request);
        solve(self.name(), request, &heuristic, observer)
    }
}
