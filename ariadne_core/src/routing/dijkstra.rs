use crate::error::RoutingError;

use super::{
    astar_heuristic::ZeroHeuristic, label_search::solve, routing_request::ShortestPathRequest,
    search_observer::SearchObserver, shortest_path_algorithm::ShortestPathAlgorithm,
    shortest_path_solution::ShortestPathSolution,
};

/// Dijkstra is the label search with a zero heuristic.
pub struct Dijkstra;

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn run_with_observer<'a>(
        &self,
        request: &ShortestPathRequest<'a>,
        observer: &mut dyn SearchObserver,
    ) -> Result<ShortestPathSolution<'a>, RoutingError> {
        solve(self.name(), request, &ZeroHeuristic, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        distance::{Distance, Meters},
        meters,
        road_information::AccessMode,
        routing::{
            search_observer::{SearchEvent, SearchStatistics},
            shortest_path_solution::SolutionStatus,
        },
        test_graph_utils::test_graph::{FiveNodeGraph, closed_road},
        weighting::{AccessFilter, DistanceWeighting, Profile},
    };

    fn walking_distance() -> DistanceWeighting {
        DistanceWeighting::new(AccessFilter::OpenTo(AccessMode::Foot))
    }

    #[test]
    fn five_node_shortest_paths() {
        let five = FiveNodeGraph::new();
        let weighting = walking_distance();

        let cases = [
            (five.c, vec![five.a2d, five.d2b, five.b2c], 9.0),
            (five.e, vec![five.a2d, five.d2e], 7.0),
            (five.b, vec![five.a2d, five.d2b], 8.0),
            (five.d, vec![five.a2d], 5.0),
        ];

        for (destination, arcs, length) in cases {
            let request =
                ShortestPathRequest::new(&five.graph, five.a, destination, &weighting).unwrap();
            let solution = Dijkstra.run(&request).unwrap();

            assert_eq!(solution.status(), SolutionStatus::Feasible);
            assert_eq!(solution.algorithm(), "dijkstra");
            assert_eq!(solution.cost(), Some(length));

            let path = solution.path().unwrap();
            assert!(path.is_valid());
            assert_eq!(path.arc_ids(), arcs.as_slice());
            assert_eq!(path.length(), meters!(length));
        }
    }

    #[test]
    fn five_node_fastest_path_for_pedestrians() {
        let five = FiveNodeGraph::new();
        let weighting = Profile::Pedestrian.weighting();
        let request =
            ShortestPathRequest::new(&five.graph, five.a, five.c, weighting.as_ref()).unwrap();

        let solution = Dijkstra.run(&request).unwrap();
        let path = solution.path().unwrap();
        assert_eq!(path.arc_ids(), &[five.a2d, five.d2b, five.b2c]);
        // 9 meters at 1 km/h
        assert!((solution.cost().unwrap() - 32.4).abs() < 1e-9);
        assert!((path.minimum_travel_time() - 32.4).abs() < 1e-9);
    }

    #[test]
    fn origin_is_destination() {
        let five = FiveNodeGraph::new();
        let weighting = walking_distance();
        let request = ShortestPathRequest::new(&five.graph, five.a, five.a, &weighting).unwrap();

        let mut events: Vec<SearchEvent> = Vec::new();
        let solution = Dijkstra.run_with_observer(&request, &mut events).unwrap();

        assert!(solution.is_feasible());
        let path = solution.path().unwrap();
        assert_eq!(path.size(), 1);
        assert_eq!(path.length(), Distance::<Meters>::ZERO);
        assert_eq!(path.minimum_travel_time(), 0.0);
        assert_eq!(
            events,
            vec![
                SearchEvent::OriginProcessed(five.a),
                SearchEvent::NodeMarked(five.a)
            ]
        );
    }

    #[test]
    fn closed_roads_are_infeasible() {
        let five = FiveNodeGraph::with_road(closed_road());
        let weighting = walking_distance();

        for destination in [five.b, five.c, five.d, five.e] {
            let request =
                ShortestPathRequest::new(&five.graph, five.a, destination, &weighting).unwrap();
            let solution = Dijkstra.run(&request).unwrap();
            assert_eq!(solution.status(), SolutionStatus::Infeasible);
            assert!(solution.path().is_none());
            assert_eq!(solution.cost(), None);
        }
    }

    #[test]
    fn cars_cannot_use_footpaths() {
        let five = FiveNodeGraph::new();
        let weighting = Profile::FastestCar.weighting();
        let request =
            ShortestPathRequest::new(&five.graph, five.a, five.e, weighting.as_ref()).unwrap();

        assert!(!Dijkstra.run(&request).unwrap().is_feasible());
    }

    #[test]
    fn observer_sees_events_in_extraction_order() {
        let five = FiveNodeGraph::new();
        let weighting = walking_distance();
        let request = ShortestPathRequest::new(&five.graph, five.a, five.e, &weighting).unwrap();

        let mut events: Vec<SearchEvent> = Vec::new();
        let mut statistics = SearchStatistics::default();
        Dijkstra
            .run_with_observer(&request, &mut (&mut events, &mut statistics))
            .unwrap();

        assert_eq!(
            events,
            vec![
                SearchEvent::OriginProcessed(five.a),
                SearchEvent::NodeMarked(five.a),
                SearchEvent::NodeReached(five.b),
                SearchEvent::NodeReached(five.d),
                SearchEvent::NodeMarked(five.d),
                SearchEvent::NodeReached(five.c),
                SearchEvent::DestinationReached(five.e),
                SearchEvent::NodeMarked(five.e),
            ]
        );
        assert_eq!(
            statistics,
            SearchStatistics {
                marked_nodes: 3,
                reached_nodes: 4,
                destination_reached: true,
            }
        );
    }
}
