use std::ptr;

use thiserror::Error;

use crate::{
    distance::{Distance, Meters},
    graph::{Graph, GraphArc, Node},
    types::{ArcId, Kmh, NodeId, Seconds},
};

#[derive(Error, Debug, PartialEq)]
pub enum PathError {
    #[error("Arc {0} does not belong to the graph")]
    UnknownArc(ArcId),
    #[error("Node {0} does not belong to the graph")]
    UnknownNode(NodeId),
    #[error("Arc at index {index} does not start where the previous arc ends")]
    ArcsNotConnected { index: usize },
    #[error("No arc links node {from} to node {to}")]
    NodesNotConnected { from: NodeId, to: NodeId },
    #[error("Cannot concatenate a path ending at {previous_destination} with one starting at {next_origin}")]
    ConcatenationMismatch {
        previous_destination: NodeId,
        next_origin: NodeId,
    },
    #[error("Cannot concatenate paths of different graphs")]
    DifferentGraphs,
}

/// A chain of arcs of one graph, where each arc starts where the previous one
/// ends. A path without origin is empty; a path with an origin and no arcs is
/// the trivial route from a node to itself.
#[derive(Debug, Clone)]
pub struct Path<'g> {
    graph: &'g Graph,
    origin: Option<NodeId>,
    arcs: Vec<ArcId>,
}

impl<'g> Path<'g> {
    pub fn empty(graph: &'g Graph) -> Self {
        Path {
            graph,
            origin: None,
            arcs: Vec::new(),
        }
    }

    pub fn single_node(graph: &'g Graph, node: NodeId) -> Result<Self, PathError> {
        if !graph.contains(node) {
            return Err(PathError::UnknownNode(node));
        }

        Ok(Path {
            graph,
            origin: Some(node),
            arcs: Vec::new(),
        })
    }

    /// Builds a path from a chain of arcs. An empty chain gives an empty path.
    pub fn from_arcs(graph: &'g Graph, arcs: Vec<ArcId>) -> Result<Self, PathError> {
        let mut previous: Option<&GraphArc> = None;
        for (index, &arc_id) in arcs.iter().enumerate() {
            let arc = graph.get_arc(arc_id).ok_or(PathError::UnknownArc(arc_id))?;
            if let Some(previous) = previous {
                if previous.destination() != arc.origin() {
                    return Err(PathError::ArcsNotConnected { index });
                }
            }
            previous = Some(arc);
        }

        let origin = arcs.first().map(|&arc| graph.arc(arc).origin());
        Ok(Path {
            graph,
            origin,
            arcs,
        })
    }

    /// Builds the path visiting `nodes` in order, using the fastest arc between
    /// each pair of consecutive nodes.
    pub fn fastest_from_nodes(graph: &'g Graph, nodes: &[NodeId]) -> Result<Self, PathError> {
        Self::from_nodes_by(graph, nodes, |arc| arc.minimum_travel_time())
    }

    /// Builds the path visiting `nodes` in order, using the shortest arc between
    /// each pair of consecutive nodes.
    pub fn shortest_from_nodes(graph: &'g Graph, nodes: &[NodeId]) -> Result<Self, PathError> {
        Self::from_nodes_by(graph, nodes, |arc| arc.length().value())
    }

    fn from_nodes_by(
        graph: &'g Graph,
        nodes: &[NodeId],
        cost: impl Fn(&GraphArc) -> f64,
    ) -> Result<Self, PathError> {
        match nodes {
            [] => Ok(Path::empty(graph)),
            [node] => Path::single_node(graph, *node),
            _ => {
                if let Some(&unknown) = nodes.iter().find(|&&node| !graph.contains(node)) {
                    return Err(PathError::UnknownNode(unknown));
                }

                let arcs = nodes
                    .windows(2)
                    .map(|pair| {
                        let (from, to) = (pair[0], pair[1]);
                        graph
                            .successors(from)
                            .filter(|arc| arc.destination() == to)
                            .min_by(|a, b| cost(a).total_cmp(&cost(b)))
                            .map(|arc| arc.id())
                            .ok_or(PathError::NodesNotConnected { from, to })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Path::from_arcs(graph, arcs)
            }
        }
    }

    /// Joins paths end to end. Empty paths are skipped; every other path must
    /// start where the previous one ends.
    pub fn concatenate(graph: &'g Graph, paths: &[Path<'g>]) -> Result<Self, PathError> {
        let mut result = Path::empty(graph);
        for path in paths {
            if !ptr::eq(path.graph, graph) {
                return Err(PathError::DifferentGraphs);
            }

            let Some(next_origin) = path.origin else {
                continue;
            };

            match result.destination_id() {
                None => result.origin = Some(next_origin),
                Some(previous_destination) if previous_destination != next_origin => {
                    return Err(PathError::ConcatenationMismatch {
                        previous_destination,
                        next_origin,
                    });
                }
                Some(_) => {}
            }
            result.arcs.extend_from_slice(&path.arcs);
        }

        Ok(result)
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_none()
    }

    pub fn origin(&self) -> Option<&'g Node> {
        self.origin.map(|node| self.graph.node(node))
    }

    pub fn destination(&self) -> Option<&'g Node> {
        self.destination_id().map(|node| self.graph.node(node))
    }

    fn destination_id(&self) -> Option<NodeId> {
        match self.arcs.last() {
            Some(&arc) => Some(self.graph.arc(arc).destination()),
            None => self.origin,
        }
    }

    pub fn arc_ids(&self) -> &[ArcId] {
        &self.arcs
    }

    pub fn arcs(&self) -> impl Iterator<Item = &'g GraphArc> + '_ {
        self.arcs.iter().map(|&arc| self.graph.arc(arc))
    }

    /// Visited nodes, origin and destination included.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.origin
            .into_iter()
            .chain(self.arcs().map(|arc| arc.destination()))
            .collect()
    }

    /// Number of nodes on the path.
    pub fn size(&self) -> usize {
        match self.origin {
            None => 0,
            Some(_) => self.arcs.len() + 1,
        }
    }

    /// A path is valid when it is empty, a single node, or a chain of arcs
    /// starting at its origin where each arc starts where the previous ends.
    pub fn is_valid(&self) -> bool {
        let Some(origin) = self.origin else {
            return self.arcs.is_empty();
        };

        let mut current = origin;
        for arc in self.arcs() {
            if arc.origin() != current {
                return false;
            }
            current = arc.destination();
        }

        true
    }

    pub fn length(&self) -> Distance<Meters> {
        self.arcs().map(|arc| arc.length()).sum()
    }

    /// Time in seconds to travel the path at a constant `speed` km/h.
    pub fn travel_time(&self, speed: Kmh) -> Seconds {
        self.arcs().map(|arc| arc.travel_time(speed)).sum()
    }

    /// Time in seconds to travel the path at each road's speed limit.
    pub fn minimum_travel_time(&self) -> Seconds {
        self.arcs().map(|arc| arc.minimum_travel_time()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{meters, test_graph_utils::test_graph::FiveNodeGraph};

    #[test]
    fn empty_and_single_node_paths() {
        let five = FiveNodeGraph::new();
        let empty = Path::empty(&five.graph);
        assert!(empty.is_empty());
        assert!(empty.is_valid());
        assert_eq!(empty.size(), 0);
        assert!(empty.origin().is_none());

        let single = Path::single_node(&five.graph, five.a).unwrap();
        assert!(single.is_valid());
        assert_eq!(single.size(), 1);
        assert_eq!(single.length(), meters!(0));
        assert_eq!(single.minimum_travel_time(), 0.0);
        assert_eq!(single.destination().unwrap().id(), five.a);
        assert!(Path::single_node(&five.graph, 42).is_err());
    }

    #[test]
    fn from_arcs_checks_chain() {
        let five = FiveNodeGraph::new();
        let path = Path::from_arcs(&five.graph, vec![five.a2d, five.d2b, five.b2c]).unwrap();
        assert!(path.is_valid());
        assert_eq!(path.nodes(), vec![five.a, five.d, five.b, five.c]);
        assert_eq!(path.size(), 4);
        assert_eq!(path.length(), meters!(9));

        assert_eq!(
            Path::from_arcs(&five.graph, vec![five.a2d, five.b2c]).unwrap_err(),
            PathError::ArcsNotConnected { index: 1 }
        );
        assert_eq!(
            Path::from_arcs(&five.graph, vec![999]).unwrap_err(),
            PathError::UnknownArc(999)
        );
    }

    #[test]
    fn travel_time_uses_speed_limit() {
        let five = FiveNodeGraph::new();
        let path = Path::from_arcs(&five.graph, vec![five.a2d, five.d2e]).unwrap();
        // 7 meters at 1 km/h
        assert!((path.minimum_travel_time() - 7.0 * 3.6).abs() < 1e-9);
        assert!((path.travel_time(36) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn shortest_from_nodes_picks_shortest_arcs() {
        let five = FiveNodeGraph::new();
        let path = Path::shortest_from_nodes(&five.graph, &[five.a, five.d, five.e]).unwrap();
        assert_eq!(path.arc_ids(), &[five.a2d, five.d2e]);

        let fastest = Path::fastest_from_nodes(&five.graph, &[five.a, five.d, five.e]).unwrap();
        assert_eq!(fastest.arc_ids(), path.arc_ids());

        assert_eq!(
            Path::shortest_from_nodes(&five.graph, &[five.a, five.c]).unwrap_err(),
            PathError::NodesNotConnected {
                from: five.a,
                to: five.c
            }
        );
        assert!(Path::shortest_from_nodes(&five.graph, &[]).unwrap().is_empty());
        assert_eq!(
            Path::shortest_from_nodes(&five.graph, &[five.b]).unwrap().size(),
            1
        );
    }

    #[test]
    fn concatenate_checks_junctions() {
        let five = FiveNodeGraph::new();
        let first = Path::from_arcs(&five.graph, vec![five.a2d, five.d2b]).unwrap();
        let second = Path::from_arcs(&five.graph, vec![five.b2c, five.c2e]).unwrap();
        let trivial = Path::single_node(&five.graph, five.b).unwrap();

        let joined = Path::concatenate(
            &five.graph,
            &[first.clone(), trivial, Path::empty(&five.graph), second.clone()],
        )
        .unwrap();
        assert!(joined.is_valid());
        assert_eq!(joined.length(), first.length() + second.length());
        assert_eq!(joined.nodes(), vec![five.a, five.d, five.b, five.c, five.e]);

        assert_eq!(
            Path::concatenate(&five.graph, &[second, first]).unwrap_err(),
            PathError::ConcatenationMismatch {
                previous_destination: five.e,
                next_origin: five.a
            }
        );
    }

    #[test]
    fn concatenate_rejects_foreign_paths() {
        let five = FiveNodeGraph::new();
        let other = FiveNodeGraph::new();
        let foreign = Path::single_node(&other.graph, other.a).unwrap();
        assert_eq!(
            Path::concatenate(&five.graph, &[foreign]).unwrap_err(),
            PathError::DifferentGraphs
        );
    }
}
