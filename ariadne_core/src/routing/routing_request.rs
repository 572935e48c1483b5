use crate::{
    error::RoutingError,
    graph::{Graph, Node},
    types::NodeId,
    weighting::{Mode, Weighting},
};

/// Input of one shortest-path run. Origin and destination are checked
/// against the graph on creation.
#[derive(Clone, Copy)]
pub struct ShortestPathRequest<'a> {
    graph: &'a Graph,
    origin: NodeId,
    destination: NodeId,
    weighting: &'a dyn Weighting,
}

impl<'a> ShortestPathRequest<'a> {
    pub fn new(
        graph: &'a Graph,
        origin: NodeId,
        destination: NodeId,
        weighting: &'a dyn Weighting,
    ) -> Result<Self, RoutingError> {
        if !graph.contains(origin) {
            return Err(RoutingError::InvalidOrigin(origin));
        }

        if !graph.contains(destination) {
            return Err(RoutingError::InvalidDestination(destination));
        }

        Ok(ShortestPathRequest {
            graph,
            origin,
            destination,
            weighting,
        })
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub fn origin(&self) -> &'a Node {
        self.graph.node(self.origin)
    }

    pub fn destination(&self) -> &'a Node {
        self.graph.node(self.destination)
    }

    pub fn weighting(&self) -> &'a dyn Weighting {
        self.weighting
    }

    pub fn mode(&self) -> Mode {
        self.weighting.mode()
    }

    /// Same graph and weighting, other endpoints.
    pub fn between(&self, origin: NodeId, destination: NodeId) -> Result<Self, RoutingError> {
        ShortestPathRequest::new(self.graph, origin, destination, self.weighting)
    }
}
