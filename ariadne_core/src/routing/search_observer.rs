use tracing::trace;

use crate::{graph::Node, types::NodeId};

/// Callbacks invoked synchronously by the label search.
///
/// The origin is reported once before the loop starts, then marks and
/// discoveries follow in extraction order. Every method defaults to a no-op.
pub trait SearchObserver {
    fn origin_processed(&mut self, _node: &Node) {}

    fn node_marked(&mut self, _node: &Node) {}

    /// First discovery of a node other than the destination.
    fn node_reached(&mut self, _node: &Node) {}

    fn destination_reached(&mut self, _node: &Node) {}
}

pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn origin_processed(&mut self, node: &Node) {
        (**self).origin_processed(node);
    }

    fn node_marked(&mut self, node: &Node) {
        (**self).node_marked(node);
    }

    fn node_reached(&mut self, node: &Node) {
        (**self).node_reached(node);
    }

    fn destination_reached(&mut self, node: &Node) {
        (**self).destination_reached(node);
    }
}

impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn origin_processed(&mut self, node: &Node) {
        self.0.origin_processed(node);
        self.1.origin_processed(node);
    }

    fn node_marked(&mut self, node: &Node) {
        self.0.node_marked(node);
        self.1.node_marked(node);
    }

    fn node_reached(&mut self, node: &Node) {
        self.0.node_reached(node);
        self.1.node_reached(node);
    }

    fn destination_reached(&mut self, node: &Node) {
        self.0.destination_reached(node);
        self.1.destination_reached(node);
    }
}

/// Logs every event at trace level.
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn origin_processed(&mut self, node: &Node) {
        trace!(node = node.id(), "origin processed");
    }

    fn node_marked(&mut self, node: &Node) {
        trace!(node = node.id(), "node marked");
    }

    fn node_reached(&mut self, node: &Node) {
        trace!(node = node.id(), "node reached");
    }

    fn destination_reached(&mut self, node: &Node) {
        trace!(node = node.id(), "destination reached");
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    pub marked_nodes: usize,
    pub reached_nodes: usize,
    pub destination_reached: bool,
}

impl SearchObserver for SearchStatistics {
    fn node_marked(&mut self, _node: &Node) {
        self.marked_nodes += 1;
    }

    fn node_reached(&mut self, _node: &Node) {
        self.reached_nodes += 1;
    }

    fn destination_reached(&mut self, _node: &Node) {
        self.reached_nodes += 1;
        self.destination_reached = true;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    OriginProcessed(NodeId),
    NodeMarked(NodeId),
    NodeReached(NodeId),
    DestinationReached(NodeId),
}

/// Records the events in the order they are emitted.
impl SearchObserver for Vec<SearchEvent> {
    fn origin_processed(&mut self, node: &Node) {
        self.push(SearchEvent::OriginProcessed(node.id()));
    }

    fn node_marked(&mut self, node: &Node) {
        self.push(SearchEvent::NodeMarked(node.id()));
    }

    fn node_reached(&mut self, node: &Node) {
        self.push(SearchEvent::NodeReached(node.id()));
    }

    fn destination_reached(&mut self, node: &Node) {
        self.push(SearchEvent::DestinationReached(node.id()));
    }
}
