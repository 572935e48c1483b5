use thiserror::Error;

use crate::{path::PathError, priority_queue::PriorityQueueError, types::NodeId};

#[derive(Error, Debug, PartialEq)]
pub enum RoutingError {
    #[error("Origin node {0} does not belong to the graph")]
    InvalidOrigin(NodeId),
    #[error("Destination node {0} does not belong to the graph")]
    InvalidDestination(NodeId),
    #[error("Priority queue error: {0}")]
    Queue(#[from] PriorityQueueError),
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    #[error("Parent chain of node {0} does not lead back to the origin")]
    BrokenParentChain(NodeId),
}
