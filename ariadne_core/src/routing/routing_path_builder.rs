use crate::{
    error::RoutingError,
    label::Label,
    path::{Path, PathError},
};

use super::routing_request::ShortestPathRequest;

/// Walks parent arcs back from the destination label. The walk must end on
/// the origin, which is the only label without parent.
pub(crate) fn build_path<'a>(
    request: &ShortestPathRequest<'a>,
    labels: &[Label],
) -> Result<Path<'a>, RoutingError> {
    let graph = request.graph();
    let origin = request.origin().id();
    let destination = request.destination().id();

    let mut arcs = Vec::with_capacity(32);
    let mut node = destination;
    while let Some(arc_id) = labels[node].parent() {
        if arcs.len() >= labels.len() {
            return Err(RoutingError::BrokenParentChain(destination));
        }

        let arc = graph.get_arc(arc_id).ok_or(PathError::UnknownArc(arc_id))?;
        arcs.push(arc_id);
        node = arc.origin();
    }

    if node != origin {
        return Err(RoutingError::BrokenParentChain(node));
    }

    if arcs.is_empty() {
        return Ok(Path::single_node(graph, origin)?);
    }

    arcs.reverse();
    Ok(Path::from_arcs(graph, arcs)?)
}
