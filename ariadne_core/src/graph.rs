use std::sync::Arc;

use crate::{
    constants::{METERS_PER_KILOMETER, SECONDS_PER_HOUR},
    distance::{Distance, Meters},
    geopoint::GeoPoint,
    road_information::RoadInformation,
    types::{ArcId, Kmh, NodeId, Seconds},
};

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    point: GeoPoint,
    successors: Vec<ArcId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, point: GeoPoint) -> Self {
        Node {
            id,
            point,
            successors: Vec::new(),
        }
    }

    pub(crate) fn push_successor(&mut self, arc: ArcId) {
        self.successors.push(arc);
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }

    pub fn successor_ids(&self) -> &[ArcId] {
        &self.successors
    }

    pub fn has_successors(&self) -> bool {
        !self.successors.is_empty()
    }
}

/// A directed arc. Origin and destination are node ids of the owning graph.
#[derive(Debug, Clone)]
pub struct GraphArc {
    id: ArcId,
    origin: NodeId,
    destination: NodeId,
    length: Distance<Meters>,
    road: Arc<RoadInformation>,
    points: Vec<GeoPoint>,
}

impl GraphArc {
    pub(crate) fn new(
        id: ArcId,
        origin: NodeId,
        destination: NodeId,
        length: Distance<Meters>,
        road: Arc<RoadInformation>,
        points: Vec<GeoPoint>,
    ) -> Self {
        GraphArc {
            id,
            origin,
            destination,
            length,
            road,
            points,
        }
    }

    pub fn id(&self) -> ArcId {
        self.id
    }

    pub fn origin(&self) -> NodeId {
        self.origin
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn length(&self) -> Distance<Meters> {
        self.length
    }

    pub fn road_information(&self) -> &RoadInformation {
        &self.road
    }

    pub fn shared_road_information(&self) -> &Arc<RoadInformation> {
        &self.road
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Time in seconds to travel along this arc at `speed` km/h.
    pub fn travel_time(&self, speed: Kmh) -> Seconds {
        self.length.value() * SECONDS_PER_HOUR / (speed as f64 * METERS_PER_KILOMETER)
    }

    /// Time in seconds to travel along this arc at the road's speed limit.
    pub fn minimum_travel_time(&self) -> Seconds {
        self.travel_time(self.road.maximum_speed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub top_left: GeoPoint,
    pub bottom_right: GeoPoint,
}

impl BoundingBox {
    pub fn around<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<BoundingBox> {
        points.into_iter().fold(None, |bbox, point| {
            Some(match bbox {
                None => BoundingBox {
                    top_left: *point,
                    bottom_right: *point,
                },
                Some(BoundingBox {
                    top_left,
                    bottom_right,
                }) => BoundingBox {
                    top_left: GeoPoint::new(top_left.lat.max(point.lat), top_left.lng.min(point.lng)),
                    bottom_right: GeoPoint::new(
                        bottom_right.lat.min(point.lat),
                        bottom_right.lng.max(point.lng),
                    ),
                },
            })
        })
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat <= self.top_left.lat
            && point.lat >= self.bottom_right.lat
            && point.lng >= self.top_left.lng
            && point.lng <= self.bottom_right.lng
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub arc_count: usize,
    pub one_way_road_count: usize,
    pub total_length: Distance<Meters>,
    pub bounding_box: Option<BoundingBox>,
    /// Fastest speed limit found on the graph, in km/h.
    pub maximum_speed: Option<Kmh>,
}

/// Immutable road graph. Nodes and arcs live in dense arrays indexed by id, so a
/// graph can be shared read-only between any number of concurrent searches.
#[derive(Debug)]
pub struct Graph {
    name: String,
    nodes: Vec<Node>,
    arcs: Vec<GraphArc>,
    statistics: GraphStatistics,
}

impl Graph {
    pub(crate) fn new(
        name: String,
        nodes: Vec<Node>,
        arcs: Vec<GraphArc>,
        statistics: GraphStatistics,
    ) -> Self {
        Graph {
            name,
            nodes,
            arcs,
            statistics,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.nodes.len()
    }

    pub fn node(&self, node: NodeId) -> &Node {
        &self.nodes[node]
    }

    pub fn get(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn arc(&self, arc: ArcId) -> &GraphArc {
        &self.arcs[arc]
    }

    pub fn get_arc(&self, arc: ArcId) -> Option<&GraphArc> {
        self.arcs.get(arc)
    }

    pub fn arcs(&self) -> &[GraphArc] {
        &self.arcs
    }

    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = &GraphArc> + '_ {
        self.nodes[node]
            .successors
            .iter()
            .map(move |&arc_id| &self.arcs[arc_id])
    }

    pub fn statistics(&self) -> &GraphStatistics {
        &self.statistics
    }

    pub fn maximum_speed(&self) -> Option<Kmh> {
        self.statistics.maximum_speed
    }
}
