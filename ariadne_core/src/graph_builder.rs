use std::sync::Arc;

use fxhash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    constants::MAXIMUM_ARC_LENGTH,
    distance::{Distance, Meters},
    geopoint::GeoPoint,
    graph::{BoundingBox, Graph, GraphArc, GraphStatistics, Node},
    road_information::RoadInformation,
    types::{ArcId, Kmh, NodeId},
};

#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} does not exist in the graph")]
    UnknownNode(NodeId),
    #[error("Arc length must be between 0 and {max} meters, got {0}", max = MAXIMUM_ARC_LENGTH)]
    InvalidLength(f64),
}

/// Builds a [`Graph`]. Nodes are numbered in insertion order, road informations
/// are interned so that arcs of the same road share a single allocation.
#[derive(Default)]
pub struct GraphBuilder {
    name: String,
    nodes: Vec<Node>,
    arcs: Vec<GraphArc>,
    roads: FxHashMap<RoadInformation, Arc<RoadInformation>>,
    maximum_speed: Option<Option<Kmh>>,
}

impl GraphBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        GraphBuilder {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_node(&mut self, point: GeoPoint) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, point));
        id
    }

    /// Overrides the graph maximum speed, which is otherwise the fastest road
    /// speed limit. `None` means no maximum speed is known. An override below
    /// the fastest road speed limit is raised to that limit.
    pub fn set_maximum_speed(&mut self, maximum_speed: Option<Kmh>) -> &mut Self {
        self.maximum_speed = Some(maximum_speed);
        self
    }

    fn intern(&mut self, road: RoadInformation) -> Arc<RoadInformation> {
        self.roads
            .entry(road)
            .or_insert_with_key(|road| Arc::new(road.clone()))
            .clone()
    }

    fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if node < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(node))
        }
    }

    /// Adds a single directed arc, regardless of the road being one-way.
    pub fn add_arc(
        &mut self,
        origin: NodeId,
        destination: NodeId,
        length: f64,
        road: RoadInformation,
        points: Vec<GeoPoint>,
    ) -> Result<ArcId, GraphError> {
        let road = self.intern(road);
        self.push_arc(origin, destination, length, road, points)
    }

    /// Links two nodes with the arcs of a road: the forward arc, plus the
    /// reverse arc when the road is not one-way. Returns the forward arc.
    pub fn link_nodes(
        &mut self,
        origin: NodeId,
        destination: NodeId,
        length: f64,
        road: RoadInformation,
        points: Vec<GeoPoint>,
    ) -> Result<ArcId, GraphError> {
        let road = self.intern(road);
        let one_way = road.one_way;
        let reversed_points = if one_way {
            Vec::new()
        } else {
            points.iter().rev().copied().collect()
        };

        let forward = self.push_arc(origin, destination, length, road.clone(), points)?;
        if !one_way {
            self.push_arc(destination, origin, length, road, reversed_points)?;
        }

        Ok(forward)
    }

    fn push_arc(
        &mut self,
        origin: NodeId,
        destination: NodeId,
        length: f64,
        road: Arc<RoadInformation>,
        points: Vec<GeoPoint>,
    ) -> Result<ArcId, GraphError> {
        self.check_node(origin)?;
        self.check_node(destination)?;
        if !length.is_finite() || !(0.0..=MAXIMUM_ARC_LENGTH).contains(&length) {
            return Err(GraphError::InvalidLength(length));
        }

        let id = self.arcs.len();
        let length: Distance<Meters> = Distance::from(length);
        self.arcs
            .push(GraphArc::new(id, origin, destination, length, road, points));
        self.nodes[origin].push_successor(id);

        Ok(id)
    }

    fn statistics(&self) -> GraphStatistics {
        let one_way_road_count = self
            .roads
            .values()
            .filter(|road| road.one_way)
            .count();

        let road_speed = self
            .arcs
            .iter()
            .map(|arc| arc.road_information().maximum_speed)
            .max();
        let maximum_speed = match self.maximum_speed {
            Some(Some(speed)) => {
                Some(road_speed.map_or(speed, |road_speed| road_speed.max(speed)))
            }
            Some(None) => None,
            None => road_speed,
        };

        GraphStatistics {
            node_count: self.nodes.len(),
            arc_count: self.arcs.len(),
            one_way_road_count,
            total_length: self.arcs.iter().map(|arc| arc.length()).sum(),
            bounding_box: BoundingBox::around(self.nodes.iter().map(|node| node.point())),
            maximum_speed,
        }
    }

    pub fn build(self) -> Graph {
        let statistics = self.statistics();
        debug!(
            name = %self.name,
            nodes = statistics.node_count,
            arcs = statistics.arc_count,
            roads = self.roads.len(),
            "graph built"
        );
        Graph::new(self.name, self.nodes, self.arcs, statistics)
    }
}
