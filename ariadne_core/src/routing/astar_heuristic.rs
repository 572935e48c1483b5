use crate::{
    constants::{METERS_PER_KILOMETER, SECONDS_PER_HOUR},
    geopoint::GeoPoint,
    graph::Node,
    types::Kmh,
    weighting::Mode,
};

use super::routing_request::ShortestPathRequest;

/// Lower bound of the remaining cost from a node to the destination of one
/// request. An estimate above the true remaining cost makes A* return
/// suboptimal paths.
pub trait AStarHeuristic {
    fn estimate(&self, node: &Node) -> f64;
}

pub struct ZeroHeuristic;

impl AStarHeuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _node: &Node) -> f64 {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Scale {
    Meters,
    Seconds(Kmh),
    Zero,
}

/// Straight-line distance to the destination. In time mode the distance is
/// converted at the top speed of the graph, bounded by the vehicle's own cap.
pub struct CrowFlyHeuristic {
    destination: GeoPoint,
    scale: Scale,
}

impl CrowFlyHeuristic {
    pub fn new(request: &ShortestPathRequest) -> Self {
        let scale = match request.mode() {
            Mode::Distance => Scale::Meters,
            Mode::Time => {
                let speed = request.graph().maximum_speed().map(|graph_speed| {
                    request
                        .weighting()
                        .maximum_speed()
                        .map_or(graph_speed, |vehicle_speed| graph_speed.min(vehicle_speed))
                });
                match speed {
                    Some(speed) if speed > 0 => Scale::Seconds(speed),
                    // Without a known top speed only zero is a safe bound
                    _ => Scale::Zero,
                }
            }
        };

        CrowFlyHeuristic {
            destination: *request.destination().point(),
            scale,
        }
    }
}

impl AStarHeuristic for CrowFlyHeuristic {
    fn estimate(&self, node: &Node) -> f64 {
        match self.scale {
            Scale::Meters => node.point().distance_to(&self.destination),
            Scale::Seconds(speed) => {
                node.point().distance_to(&self.destination) * SECONDS_PER_HOUR
                    / (speed as f64 * METERS_PER_KILOMETER)
            }
            Scale::Zero => 0.0,
        }
    }
}
