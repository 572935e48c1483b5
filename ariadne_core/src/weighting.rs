use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants::PEDESTRIAN_MAXIMUM_SPEED,
    graph::GraphArc,
    road_information::{AccessMode, OPEN_RESTRICTIONS},
    types::Kmh,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Distance,
    Time,
}

/// Decides which arcs a search may use and what they cost.
///
/// Costs must be nonnegative: label-setting searches rely on it and only check
/// it in debug builds.
pub trait Weighting: Send + Sync {
    fn is_allowed(&self, arc: &GraphArc) -> bool;

    /// Meters in [`Mode::Distance`], seconds in [`Mode::Time`].
    fn cost(&self, arc: &GraphArc) -> f64;

    fn mode(&self) -> Mode;

    /// Speed cap of the vehicle in km/h, if any.
    fn maximum_speed(&self) -> Option<Kmh> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessFilter {
    AnyRoad,
    OpenTo(AccessMode),
}

impl AccessFilter {
    fn accepts(&self, arc: &GraphArc) -> bool {
        match self {
            AccessFilter::AnyRoad => true,
            AccessFilter::OpenTo(mode) => arc
                .road_information()
                .access()
                .is_allowed_for_any(*mode, &OPEN_RESTRICTIONS),
        }
    }
}

/// Cost is the arc length in meters.
pub struct DistanceWeighting {
    filter: AccessFilter,
}

impl DistanceWeighting {
    pub fn new(filter: AccessFilter) -> Self {
        DistanceWeighting { filter }
    }
}

impl Weighting for DistanceWeighting {
    fn is_allowed(&self, arc: &GraphArc) -> bool {
        self.filter.accepts(arc)
    }

    fn cost(&self, arc: &GraphArc) -> f64 {
        arc.length().value()
    }

    fn mode(&self) -> Mode {
        Mode::Distance
    }
}

/// Cost is the travel time in seconds at the road speed limit, capped by the
/// vehicle maximum speed when there is one.
pub struct TimeWeighting {
    filter: AccessFilter,
    maximum_speed: Option<Kmh>,
}

impl TimeWeighting {
    pub fn new(filter: AccessFilter, maximum_speed: Option<Kmh>) -> Self {
        TimeWeighting {
            filter,
            maximum_speed,
        }
    }

    fn speed(&self, arc: &GraphArc) -> Kmh {
        let road_speed = arc.road_information().maximum_speed;
        match self.maximum_speed {
            Some(cap) => road_speed.min(cap),
            None => road_speed,
        }
    }
}

impl Weighting for TimeWeighting {
    fn is_allowed(&self, arc: &GraphArc) -> bool {
        self.speed(arc) > 0 && self.filter.accepts(arc)
    }

    fn cost(&self, arc: &GraphArc) -> f64 {
        arc.travel_time(self.speed(arc))
    }

    fn mode(&self) -> Mode {
        Mode::Time
    }

    fn maximum_speed(&self) -> Option<Kmh> {
        self.maximum_speed
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown profile '{0}'")]
pub struct UnknownProfileError(String);

/// Catalog of preset weightings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    ShortestAllRoads,
    ShortestCar,
    FastestAllRoads,
    FastestCar,
    Pedestrian,
}

impl Profile {
    pub const ALL: [Profile; 5] = [
        Profile::ShortestAllRoads,
        Profile::ShortestCar,
        Profile::FastestAllRoads,
        Profile::FastestCar,
        Profile::Pedestrian,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Profile::ShortestAllRoads => "shortest-all-roads",
            Profile::ShortestCar => "shortest-car",
            Profile::FastestAllRoads => "fastest-all-roads",
            Profile::FastestCar => "fastest-car",
            Profile::Pedestrian => "pedestrian",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Profile::ShortestAllRoads => "Shortest path, all roads allowed",
            Profile::ShortestCar => "Shortest path, only roads open for cars",
            Profile::FastestAllRoads => "Fastest path, all roads allowed",
            Profile::FastestCar => "Fastest path, only roads open for cars",
            Profile::Pedestrian => "Fastest path for pedestrians",
        }
    }

    pub fn weighting(&self) -> Box<dyn Weighting> {
        let car = AccessFilter::OpenTo(AccessMode::Motorcar);
        match self {
            Profile::ShortestAllRoads => Box::new(DistanceWeighting::new(AccessFilter::AnyRoad)),
            Profile::ShortestCar => Box::new(DistanceWeighting::new(car)),
            Profile::FastestAllRoads => Box::new(TimeWeighting::new(AccessFilter::AnyRoad, None)),
            Profile::FastestCar => Box::new(TimeWeighting::new(car, None)),
            Profile::Pedestrian => Box::new(TimeWeighting::new(
                AccessFilter::OpenTo(AccessMode::Foot),
                Some(PEDESTRIAN_MAXIMUM_SPEED),
            )),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = UnknownProfileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|profile| profile.name() == value)
            .ok_or_else(|| UnknownProfileError(value.to_string()))
    }
}
