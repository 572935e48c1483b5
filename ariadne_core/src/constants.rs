use crate::types::Kmh;

pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Speed cap applied by the pedestrian profile.
pub const PEDESTRIAN_MAXIMUM_SPEED: Kmh = 5;

pub(crate) const SECONDS_PER_HOUR: f64 = 3600.0;
pub(crate) const METERS_PER_KILOMETER: f64 = 1000.0;

/// Longest accepted arc, in meters. Half the Earth's circumference.
pub const MAXIMUM_ARC_LENGTH: f64 = 20_037_508.0;
