use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Kmh;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadType {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    MotorwayLink,
    TrunkLink,
    PrimaryLink,
    SecondaryLink,
    Tertiary,
    Track,
    Residential,
    Unclassified,
    LivingStreet,
    Service,
    Roundabout,
    Pedestrian,
    Cycleway,
    Coastline,
}

const MODE_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    Foot,
    Bicycle,
    SmallMotorcycle,
    Agricultural,
    Motorcycle,
    Motorcar,
    HeavyGoods,
    PublicTransport,
}

impl AccessMode {
    pub const ALL: [AccessMode; MODE_COUNT] = [
        AccessMode::Foot,
        AccessMode::Bicycle,
        AccessMode::SmallMotorcycle,
        AccessMode::Agricultural,
        AccessMode::Motorcycle,
        AccessMode::Motorcar,
        AccessMode::HeavyGoods,
        AccessMode::PublicTransport,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRestriction {
    Allowed,
    Forbidden,
    Private,
    Destination,
    Delivery,
    Customers,
    Forestry,
    Unknown,
}

/// Restrictions that still let a vehicle travel along a road.
pub const OPEN_RESTRICTIONS: [AccessRestriction; 6] = [
    AccessRestriction::Allowed,
    AccessRestriction::Destination,
    AccessRestriction::Delivery,
    AccessRestriction::Customers,
    AccessRestriction::Forestry,
    AccessRestriction::Unknown,
];

/// One restriction value per access mode. Modes missing from the source map
/// resolve to [`AccessRestriction::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<AccessMode, AccessRestriction>",
    into = "BTreeMap<AccessMode, AccessRestriction>"
)]
pub struct AccessRestrictions {
    restrictions: [AccessRestriction; MODE_COUNT],
}

impl AccessRestrictions {
    pub fn all(restriction: AccessRestriction) -> Self {
        AccessRestrictions {
            restrictions: [restriction; MODE_COUNT],
        }
    }

    pub fn unknown() -> Self {
        Self::all(AccessRestriction::Unknown)
    }

    pub fn with(mut self, mode: AccessMode, restriction: AccessRestriction) -> Self {
        self.restrictions[mode.index()] = restriction;
        self
    }

    pub fn restriction(&self, mode: AccessMode) -> AccessRestriction {
        self.restrictions[mode.index()]
    }

    pub fn is_allowed_for_any(&self, mode: AccessMode, allowed: &[AccessRestriction]) -> bool {
        allowed.contains(&self.restriction(mode))
    }

    pub fn is_allowed_for_all(&self, modes: &[AccessMode], allowed: &[AccessRestriction]) -> bool {
        modes
            .iter()
            .all(|&mode| self.is_allowed_for_any(mode, allowed))
    }
}

impl Default for AccessRestrictions {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<BTreeMap<AccessMode, AccessRestriction>> for AccessRestrictions {
    fn from(map: BTreeMap<AccessMode, AccessRestriction>) -> Self {
        map.into_iter()
            .fold(AccessRestrictions::unknown(), |restrictions, (mode, restriction)| {
                restrictions.with(mode, restriction)
            })
    }
}

impl From<AccessRestrictions> for BTreeMap<AccessMode, AccessRestriction> {
    fn from(restrictions: AccessRestrictions) -> Self {
        AccessMode::ALL
            .iter()
            .map(|&mode| (mode, restrictions.restriction(mode)))
            .collect()
    }
}

/// Attributes shared by every arc of a road. Arcs hold an interned, reference
/// counted copy; see [`crate::graph_builder::GraphBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoadInformation {
    pub road_type: RoadType,
    #[serde(default)]
    pub access: AccessRestrictions,
    #[serde(default)]
    pub one_way: bool,
    /// Speed limit in km/h.
    pub maximum_speed: Kmh,
    #[serde(default)]
    pub name: String,
}

impl RoadInformation {
    pub fn new(
        road_type: RoadType,
        access: AccessRestrictions,
        one_way: bool,
        maximum_speed: Kmh,
        name: impl Into<String>,
    ) -> Self {
        RoadInformation {
            road_type,
            access,
            one_way,
            maximum_speed,
            name: name.into(),
        }
    }

    pub fn access(&self) -> &AccessRestrictions {
        &self.access
    }
}
