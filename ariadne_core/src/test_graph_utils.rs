#[cfg(test)]
pub mod test_graph {
    use crate::{
        constants::EARTH_RADIUS_METERS,
        geopoint::GeoPoint,
        graph::Graph,
        graph_builder::GraphBuilder,
        road_information::{
            AccessMode, AccessRestriction, AccessRestrictions, RoadInformation, RoadType,
        },
        types::{ArcId, Kmh, NodeId},
    };

    /// Road open to pedestrians only, one-way, limited to 1 km/h.
    pub fn pedestrian_road() -> RoadInformation {
        RoadInformation::new(
            RoadType::Pedestrian,
            AccessRestrictions::all(AccessRestriction::Forbidden)
                .with(AccessMode::Foot, AccessRestriction::Allowed),
            true,
            1,
            "",
        )
    }

    /// Road closed to everybody.
    pub fn closed_road() -> RoadInformation {
        RoadInformation::new(
            RoadType::Pedestrian,
            AccessRestrictions::all(AccessRestriction::Forbidden),
            true,
            1,
            "",
        )
    }

    pub fn open_road(road_type: RoadType, maximum_speed: Kmh, one_way: bool) -> RoadInformation {
        RoadInformation::new(
            road_type,
            AccessRestrictions::all(AccessRestriction::Allowed),
            one_way,
            maximum_speed,
            "",
        )
    }

    /// Five nodes A to E on one meridian, at 0, 4.5, 5, 3 and 2 meters north of
    /// A. No arc is shorter than the straight line between its ends:
    ///
    /// A→B(10) A→D(5) B→C(1) B→D(2) C→E(4) D→B(3) D→C(9) D→E(2) E→A(3) E→C(5)
    pub struct FiveNodeGraph {
        pub graph: Graph,
        pub a: NodeId,
        pub b: NodeId,
        pub c: NodeId,
        pub d: NodeId,
        pub e: NodeId,
        pub a2b: ArcId,
        pub a2d: ArcId,
        pub b2c: ArcId,
        pub b2d: ArcId,
        pub c2e: ArcId,
        pub d2b: ArcId,
        pub d2c: ArcId,
        pub d2e: ArcId,
        pub e2a: ArcId,
        pub e2c: ArcId,
    }

    impl FiveNodeGraph {
        pub fn new() -> Self {
            Self::with_road(pedestrian_road())
        }

        pub fn with_road(road: RoadInformation) -> Self {
            let mut builder = GraphBuilder::new("five nodes");
            let meters_per_degree = EARTH_RADIUS_METERS.to_radians();
            let [a, b, c, d, e] = [0.0, 4.5, 5.0, 3.0, 2.0].map(|north: f64| {
                builder.add_node(GeoPoint::new(43.6 + north / meters_per_degree, 1.44))
            });

            let mut link = |from: NodeId, to: NodeId, length: f64| {
                builder
                    .link_nodes(from, to, length, road.clone(), vec![])
                    .unwrap()
            };

            let a2b = link(a, b, 10.0);
            let a2d = link(a, d, 5.0);
            let b2c = link(b, c, 1.0);
            let b2d = link(b, d, 2.0);
            let c2e = link(c, e, 4.0);
            let d2b = link(d, b, 3.0);
            let d2c = link(d, c, 9.0);
            let d2e = link(d, e, 2.0);
            let e2a = link(e, a, 3.0);
            let e2c = link(e, c, 5.0);

            FiveNodeGraph {
                graph: builder.build(),
                a,
                b,
                c,
                d,
                e,
                a2b,
                a2d,
                b2c,
                b2d,
                c2e,
                d2b,
                d2c,
                d2e,
                e2a,
                e2c,
            }
        }
    }

    /// A `size` x `size` grid of two-way roads around Toulouse. Arc lengths are
    /// the crow-fly distance between their ends stretched by a per-arc detour,
    /// so they never undercut the straight line. Horizontal roads are fast
    /// primaries, vertical ones slow residential streets closed to cars.
    pub fn grid_graph(size: usize) -> Graph {
        let spacing = 0.002;
        let points: Vec<GeoPoint> = (0..size * size)
            .map(|index| {
                GeoPoint::new(
                    43.6 + (index / size) as f64 * spacing,
                    1.44 + (index % size) as f64 * spacing,
                )
            })
            .collect();

        let mut builder = GraphBuilder::new("grid");
        for point in &points {
            builder.add_node(*point);
        }

        let car_road = open_road(RoadType::Primary, 70, false);
        let street = RoadInformation::new(
            RoadType::Residential,
            AccessRestrictions::all(AccessRestriction::Allowed)
                .with(AccessMode::Motorcar, AccessRestriction::Forbidden),
            false,
            30,
            "",
        );

        let id = |row: usize, column: usize| row * size + column;
        for row in 0..size {
            for column in 0..size {
                let here = id(row, column);
                let detour = 1.0 + ((row * 7 + column * 3) % 5) as f64 / 10.0;
                if column + 1 < size {
                    let right = id(row, column + 1);
                    let length = points[here].distance_to(&points[right]) * detour;
                    builder
                        .link_nodes(here, right, length, car_road.clone(), vec![])
                        .unwrap();
                }
                if row + 1 < size {
                    let up = id(row + 1, column);
                    let length = points[here].distance_to(&points[up]) * detour;
                    builder
                        .link_nodes(here, up, length, street.clone(), vec![])
                        .unwrap();
                }
            }
        }

        builder.build()
    }
}
