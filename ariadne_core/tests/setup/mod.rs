#![allow(dead_code)]

use ariadne_core::{
    geopoint::GeoPoint,
    graph::Graph,
    graph_builder::GraphBuilder,
    road_information::{
        AccessMode, AccessRestriction, AccessRestrictions, RoadInformation, RoadType,
    },
    routing::shortest_path_solution::ShortestPathSolution,
    weighting::Profile,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

pub const PROFILES: [Profile; 5] = Profile::ALL;

pub fn roads() -> Vec<RoadInformation> {
    vec![
        RoadInformation::new(
            RoadType::Motorway,
            AccessRestrictions::all(AccessRestriction::Forbidden)
                .with(AccessMode::Motorcar, AccessRestriction::Allowed)
                .with(AccessMode::HeavyGoods, AccessRestriction::Allowed),
            true,
            130,
            "A61",
        ),
        RoadInformation::new(
            RoadType::Primary,
            AccessRestrictions::all(AccessRestriction::Allowed),
            false,
            80,
            "D813",
        ),
        RoadInformation::new(
            RoadType::Residential,
            AccessRestrictions::all(AccessRestriction::Allowed),
            false,
            30,
            "Rue des Lilas",
        ),
        RoadInformation::new(
            RoadType::Pedestrian,
            AccessRestrictions::all(AccessRestriction::Forbidden)
                .with(AccessMode::Foot, AccessRestriction::Allowed)
                .with(AccessMode::Bicycle, AccessRestriction::Destination),
            false,
            10,
            "Allée Jules Guesde",
        ),
        RoadInformation::new(
            RoadType::Service,
            AccessRestrictions::unknown().with(AccessMode::Motorcar, AccessRestriction::Private),
            true,
            20,
            "",
        ),
    ]
}

/// Random road network around Toulouse. Arc lengths are never shorter than
/// the straight line between their ends.
pub fn random_graph(seed: u64, node_count: usize, link_count: usize) -> Graph {
    random_builder(seed, node_count, link_count).build()
}

pub fn random_graph_without_maximum_speed(
    seed: u64,
    node_count: usize,
    link_count: usize,
) -> Graph {
    let mut builder = random_builder(seed, node_count, link_count);
    builder.set_maximum_speed(None);
    builder.build()
}

fn random_builder(seed: u64, node_count: usize, link_count: usize) -> GraphBuilder {
    let mut rng = StdRng::seed_from_u64(seed);
    let roads = roads();

    let points: Vec<GeoPoint> = (0..node_count)
        .map(|_| {
            GeoPoint::new(
                rng.random_range(43.55..43.65),
                rng.random_range(1.38..1.50),
            )
        })
        .collect();

    let mut builder = GraphBuilder::new(format!("random-{seed}"));
    for point in &points {
        builder.add_node(*point);
    }

    for _ in 0..link_count {
        let origin = rng.random_range(0..node_count);
        let destination = rng.random_range(0..node_count);
        if origin == destination {
            continue;
        }

        let detour = rng.random_range(1.0..1.6);
        let length = points[origin].distance_to(&points[destination]) * detour;
        let road = roads[rng.random_range(0..roads.len())].clone();
        builder
            .link_nodes(origin, destination, length, road, vec![])
            .unwrap();
    }

    builder
}

pub fn random_queries(seed: u64, node_count: usize, count: usize) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (
                rng.random_range(0..node_count),
                rng.random_range(0..node_count),
            )
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_same_optimum(solution: &ShortestPathSolution, oracle: &ShortestPathSolution) {
    assert_eq!(
        solution.status(),
        oracle.status(),
        "{} and {} disagree on feasibility",
        solution.algorithm(),
        oracle.algorithm()
    );

    if let (Some(cost), Some(expected)) = (solution.cost(), oracle.cost()) {
        assert_close(cost, expected);
    }
}
