use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ariadne_core::{
    geopoint::GeoPoint,
    graph::Graph,
    graph_builder::GraphBuilder,
    road_information::{AccessRestriction, AccessRestrictions, RoadInformation, RoadType},
    routing::{
        astar::AStar, bellman_ford::BellmanFord, dijkstra::Dijkstra,
        routing_request::ShortestPathRequest, shortest_path_algorithm::ShortestPathAlgorithm,
    },
    weighting::Profile,
};

fn grid_graph(size: usize) -> Graph {
    let mut builder = GraphBuilder::new("benchmark grid");
    let points: Vec<GeoPoint> = (0..size * size)
        .map(|index| {
            GeoPoint::new(
                43.6 + (index / size) as f64 * 0.001,
                1.44 + (index % size) as f64 * 0.001,
            )
        })
        .collect();
    for point in &points {
        builder.add_node(*point);
    }

    let road = |speed| {
        RoadInformation::new(
            RoadType::Secondary,
            AccessRestrictions::all(AccessRestriction::Allowed),
            false,
            speed,
            "",
        )
    };

    for index in 0..size * size {
        let detour = 1.0 + (index % 7) as f64 / 20.0;
        if index % size + 1 < size {
            let length = points[index].distance_to(&points[index + 1]) * detour;
            builder
                .link_nodes(index, index + 1, length, road(50), vec![])
                .unwrap();
        }
        if index + size < size * size {
            let length = points[index].distance_to(&points[index + size]) * detour;
            builder
                .link_nodes(index, index + size, length, road(30), vec![])
                .unwrap();
        }
    }

    builder.build()
}

fn routing_benchmark(c: &mut Criterion) {
    let graph = grid_graph(100);
    let weighting = Profile::FastestAllRoads.weighting();
    let request =
        ShortestPathRequest::new(&graph, 0, graph.size() - 1, weighting.as_ref()).unwrap();

    c.bench_function("dijkstra 100x100", |b| {
        b.iter(|| black_box(Dijkstra.run(&request).unwrap()))
    });

    c.bench_function("astar 100x100", |b| {
        b.iter(|| black_box(AStar.run(&request).unwrap()))
    });

    let small_graph = grid_graph(20);
    let small_request = ShortestPathRequest::new(
        &small_graph,
        0,
        small_graph.size() - 1,
        weighting.as_ref(),
    )
    .unwrap();

    c.bench_function("bellman-ford 20x20", |b| {
        b.iter(|| black_box(BellmanFord.run(&small_request).unwrap()))
    });
}

criterion_group!(benches, routing_benchmark);
criterion_main!(benches);
