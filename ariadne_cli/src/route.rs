use std::path::PathBuf;

use ariadne_core::{
    routing::{
        routing_request::ShortestPathRequest,
        search_observer::{SearchStatistics, TracingObserver},
        shortest_path_algorithm::RoutingAlgorithm,
        shortest_path_solution::ShortestPathSolution,
    },
    weighting::{Mode, Profile},
};
use clap::Args;
use tracing::info;

use crate::graph_file::load_graph;

#[derive(Args)]
pub struct QueryArgs {
    /// JSON graph description
    #[arg(short, long, env = "ARIADNE_GRAPH")]
    pub graph: PathBuf,

    #[arg(short, long)]
    pub origin: usize,

    #[arg(short = 't', long)]
    pub destination: usize,

    /// One of the names listed by the `profiles` command
    #[arg(short, long, env = "ARIADNE_PROFILE", default_value = "fastest-car")]
    pub profile: Profile,

    /// dijkstra, astar or bellman-ford
    #[arg(short, long, default_value = "dijkstra")]
    pub algorithm: RoutingAlgorithm,
}

pub fn run(query: QueryArgs, trace: bool) -> Result<(), anyhow::Error> {
    let graph = load_graph(&query.graph)?;
    let weighting = query.profile.weighting();
    let request =
        ShortestPathRequest::new(&graph, query.origin, query.destination, weighting.as_ref())?;

    let algorithm = query.algorithm.algorithm();
    let mut statistics = SearchStatistics::default();
    let solution = if trace {
        algorithm.run_with_observer(&request, &mut (&mut statistics, TracingObserver))?
    } else {
        algorithm.run_with_observer(&request, &mut statistics)?
    };

    info!(
        "{} nodes marked, {} nodes reached",
        statistics.marked_nodes, statistics.reached_nodes
    );
    print_solution(&solution);

    Ok(())
}

pub fn format_cost(cost: Option<f64>, mode: Mode) -> String {
    match (cost, mode) {
        (None, _) => "-".to_string(),
        (Some(cost), Mode::Distance) => format!("{cost:.1} m"),
        (Some(cost), Mode::Time) => format!("{cost:.1} s"),
    }
}

fn print_solution(solution: &ShortestPathSolution) {
    println!("{solution}");

    let Some(path) = solution.path() else {
        return;
    };

    println!("cost: {}", format_cost(solution.cost(), solution.mode()));
    let nodes: Vec<String> = path.nodes().iter().map(ToString::to_string).collect();
    println!("nodes: {}", nodes.join(" -> "));

    for arc in path.arcs() {
        let road = arc.road_information();
        let name = if road.name.is_empty() {
            "unnamed road"
        } else {
            road.name.as_str()
        };
        println!(
            "  {} -> {}: {} on {} ({} km/h)",
            arc.origin(),
            arc.destination(),
            arc.length(),
            name,
            road.maximum_speed
        );
    }
}
