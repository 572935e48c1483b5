use anyhow::bail;
use ariadne_core::routing::{
    routing_request::ShortestPathRequest, search_observer::SearchStatistics,
    shortest_path_algorithm::RoutingAlgorithm,
};
use comfy_table::{Table, presets::UTF8_FULL};
use tracing::info;

use crate::{
    graph_file::load_graph,
    route::{QueryArgs, format_cost},
};

/// Relative tolerance between costs found by different algorithms.
const TOLERANCE: f64 = 1e-9;

pub fn run(query: QueryArgs) -> Result<(), anyhow::Error> {
    let graph = load_graph(&query.graph)?;
    let weighting = query.profile.weighting();
    let request =
        ShortestPathRequest::new(&graph, query.origin, query.destination, weighting.as_ref())?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "algorithm",
        "status",
        "cost",
        "length",
        "arcs",
        "marked",
        "reached",
        "time",
    ]);

    let mut costs = Vec::with_capacity(RoutingAlgorithm::ALL.len());
    for algorithm in RoutingAlgorithm::ALL {
        let mut statistics = SearchStatistics::default();
        let solution = algorithm
            .algorithm()
            .run_with_observer(&request, &mut statistics)?;

        let (length, arcs) = match solution.path() {
            Some(path) => (path.length().to_string(), path.arc_ids().len().to_string()),
            None => ("-".to_string(), "-".to_string()),
        };

        table.add_row(vec![
            algorithm.name().to_string(),
            solution.status().to_string(),
            format_cost(solution.cost(), solution.mode()),
            length,
            arcs,
            statistics.marked_nodes.to_string(),
            statistics.reached_nodes.to_string(),
            format!("{:?}", solution.solving_time()),
        ]);
        costs.push((algorithm, solution.cost()));
    }

    println!("{table}");

    let (reference, expected) = costs[costs.len() - 1];
    for &(algorithm, cost) in &costs {
        let agrees = match (cost, expected) {
            (Some(cost), Some(expected)) => {
                (cost - expected).abs() <= TOLERANCE * expected.abs().max(1.0)
            }
            (None, None) => true,
            _ => false,
        };

        if !agrees {
            bail!("{algorithm} found {cost:?} but {reference} found {expected:?}");
        }
    }

    info!("All algorithms agree");
    Ok(())
}
