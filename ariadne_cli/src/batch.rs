use std::{fs, path::PathBuf, time::Instant};

use anyhow::Context;
use ariadne_core::{
    routing::{
        routing_request::ShortestPathRequest,
        shortest_path_algorithm::RoutingAlgorithm,
        shortest_path_solution::SolutionStatus,
    },
    weighting::Profile,
};
use clap::Args;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::graph_file::load_graph;

#[derive(Args)]
pub struct BatchArgs {
    /// JSON graph description
    #[arg(short, long, env = "ARIADNE_GRAPH")]
    graph: PathBuf,

    /// JSON array of `{ "origin": .., "destination": .. }` objects
    #[arg(short, long)]
    queries: PathBuf,

    #[arg(short, long, env = "ARIADNE_PROFILE", default_value = "fastest-car")]
    profile: Profile,

    #[arg(short, long, default_value = "astar")]
    algorithm: RoutingAlgorithm,

    /// Number of worker threads, all cores when omitted
    #[arg(long)]
    threads: Option<usize>,

    /// Writes one result per query as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Deserialize)]
struct Query {
    origin: usize,
    destination: usize,
}

#[derive(Serialize)]
struct QueryResult {
    origin: usize,
    destination: usize,
    status: Option<SolutionStatus>,
    cost: Option<f64>,
    length: Option<f64>,
    nodes: Option<Vec<usize>>,
    error: Option<String>,
}

pub fn run(args: BatchArgs) -> Result<(), anyhow::Error> {
    let graph = load_graph(&args.graph)?;
    let content = fs::read_to_string(&args.queries)
        .with_context(|| format!("Failed to read queries {}", args.queries.display()))?;
    let queries: Vec<Query> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse queries {}", args.queries.display()))?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads.unwrap_or(0))
        .build()?;

    let weighting = args.profile.weighting();
    let algorithm = args.algorithm.algorithm();

    let bar = ProgressBar::new(queries.len() as u64);
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} ({elapsed})")?);

    let start = Instant::now();
    let results: Vec<QueryResult> = pool.install(|| {
        queries
            .par_iter()
            .progress_with(bar.clone())
            .map(|query| {
                let outcome = ShortestPathRequest::new(
                    &graph,
                    query.origin,
                    query.destination,
                    weighting.as_ref(),
                )
                .and_then(|request| algorithm.run(&request));

                match outcome {
                    Ok(solution) => QueryResult {
                        origin: query.origin,
                        destination: query.destination,
                        status: Some(solution.status()),
                        cost: solution.cost(),
                        length: solution.path().map(|path| path.length().value()),
                        nodes: solution.path().map(|path| path.nodes()),
                        error: None,
                    },
                    Err(error) => QueryResult {
                        origin: query.origin,
                        destination: query.destination,
                        status: None,
                        cost: None,
                        length: None,
                        nodes: None,
                        error: Some(error.to_string()),
                    },
                }
            })
            .collect()
    });
    bar.finish_and_clear();

    let feasible = results
        .iter()
        .filter(|result| result.status == Some(SolutionStatus::Feasible))
        .count();
    let failed = results.iter().filter(|result| result.error.is_some()).count();
    info!(
        "{} queries with {} in {:?}: {} feasible, {} infeasible, {} failed",
        results.len(),
        algorithm.name(),
        start.elapsed(),
        feasible,
        results.len() - feasible - failed,
        failed
    );

    if let Some(output) = args.output {
        let json = serde_json::to_string_pretty(&results)?;
        fs::write(&output, json)
            .with_context(|| format!("Failed to write results to {}", output.display()))?;
        info!("Results written to {}", output.display());
    }

    Ok(())
}
