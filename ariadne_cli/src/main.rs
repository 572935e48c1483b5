use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

use crate::{batch::BatchArgs, route::QueryArgs};

mod batch;
mod compare;
mod graph_file;
mod profiles;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path between two nodes
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        query: QueryArgs,

        /// Log every marked and reached node at trace level
        #[arg(long)]
        trace: bool,
    },
    /// Run every algorithm on the same query and check they agree
    Compare {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Run a file of queries in parallel over one graph
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },
    /// List the available weighting profiles
    Profiles,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.debug { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Some(Commands::Route { query, trace }) => route::run(query, trace)?,
        Some(Commands::Compare { query }) => compare::run(query)?,
        Some(Commands::Batch { args }) => batch::run(args)?,
        Some(Commands::Profiles) => profiles::run(),
        None => {}
    }

    Ok(())
}
