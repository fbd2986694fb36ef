use clap::{CommandFactory, Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{plan::PlanArgs, recommend::RecommendArgs, status::StatusArgs};

mod output;
mod parsers;
mod plan;
mod recommend;
mod status;

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
    /// Recommend vehicles from manually supplied conditions, no network needed
    #[command(visible_alias = "r")]
    Recommend {
        #[command(flatten)]
        args: RecommendArgs,
    },
    /// Infer route conditions from live weather at a location
    Status {
        #[command(flatten)]
        args: StatusArgs,
    },
    /// Resolve endpoints, estimate the route and recommend vehicles
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    /// List the named locations usable as endpoints
    Presets,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Recommend { args }) => recommend::run(args)?,
        Some(Commands::Status { args }) => status::run(args).await?,
        Some(Commands::Plan { args }) => plan::run(args).await?,
        Some(Commands::Presets) => output::print_presets(),
        None => Cli::command().print_help()?,
    }

    Ok(())
}
