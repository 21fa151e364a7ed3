use crate::jobs::{run_filters, run_import, run_list, ImportArgs, ListArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_board::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Job Board",
    about = "Serve and query the job board from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect or load job postings in the configured store
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Print the category, location, and salary band choices
    Filters,
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// List postings matching the given filters
    List(ListArgs),
    /// Validate a CSV export and insert its postings
    Import(ImportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Jobs {
            command: JobsCommand::List(args),
        } => run_list(args),
        Command::Jobs {
            command: JobsCommand::Import(args),
        } => run_import(args),
        Command::Filters => run_filters(),
    }
}
