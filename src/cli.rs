use crate::demo::{run_demo, run_export, DemoArgs, ExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hireboard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hireboard Applicant Dashboard",
    about = "Run and demonstrate the employer applicant dashboard from the command line",
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
    /// Work with a job's applicant pool from an exported snapshot
    Applicants {
        #[command(subcommand)]
        command: ApplicantsCommand,
    },
    /// Run an end-to-end CLI demo over a sample applicant pool
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ApplicantsCommand {
    /// Filter, sort, and export a job's applicants to CSV
    Export(ExportArgs),
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
        Command::Applicants {
            command: ApplicantsCommand::Export(args),
        } => run_export(args),
        Command::Demo(args) => run_demo(args),
    }
}
