use crate::demo::{run_demo, run_fees, run_receipt, DemoArgs, FeesArgs, ReceiptArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cleaning_wizard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Cleaning Visit Wizard",
    about = "Serve and exercise the cleaning visit acceptance wizard from the command line",
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
    /// Print the deposit, overtime and balance breakdown for a visit
    Fees(FeesArgs),
    /// Export a saved inspection record as a text receipt
    Receipt(ReceiptArgs),
    /// Walk a sample visit through all three wizard steps
    Demo(DemoArgs),
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
        Command::Fees(args) => run_fees(args),
        Command::Receipt(args) => run_receipt(args),
        Command::Demo(args) => run_demo(args),
    }
}
