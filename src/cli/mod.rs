pub mod args;
pub mod commands;

pub use args::{DescribeArgs, ExecArgs, RunArgs};
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
NODE COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "onlyoffice-node")]
#[command(version = crate::VERSION)]
#[command(about = "OnlyOffice files and folders node")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Credentials come from onlyoffice.toml or ONLYOFFICE_BASE_URL / ONLYOFFICE_TOKEN. Output records are printed to stdout as a JSON array."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Run a batch of input items",
        long_about = "Run reads a JSON array of parameter objects and executes them in order, one request per item.",
        after_help = "Example:\n    onlyoffice-node run items.json --continue-on-fail"
    )]
    Run(RunArgs),
    #[command(
        about = "Execute a single operation",
        long_about = "Exec builds one input item from flags and runs it against the configured instance.",
        after_help = "Example:\n    onlyoffice-node exec --resource file --operation create --title Q1 --file-type xlsx"
    )]
    Exec(ExecArgs),
    #[command(
        about = "Print the node description",
        long_about = "Describe prints the node (or credential) description as JSON, including every parameter and when it is shown.",
        after_help = "Example:\n    onlyoffice-node describe --credentials"
    )]
    Describe(DescribeArgs),
}

pub async fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::Run(run_args) => commands::run(run_args).await,
        Command::Exec(exec_args) => commands::exec(exec_args).await,
        Command::Describe(describe_args) => commands::describe(describe_args),
    }
}
