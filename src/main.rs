use clap::Parser;
use onlyoffice_node::cli::{self, Args};
use onlyoffice_node::core::{AppError, DefaultErrorReporter, ErrorReporter};
use onlyoffice_node::logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let _logging_guard = match logging::init(&args.command) {
        Ok(guard) => Some(guard),
        Err(err) => {
            DefaultErrorReporter
                .report_warning("logging disabled", Some(format!("{:#}", err)));
            None
        }
    };

    match cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("command failed: {:#}", err);
            match err.downcast_ref::<AppError>() {
                Some(app_error) => DefaultErrorReporter.report_error(app_error),
                None => eprintln!("[ERROR] {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
