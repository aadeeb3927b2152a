use clap::Parser;
use std::process::ExitCode;
use workflowdoc::cli::{self, Args};
use workflowdoc::core::{AppError, DefaultErrorReporter, ErrorReporter};
use workflowdoc::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let reporter = DefaultErrorReporter::new();

    let _logging = match logging::init(&args.command) {
        Ok(guard) => Some(guard),
        Err(err) => {
            reporter.report_warning("logging disabled", Some(format!("{:#}", err)));
            None
        }
    };

    match cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let app_error = err.downcast::<AppError>().unwrap_or_else(AppError::from);
            reporter.report_error(&app_error);
            ExitCode::FAILURE
        }
    }
}
