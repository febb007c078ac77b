use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let command = mandelbrot_viewer::RunGuiCommand::new(mandelbrot_viewer::ViewerConfig::default());

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "viewer terminated");
            ExitCode::FAILURE
        }
    }
}
