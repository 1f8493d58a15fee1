use clap::Parser;
use netrate::config::{AppConfig, RunConfig};
use netrate::models::StatusLine;
use netrate::netdev_repo::NetdevRepo;
use netrate::{cli, output, worker};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Prints an error status line on stdout and yields exit status 1.
fn fail(line: &StatusLine) -> ExitCode {
    if let Err(e) = output::emit(&mut std::io::stdout().lock(), line) {
        tracing::error!(error = %e, "failed to write status line");
    }
    ExitCode::FAILURE
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries the status protocol; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if let Err(print_err) = e.print() {
                tracing::error!(error = %print_err, "failed to print usage");
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let app_config = match AppConfig::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, operation = "load_config", "invalid config");
            return fail(&StatusLine::error("Error", &format!("Invalid config: {}", e)));
        }
    };
    let run_config = match RunConfig::resolve(&args, &app_config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, operation = "resolve_config", "invalid arguments");
            return fail(&e.status_line());
        }
    };
    let filter = match run_config.filter() {
        Ok(f) => f,
        Err(e) => return fail(&e.status_line()),
    };

    tracing::info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        interval_secs = run_config.interval_secs.get(),
        filter = filter.mode(),
        source = %run_config.net_dev_path.display(),
        "starting"
    );

    let repo = NetdevRepo::new(run_config.net_dev_path.clone(), filter);
    let poller = match worker::Poller::prime(repo, run_config.interval_secs).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, operation = "prime", "initial snapshot failed");
            return match e.status_line() {
                Some(line) => fail(&line),
                None => ExitCode::FAILURE,
            };
        }
    };

    tokio::select! {
        result = worker::run(poller, std::io::stdout()) => {
            if let Err(e) = result {
                tracing::error!(error = %e, operation = "emit", "output stream closed");
            }
            ExitCode::FAILURE
        }
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
            ExitCode::SUCCESS
        }
    }
}
