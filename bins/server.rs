use configs::{AppConfig, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
    info!(service = "server", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    // Load .env first so RUST_LOG, DATABASE_URL and CONFIG_PATH take effect
    dotenv().ok();

    let cfg = AppConfig::load_or_default();
    init_logging(cfg.as_ref().map(|c| c.logging.format).unwrap_or_default());
    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "server", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "server", event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "server service starting"
    );

    rt.block_on(async move {
        let shutdown = tokio_util::sync::CancellationToken::new();

        let signal = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!(service = "server", event = "shutdown_signal", "received Ctrl+C, shutting down");
                    signal.cancel();
                }
                Err(e) => error!(service = "server", event = "signal_unavailable", error = %e, "cannot listen for Ctrl+C"),
            }
        });

        match server::run(cfg, shutdown).await {
            Ok(()) => {
                info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
