//! Server initialization and startup logic for statuswatch.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use statuswatch_config::{Config, ConfigValidator, LoggingConfig};
use statuswatch_mcp::{McpServer, ServerInfo, StdioTransport};
use statuswatch_monitor::MonitorEngine;
use statuswatch_tools::{register_monitor_tools, ToolDispatcher, ToolRegistry};

/// Initialize tracing on stderr, plus a daily-rotated file when
/// `logging.dir` is set. Stdout is reserved for the protocol.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("invalid log level '{}'", logging.level))?;

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false);

    let file = match &logging.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("statuswatch")
                .filename_suffix("log")
                .max_log_files(logging.max_log_files)
                .build(dir)
                .context("failed to create log file appender")?;

            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            // The guard flushes on drop, so it has to outlive every log call.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Validate the configuration, then serve MCP on stdio until stdin closes
/// or the process is interrupted.
pub(crate) async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("Starting statuswatch v{}", env!("CARGO_PKG_VERSION"));

    let warnings = ConfigValidator::validate(&config)
        .into_result()
        .context("invalid configuration")?;
    for warning in warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let engine = MonitorEngine::from_config(&config.monitor)
        .context("failed to create monitor engine")?;
    info!(url = %config.monitor.status_url, "Monitor engine ready");

    let registry = Arc::new(ToolRegistry::new());
    register_monitor_tools(&registry, engine.clone(), &config.monitor)
        .context("failed to register tools")?;
    info!("Registered {} tools", registry.len());

    let server = McpServer::new(
        ToolDispatcher::new(registry),
        ServerInfo::new(config.server.name.clone(), env!("CARGO_PKG_VERSION")),
    );
    let transport = StdioTransport::new(Arc::new(server));

    tokio::select! {
        result = transport.run() => {
            result.context("stdio transport failed")?;
            info!("Client disconnected");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
        }
    }

    engine.stop();
    info!("statuswatch stopped");
    Ok(())
}
