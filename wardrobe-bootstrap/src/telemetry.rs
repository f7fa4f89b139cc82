use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use wardrobe_infrastructure::AppConfig;

const LOG_FILE_PREFIX: &str = "wardrobe.log";

/// Installs the global subscriber. Logs go to stderr so command output on
/// stdout stays machine readable. The returned guard flushes the file log on drop.
pub fn init_tracing(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let default_level = config.log_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let mut layers = vec![fmt::layer().with_writer(std::io::stderr).boxed()];

    let guard = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            layers.push(fmt::layer().with_writer(writer).with_ansi(false).boxed());
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()
        .map_err(|err| anyhow!("tracing init failed: {err}"))?;
    Ok(guard)
}
