#[cfg(feature = "file-log")]
use std::sync::Mutex;

#[cfg(feature = "file-log")]
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "file-log")]
static TRACING_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `default_level`. Without the `file-log` feature logs
/// go to stderr; with it they go to an hourly rolling file under `./logs`.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    #[cfg(feature = "file-log")]
    {
        let file_appender = tracing_appender::rolling::hourly("./logs", "output.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_level(true)
            .with_target(true);

        if subscriber.try_init().is_ok() {
            store_tracing_guard(guard);
            tracing::info!("tracing initialized");
        }
    }

    #[cfg(not(feature = "file-log"))]
    {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_level(true)
            .with_target(true);

        if subscriber.try_init().is_ok() {
            tracing::debug!("tracing initialized");
        }
    }
}

#[cfg(feature = "file-log")]
fn store_tracing_guard(guard: WorkerGuard) {
    if let Ok(mut slot) = TRACING_GUARD.lock() {
        *slot = Some(guard);
    }
}
