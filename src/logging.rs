use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr subscriber so stdout stays free for query output.
///
/// `RUST_LOG` wins when set; otherwise `debug` picks between `debug` and
/// `info` for this crate and `warn` for everything else.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,football_history={default_level}")));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
