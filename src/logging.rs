use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Registry};

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// the rendered configuration.
///
/// `RUST_LOG` takes precedence over `level`. Does nothing if a subscriber
/// is already installed.
pub fn init_tracing(level: &str, json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = if json {
        let json_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr);

        Registry::default().with(env_filter).with(json_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);

        Registry::default().with(env_filter).with(fmt_layer).try_init()
    };

    if result.is_ok() {
        tracing::debug!("Tracing initialized: level={}, json={}", level, json);
    }
}
