use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter, Registry};

/// Initialize logging.  If the environment variable `RUST_LOG` is set to a
/// non-empty value we interpret it as an EnvFilter and enable compact
/// formatted output.  Because of limitations in shell scripts wrapping this
/// tool, `RUST_LOG` may be set unconditionally but potentially with an empty
/// value, and we don't want that to be interpreted as a desire to enable
/// logging.
pub fn init_logging() {
    if let Ok(rustlog) = std::env::var("RUST_LOG") {
        if !rustlog.is_empty() {
            if let Ok(env_filter) = EnvFilter::try_from_default_env() {
                let layer = tracing_subscriber::fmt::layer()
                    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
                    .compact()
                    // We primarily expect this to go in a log which can be
                    // excerpted for email purposes, and so ANSI isn't helpful
                    // for this.
                    .with_ansi(false)
                    // In general we don't care about the wall time that much,
                    // and it takes up a lot of columns.
                    .without_time()
                    .with_filter(env_filter);
                Registry::default().with(layer).init();
            }
        }
    }
}
