//! Log output for the command line

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over info.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "codedsl=debug,codedsl_core=debug,warn"
    } else {
        "codedsl=info,codedsl_core=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
