//! Diagnostic logging setup.
//!
//! Progress output goes to stdout with `println!`; tracing events go to stderr
//! and are filtered through `RUST_LOG`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Used when `RUST_LOG` is unset; covers both `extpack` and `extpack_bundle`.
const DEFAULT_FILTER: &str = "extpack=warn";

pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use tracing::Level;

    #[test]
    fn DEFAULT_FILTER___enables_only_extpack_warnings() {
        let subscriber = tracing_subscriber::registry().with(EnvFilter::new(DEFAULT_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "extpack::publish", Level::WARN));
            assert!(tracing::enabled!(target: "extpack_bundle::package", Level::WARN));
            assert!(!tracing::enabled!(target: "extpack_bundle::package", Level::INFO));
            assert!(!tracing::enabled!(target: "zip::write", Level::WARN));
        });
    }
}
