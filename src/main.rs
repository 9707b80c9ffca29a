//! `b3x` - serve or render the Benchmark3x site.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // BENCHMARK3X_ASSETS and RUST_LOG may come from .env
    let _ = dotenvy::dotenv();

    let default_filter = if benchmark3x::cli::is_verbose() {
        "benchmark3x=info"
    } else {
        "benchmark3x=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        // stdout is reserved for `render` output
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    benchmark3x::cli::run().await
}
