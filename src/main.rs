use crate::config::Config;
use crate::pipeline::Pipeline;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod loader;
mod pipeline;
mod reports;
mod templates;
mod writer;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Environment (.env is optional)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Fetch, aggregate, render, write
    match Pipeline::new(config).run() {
        Ok(summary) => tracing::info!(
            records = summary.records,
            dropped = summary.dropped,
            files = summary.files_written,
            "✅ report generated"
        ),
        Err(e) => {
            tracing::error!("❌ report generation failed: {e}");
            std::process::exit(1);
        }
    }
}
