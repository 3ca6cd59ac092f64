use std::sync::Arc;

use anyhow::Context;
use launch_dash::app::build_dashboard;
use launch_dash::config::DashboardConfig;
use launch_dash::data::loader::load_file;
use launch_dash::ui::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();

    // The server never starts without a dataset.
    let dataset = load_file(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let (min_kg, max_kg) = dataset.payload_bounds();
    log::info!(
        "Loaded {} launches from {} sites {:?}, payload {min_kg}..={max_kg} kg",
        dataset.len(),
        dataset.sites().len(),
        dataset.sites()
    );

    let dashboard = build_dashboard(Arc::new(dataset)).context("wiring dashboard callbacks")?;
    server::serve(&config, Arc::new(dashboard)).await
}
