use leagueos_core::utils::TimeEstimation;
use database::SeedLoader;
use env_logger::Env;
use log::info;
use std::env;
use std::sync::Arc;
use tokio::sync::RwLock;
use web::{LeagueAppData, LeagueServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_PORT: u16 = 18000;

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let port = env::var("LEAGUEOS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let (store, estimated) = TimeEstimation::estimate(SeedLoader::load);

    info!("store loaded: {} ms", estimated);
    info!(
        "tenants: {}, teams: {}, players: {}",
        store.tenants.len(),
        store.teams.len(),
        store.players.len()
    );

    let data = LeagueAppData {
        store: Arc::new(RwLock::new(store)),
    };

    LeagueServer::new(data).run(port).await;
}
