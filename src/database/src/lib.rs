mod seed;
mod store;

pub use seed::SeedLoader;
pub use store::{LeagueStore, StoreError};
