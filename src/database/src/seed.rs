use crate::store::LeagueStore;
use core::league::DivisionMarkers;
use include_dir::{Dir, include_dir};
use log::debug;
use serde::de::DeserializeOwned;

static SEED_DATA: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/data");

pub struct SeedLoader;

impl SeedLoader {
    pub fn load() -> LeagueStore {
        let mut store = LeagueStore {
            tenants: Self::parse("tenants.json"),
            divisions: Self::parse("divisions.json"),
            teams: Self::parse("teams.json"),
            players: Self::parse("players.json"),
            seasons: Self::parse("seasons.json"),
            matches: Self::parse("schedule.json"),
        };

        Self::migrate_divisions(&mut store);

        store
    }

    fn parse<T: DeserializeOwned>(name: &str) -> Vec<T> {
        let file = SEED_DATA
            .get_file(name)
            .unwrap_or_else(|| panic!("seed file missing: {}", name));

        serde_json::from_slice(file.contents())
            .unwrap_or_else(|err| panic!("invalid seed file {}: {}", name, err))
    }

    /// Backfills the explicit team-to-division relation for seed rows
    /// that still encode their tier in the team name.
    fn migrate_divisions(store: &mut LeagueStore) {
        for team in store.teams.iter_mut() {
            if team.division_id.is_some() {
                continue;
            }

            let tenant_divisions: Vec<_> = store
                .divisions
                .iter()
                .filter(|d| d.tenant_id == team.tenant_id)
                .cloned()
                .collect();

            team.division_id = DivisionMarkers::resolve_by_name(&team.name, &tenant_divisions);

            if let Some(division_id) = team.division_id {
                debug!(
                    "migrated team '{}' to division {}",
                    team.name, division_id
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_loads_and_migrates_divisions() {
        let store = SeedLoader::load();

        assert!(!store.tenants.is_empty());
        assert!(!store.teams.is_empty());
        assert!(!store.matches.is_empty());

        // every team of a tenant with divisions ends up in one
        for team in &store.teams {
            let has_divisions = store
                .divisions
                .iter()
                .any(|d| d.tenant_id == team.tenant_id);
            if has_divisions {
                assert!(
                    team.division_id.is_some(),
                    "team '{}' left without a division",
                    team.name
                );
            }
        }
    }

    #[test]
    fn test_seed_rosters_reference_known_teams() {
        let store = SeedLoader::load();

        for player in &store.players {
            if let Some(team_id) = player.team_id {
                assert!(store.team(team_id).is_some());
            }
        }
    }
}
