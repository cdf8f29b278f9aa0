use core::r#match::{Match, MatchEvent, MatchEventType, MatchResult, MatchStatus};
use core::{Division, Player, Season, StandingsView, Team, TenantSettings};
use log::{debug, info};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    MatchNotFound(u32),
    PlayerNotFound(u32),
    TeamNotFound(u32),
    TenantNotFound(String),
    ReportAlreadySubmitted(u32),
    MatchCancelled(u32),
    TransfersDisabled,
    InvalidEvent(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::MatchNotFound(id) => write!(f, "match not found: {}", id),
            StoreError::PlayerNotFound(id) => write!(f, "player not found: {}", id),
            StoreError::TeamNotFound(id) => write!(f, "team not found: {}", id),
            StoreError::TenantNotFound(slug) => write!(f, "tenant not found: {}", slug),
            StoreError::ReportAlreadySubmitted(id) => {
                write!(f, "match {} already has a submitted report", id)
            }
            StoreError::MatchCancelled(id) => write!(f, "match {} is cancelled", id),
            StoreError::TransfersDisabled => write!(f, "transfers are disabled for this tenant"),
            StoreError::InvalidEvent(reason) => write!(f, "invalid event: {}", reason),
        }
    }
}

impl Error for StoreError {}

/// Canonical owner of all league records. Web handlers reach it behind
/// an `Arc<RwLock<..>>`; reads take snapshots, writes go through the
/// operations below.
#[derive(Debug, Default)]
pub struct LeagueStore {
    pub tenants: Vec<TenantSettings>,
    pub divisions: Vec<Division>,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub seasons: Vec<Season>,
    pub matches: Vec<Match>,
}

impl LeagueStore {
    pub fn tenant_by_slug(&self, slug: &str) -> Option<&TenantSettings> {
        self.tenants.iter().find(|t| t.slug == slug)
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn match_by_id(&self, id: u32) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn teams_for_tenant(&self, tenant_id: u32) -> Vec<&Team> {
        self.teams.iter().filter(|t| t.tenant_id == tenant_id).collect()
    }

    /// Roster in registration order.
    pub fn roster(&self, team_id: u32) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.team_id == Some(team_id))
            .collect()
    }

    pub fn active_season(&self, tenant_id: u32) -> Option<&Season> {
        self.seasons
            .iter()
            .find(|s| s.tenant_id == tenant_id && s.is_active())
    }

    pub fn matches_for_tenant(&self, tenant_id: u32) -> Vec<&Match> {
        let season_ids: Vec<u32> = self
            .seasons
            .iter()
            .filter(|s| s.tenant_id == tenant_id)
            .map(|s| s.id)
            .collect();

        self.matches
            .iter()
            .filter(|m| season_ids.contains(&m.season_id))
            .collect()
    }

    /// The tenant settings governing a given match, via its season.
    pub fn settings_for_match(&self, match_id: u32) -> Result<&TenantSettings, StoreError> {
        let m = self
            .match_by_id(match_id)
            .ok_or(StoreError::MatchNotFound(match_id))?;

        let season = self
            .seasons
            .iter()
            .find(|s| s.id == m.season_id)
            .ok_or(StoreError::MatchNotFound(match_id))?;

        self.tenants
            .iter()
            .find(|t| t.id == season.tenant_id)
            .ok_or_else(|| StoreError::TenantNotFound(format!("tenant {}", season.tenant_id)))
    }

    /// Applies a submitted match report: replaces the event list, marks
    /// the match finished and, when the tenant runs auto-suspensions,
    /// books each red-carded player's suspension window.
    ///
    /// All-or-nothing: validation happens up front and nothing is touched
    /// on failure. Re-reporting a finished match is a conflict.
    pub fn apply_match_report(
        &mut self,
        match_id: u32,
        events: Vec<MatchEvent>,
        settings: &TenantSettings,
    ) -> Result<(), StoreError> {
        let index = self
            .matches
            .iter()
            .position(|m| m.id == match_id)
            .ok_or(StoreError::MatchNotFound(match_id))?;

        {
            let m = &self.matches[index];
            match m.status {
                MatchStatus::Finished => return Err(StoreError::ReportAlreadySubmitted(match_id)),
                MatchStatus::Cancelled => return Err(StoreError::MatchCancelled(match_id)),
                MatchStatus::Scheduled | MatchStatus::InProgress => {}
            }

            for event in &events {
                if event.team_id != m.home_team_id && event.team_id != m.away_team_id {
                    return Err(StoreError::InvalidEvent(format!(
                        "team {} is not part of match {}",
                        event.team_id, match_id
                    )));
                }
            }
        }

        let matchday = self.matches[index].matchday;

        let m = &mut self.matches[index];
        m.events = events;
        m.status = MatchStatus::Finished;

        let (home, away) = m.score();
        info!("match {} finished {}-{}", match_id, home, away);

        if settings.enable_auto_suspensions {
            let red_cards: Vec<(u32, u8)> = self.matches[index]
                .events
                .iter()
                .filter(|e| e.event_type == MatchEventType::RedCard)
                .map(|e| (e.player_id, e.suspension_length()))
                .collect();

            for (player_id, duration) in red_cards {
                if let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) {
                    let until = matchday + duration as u16;
                    player.suspend_until(until);
                    info!("player {} suspended until matchday {}", player_id, until);
                } else {
                    debug!("red card for unknown player {}", player_id);
                }
            }
        }

        Ok(())
    }

    /// Ranked standings for the tenant's active season, grouped into
    /// divisions when the tenant displays them.
    pub fn standings_for_tenant(&self, settings: &TenantSettings) -> StandingsView {
        let teams = self.teams_for_tenant(settings.id);

        let divisions: Vec<Division> = self
            .divisions
            .iter()
            .filter(|d| d.tenant_id == settings.id)
            .cloned()
            .collect();

        let results = self
            .active_season(settings.id)
            .map(|season| self.finished_results(season.id))
            .unwrap_or_default();

        StandingsView::build(settings.show_divisions, &divisions, &teams, &results)
    }

    /// Finished-match results in chronological order.
    fn finished_results(&self, season_id: u32) -> Vec<MatchResult> {
        let mut finished: Vec<&Match> = self
            .matches
            .iter()
            .filter(|m| m.season_id == season_id && m.is_finished())
            .collect();
        finished.sort_by_key(|m| m.date);

        finished.iter().filter_map(|m| m.result()).collect()
    }

    /// Appearances recorded for a player across finished matches.
    pub fn appearances(&self, player_id: u32) -> u16 {
        self.matches
            .iter()
            .filter(|m| m.is_finished())
            .flat_map(|m| m.events.iter())
            .filter(|e| e.player_id == player_id && e.event_type == MatchEventType::Appearance)
            .count() as u16
    }

    pub fn transfer_player(
        &mut self,
        player_id: u32,
        new_team_id: u32,
        settings: &TenantSettings,
    ) -> Result<(), StoreError> {
        if !settings.allow_transfers {
            return Err(StoreError::TransfersDisabled);
        }

        if self.team(new_team_id).is_none() {
            return Err(StoreError::TeamNotFound(new_team_id));
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(StoreError::PlayerNotFound(player_id))?;

        player.transfer_to(new_team_id);
        info!("player {} transferred to team {}", player_id, new_team_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core::SeasonStatus;

    fn sample_store() -> LeagueStore {
        let mut store = LeagueStore::default();

        store.tenants.push(TenantSettings {
            id: 1,
            slug: String::from("liga"),
            name: String::from("Liga"),
            enable_auto_suspensions: true,
            allow_transfers: true,
            ..TenantSettings::default()
        });

        store.teams.push(Team::new(10, 1, String::from("Home")));
        store.teams.push(Team::new(20, 1, String::from("Away")));

        store
            .players
            .push(Player::new(1, String::from("Ana"), String::from("Reyes"), Some(10)));
        store
            .players
            .push(Player::new(2, String::from("Luis"), String::from("Mora"), Some(20)));

        let mut season = Season::new(
            100,
            1,
            String::from("Apertura"),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        );
        season.status = SeasonStatus::Active;
        season.current_matchday = 3;
        store.seasons.push(season);

        let date = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        store.matches.push(Match::new(1000, 100, 10, 20, date, 3));

        store
    }

    fn tenant(store: &LeagueStore) -> TenantSettings {
        store.tenant_by_slug("liga").unwrap().clone()
    }

    #[test]
    fn test_report_finishes_match_and_applies_suspension() {
        let mut store = sample_store();
        let settings = tenant(&store);

        let events = vec![
            MatchEvent::appearance(1, 10),
            MatchEvent::goal(1, 10),
            MatchEvent::red_card(2, 20, Some(2)),
        ];

        store.apply_match_report(1000, events, &settings).unwrap();

        let m = store.match_by_id(1000).unwrap();
        assert_eq!(m.status, MatchStatus::Finished);
        assert_eq!(m.score(), (1, 0));

        // red card at matchday 3 with two matchdays -> out through matchday 5
        let player = store.player(2).unwrap();
        assert_eq!(player.suspended_until_matchday, Some(5));
    }

    #[test]
    fn test_suspensions_skipped_when_flag_disabled() {
        let mut store = sample_store();
        let mut settings = tenant(&store);
        settings.enable_auto_suspensions = false;

        let events = vec![MatchEvent::red_card(2, 20, None)];
        store.apply_match_report(1000, events, &settings).unwrap();

        assert_eq!(store.player(2).unwrap().suspended_until_matchday, None);
    }

    #[test]
    fn test_resubmission_is_a_conflict() {
        let mut store = sample_store();
        let settings = tenant(&store);

        store
            .apply_match_report(1000, vec![MatchEvent::goal(1, 10)], &settings)
            .unwrap();

        let err = store
            .apply_match_report(1000, vec![MatchEvent::goal(2, 20)], &settings)
            .unwrap_err();
        assert_eq!(err, StoreError::ReportAlreadySubmitted(1000));

        // first report untouched
        assert_eq!(store.match_by_id(1000).unwrap().score(), (1, 0));
    }

    #[test]
    fn test_invalid_event_leaves_store_untouched() {
        let mut store = sample_store();
        let settings = tenant(&store);

        let events = vec![
            MatchEvent::goal(1, 10),
            MatchEvent::red_card(2, 99, None), // unknown team
        ];

        let err = store.apply_match_report(1000, events, &settings).unwrap_err();
        assert!(matches!(err, StoreError::InvalidEvent(_)));

        let m = store.match_by_id(1000).unwrap();
        assert_eq!(m.status, MatchStatus::Scheduled);
        assert!(m.events.is_empty());
        assert_eq!(store.player(2).unwrap().suspended_until_matchday, None);
    }

    #[test]
    fn test_transfer_gated_by_tenant_flag() {
        let mut store = sample_store();
        let mut settings = tenant(&store);
        settings.allow_transfers = false;

        assert_eq!(
            store.transfer_player(1, 20, &settings),
            Err(StoreError::TransfersDisabled)
        );

        settings.allow_transfers = true;
        store.transfer_player(1, 20, &settings).unwrap();
        assert_eq!(store.player(1).unwrap().team_id, Some(20));
    }

    #[test]
    fn test_appearances_counted_from_finished_matches_only() {
        let mut store = sample_store();
        let settings = tenant(&store);

        assert_eq!(store.appearances(1), 0);

        store
            .apply_match_report(1000, vec![MatchEvent::appearance(1, 10)], &settings)
            .unwrap();

        assert_eq!(store.appearances(1), 1);
    }
}
