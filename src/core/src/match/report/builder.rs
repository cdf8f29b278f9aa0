use crate::r#match::{DEFAULT_SUSPENSION_MATCHDAYS, MatchEvent};
use log::debug;
use std::collections::HashMap;

/// Yellow cards cycle 0 -> 1 -> 2 -> 0; a second yellow is the maximum
/// trackable state before escalation is recorded as an explicit red card.
pub const YELLOW_CARD_STATES: u8 = 3;

/// Per-player working stats for one report session. Discarded on submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerMatchStats {
    pub played: bool,
    pub goals: u8,
    pub yellow_cards: u8,
    pub red_card: bool,
    pub suspension_matchdays: Option<u8>,
}

impl PlayerMatchStats {
    pub fn has_activity(&self) -> bool {
        self.played || self.goals > 0 || self.yellow_cards > 0 || self.red_card
    }
}

/// Partial update merged into a player's current stats.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsUpdate {
    pub played: Option<bool>,
    pub goals: Option<u8>,
    pub yellow_cards: Option<u8>,
    pub red_card: Option<bool>,
    pub suspension_matchdays: Option<u8>,
}

impl StatsUpdate {
    pub fn played(value: bool) -> Self {
        StatsUpdate {
            played: Some(value),
            ..Default::default()
        }
    }

    pub fn goals(value: u8) -> Self {
        StatsUpdate {
            goals: Some(value),
            ..Default::default()
        }
    }

    pub fn yellow_cards(value: u8) -> Self {
        StatsUpdate {
            yellow_cards: Some(value),
            ..Default::default()
        }
    }

    pub fn red_card(value: bool) -> Self {
        StatsUpdate {
            red_card: Some(value),
            ..Default::default()
        }
    }

    pub fn suspension(matchdays: u8) -> Self {
        StatsUpdate {
            suspension_matchdays: Some(matchdays),
            ..Default::default()
        }
    }
}

/// Single-owner aggregate collecting attendance/goal/card input for both
/// rosters of one match. Constructed fresh per report session; the event
/// payload it emits is the only thing that outlives it.
#[derive(Debug, Clone)]
pub struct MatchReportBuilder {
    home_team_id: u32,
    away_team_id: u32,
    home_roster: Vec<u32>,
    away_roster: Vec<u32>,
    stats: HashMap<u32, PlayerMatchStats>,
}

impl MatchReportBuilder {
    pub fn new(
        home_team_id: u32,
        away_team_id: u32,
        home_roster: Vec<u32>,
        away_roster: Vec<u32>,
    ) -> Self {
        MatchReportBuilder {
            home_team_id,
            away_team_id,
            home_roster,
            away_roster,
            stats: HashMap::new(),
        }
    }

    pub fn stats(&self, player_id: u32) -> PlayerMatchStats {
        self.stats.get(&player_id).copied().unwrap_or_default()
    }

    /// Merges a partial update into the player's stats. The auto-promotion
    /// invariant is enforced here, at the mutation boundary: recording any
    /// goal or card implies the player featured in the match.
    pub fn update_stats(&mut self, player_id: u32, update: StatsUpdate) {
        if !self.is_on_roster(player_id) {
            debug!("ignoring stats update for unknown player {}", player_id);
            return;
        }

        let current = self.stats.entry(player_id).or_default();

        if let Some(played) = update.played {
            current.played = played;
        }
        if let Some(goals) = update.goals {
            current.goals = goals;
        }
        if let Some(yellow_cards) = update.yellow_cards {
            current.yellow_cards = yellow_cards % YELLOW_CARD_STATES;
        }
        if let Some(red_card) = update.red_card {
            current.red_card = red_card;
        }
        if let Some(matchdays) = update.suspension_matchdays {
            current.suspension_matchdays = Some(matchdays.max(1));
        }

        if current.goals > 0 || current.yellow_cards > 0 || current.red_card {
            current.played = true;
        }
    }

    /// One tap on the yellow-card control: 0 -> 1 -> 2 -> 0.
    pub fn cycle_yellow_card(&mut self, player_id: u32) {
        let next = (self.stats(player_id).yellow_cards + 1) % YELLOW_CARD_STATES;
        self.update_stats(player_id, StatsUpdate::yellow_cards(next));
    }

    pub fn set_suspension(&mut self, player_id: u32, matchdays: u8) {
        self.update_stats(player_id, StatsUpdate::suspension(matchdays));
    }

    /// Derived fresh from the current stats on every call, never cached.
    pub fn compute_score(&self) -> (u8, u8) {
        let home = self
            .home_roster
            .iter()
            .map(|id| self.stats(*id).goals)
            .sum();

        let away = self
            .away_roster
            .iter()
            .map(|id| self.stats(*id).goals)
            .sum();

        (home, away)
    }

    /// Red-carded players across both rosters, in roster order.
    pub fn red_card_players(&self) -> Vec<u32> {
        self.home_roster
            .iter()
            .chain(self.away_roster.iter())
            .filter(|id| self.stats(**id).red_card)
            .copied()
            .collect()
    }

    pub fn has_red_cards(&self) -> bool {
        self.stats.values().any(|s| s.red_card)
    }

    /// Flattens the working stats into the canonical ordered event list.
    ///
    /// Per player, in roster order: one appearance if played, then one
    /// goal event per goal, one yellow-card event per yellow, and a red
    /// card (with its suspension length, default 1) last. A player marked
    /// played with no other stats still emits exactly one appearance.
    pub fn build_event_payload(&self) -> Vec<MatchEvent> {
        let mut payload = Vec::new();

        for (roster, team_id) in [
            (&self.home_roster, self.home_team_id),
            (&self.away_roster, self.away_team_id),
        ] {
            for player_id in roster {
                let stats = self.stats(*player_id);

                if !stats.played {
                    continue;
                }

                payload.push(MatchEvent::appearance(*player_id, team_id));

                for _ in 0..stats.goals {
                    payload.push(MatchEvent::goal(*player_id, team_id));
                }

                for _ in 0..stats.yellow_cards {
                    payload.push(MatchEvent::yellow_card(*player_id, team_id));
                }

                if stats.red_card {
                    let matchdays = stats
                        .suspension_matchdays
                        .unwrap_or(DEFAULT_SUSPENSION_MATCHDAYS);
                    payload.push(MatchEvent::red_card(*player_id, team_id, Some(matchdays)));
                }
            }
        }

        payload
    }

    fn is_on_roster(&self, player_id: u32) -> bool {
        self.home_roster.contains(&player_id) || self.away_roster.contains(&player_id)
    }
}
