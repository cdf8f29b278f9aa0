use crate::r#match::{MatchEvent, MatchEventType, MatchResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
}

/// A scheduled fixture. The score is never stored: it is always derived
/// from the event log, so the two cannot drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    pub season_id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub date: NaiveDateTime,
    pub matchday: u16,
    pub status: MatchStatus,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

impl Match {
    pub fn new(
        id: u32,
        season_id: u32,
        home_team_id: u32,
        away_team_id: u32,
        date: NaiveDateTime,
        matchday: u16,
    ) -> Self {
        Match {
            id,
            season_id,
            home_team_id,
            away_team_id,
            date,
            matchday,
            status: MatchStatus::Scheduled,
            events: Vec::new(),
        }
    }

    /// (home, away) goal totals derived from the event log.
    pub fn score(&self) -> (u8, u8) {
        let mut home = 0;
        let mut away = 0;

        for event in &self.events {
            if event.event_type != MatchEventType::Goal {
                continue;
            }

            if event.team_id == self.home_team_id {
                home += 1;
            } else if event.team_id == self.away_team_id {
                away += 1;
            }
        }

        (home, away)
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Standings input, available only once the match is finished.
    pub fn result(&self) -> Option<MatchResult> {
        if !self.is_finished() {
            return None;
        }

        let (home_goals, away_goals) = self.score();

        Some(MatchResult {
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            home_goals,
            away_goals,
            matchday: self.matchday,
        })
    }
}
