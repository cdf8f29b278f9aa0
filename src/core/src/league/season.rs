use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub const MIN_ROSTER_SIZE: u8 = 7;
pub const DEFAULT_MAX_ACTIVE_PLAYERS: u8 = 26;

/// Strict forward progression; no backward transition exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeasonStatus {
    Draft,
    RegistrationClosed,
    Active,
    Completed,
}

impl SeasonStatus {
    pub fn next(self) -> Option<SeasonStatus> {
        match self {
            SeasonStatus::Draft => Some(SeasonStatus::RegistrationClosed),
            SeasonStatus::RegistrationClosed => Some(SeasonStatus::Active),
            SeasonStatus::Active => Some(SeasonStatus::Completed),
            SeasonStatus::Completed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeasonError {
    AlreadyCompleted,
    NotActive,
}

impl fmt::Display for SeasonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonError::AlreadyCompleted => write!(f, "season is already completed"),
            SeasonError::NotActive => write!(f, "season is not active"),
        }
    }
}

impl Error for SeasonError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: u32,
    pub tenant_id: u32,
    pub name: String,
    pub division_id: Option<u32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SeasonStatus,
    pub current_matchday: u16,
    #[serde(default = "default_max_active_players")]
    pub max_active_players_per_team: u8,
}

fn default_max_active_players() -> u8 {
    DEFAULT_MAX_ACTIVE_PLAYERS
}

impl Season {
    pub fn new(
        id: u32,
        tenant_id: u32,
        name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Season {
            id,
            tenant_id,
            name,
            division_id: None,
            start_date,
            end_date,
            status: SeasonStatus::Draft,
            current_matchday: 1,
            max_active_players_per_team: DEFAULT_MAX_ACTIVE_PLAYERS,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SeasonStatus::Active
    }

    pub fn advance_status(&mut self) -> Result<SeasonStatus, SeasonError> {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                Ok(next)
            }
            None => Err(SeasonError::AlreadyCompleted),
        }
    }

    pub fn advance_matchday(&mut self) -> Result<u16, SeasonError> {
        if !self.is_active() {
            return Err(SeasonError::NotActive);
        }

        self.current_matchday += 1;
        Ok(self.current_matchday)
    }

    /// A side needs at least seven players to take the field; the upper
    /// bound is the season's registration cap.
    pub fn is_valid_roster_size(&self, size: u8) -> bool {
        size >= MIN_ROSTER_SIZE && size <= self.max_active_players_per_team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season() -> Season {
        Season::new(
            1,
            1,
            String::from("Apertura 2026"),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        )
    }

    #[test]
    fn test_status_progression_is_forward_only() {
        let mut s = season();
        assert_eq!(s.status, SeasonStatus::Draft);

        assert_eq!(s.advance_status(), Ok(SeasonStatus::RegistrationClosed));
        assert_eq!(s.advance_status(), Ok(SeasonStatus::Active));
        assert_eq!(s.advance_status(), Ok(SeasonStatus::Completed));
        assert_eq!(s.advance_status(), Err(SeasonError::AlreadyCompleted));
    }

    #[test]
    fn test_matchday_advances_only_while_active() {
        let mut s = season();
        assert_eq!(s.advance_matchday(), Err(SeasonError::NotActive));

        s.status = SeasonStatus::Active;
        assert_eq!(s.advance_matchday(), Ok(2));
        assert_eq!(s.advance_matchday(), Ok(3));
    }

    #[test]
    fn test_roster_size_bounds() {
        let s = season();
        assert!(s.is_valid_roster_size(18));
        assert!(s.is_valid_roster_size(7));
        assert!(s.is_valid_roster_size(26));
        assert!(!s.is_valid_roster_size(5));
        assert!(!s.is_valid_roster_size(27));
    }
}
