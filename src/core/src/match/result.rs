use serde::{Deserialize, Serialize};

/// Final outcome of a finished match, the unit the standings fold consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_goals: u8,
    pub away_goals: u8,
    pub matchday: u16,
}

impl MatchResult {
    pub fn is_draw(&self) -> bool {
        self.home_goals == self.away_goals
    }

    pub fn winner(&self) -> Option<u32> {
        if self.home_goals > self.away_goals {
            Some(self.home_team_id)
        } else if self.away_goals > self.home_goals {
            Some(self.away_team_id)
        } else {
            None
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// (scored, conceded) from the perspective of `team_id`.
    pub fn goals_for(&self, team_id: u32) -> (u8, u8) {
        if team_id == self.home_team_id {
            (self.home_goals, self.away_goals)
        } else {
            (self.away_goals, self.home_goals)
        }
    }
}
