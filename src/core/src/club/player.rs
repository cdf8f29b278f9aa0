use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerStatus {
    Active,
    Inactive,
}

/// A registered player. Roster membership is exclusive: a player belongs
/// to at most one team, and a transfer reassigns `team_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub team_id: Option<u32>,
    pub status: PlayerStatus,
    pub suspended_until_matchday: Option<u16>,
}

impl Player {
    pub fn new(id: u32, first_name: String, last_name: String, team_id: Option<u32>) -> Self {
        Player {
            id,
            first_name,
            last_name,
            team_id,
            status: PlayerStatus::Active,
            suspended_until_matchday: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// A suspension ending at matchday `m` keeps the player out through `m` inclusive.
    pub fn is_suspended(&self, current_matchday: u16) -> bool {
        self.suspended_until_matchday
            .map(|until| current_matchday <= until)
            .unwrap_or(false)
    }

    pub fn suspend_until(&mut self, matchday: u16) {
        self.suspended_until_matchday = Some(matchday);
    }

    /// Moves the player to a new team. Status resets to inactive until
    /// the receiving team re-registers the player.
    pub fn transfer_to(&mut self, new_team_id: u32) {
        self.team_id = Some(new_team_id);
        self.status = PlayerStatus::Inactive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_reassigns_team_and_resets_status() {
        let mut player = Player::new(1, String::from("Ana"), String::from("Reyes"), Some(10));
        assert_eq!(player.status, PlayerStatus::Active);

        player.transfer_to(20);

        assert_eq!(player.team_id, Some(20));
        assert_eq!(player.status, PlayerStatus::Inactive);
    }

    #[test]
    fn test_suspension_window() {
        let mut player = Player::new(2, String::from("Luis"), String::from("Mora"), Some(10));
        assert!(!player.is_suspended(1));

        // red card at matchday 3, two matchdays -> out for 4 and 5
        player.suspend_until(5);

        assert!(player.is_suspended(4));
        assert!(player.is_suspended(5));
        assert!(!player.is_suspended(6));
    }
}
