use serde::{Deserialize, Serialize};

pub const DEFAULT_SUSPENSION_MATCHDAYS: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchEventType {
    Appearance,
    Goal,
    YellowCard,
    RedCard,
}

/// A single in-match occurrence. Events are immutable once submitted;
/// a match's ordered event list fully determines its derived outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub player_id: u32,
    pub team_id: u32,
    pub event_type: MatchEventType,
    /// Only meaningful for red cards. Unset means the default of one matchday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspension_matchdays: Option<u8>,
}

impl MatchEvent {
    pub fn appearance(player_id: u32, team_id: u32) -> Self {
        MatchEvent {
            player_id,
            team_id,
            event_type: MatchEventType::Appearance,
            suspension_matchdays: None,
        }
    }

    pub fn goal(player_id: u32, team_id: u32) -> Self {
        MatchEvent {
            player_id,
            team_id,
            event_type: MatchEventType::Goal,
            suspension_matchdays: None,
        }
    }

    pub fn yellow_card(player_id: u32, team_id: u32) -> Self {
        MatchEvent {
            player_id,
            team_id,
            event_type: MatchEventType::YellowCard,
            suspension_matchdays: None,
        }
    }

    pub fn red_card(player_id: u32, team_id: u32, suspension_matchdays: Option<u8>) -> Self {
        MatchEvent {
            player_id,
            team_id,
            event_type: MatchEventType::RedCard,
            suspension_matchdays,
        }
    }

    /// Suspension length carried by a red card, never "unspecified".
    pub fn suspension_length(&self) -> u8 {
        self.suspension_matchdays
            .unwrap_or(DEFAULT_SUSPENSION_MATCHDAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_card_suspension_defaults_to_one() {
        let event = MatchEvent::red_card(7, 1, None);
        assert_eq!(event.suspension_length(), 1);

        let event = MatchEvent::red_card(7, 1, Some(3));
        assert_eq!(event.suspension_length(), 3);
    }

    #[test]
    fn test_event_type_wire_tags() {
        let json = serde_json::to_string(&MatchEventType::YellowCard).unwrap();
        assert_eq!(json, "\"YELLOW_CARD\"");

        let json = serde_json::to_string(&MatchEventType::Appearance).unwrap();
        assert_eq!(json, "\"APPEARANCE\"");
    }
}
