use crate::r#match::{MatchEvent, MatchEventType};
use serde::Serialize;

/// Derived disciplinary record, never persisted on its own: the red-card
/// event log is the source of truth.
///
/// A red card at matchday `m` with length `d` keeps the player out of
/// matchdays `m + 1 ..= m + d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suspension {
    pub player_id: u32,
    pub effective_from_matchday: u16,
    pub matchdays: u8,
}

impl Suspension {
    pub fn from_red_card(event: &MatchEvent, matchday: u16) -> Option<Self> {
        if event.event_type != MatchEventType::RedCard {
            return None;
        }

        Some(Suspension {
            player_id: event.player_id,
            effective_from_matchday: matchday + 1,
            matchdays: event.suspension_length(),
        })
    }

    pub fn last_matchday(&self) -> u16 {
        self.effective_from_matchday + self.matchdays as u16 - 1
    }

    pub fn is_active(&self, current_matchday: u16) -> bool {
        current_matchday >= self.effective_from_matchday
            && current_matchday <= self.last_matchday()
    }

    pub fn is_expired(&self, current_matchday: u16) -> bool {
        current_matchday > self.last_matchday()
    }

    pub fn matchdays_remaining(&self, current_matchday: u16) -> u8 {
        if current_matchday > self.last_matchday() {
            return 0;
        }

        let start = current_matchday.max(self.effective_from_matchday);
        (self.last_matchday() - start + 1) as u8
    }
}

/// One suspension per red card in the event list, length defaulting to 1.
pub fn suspensions_from_events(events: &[MatchEvent], matchday: u16) -> Vec<Suspension> {
    events
        .iter()
        .filter_map(|event| Suspension::from_red_card(event, matchday))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspension_window_and_expiry() {
        // red card at matchday 5, two matchdays
        let suspension = Suspension {
            player_id: 9,
            effective_from_matchday: 6,
            matchdays: 2,
        };

        assert!(!suspension.is_active(5));
        assert!(suspension.is_active(6));
        assert!(suspension.is_active(7));
        assert!(suspension.is_expired(8));

        assert_eq!(suspension.matchdays_remaining(5), 2);
        assert_eq!(suspension.matchdays_remaining(7), 1);
        assert_eq!(suspension.matchdays_remaining(8), 0);
    }

    #[test]
    fn test_single_matchday_suspension() {
        let suspension = Suspension {
            player_id: 9,
            effective_from_matchday: 4,
            matchdays: 1,
        };

        assert_eq!(suspension.last_matchday(), 4);
        assert!(suspension.is_active(4));
        assert!(suspension.is_expired(5));
    }

    #[test]
    fn test_derived_only_from_red_cards_with_default_length() {
        let events = vec![
            MatchEvent::appearance(1, 10),
            MatchEvent::red_card(2, 10, None),
            MatchEvent::yellow_card(3, 20),
            MatchEvent::red_card(4, 20, Some(3)),
        ];

        let suspensions = suspensions_from_events(&events, 7);

        assert_eq!(suspensions.len(), 2);
        assert_eq!(suspensions[0].player_id, 2);
        assert_eq!(suspensions[0].effective_from_matchday, 8);
        assert_eq!(suspensions[0].matchdays, 1);
        assert_eq!(suspensions[1].matchdays, 3);
        assert_eq!(suspensions[1].last_matchday(), 10);
    }
}
