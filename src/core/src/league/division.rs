use crate::club::Team;
use serde::{Deserialize, Serialize};

/// Skill-tier grouping of teams within a tenant ("fuerza").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    pub id: u32,
    pub tenant_id: u32,
    pub name: String,
}

impl Division {
    pub fn new(id: u32, tenant_id: u32, name: String) -> Self {
        Division {
            id,
            tenant_id,
            name,
        }
    }
}

/// One-time migration shim for rosters predating the explicit
/// team-to-division relation, where the tier was encoded in the team
/// name ("Club X 1ra Fuerza"). Markers are checked in fixed order and
/// the first match wins; a name matching none falls back to the
/// primary (first) division.
pub struct DivisionMarkers;

const MARKERS: [&str; 3] = ["1ra", "2da", "3ra"];

impl DivisionMarkers {
    /// Resolves a division for the team: the explicit relation when set,
    /// otherwise the name marker, otherwise the primary division.
    pub fn resolve(team: &Team, divisions: &[Division]) -> Option<u32> {
        if let Some(division_id) = team.division_id {
            return Some(division_id);
        }

        Self::resolve_by_name(&team.name, divisions)
    }

    pub fn resolve_by_name(team_name: &str, divisions: &[Division]) -> Option<u32> {
        for (index, marker) in MARKERS.iter().enumerate() {
            if team_name.contains(marker) {
                if let Some(division) = divisions.get(index) {
                    return Some(division.id);
                }
            }
        }

        divisions.first().map(|d| d.id)
    }
}
