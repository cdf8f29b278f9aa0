use serde::{Deserialize, Serialize};

/// Per-tenant branding and feature flags. One tenant is one
/// independently configured league instance sharing the same backend;
/// the flags feed straight into wizard branching and standings grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantSettings {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub theme_class: Option<String>,
    pub show_offense_defense_widgets: bool,
    pub show_discipline_widget: bool,
    pub show_divisions: bool,
    pub enable_auto_suspensions: bool,
    pub allow_transfers: bool,
    pub min_matches_for_playoffs: u16,
}

impl Default for TenantSettings {
    fn default() -> Self {
        TenantSettings {
            id: 0,
            slug: String::new(),
            name: String::new(),
            logo_url: None,
            theme_class: None,
            show_offense_defense_widgets: true,
            show_discipline_widget: false,
            show_divisions: false,
            enable_auto_suspensions: false,
            allow_transfers: false,
            min_matches_for_playoffs: 0,
        }
    }
}

impl TenantSettings {
    /// Playoff eligibility gate, fed by appearance counts from the event log.
    pub fn is_playoff_eligible(&self, appearances: u16) -> bool {
        appearances >= self.min_matches_for_playoffs
    }
}
