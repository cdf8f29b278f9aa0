pub mod club;
pub mod discipline;
pub mod league;
pub mod r#match;
pub mod tenant;
pub mod utils;

// Re-export club items
pub use club::{Player, PlayerStatus, Team};

// Re-export league items
pub use league::{
    Division, DivisionMarkers, DivisionStandings, FormResult, Season, SeasonError, SeasonStatus,
    StandingsTable, StandingsView, TeamStanding,
};

// Re-export match items
pub use r#match::{
    Match, MatchEvent, MatchEventType, MatchResult, MatchStatus,
    report::{
        MatchReportBuilder, PlayerMatchStats, ReportStep, ReportWizard, StatsUpdate, SubmitError,
        SubmitState,
    },
};

pub use discipline::{Suspension, suspensions_from_events};
pub use tenant::TenantSettings;
pub use utils::TimeEstimation;
