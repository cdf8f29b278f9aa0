use crate::r#match::MatchEvent;
use crate::r#match::report::MatchReportBuilder;
use crate::tenant::TenantSettings;
use log::debug;
use std::error::Error;
use std::fmt;

/// Steps of the report entry flow. The suspension step only exists when
/// the tenant enables auto-suspensions and at least one red card was
/// recorded; both directions retrace the same conditional skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStep {
    CollectingStats,
    DefiningSuspensions,
    ReviewSubmit,
}

impl ReportStep {
    pub fn next(self, has_red_cards: bool, auto_suspensions_enabled: bool) -> ReportStep {
        match self {
            ReportStep::CollectingStats => {
                if auto_suspensions_enabled && has_red_cards {
                    ReportStep::DefiningSuspensions
                } else {
                    ReportStep::ReviewSubmit
                }
            }
            ReportStep::DefiningSuspensions => ReportStep::ReviewSubmit,
            ReportStep::ReviewSubmit => ReportStep::ReviewSubmit,
        }
    }

    /// `None` means leaving the flow (back from the first step).
    pub fn back(self, has_red_cards: bool, auto_suspensions_enabled: bool) -> Option<ReportStep> {
        match self {
            ReportStep::CollectingStats => None,
            ReportStep::DefiningSuspensions => Some(ReportStep::CollectingStats),
            ReportStep::ReviewSubmit => {
                if auto_suspensions_enabled && has_red_cards {
                    Some(ReportStep::DefiningSuspensions)
                } else {
                    Some(ReportStep::CollectingStats)
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    InFlight,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    NotAtReview,
    SubmissionInFlight,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NotAtReview => write!(f, "report is not at the review step"),
            SubmitError::SubmissionInFlight => write!(f, "a submission is already in flight"),
        }
    }
}

impl Error for SubmitError {}

/// Wizard session wrapping one report builder. Owns the step cursor and
/// the submission gate; all edit state lives in the builder so a failed
/// submission can be retried without re-entering anything.
#[derive(Debug)]
pub struct ReportWizard {
    builder: MatchReportBuilder,
    step: ReportStep,
    submit: SubmitState,
    auto_suspensions_enabled: bool,
}

impl ReportWizard {
    pub fn new(builder: MatchReportBuilder, settings: &TenantSettings) -> Self {
        ReportWizard {
            builder,
            step: ReportStep::CollectingStats,
            submit: SubmitState::Idle,
            auto_suspensions_enabled: settings.enable_auto_suspensions,
        }
    }

    pub fn step(&self) -> ReportStep {
        self.step
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    pub fn builder(&self) -> &MatchReportBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut MatchReportBuilder {
        &mut self.builder
    }

    pub fn advance(&mut self) {
        self.step = self
            .step
            .next(self.builder.has_red_cards(), self.auto_suspensions_enabled);
    }

    /// Returns `false` when backing out of the first step closes the flow.
    pub fn go_back(&mut self) -> bool {
        match self
            .step
            .back(self.builder.has_red_cards(), self.auto_suspensions_enabled)
        {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Takes the payload for submission and arms the in-flight gate.
    /// A second attempt while one is pending is rejected.
    pub fn begin_submit(&mut self) -> Result<Vec<MatchEvent>, SubmitError> {
        if self.step != ReportStep::ReviewSubmit {
            return Err(SubmitError::NotAtReview);
        }

        if self.submit == SubmitState::InFlight {
            return Err(SubmitError::SubmissionInFlight);
        }

        self.submit = SubmitState::InFlight;
        Ok(self.builder.build_event_payload())
    }

    /// Remote rejection or network failure: surface the message, keep all
    /// input intact, and re-enable submission.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("report submission failed: {}", message);
        self.submit = SubmitState::Failed(message);
    }

    /// Successful submission ends the session; the working state is discarded.
    pub fn submit_succeeded(self) {}
}
