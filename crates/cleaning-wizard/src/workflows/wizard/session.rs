use serde::{Deserialize, Serialize};
use tracing::debug;

use super::seed::seed_from_url;
use super::step::WizardStep;
use crate::workflows::fees::{self, FeeState, FeeUpdate};
use crate::workflows::inspection::{self, InspectionRecord, InspectionUpdate, Requirement};

/// Everything the wizard knows at one point in time. Sessions are values:
/// [`reduce`] produces a new one instead of editing in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSession {
    pub step: WizardStep,
    pub inspection: InspectionRecord,
    pub fees: FeeState,
}

impl WizardSession {
    pub fn seeded(url: &str) -> Self {
        Self {
            inspection: seed_from_url(url),
            ..Self::default()
        }
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Inspection | WizardStep::ProviderFees => {
                inspection::is_complete(&self.inspection)
            }
            WizardStep::Payment => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum WizardAction {
    Inspection(InspectionUpdate),
    Fees(FeeUpdate),
    Next,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionOutcome {
    Updated,
    Moved { from: WizardStep, to: WizardStep },
    /// Forward navigation refused until the checklist is complete.
    Blocked { missing: Vec<Requirement> },
    /// No step exists in the requested direction.
    AtBoundary { step: WizardStep },
    /// The edit targets data owned by another step; earlier steps are read-only
    /// once left, later ones are not open yet.
    NotEditable { step: WizardStep },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub session: WizardSession,
    pub outcome: TransitionOutcome,
}

impl Transition {
    fn unchanged(session: &WizardSession, outcome: TransitionOutcome) -> Self {
        Self {
            session: session.clone(),
            outcome,
        }
    }
}

/// Applies `action` to `session`. A snapshot that claims to be past the
/// checklist while its record is incomplete is sent back to the checklist
/// before anything else happens.
pub fn reduce(session: &WizardSession, action: WizardAction) -> Transition {
    if session.step != WizardStep::Inspection {
        let missing = inspection::missing_requirements(&session.inspection);
        if !missing.is_empty() {
            debug!(
                step = session.step.label(),
                ?missing,
                "incomplete checklist past step one, resetting"
            );
            return Transition {
                session: WizardSession {
                    step: WizardStep::Inspection,
                    ..session.clone()
                },
                outcome: TransitionOutcome::Blocked { missing },
            };
        }
    }

    match action {
        WizardAction::Inspection(update) => {
            if session.step != WizardStep::Inspection {
                return Transition::unchanged(
                    session,
                    TransitionOutcome::NotEditable { step: session.step },
                );
            }
            Transition {
                session: WizardSession {
                    inspection: inspection::apply(&session.inspection, update),
                    ..session.clone()
                },
                outcome: TransitionOutcome::Updated,
            }
        }
        WizardAction::Fees(update) => {
            if session.step != WizardStep::ProviderFees {
                return Transition::unchanged(
                    session,
                    TransitionOutcome::NotEditable { step: session.step },
                );
            }
            Transition {
                session: WizardSession {
                    fees: fees::apply(&session.fees, update),
                    ..session.clone()
                },
                outcome: TransitionOutcome::Updated,
            }
        }
        WizardAction::Next => advance(session),
        WizardAction::Back => retreat(session),
    }
}

fn advance(session: &WizardSession) -> Transition {
    let Some(to) = session.step.next() else {
        return Transition::unchanged(
            session,
            TransitionOutcome::AtBoundary { step: session.step },
        );
    };

    if session.step == WizardStep::Inspection {
        let missing = inspection::missing_requirements(&session.inspection);
        if !missing.is_empty() {
            debug!(?missing, "inspection incomplete, staying on checklist");
            return Transition::unchanged(session, TransitionOutcome::Blocked { missing });
        }
    }

    move_to(session, to)
}

fn retreat(session: &WizardSession) -> Transition {
    match session.step.previous() {
        Some(to) => move_to(session, to),
        None => Transition::unchanged(
            session,
            TransitionOutcome::AtBoundary { step: session.step },
        ),
    }
}

fn move_to(session: &WizardSession, to: WizardStep) -> Transition {
    let from = session.step;
    debug!(from = from.label(), to = to.label(), "wizard step changed");
    Transition {
        session: WizardSession {
            step: to,
            ..session.clone()
        },
        outcome: TransitionOutcome::Moved { from, to },
    }
}
