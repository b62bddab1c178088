use chrono::{DateTime, Utc};
use log::{error, warn};
use thiserror::Error;

use super::lead::{Field, Lead, LeadForm};
use crate::campaign::{Campaign, CampaignCopy};
use crate::store::StoreError;

/// What the visitor sees when the store write fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Show the reserved-success panel anyway and leave the failure to the operator log.
    #[default]
    FailOpen,
    /// Show the error and keep the typed values for another attempt.
    Surface,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    Confirmed,
    /// The write failed and the success panel is shown anyway.
    Unconfirmed { reason: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Submitted(Delivery),
    Rejected(String),
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form was already submitted and has not reset yet")]
    AlreadySubmitted,
    #[error("required field {0:?} is empty")]
    MissingField(Field),
    #[error("the form is no longer mounted")]
    TornDown,
}

/// Registration form state machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFlow {
    form: LeadForm,
    phase: Phase,
    policy: FailurePolicy,
}

impl LeadFlow {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Rejected(_))
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted(_))
    }

    pub fn edit(&mut self, field: Field, value: String) {
        if self.accepts_input() {
            self.form.set(field, value);
        }
    }

    /// `Idle -> Submitting`. Hands back the record to write, or why nothing should be written.
    pub fn begin(&mut self, campaign: &Campaign, now: DateTime<Utc>) -> Result<Lead, SubmitBlocked> {
        match self.phase {
            Phase::Submitting => return Err(SubmitBlocked::InFlight),
            Phase::Submitted(_) => return Err(SubmitBlocked::AlreadySubmitted),
            Phase::Idle | Phase::Rejected(_) => {}
        }
        if let Some(field) = self.form.missing_field() {
            return Err(SubmitBlocked::MissingField(field));
        }

        self.phase = Phase::Submitting;
        Ok(Lead::new(&self.form, campaign, now))
    }

    /// `Submitting -> Submitted | Rejected`, depending on the write and the policy.
    pub fn finish(&mut self, outcome: Result<(), StoreError>) -> &Phase {
        if self.phase != Phase::Submitting {
            warn!("Ignoring store outcome outside of a submission: {:?}", outcome);
            return &self.phase;
        }

        self.phase = match (outcome, self.policy) {
            (Ok(()), _) => Phase::Submitted(Delivery::Confirmed),
            (Err(e), FailurePolicy::FailOpen) => {
                error!("Error submitting lead: {}", e);
                Phase::Submitted(Delivery::Unconfirmed {
                    reason: e.to_string(),
                })
            }
            (Err(e), FailurePolicy::Surface) => {
                error!("Error submitting lead: {}", e);
                Phase::Rejected(e.to_string())
            }
        };
        &self.phase
    }

    /// `Submitted -> Idle`, blanking the form. Does nothing in any other phase.
    pub fn reset(&mut self) -> bool {
        if !self.is_submitted() {
            return false;
        }
        self.phase = Phase::Idle;
        self.form.clear();
        true
    }

    pub fn button_label(&self, copy: &CampaignCopy) -> &'static str {
        match self.phase {
            Phase::Idle | Phase::Rejected(_) => copy.submit_idle,
            Phase::Submitting => copy.submit_busy,
            Phase::Submitted(_) => copy.submit_done,
        }
    }
}
