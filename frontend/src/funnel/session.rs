use chrono::Utc;
use log::{debug, error, info, warn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::flow::{Delivery, FailurePolicy, LeadFlow, Phase, SubmitBlocked};
use super::lead::Field;
use super::scheduler::Scheduler;
use crate::analytics::{ConversionEvent, Tracker};
use crate::campaign::Campaign;
use crate::store::LeadStore;

/// Drives one mounted registration form: store write, pixel events and the timed reset.
pub struct LeadSession<S: LeadStore, K: Scheduler> {
    campaign: Campaign,
    store: S,
    scheduler: K,
    tracker: Tracker,
    flow: Rc<RefCell<LeadFlow>>,
    pending_reset: RefCell<Option<K::Handle>>,
    torn_down: Cell<bool>,
    on_change: Rc<dyn Fn()>,
}

impl<S: LeadStore, K: Scheduler> LeadSession<S, K> {
    pub fn new(
        campaign: Campaign,
        store: S,
        scheduler: K,
        tracker: Tracker,
        policy: FailurePolicy,
        on_change: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            campaign,
            store,
            scheduler,
            tracker,
            flow: Rc::new(RefCell::new(LeadFlow::new(policy))),
            pending_reset: RefCell::new(None),
            torn_down: Cell::new(false),
            on_change,
        }
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn snapshot(&self) -> LeadFlow {
        self.flow.borrow().clone()
    }

    pub fn edit(&self, field: Field, value: String) {
        if self.torn_down.get() {
            return;
        }
        self.flow.borrow_mut().edit(field, value);
        (self.on_change)();
    }

    /// Runs one submission to completion. Store failures never come back out of here;
    /// the error only says why nothing was written.
    pub async fn submit(&self) -> Result<(), SubmitBlocked> {
        if self.torn_down.get() {
            return Err(SubmitBlocked::TornDown);
        }
        let lead = self
            .flow
            .borrow_mut()
            .begin(&self.campaign, Utc::now())
            .map_err(|blocked| {
                debug!("Submission ignored: {}", blocked);
                blocked
            })?;
        (self.on_change)();
        self.tracker.track(ConversionEvent::LeadStarted);

        let outcome = self.store.insert(&lead).await;

        if self.torn_down.get() {
            if let Err(e) = &outcome {
                error!("Error submitting lead after the form went away: {}", e);
            }
            return Ok(());
        }

        let phase = self.flow.borrow_mut().finish(outcome).clone();
        match phase {
            Phase::Submitted(Delivery::Confirmed) => {
                info!("Lead stored for {}", self.campaign.event);
                self.tracker.track(ConversionEvent::RegistrationComplete {
                    content_name: self.campaign.copy.registration_name,
                });
                self.schedule_reset();
            }
            Phase::Submitted(Delivery::Unconfirmed { reason }) => {
                warn!("Showing the reserved panel without a stored lead: {}", reason);
                self.schedule_reset();
            }
            Phase::Idle | Phase::Submitting | Phase::Rejected(_) => {}
        }
        (self.on_change)();
        Ok(())
    }

    fn schedule_reset(&self) {
        let flow = Rc::downgrade(&self.flow);
        let on_change = Rc::clone(&self.on_change);
        let handle = self.scheduler.after(
            self.campaign.reset_delay,
            Box::new(move || {
                if let Some(flow) = flow.upgrade() {
                    if flow.borrow_mut().reset() {
                        on_change();
                    }
                }
            }),
        );
        // Replacing an older handle cancels it.
        *self.pending_reset.borrow_mut() = Some(handle);
    }

    /// Cancels the pending reset and freezes the state. Call when the form unmounts.
    pub fn teardown(&self) {
        self.torn_down.set(true);
        self.pending_reset.borrow_mut().take();
    }
}

impl<S: LeadStore, K: Scheduler> Drop for LeadSession<S, K> {
    fn drop(&mut self) {
        self.teardown();
    }
}
