//! Asynchronous contact form submission.
//!
//! Per attempt: `Idle -> Submitting -> {Succeeded, Failed}`. The outcome
//! state holds until the next submit starts another attempt. An attempt
//! dropped mid-flight goes back to `Idle`.
//!
//! While submitting, the submit button shows a loading label and is disabled.
//! It gets its original label back and is re-enabled on every exit path,
//! including the submission future being dropped mid-flight. A request that
//! loses the timeout race is dropped, and transports cancel the underlying
//! request on drop. There are no retries; a failed attempt needs a fresh
//! submit from the user.

use futures::future::{self, Either};
use std::cell::Cell;
use std::pin::pin;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::ContactConfig;
use crate::error::{FolioError, Result};

/// Captured form fields as name/value pairs, in document order.
pub type FormFields = Vec<(String, String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Outbound HTTP for the form.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST `fields` to `url` with `Accept: application/json` and resolve to
    /// the response status. The body is never read.
    ///
    /// Dropping the returned future before it resolves must cancel the
    /// request.
    async fn post(&self, url: &str, fields: &[(String, String)]) -> Result<u16>;
}

/// Non-blocking delay on the host's event loop.
#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// The form, its submit button and the success popup.
pub trait ContactView {
    /// Current submit button markup.
    fn submit_label(&self) -> String;
    fn set_submit_label(&self, markup: &str);
    fn set_submit_enabled(&self, enabled: bool);
    fn show_popup(&self);
    fn hide_popup(&self);
    /// Clear every field back to its initial value.
    fn reset_form(&self);
    /// Blocking user-facing message.
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight.
    Ignored,
    Sent,
    Failed(FolioError),
}

pub struct ContactController<V, T, S> {
    view: V,
    transport: T,
    sleeper: S,
    config: ContactConfig,
    state: Cell<SubmissionState>,
}

impl<V: ContactView, T: Transport, S: Sleeper> ContactController<V, T, S> {
    pub fn new(view: V, transport: T, sleeper: S, config: ContactConfig) -> Self {
        Self {
            view,
            transport,
            sleeper,
            config,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    /// Run one submission attempt against `action`.
    ///
    /// On success the popup is dismissed after the configured delay; the
    /// returned future resolves once that has happened. The button is already
    /// restored by then.
    pub async fn submit(&self, action: &str, fields: &[(String, String)]) -> SubmitOutcome {
        if self.state.get() == SubmissionState::Submitting {
            debug!(action, "submission already in flight, ignoring");
            return SubmitOutcome::Ignored;
        }

        let outcome = {
            let _busy = BusyButton::engage(&self.view, &self.config.loading_label, &self.state);
            match self.deliver(action, fields).await {
                Ok(()) => {
                    self.state.set(SubmissionState::Succeeded);
                    info!(action, fields = fields.len(), "contact form sent");
                    self.view.show_popup();
                    self.view.reset_form();
                    SubmitOutcome::Sent
                }
                Err(e) => {
                    self.state.set(SubmissionState::Failed);
                    self.view.alert(&self.config.failure_message);
                    error!(error = %e, action, "contact form submission failed");
                    SubmitOutcome::Failed(e)
                }
            }
        };

        if outcome == SubmitOutcome::Sent {
            self.sleeper.sleep(self.config.popup_dismiss()).await;
            self.view.hide_popup();
        }
        outcome
    }

    async fn deliver(&self, action: &str, fields: &[(String, String)]) -> Result<()> {
        let request = self.transport.post(action, fields);
        let status = match self.config.submit_timeout() {
            None => request.await?,
            Some(limit) => {
                let request = pin!(request);
                let timer = pin!(self.sleeper.sleep(limit));
                match future::select(request, timer).await {
                    Either::Left((status, _)) => status?,
                    Either::Right(((), _)) => {
                        debug!(action, "submission timed out, dropping the request");
                        return Err(FolioError::Timeout(limit.as_millis() as u64));
                    }
                }
            }
        };

        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(FolioError::Status(status))
        }
    }
}

/// Loading state of the submit button for the lifetime of the guard. An
/// attempt still `Submitting` when the guard drops was cancelled and goes
/// back to `Idle`.
struct BusyButton<'a, V: ContactView> {
    view: &'a V,
    state: &'a Cell<SubmissionState>,
    original: String,
}

impl<'a, V: ContactView> BusyButton<'a, V> {
    fn engage(view: &'a V, loading_label: &str, state: &'a Cell<SubmissionState>) -> Self {
        let original = view.submit_label();
        view.set_submit_label(loading_label);
        view.set_submit_enabled(false);
        state.set(SubmissionState::Submitting);
        Self {
            view,
            state,
            original,
        }
    }
}

impl<V: ContactView> Drop for BusyButton<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_label(&self.original);
        self.view.set_submit_enabled(true);
        if self.state.get() == SubmissionState::Submitting {
            self.state.set(SubmissionState::Idle);
        }
    }
}
