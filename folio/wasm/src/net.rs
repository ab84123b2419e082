//! Fetch transport and event-loop timers for the contact form.

use folio::contact::{Sleeper, Transport};
use folio::{FolioError, Result};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;
use tracing::debug;
use web_sys::{AbortController, FormData};

use crate::dom::JsResultExt;

/// POSTs the fields as `multipart/form-data` through `fetch`. Dropping the
/// future before the response arrives aborts the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post(&self, url: &str, fields: &[(String, String)]) -> Result<u16> {
        let body = FormData::new().or_js()?;
        for (name, value) in fields {
            body.append_with_str(name, value).or_js()?;
        }

        let abort = AbortOnDrop::new()?;
        let signal = abort.controller.signal();
        let response = Request::post(url)
            .header("Accept", "application/json")
            .abort_signal(Some(&signal))
            .body(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        abort.disarm();
        Ok(response.status())
    }
}

fn network(e: gloo_net::Error) -> FolioError {
    FolioError::Network(e.to_string())
}

/// Aborts the in-flight fetch when dropped, unless disarmed first.
struct AbortOnDrop {
    controller: AbortController,
    armed: bool,
}

impl AbortOnDrop {
    fn new() -> Result<Self> {
        Ok(Self {
            controller: AbortController::new().or_js()?,
            armed: true,
        })
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if self.armed {
            debug!("aborting contact request");
            self.controller.abort();
        }
    }
}

/// `setTimeout`-backed sleep.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerSleeper;

impl Sleeper for TimerSleeper {
    async fn sleep(&self, duration: Duration) {
        TimeoutFuture::new(timeout_millis(duration)).await;
    }
}

/// `setTimeout` takes a 32-bit delay.
pub(crate) fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_saturate_at_u32() {
        assert_eq!(timeout_millis(Duration::from_millis(3000)), 3000);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX / 1000)), u32::MAX);
        assert_eq!(timeout_millis(Duration::from_micros(999)), 0);
    }
}
