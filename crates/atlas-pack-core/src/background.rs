use crate::model::{PackItem, PackOutput};
use crate::pipeline;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// A complete, self-contained pack request. Everything the worker needs
/// crosses the thread boundary inside this one message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackRequest {
    pub items: Vec<PackItem>,
    pub page_size: u32,
    pub padding: u32,
}

impl PackRequest {
    pub fn new(items: Vec<PackItem>, page_size: u32, padding: u32) -> Self {
        Self {
            items,
            page_size,
            padding,
        }
    }

    /// Evaluates the request on the calling thread and returns the same
    /// response envelope the background worker would send. Interactive
    /// callers that re-pack on every edit own their debounce and
    /// stale-result policy; this stays a plain synchronous call.
    pub fn run(&self) -> PackResponse {
        match pipeline::pack(&self.items, self.page_size, self.padding) {
            Ok(output) => PackResponse::Success(output),
            Err(e) => PackResponse::Failure {
                error: e.to_string(),
            },
        }
    }
}

/// Worker reply. The serialized form is tagged on `status`: success carries
/// the `pages`/`oversized`/`dropped` fields alongside the tag, failure
/// carries a human-readable `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PackResponse {
    Success(PackOutput),
    Failure { error: String },
}

impl PackResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, PackResponse::Success(_))
    }

    /// Unwraps the success payload, mapping a failure back to its message.
    pub fn into_result(self) -> Result<PackOutput, String> {
        match self {
            PackResponse::Success(output) => Ok(output),
            PackResponse::Failure { error } => Err(error),
        }
    }
}

/// Handle to one in-flight background pack. One request per job; concurrent
/// jobs are fully independent. Dropping the handle abandons the response and
/// lets the worker exit quietly.
#[derive(Debug)]
pub struct PackJob {
    rx: Receiver<PackResponse>,
}

impl PackJob {
    /// Runs `request` on a dedicated worker thread. The worker sends exactly
    /// one response; engine errors and panics both come back as failure
    /// responses, so a bad batch can never take the host down.
    pub fn spawn(request: PackRequest) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let response = run_guarded(&request);
            // Receiver may already be gone (job dropped); nothing to do then.
            let _ = tx.send(response);
        });
        Self { rx }
    }

    /// Non-blocking check for the response. `None` while the worker is still
    /// running, and again after the response has been taken once.
    pub fn poll(&self) -> Option<PackResponse> {
        self.rx.try_recv().ok()
    }

    /// Blocks until the worker replies. A worker that died without replying
    /// reports as a failure response.
    pub fn wait(self) -> PackResponse {
        self.rx.recv().unwrap_or_else(|_| PackResponse::Failure {
            error: "pack worker disconnected without a response".into(),
        })
    }
}

fn run_guarded(request: &PackRequest) -> PackResponse {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| request.run())) {
        Ok(response) => response,
        Err(payload) => PackResponse::Failure {
            error: format!("pack worker panicked: {}", panic_message(&payload)),
        },
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
