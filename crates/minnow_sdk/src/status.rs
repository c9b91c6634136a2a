//! Single-slot status reporting. Every asynchronous step reports once
//! before the call goes out and once when it settles or fails; each report
//! overwrites the previous one. There is no queue and no expiry.

use std::cell::RefCell;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
}

/// Write-only sink for the current status message. The app backs this with
/// a signal; tests use [`StatusSlot`].
pub trait StatusSink {
    fn report(&self, severity: Severity, message: &str);
}

/// Plain single-slot implementation.
#[derive(Default, Debug)]
pub struct StatusSlot(RefCell<Option<StatusMessage>>);

impl StatusSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<StatusMessage> {
        self.0.borrow().clone()
    }
}

impl StatusSink for StatusSlot {
    fn report(&self, severity: Severity, message: &str) {
        *self.0.borrow_mut() = Some(StatusMessage {
            severity,
            text: message.to_string(),
        });
    }
}
