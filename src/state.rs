use std::collections::HashMap;
use std::rc::Rc;

use leptos::prelude::*;

use minnow_sdk::refresh::{DisplaySink, Slot};
use minnow_sdk::session::{BankSession, PoolSession};
use minnow_sdk::status::{Severity, StatusMessage, StatusSink};

/// The single status line shown under the nav. Every report overwrites the
/// previous one.
#[derive(Copy, Clone)]
pub struct GlobalStatus {
    pub message: RwSignal<Option<StatusMessage>>,
}

impl GlobalStatus {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }
}

impl Default for GlobalStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for GlobalStatus {
    fn report(&self, severity: Severity, message: &str) {
        self.message.set(Some(StatusMessage {
            severity,
            text: message.to_string(),
        }));
    }
}

/// Signal-backed display slots; refreshed values land here and the views
/// react.
#[derive(Copy, Clone)]
pub struct Displays {
    slots: RwSignal<HashMap<Slot, String>>,
}

impl Displays {
    pub fn new() -> Self {
        Self {
            slots: RwSignal::new(HashMap::new()),
        }
    }

    pub fn get(&self, slot: Slot) -> Option<String> {
        self.slots.with(|slots| slots.get(&slot).cloned())
    }
}

impl Default for Displays {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for Displays {
    fn publish(&self, slot: Slot, value: String) {
        self.slots.update(|slots| {
            slots.insert(slot, value);
        });
    }
}

/// Bank page session, present once connected on the right chain.
#[derive(Copy, Clone)]
pub struct BankStore {
    pub session: RwSignal<Option<Rc<BankSession>>, LocalStorage>,
}

impl BankStore {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new_local(None),
        }
    }
}

impl Default for BankStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Pool page session, present once connected on the right chain.
#[derive(Copy, Clone)]
pub struct PoolStore {
    pub session: RwSignal<Option<Rc<PoolSession>>, LocalStorage>,
}

impl PoolStore {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new_local(None),
        }
    }
}

impl Default for PoolStore {
    fn default() -> Self {
        Self::new()
    }
}
