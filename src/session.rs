//! Session Controller
//!
//! Tracks the open tabs (by bare file name, in display order) and the single
//! active tab.

use serde::Serialize;

/// Result of a close request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab was closed and this tab became active
    Reselected(String),
    /// The last tab was closed; nothing is open any more
    Emptied,
    /// The name was not the active tab; nothing changed
    NotActive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    open_order: Vec<String>,
    active: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `name` as a new tab if it is not open yet, then make it active.
    ///
    /// Selecting an already-open tab never reorders the tab list. Returns
    /// whether a new tab was created.
    pub fn open(&mut self, name: &str) -> bool {
        let created = !self.is_open(name);
        if created {
            self.open_order.push(name.to_string());
        }
        self.active = Some(name.to_string());
        created
    }

    /// Close the active tab. Only the active tab can be closed.
    ///
    /// With more than one tab open the tab to its left becomes active, or the
    /// new first tab when the leftmost one was closed. Closing the last tab
    /// clears the session.
    pub fn close(&mut self, name: &str) -> CloseOutcome {
        if !self.is_active(name) {
            return CloseOutcome::NotActive;
        }
        if self.open_order.len() <= 1 {
            self.open_order.clear();
            self.active = None;
            return CloseOutcome::Emptied;
        }
        let Some(index) = self.open_order.iter().position(|tab| tab == name) else {
            // Active but not listed cannot happen through `open`; treat it as a reset.
            self.active = None;
            return CloseOutcome::Emptied;
        };
        self.open_order.remove(index);
        let next = self.open_order[index.saturating_sub(1)].clone();
        self.active = Some(next.clone());
        CloseOutcome::Reselected(next)
    }

    /// Close whatever tab is active
    pub fn close_active(&mut self) -> CloseOutcome {
        match self.active.clone() {
            Some(active) => self.close(&active),
            None => CloseOutcome::NotActive,
        }
    }

    pub fn tabs(&self) -> &[String] {
        &self.open_order
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open_order.iter().any(|tab| tab == name)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.as_deref() == Some(name)
    }
}
