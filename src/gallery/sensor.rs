//! Visibility sensor for automatic pagination.
//!
//! Replaces a viewport intersection observer with an explicit subscription:
//! the controller observes one gallery index (the newest card), the view
//! reports which indices are on screen after each draw, and the sensor fires
//! once when the observed index shows up.

use std::ops::Range;

/// Watches one gallery index and fires when it comes on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySensor {
    target: Option<usize>,
}

impl VisibilitySensor {
    /// Sensor with no target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch `index`, replacing any previous target.
    pub fn observe(&mut self, index: usize) {
        self.target = Some(index);
    }

    /// Stop watching.
    pub fn unobserve(&mut self) {
        self.target = None;
    }

    /// Index currently watched.
    pub fn observed(&self) -> Option<usize> {
        self.target
    }

    /// Report the visible index range.
    ///
    /// Returns `true` exactly once per observation: the target is dropped
    /// when it fires.
    pub fn report(&mut self, visible: Range<usize>) -> bool {
        match self.target {
            Some(index) if visible.contains(&index) => {
                self.target = None;
                true
            }
            _ => false,
        }
    }
}
