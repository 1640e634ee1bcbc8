use leptos::prelude::*;

/// Reload marker for the crew roster.
///
/// The roster resource tracks this signal; bumping it after a successful
/// submission makes the roster refetch.
#[derive(Clone, Copy)]
pub struct RosterEpoch(RwSignal<u32>);

impl RosterEpoch {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    /// Subscribe the current reactive scope to roster reloads.
    pub fn track(&self) {
        self.0.track();
    }

    pub fn bump(&self) {
        self.0.update(|n| *n = n.wrapping_add(1));
    }
}

impl Default for RosterEpoch {
    fn default() -> Self {
        Self::new()
    }
}
