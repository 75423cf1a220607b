//! Presence memory and transition detection
//!
//! The watcher cares about exactly one edge: the player it tracks going from
//! a known offline to online. `PresenceTracker` holds the tri-state memory
//! that makes the edge detectable without firing a stale alert every time
//! the process restarts.

/// Last known presence of the tracked player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceState {
    /// No successful probe yet (process just started)
    Unknown,
    /// Last successful probe saw the player online
    Online,
    /// Last successful probe saw the player offline
    Offline,
}

impl PresenceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceState::Unknown => "unknown",
            PresenceState::Online => "online",
            PresenceState::Offline => "offline",
        }
    }
}

/// Tri-state presence memory for a single player.
///
/// Starts at `Unknown` and is updated only from successful probes, so the
/// first observation after startup can never report a transition: there is
/// no prior state to transition from.
#[derive(Debug)]
pub struct PresenceTracker {
    last: PresenceState,
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self {
            last: PresenceState::Unknown,
        }
    }

    /// State recorded by the most recent successful probe.
    pub fn state(&self) -> PresenceState {
        self.last
    }

    /// Record a successful probe and report whether it completed the one
    /// edge the watcher alerts on: stored `Offline`, observed online. The
    /// stored state is always replaced with the new observation.
    pub fn observe(&mut self, online: bool) -> bool {
        let came_online = self.last == PresenceState::Offline && online;

        self.last = if online {
            PresenceState::Online
        } else {
            PresenceState::Offline
        };

        came_online
    }
}

impl Default for PresenceTracker {
    fn default() -> Self {
        Self::new()
    }
}
