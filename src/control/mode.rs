//! Debounced mode cycling.
//!
//! The trigger is sampled once per control cycle. A press advances the
//! mode on its rising edge only; holding the trigger across any number of
//! polls does nothing more until it is released.
//!
//! ```text
//!            level=1 / advance
//!   ┌──────┐ ────────────────▶ ┌──────┐
//!   │ Idle │                   │ Held │ ◀─┐ level=1 (no-op)
//!   └──────┘ ◀──────────────── └──────┘ ──┘
//!                level=0
//! ```

use log::debug;

/// Index of the active response profile. Always below the profile count
/// it was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlMode(u8);

impl ControlMode {
    /// The first profile.
    pub const FIRST: Self = Self(0);

    /// `None` unless `index < count`.
    pub fn new(index: u8, count: u8) -> Option<Self> {
        (index < count).then_some(Self(index))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The next mode, wrapping to the first at `count`.
    pub fn next(self, count: u8) -> Self {
        let next = self.0.saturating_add(1);
        if next >= count { Self::FIRST } else { Self(next) }
    }
}

impl core::fmt::Display for ControlMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    Idle,
    Held,
}

/// Edge-triggered mode selector.
#[derive(Debug, Clone)]
pub struct ModeSelector {
    state: DebounceState,
    mode: ControlMode,
    count: u8,
}

impl ModeSelector {
    /// `count` is the number of profiles; `initial` falls back to the
    /// first mode if out of range.
    pub fn new(initial: u8, count: u8) -> Self {
        let count = count.max(1);
        Self {
            state: DebounceState::Idle,
            mode: ControlMode::new(initial, count).unwrap_or(ControlMode::FIRST),
            count,
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Whether the trigger is currently considered held.
    pub fn is_held(&self) -> bool {
        self.state == DebounceState::Held
    }

    /// Feed one trigger sample. Returns the new mode on a rising edge.
    pub fn poll(&mut self, level: bool) -> Option<ControlMode> {
        match (self.state, level) {
            (DebounceState::Idle, true) => {
                self.state = DebounceState::Held;
                let from = self.mode;
                self.mode = from.next(self.count);
                debug!("mode selector: {} -> {}", from, self.mode);
                Some(self.mode)
            }
            (DebounceState::Held, true) => None,
            (_, false) => {
                self.state = DebounceState::Idle;
                None
            }
        }
    }
}
