// app/state.rs - Counter State and Transition Rule
//
// The count is the only piece of state the counter owns. Everything the
// view shows (numeral, button enabled flag, congratulations) is derived
// from it; there are no separate flags to keep in sync.

use crate::constants::MAX_COUNT;

/// Where the counter is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Count is below the cap, activations are accepted
    Active,
    /// Count has reached the cap; terminal for the session
    Capped,
}

/// Outcome of a single activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Count went up and is still below the cap
    Incremented(u8),
    /// This activation moved the count onto the cap
    ReachedCap,
    /// Count was already capped; nothing changed
    Ignored,
}

/// Bounded, monotonically non-decreasing count in `[0, MAX_COUNT]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    count: u8,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn phase(&self) -> Phase {
        if self.count >= MAX_COUNT {
            Phase::Capped
        } else {
            Phase::Active
        }
    }

    /// Whether the increment control accepts input
    pub fn is_enabled(&self) -> bool {
        self.phase() == Phase::Active
    }

    /// Whether the congratulatory message is shown
    pub fn shows_congratulations(&self) -> bool {
        self.phase() == Phase::Capped
    }

    /// Apply one activation. This is the only way the count changes.
    ///
    /// Past the cap the call is a no-op; the view disables the control
    /// before that point, so `Ignored` only shows up if that guard is bypassed.
    pub fn activate(&mut self) -> Transition {
        if self.count >= MAX_COUNT {
            return Transition::Ignored;
        }

        self.count += 1;

        if self.count == MAX_COUNT {
            Transition::ReachedCap
        } else {
            Transition::Incremented(self.count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_active_at_zero() {
        let state = CounterState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.phase(), Phase::Active);
        assert!(state.is_enabled());
        assert!(!state.shows_congratulations());
    }

    #[test]
    fn count_is_min_of_activations_and_cap() {
        for activations in 0..25u32 {
            let mut state = CounterState::new();
            for _ in 0..activations {
                state.activate();
            }
            assert_eq!(u32::from(state.count()), activations.min(u32::from(MAX_COUNT)));
        }
    }

    #[test]
    fn only_the_ninth_to_tenth_step_reaches_cap() {
        let mut state = CounterState::new();
        for expected in 1..MAX_COUNT {
            assert_eq!(state.activate(), Transition::Incremented(expected));
        }
        assert_eq!(state.activate(), Transition::ReachedCap);
        assert_eq!(state.activate(), Transition::Ignored);
        assert_eq!(state.activate(), Transition::Ignored);
    }

    #[test]
    fn capped_is_terminal() {
        let mut state = CounterState::new();
        while state.activate() != Transition::ReachedCap {}

        assert_eq!(state.phase(), Phase::Capped);
        assert!(!state.is_enabled());
        assert!(state.shows_congratulations());

        state.activate();
        assert_eq!(state.count(), MAX_COUNT);
        assert_eq!(state.phase(), Phase::Capped);
    }

    #[test]
    fn derived_flags_track_count_at_every_step() {
        let mut state = CounterState::new();
        for _ in 0..=MAX_COUNT {
            assert_eq!(state.is_enabled(), state.count() < MAX_COUNT);
            assert_eq!(state.shows_congratulations(), state.count() == MAX_COUNT);
            state.activate();
        }
    }
}
