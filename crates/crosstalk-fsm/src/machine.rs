//! The state machine: one active state plus a bounded history.

use std::fmt;

use crate::state::{IdleState, State};

/// Number of displaced states retained for diagnostics. Oldest entries are
/// discarded first once the bound is exceeded.
const MAX_HISTORY: usize = 3;

/// Owns the current state and forwards ticks to it.
///
/// A fresh machine starts with the no-op [`IdleState`] active, so the
/// exit-then-enter sequence is well-defined on the very first
/// [`StateMachine::set_state`]. Transitions are explicit and unvalidated:
/// any state may be set from any other state.
pub struct StateMachine<C> {
    current: Box<dyn State<C>>,
    /// Previously active states, oldest first. Diagnostics only.
    history: Vec<Box<dyn State<C>>>,
}

impl<C> StateMachine<C> {
    /// Create a machine with the idle state already active.
    pub fn new() -> Self {
        Self {
            current: Box::new(IdleState),
            history: Vec::new(),
        }
    }

    /// Switch to `new_state`.
    ///
    /// In order: the outgoing state's `exit` runs, the outgoing state is
    /// pushed onto the history (trimming the oldest entries beyond the
    /// bound), the incoming state becomes current, and its `enter` runs.
    /// An `enter` that returns a redirect re-enters this method with the
    /// redirect target, so the vetoing state itself lands in the history.
    pub fn set_state(&mut self, new_state: Box<dyn State<C>>, ctx: &mut C) {
        self.current.exit(ctx);

        let outgoing = std::mem::replace(&mut self.current, new_state);
        self.history.push(outgoing);
        let excess = self.history.len().saturating_sub(MAX_HISTORY);
        if excess > 0 {
            self.history.drain(..excess);
        }

        if let Some(redirect) = self.current.enter(ctx) {
            self.set_state(redirect, ctx);
        }
    }

    /// Forward one frame tick to the current state.
    pub fn update(&mut self, ctx: &mut C) {
        self.current.update(ctx);
    }

    /// Forward one late tick to the current state.
    pub fn late_update(&mut self, ctx: &mut C) {
        self.current.late_update(ctx);
    }

    /// Forward one fixed-timestep tick to the current state.
    pub fn fixed_update(&mut self, ctx: &mut C) {
        self.current.fixed_update(ctx);
    }

    /// The currently active state.
    pub fn current(&self) -> &dyn State<C> {
        self.current.as_ref()
    }

    /// Previously active states, oldest first. At most [`MAX_HISTORY`]
    /// entries are retained.
    pub fn history(&self) -> &[Box<dyn State<C>>] {
        &self.history
    }
}

impl<C> Default for StateMachine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for StateMachine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let history: Vec<&str> = self.history.iter().map(|state| state.name()).collect();
        f.debug_struct("StateMachine")
            .field("current", &self.current.name())
            .field("history", &history)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
