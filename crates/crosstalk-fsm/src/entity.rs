//! Entity: owns a context and the machine that drives it.

use crate::machine::StateMachine;
use crate::state::State;

/// A game entity: user context `C` plus exactly one [`StateMachine`],
/// created at entity construction.
///
/// The external frame scheduler calls [`Entity::update`],
/// [`Entity::late_update`], and [`Entity::fixed_update`] once per tick;
/// the entity forwards each tick to its machine together with its own
/// context.
#[derive(Debug)]
pub struct Entity<C> {
    ctx: C,
    machine: StateMachine<C>,
}

impl<C> Entity<C> {
    /// Create an entity around `ctx` with a fresh machine (idle state
    /// active).
    pub fn new(ctx: C) -> Self {
        Self {
            ctx,
            machine: StateMachine::new(),
        }
    }

    /// Switch the machine to a new state.
    pub fn set_state(&mut self, state: Box<dyn State<C>>) {
        self.machine.set_state(state, &mut self.ctx);
    }

    /// Forward one frame tick.
    pub fn update(&mut self) {
        self.machine.update(&mut self.ctx);
    }

    /// Forward one late tick.
    pub fn late_update(&mut self) {
        self.machine.late_update(&mut self.ctx);
    }

    /// Forward one fixed-timestep tick.
    pub fn fixed_update(&mut self) {
        self.machine.fixed_update(&mut self.ctx);
    }

    /// The entity's context.
    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// The entity's context, mutably.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    /// The owned state machine, for diagnostics.
    pub fn machine(&self) -> &StateMachine<C> {
        &self.machine
    }

    /// Diagnostic label of the currently active state.
    pub fn current_state_name(&self) -> &str {
        self.machine.current().name()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
