//! The state capability set.

/// A single behavior a state machine can run.
///
/// All hooks default to no-ops; concrete states override the subset they
/// need. Hooks receive the owning entity's context `C` mutably, so a state
/// can read and write entity data without aliasing the machine that owns
/// it. States carry no machine-level data themselves -- anything that must
/// outlive a transition belongs in `C`.
pub trait State<C> {
    /// Runs when the machine switches into this state, after the previous
    /// state's [`exit`](State::exit).
    ///
    /// Returning `Some(next)` redirects: the machine immediately
    /// transitions again into `next`, so a state can veto or reroute its
    /// own activation.
    fn enter(&mut self, ctx: &mut C) -> Option<Box<dyn State<C>>> {
        let _ = ctx;
        None
    }

    /// Runs once per frame tick.
    fn update(&mut self, ctx: &mut C) {
        let _ = ctx;
    }

    /// Runs once per frame, after every `update` of that frame.
    fn late_update(&mut self, ctx: &mut C) {
        let _ = ctx;
    }

    /// Runs once per fixed-timestep tick.
    fn fixed_update(&mut self, ctx: &mut C) {
        let _ = ctx;
    }

    /// Runs when the machine switches away, just before the next state's
    /// [`enter`](State::enter).
    fn exit(&mut self, ctx: &mut C) {
        let _ = ctx;
    }

    /// Diagnostic label shown in history listings.
    fn name(&self) -> &str {
        "state"
    }
}

/// The no-op state a fresh machine starts in, so exit/enter ordering is
/// well-defined on the very first transition.
#[derive(Debug, Default)]
pub struct IdleState;

impl<C> State<C> for IdleState {
    fn name(&self) -> &str {
        "idle"
    }
}
