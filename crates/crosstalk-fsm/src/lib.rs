//! Crosstalk FSM -- a minimal state-machine runtime for per-frame entity
//! behavior.
//!
//! An [`entity::Entity`] owns some context `C` (the game-facing data) and
//! exactly one [`machine::StateMachine`], which owns exactly one active
//! [`state::State`] plus a short history of displaced states kept for
//! diagnostics. An external scheduler drives the entity once per frame via
//! `update`, `late_update`, and `fixed_update`; each tick is forwarded
//! verbatim to the current state. Transitions happen only through explicit
//! `set_state` calls -- the machine never transitions on its own, and it
//! enforces no transition table.
//!
//! ```rust,ignore
//! struct Monster { health: u32 }
//!
//! struct Prowling;
//! impl State<Monster> for Prowling {
//!     fn update(&mut self, monster: &mut Monster) { /* per-frame AI */ }
//! }
//!
//! let mut entity = Entity::new(Monster { health: 40 });
//! entity.set_state(Box::new(Prowling));
//! entity.update();       // forwards to Prowling::update
//! ```

pub mod entity;
pub mod machine;
pub mod state;
