//! The core `System` trait: one simulation-plus-draw step per call.
//!
//! The trait is object-safe so the runner and the CLI can hold a
//! `Box<dyn System>` without caring which simulation is behind it.

use crate::error::FieldError;
use crate::surface::Surface;
use serde_json::Value;

/// A steppable, drawable simulation.
///
/// Each call to [`step`](System::step) draws the current state onto the
/// surface and advances to the next state. Systems own their state; nothing
/// is shared between ticks except what the system carries forward itself.
///
/// This trait is **object-safe**: use `Box<dyn System>` or `&mut dyn System`.
pub trait System {
    /// Draws the current state and advances the simulation by one tick.
    fn step(&mut self, surface: &mut dyn Surface) -> Result<(), FieldError>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing available parameters, their types, and defaults.
    fn param_schema(&self) -> Value;

    /// Rolling per-phase timing report.
    ///
    /// Returns an empty object by default. Systems that time their phases
    /// override this; the runner hands the report to its callback each tick.
    fn report(&self) -> Value {
        Value::Object(serde_json::Map::new())
    }
}
