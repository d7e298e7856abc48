//! Calculator core for gesturecalc.
//!
//! - `evaluate`: constrained arithmetic over integer literals and `+ - * /`
//! - `Calculator`: expression/result state machine with input latency timing
//!
//! No I/O happens here; callers supply the current instant with every event.

mod error;
mod expr;
mod state;

pub use error::{CalcError, CalcResult};
pub use expr::{evaluate, Number};
pub use state::{Calculator, Transition, ERROR_MARKER, RESULT_PLACEHOLDER};
