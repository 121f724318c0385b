mod cancel;
mod multi_source;
mod state;

pub use cancel::Cancellation;
pub use multi_source::{Solver, solve};
