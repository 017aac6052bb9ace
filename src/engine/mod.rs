//! The core computations: deltas, window selection, breakdowns, ranking.
//!
//! Every function here is pure and synchronous over immutable borrowed
//! inputs — safe to call from any thread, trivial to memoize by
//! (snapshot-id set, user id).

mod breakdown;
mod delta;
mod rank;
mod window;

pub use breakdown::*;
pub use delta::*;
pub use rank::*;
pub use window::*;
