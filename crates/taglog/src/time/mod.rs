//! Time subsystem.
//!
//! Provides phase timing without coupling to any particular clock source.
//! Intended usage:
//! - one `SplitTimer` per measured operation
//! - call `add_split()` at each phase boundary, then render the report

mod clock;
mod split_timer;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use split_timer::{Split, SplitTimer};
