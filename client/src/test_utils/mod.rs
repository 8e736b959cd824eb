//! Test utilities
//!
//! Manual mock implementations and test fixtures. Mocks are hand-rolled
//! rather than generated: the scripted-response and gating behavior the
//! pager and watcher tests need is easier to express directly.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
