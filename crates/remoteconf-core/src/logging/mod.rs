//! Runtime-agnostic logging seam
//!
//! Host environments (native bridges, CLIs, tests) inject their own sink;
//! the core never writes to stdout on its own.

mod console;
mod noop;
mod traits;

pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
pub use traits::{Logger, SharedLogger};
