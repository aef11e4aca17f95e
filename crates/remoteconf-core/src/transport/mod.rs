//! Fetch transport seam
//!
//! The actual remote fetch (HTTP, retry, auth) lives in the wrapped platform
//! SDK. This core depends only on the [`ConfigTransport`] result contract;
//! tests drive the controller through [`MockTransport`].

mod mock;
mod traits;

pub use mock::{MockMode, MockTransport};
pub use traits::ConfigTransport;
