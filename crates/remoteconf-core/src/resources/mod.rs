//! Named default-value resources
//!
//! A resource is a key/value mapping of plain primitives, addressed by name.
//! `setDefaultsFromResource` goes through the [`ResourceLoader`] seam so the
//! host can supply bundled assets, while tests use the in-memory loader.

mod file;
mod memory;
mod traits;

pub use file::FileResourceLoader;
pub use memory::MemoryResourceLoader;
pub use traits::ResourceLoader;
