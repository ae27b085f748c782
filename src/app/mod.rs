//! Application layer: the workbench that drives the kernel from a frontend.

#[cfg(feature = "tui")]
pub mod theme;
pub mod workbench;

pub use workbench::Workbench;
