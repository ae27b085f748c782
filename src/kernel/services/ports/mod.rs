//! Service ports: traits + data contracts.

pub mod compiler;
pub mod settings;

pub use compiler::{CompileOutput, Dependency, DependencyResolver, SourceCompiler};
pub use settings::{CompilerSettings, Geometry, Settings, Size, MAX_RECENT_FILES};
