//! # Toolbelt Enumerations
//!
//! The closed-set enumerations shared by the runtime wrappers. Each one is a
//! consumer of [`crate::enumeration`]: it declares its codes, its supported
//! list and optionally an alias table, and gets lookups for free.

mod environment;
pub use environment::Environment;

mod log_level;
pub use log_level::LogLevel;

mod file_mode;
pub use file_mode::FileMode;
