//! # Toolbelt Runtime
//!
//! The side-effecting collaborators around `toolbelt-core`:
//!
//! - [`logging`]: subscriber installation and a scoped [`Logger`]
//! - [`process`]: working-directory state behind [`ProcessPort`]
//! - [`files`]: file and directory entities opened through [`FileMode`](toolbelt_core::FileMode)
//! - [`config`]: environment-driven [`RuntimeConfig`]

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod files;
pub mod logging;
pub mod ports;
pub mod process;

pub use config::RuntimeConfig;
pub use error::RuntimeError;
pub use files::{DirectoryEntity, FileEntity};
pub use logging::{init_logging, LogFormat, Logger, LoggingConfig};
pub use ports::ProcessPort;
pub use process::{SystemProcess, WorkingDirectory};

/// Applies a loaded configuration: installs logging and changes into the
/// configured working directory.
///
/// Returns the working-directory handle so the caller can keep navigating.
pub fn start(
    config: &RuntimeConfig,
    process: Arc<dyn ProcessPort>,
) -> Result<WorkingDirectory, RuntimeError> {
    init_logging(&config.logging)?;
    tracing::info!(environment = %config.environment, "Starting toolbelt runtime");

    let mut workdir = WorkingDirectory::new(process);
    if let Some(dir) = &config.workdir {
        workdir.push(dir)?;
    }
    Ok(workdir)
}
