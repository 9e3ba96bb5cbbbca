//! End-to-end use of the runtime wrappers through the public API.

use std::sync::Arc;

use tempfile::tempdir;
use toolbelt_core::{Enumeration, Environment, FileMode, LogLevel};
use toolbelt_runtime::config::{APP_ENV, APP_WORKDIR, LOG_LEVEL};
use toolbelt_runtime::{
    start, DirectoryEntity, Logger, RuntimeConfig, RuntimeError, SystemProcess,
};

// The only test in this binary that touches the process working directory
// and the global subscriber.
#[test]
fn start_applies_configuration() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().canonicalize().expect("canonical tempdir");
    let target_str = target.to_string_lossy().to_string();

    let config = RuntimeConfig::from_lookup(|key| match key {
        k if k == APP_ENV => Some("test".to_string()),
        k if k == LOG_LEVEL => Some("error".to_string()),
        k if k == APP_WORKDIR => Some(target_str.clone()),
        _ => None,
    })
    .expect("valid configuration");
    assert_eq!(config.environment, Environment::Test);
    assert_eq!(config.logging.level, LogLevel::Error);

    let original = std::env::current_dir().expect("cwd");
    let mut workdir = start(&config, Arc::new(SystemProcess::new())).expect("runtime starts");
    assert_eq!(workdir.current().expect("cwd"), target);
    assert_eq!(workdir.depth(), 1);

    Logger::new("runtime_surface").error("logged through the installed subscriber");

    // a second installation is refused
    assert!(matches!(
        toolbelt_runtime::init_logging(&config.logging),
        Err(RuntimeError::Logging(_))
    ));

    assert_eq!(workdir.pop().expect("pop"), Some(original.clone()));
    assert_eq!(std::env::current_dir().expect("cwd"), original);
}

#[test]
fn file_modes_parsed_from_strings_drive_file_access() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let root = DirectoryEntity::new(dir.path());
    let file = root.file("journal.log");

    let write = FileMode::from_value("write")?;
    let append = "a".parse::<FileMode>()?;

    file.write("one\n", write)?;
    file.write("two\n", append)?;
    assert_eq!(file.read_to_string()?, "one\ntwo\n");

    let err = FileMode::from_value("rw").unwrap_err();
    assert_eq!(err.to_string(), "FileMode has no member for value 'rw'");
    Ok(())
}
