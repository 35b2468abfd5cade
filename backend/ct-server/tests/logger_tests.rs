//! Logger writes to a file when one is configured.
//! Kept in its own test binary: the global logger can only be set once.

use ct_config::LogLevel;
use ct_server::logger;

use std::str::FromStr;

#[test]
fn test_file_logger_writes_formatted_records() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("ct-server.log");

    logger::initialize(LogLevel::from_str("debug").unwrap(), Some(path.clone()), true).unwrap();
    log::warn!("contact store slow");
    log::logger().flush();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Logger initialized"));
    assert!(contents.contains("WARN] contact store slow"));
    assert!(!contents.contains("\u{1b}["));

    let second = logger::initialize(LogLevel::from_str("info").unwrap(), None, false);
    assert!(second.is_err());
}
