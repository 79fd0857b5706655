use columnist::logger::Logger;
use std::fs;

#[test]
fn test_config_based_logging_disabled() {
    // Test with logging disabled
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());
    assert!(!logger.has_file_writer());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_clones_share_log_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn test_config_based_logging_enabled() {
    // Environments without a data directory cannot enable file logging
    let Ok(logger) = Logger::from_config(true) else {
        return;
    };
    assert!(logger.is_enabled());
    assert!(logger.has_file_writer());

    logger.log("Test message with file".to_string());
    logger.flush();

    let log_path = Logger::get_log_file_path().unwrap();
    assert!(log_path.ends_with("columnist/columnist.log"));
    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("Test message with file"));
}
