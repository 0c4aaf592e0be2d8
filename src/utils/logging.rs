use tracing::{debug, error, info};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user_id: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_START: {} by {} - {}", command, user_id, d),
        None => info!("CMD_START: {} by {}", command, user_id),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user_id: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_SUCCESS: {} by {} - {}", command, user_id, d),
        None => info!("CMD_SUCCESS: {} by {}", command, user_id),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user_id: &str, error: &str) {
    error!("CMD_ERROR: {} by {} - {}", command, user_id, error);
}

/// Logs store operations with consistent format
pub fn log_store_operation(operation: &str, user_id: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("STORE_OP: {} for {} - {}", operation, user_id, d),
        None => debug!("STORE_OP: {} for {}", operation, user_id),
    }
}

/// Logs store errors with consistent format
pub fn log_store_error(operation: &str, user_id: &str, error: &str) {
    error!("STORE_ERROR: {} for {} failed: {}", operation, user_id, error);
}
