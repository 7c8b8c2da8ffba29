//! # Config Commands
//!
//! Commands for retrieving host configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current host configuration.
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OutputFormat;

    #[test]
    fn test_get_config_returns_copy() {
        let config = ConfigState {
            output: OutputFormat::Json,
            show_expression: true,
            history_limit: 3,
        };
        assert_eq!(get_config(&config), config);
    }
}
