use crate::error::ConfigError;

/// Default local time for the daily forecast check.
const DEFAULT_CHECK_HOUR: u32 = 7;
const DEFAULT_CHECK_MINUTE: u32 = 1;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Runtime configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// AccuWeather API key
    pub weather_api_key: String,

    /// AccuWeather location key for the operator's home
    pub weather_location_key: String,

    /// ClickUp API key, forwarded verbatim as the Authorization header
    pub clickup_api_key: String,

    /// ClickUp list the reminder task is created in
    pub clickup_list_id: String,

    /// Local hour of the daily forecast check (0-23)
    pub check_hour: u32,

    /// Local minute of the daily forecast check (0-59)
    pub check_minute: u32,

    /// Address the status page binds to
    pub bind_address: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Credentials are not validated here: a missing key loads as an empty
    /// string (with a warning) and fails at request time instead. The
    /// check time must be a valid wall-clock time, though, since the
    /// scheduler arithmetic depends on it.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            weather_api_key: env_or_empty("AW_API_KEY"),
            weather_location_key: env_or_empty("AW_LOCATION_KEY"),
            clickup_api_key: env_or_empty("CLICKUP_API_KEY"),
            clickup_list_id: env_or_empty("CLICKUP_LIST_ID"),
            check_hour: numeric_env("CHECK_HOUR", DEFAULT_CHECK_HOUR, 23)?,
            check_minute: numeric_env("CHECK_MINUTE", DEFAULT_CHECK_MINUTE, 59)?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn env_or_empty(name: &str) -> String {
    match std::env::var(name) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("{name} is not set; requests depending on it will fail");
            String::new()
        }
    }
}

fn numeric_env(name: &str, default: u32, max: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => parse_bounded(name, &raw, max),
        Err(_) => Ok(default),
    }
}

fn parse_bounded(name: &str, raw: &str, max: u32) -> Result<u32, ConfigError> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{name} must be a number, got {raw:?}")))?;

    if value > max {
        return Err(ConfigError::Invalid(format!(
            "{name} must be at most {max}, got {value}"
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_check_time() {
        assert_eq!(parse_bounded("CHECK_HOUR", "7", 23).unwrap(), 7);
        assert_eq!(parse_bounded("CHECK_HOUR", " 23 ", 23).unwrap(), 23);
        assert_eq!(parse_bounded("CHECK_MINUTE", "0", 59).unwrap(), 0);
    }

    #[test]
    fn rejects_out_of_range_check_time() {
        let err = parse_bounded("CHECK_HOUR", "24", 23).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("CHECK_HOUR"));
    }

    #[test]
    fn rejects_non_numeric_check_time() {
        let err = parse_bounded("CHECK_MINUTE", "noonish", 59).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn defaults_apply_when_unset() {
        // CHECK_* are not set in the test environment
        let config = Config::from_env().unwrap();
        assert_eq!(config.check_hour, DEFAULT_CHECK_HOUR);
        assert_eq!(config.check_minute, DEFAULT_CHECK_MINUTE);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
    }
}
