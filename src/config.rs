use crate::error::AppError;
use std::env;

const DEFAULT_PORT: u16 = 3000;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    /// Reads the configuration once at startup. Request handlers never touch
    /// the environment; tests construct `Config` directly.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| AppError::StoreUnconfigured)?;
        let port = parse_port(env::var("PORT").ok())?;

        Ok(Self { database_url, port })
    }
}

fn parse_port(value: Option<String>) -> Result<u16, AppError> {
    match value {
        Some(raw) => raw.parse().map_err(|_| AppError::InvalidPort),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_port_falls_back_to_default() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn numeric_port_parses() {
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
    }

    #[test]
    fn non_numeric_port_is_an_error() {
        assert!(matches!(
            parse_port(Some("not-a-port".to_string())),
            Err(AppError::InvalidPort)
        ));
    }
}
