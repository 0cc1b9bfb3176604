use serde::Deserialize;
use std::env;

// Top-level configuration container
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub ticketing: TicketingConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

// Transport-level auth settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub bearer_token: String,
}

// Ticketing settings, fixed at startup
#[derive(Debug, Clone, Deserialize)]
pub struct TicketingConfig {
    pub seat_count: u32,
}

pub const DEFAULT_SEAT_COUNT: u32 = 20;

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "train_ticketing=debug,tower_http=debug".to_string()),
            },
            auth: AuthConfig {
                bearer_token: env::var("AUTH_BEARER_TOKEN")
                    .unwrap_or_else(|_| "auth_token".to_string()),
            },
            ticketing: TicketingConfig {
                seat_count: env::var("SEAT_COUNT")
                    .unwrap_or_else(|_| DEFAULT_SEAT_COUNT.to_string())
                    .parse()
                    .expect("SEAT_COUNT must be a valid number"),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                rust_log: "train_ticketing=debug,tower_http=debug".to_string(),
            },
            auth: AuthConfig {
                bearer_token: "auth_token".to_string(),
            },
            ticketing: TicketingConfig {
                seat_count: DEFAULT_SEAT_COUNT,
            },
        }
    }
}
