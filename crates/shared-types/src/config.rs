use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the REST backend lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

/// Tunables of the console views.
///
/// Every field defaults to the behavior of the deployed console so that a
/// missing or partial `[console]` table changes nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsoleSettings {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: u32,
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
    #[serde(default = "default_verification_notice_ttl_ms")]
    pub verification_notice_ttl_ms: u64,
    #[serde(default = "default_verify_redirect_delay_ms")]
    pub verify_redirect_delay_ms: u64,
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

fn default_page_size() -> u32 {
    10
}

fn default_max_visible_pages() -> u32 {
    5
}

fn default_notice_ttl_ms() -> u64 {
    3000
}

fn default_verification_notice_ttl_ms() -> u64 {
    5000
}

fn default_verify_redirect_delay_ms() -> u64 {
    3000
}

fn default_min_password_len() -> usize {
    6
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_visible_pages: default_max_visible_pages(),
            notice_ttl_ms: default_notice_ttl_ms(),
            verification_notice_ttl_ms: default_verification_notice_ttl_ms(),
            verify_redirect_delay_ms: default_verify_redirect_delay_ms(),
            min_password_len: default_min_password_len(),
        }
    }
}

impl ConsoleSettings {
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }

    pub fn verification_notice_ttl(&self) -> Duration {
        Duration::from_millis(self.verification_notice_ttl_ms)
    }

    pub fn verify_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.verify_redirect_delay_ms)
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub console: ConsoleSettings,
}
