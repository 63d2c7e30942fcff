use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();
static DEFAULTS: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Overrides `[api] base_url` when set.
pub const API_URL_ENV: &str = "STUDENT_CONSOLE_API_URL";

/// Read `config.toml` and the environment, and store the result in the
/// global `OnceLock`. Only the first call has effect.
///
/// A missing or unparseable file leaves every setting at its default.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        dotenvy::dotenv().ok();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse(&contents),
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "config file not found, using defaults");
                AppConfig::default()
            }
        };
        apply_api_url_override(&mut config, std::env::var(API_URL_ENV).ok());
        tracing::info!(base_url = %config.api.base_url, page_size = config.console.page_size, "configuration loaded");
        config
    })
}

/// The loaded configuration, or defaults if `load_config()` has not run.
pub fn config() -> &'static AppConfig {
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULTS.get_or_init(AppConfig::default))
}

fn parse(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

fn apply_api_url_override(config: &mut AppConfig, value: Option<String>) {
    if let Some(url) = value.map(|v| normalize_base_url(&v)).filter(|v| !v.is_empty()) {
        config.api.base_url = url;
    }
}

/// Trim whitespace and trailing slashes so paths can be appended with `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
