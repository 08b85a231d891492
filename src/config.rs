use std::env;
use std::path::PathBuf;
use crate::models::theme::Theme;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_THEME_FILE: &str = "theme.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub theme_file: PathBuf,
    /// Stand-in for the OS color-scheme preference.
    pub prefers_color_scheme: Theme,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let theme_file = env::var("THEME_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_THEME_FILE));
        let prefers_color_scheme = match env::var("PREFERS_COLOR_SCHEME") {
            Ok(value) => Theme::parse(&value).unwrap_or_else(|| {
                log::warn!("PREFERS_COLOR_SCHEME={} is not dark/light, using light", value);
                Theme::Light
            }),
            Err(_) => Theme::Light,
        };

        Config {
            bind_address,
            theme_file,
            prefers_color_scheme,
        }
    }
}
