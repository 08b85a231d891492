use std::path::PathBuf;
use serde_json::{Map, Value};
use crate::errors::AppError;
use crate::models::theme::Theme;

pub const THEME_KEY: &str = "theme";

/// Theme preference kept as `{"theme": "dark"}` in a small JSON file.
/// Read once at startup; callers serialise writes.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
    fallback: Theme,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>, fallback: Theme) -> Self {
        ThemeStore {
            path: path.into(),
            fallback,
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    async fn read_entries(&self) -> Result<Map<String, Value>, AppError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => {
                log::error!("Failed to read {}: {:?}", self.path.display(), err);
                return Err(AppError::InternalServerError("Failed to read theme preference".to_string()));
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => Ok(entries),
            _ => {
                log::warn!("Ignoring malformed preference file {}", self.path.display());
                Ok(Map::new())
            }
        }
    }

    /// The stored preference, or the system color scheme when nothing is stored.
    pub async fn load(&self) -> Result<Theme, AppError> {
        let entries = self.read_entries().await?;
        let stored = entries
            .get(THEME_KEY)
            .and_then(Value::as_str)
            .and_then(Theme::parse);
        Ok(stored.unwrap_or(self.fallback))
    }

    pub async fn save(&self, theme: Theme) -> Result<(), AppError> {
        let mut entries = self.read_entries().await?;
        entries.insert(THEME_KEY.to_string(), serde_json::to_value(theme).map_err(|err| {
            log::error!("Failed to encode theme: {:?}", err);
            AppError::InternalServerError("Failed to save theme preference".to_string())
        })?);
        let body = serde_json::to_string_pretty(&Value::Object(entries)).map_err(|err| {
            log::error!("Failed to encode theme: {:?}", err);
            AppError::InternalServerError("Failed to save theme preference".to_string())
        })?;
        // Write beside the target and rename so readers never see a partial file.
        let staging = self.staging_path();
        tokio::fs::write(&staging, body).await.map_err(|err| {
            log::error!("Failed to write {}: {:?}", staging.display(), err);
            AppError::InternalServerError("Failed to save theme preference".to_string())
        })?;
        tokio::fs::rename(&staging, &self.path).await.map_err(|err| {
            log::error!("Failed to replace {}: {:?}", self.path.display(), err);
            AppError::InternalServerError("Failed to save theme preference".to_string())
        })?;
        log::info!("Theme preference set to {:?}", theme);
        Ok(())
    }
}
