pub mod seed;
pub mod theme;

use std::sync::{Mutex, MutexGuard};
use crate::config::Config;
use crate::directory::Directory;
use crate::errors::AppError;
use crate::models::theme::Theme;
use self::theme::ThemeStore;

pub struct AppState {
    directory: Mutex<Directory>,
    theme: tokio::sync::Mutex<Theme>,
    theme_store: ThemeStore,
}

impl AppState {
    pub fn new(directory: Directory, theme_store: ThemeStore, theme: Theme) -> Self {
        AppState {
            directory: Mutex::new(directory),
            theme: tokio::sync::Mutex::new(theme),
            theme_store,
        }
    }

    pub async fn theme(&self) -> Theme {
        *self.theme.lock().await
    }

    /// Applies `change` and persists the result while holding the theme lock,
    /// so concurrent updates never interleave their read and write.
    pub async fn update_theme<F>(&self, change: F) -> Result<Theme, AppError>
    where
        F: FnOnce(Theme) -> Theme,
    {
        let mut current = self.theme.lock().await;
        let next = change(*current);
        self.theme_store.save(next).await?;
        *current = next;
        Ok(next)
    }

    pub fn directory(&self) -> Result<MutexGuard<'_, Directory>, AppError> {
        self.directory.lock().map_err(|_| {
            log::error!("Directory lock poisoned");
            AppError::InternalServerError("Directory unavailable".to_string())
        })
    }
}

pub async fn create_state(config: &Config) -> Result<AppState, AppError> {
    let directory = Directory::new(seed::seed_employees());
    log::info!("Seeded directory with {} employees", directory.employees().len());
    let theme_store = ThemeStore::new(&config.theme_file, config.prefers_color_scheme);
    let theme = theme_store.load().await?;
    log::info!("Loaded theme preference {:?}", theme);
    Ok(AppState::new(directory, theme_store, theme))
}
