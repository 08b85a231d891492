pub mod analytics;
pub mod department;
pub mod employee;
pub mod export;
pub mod selection;
pub mod theme;

use actix_web::web;
use serde::Deserialize;
use crate::directory::View;
use crate::errors::AppError;
use crate::models::filter::{FilterCriteria, ItemsPerPage, SortOption};

/// Query string shared by every endpoint that reads the filtered directory.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryQuery {
    search: Option<String>,
    first_name: Option<String>,
    department: Option<String>,
    role: Option<String>,
    date_of_joining: Option<String>,
    sort_by: Option<String>,
    page: Option<usize>,
    items_per_page: Option<usize>,
}

impl DirectoryQuery {
    pub fn into_view(self) -> Result<View, AppError> {
        let items_per_page = match self.items_per_page {
            Some(count) => ItemsPerPage::from_count(count).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "itemsPerPage must be one of {:?}",
                    ItemsPerPage::CHOICES
                ))
            })?,
            None => ItemsPerPage::default(),
        };
        let sort = match self.sort_by.as_deref() {
            Some(name) => SortOption::parse(name),
            None => Some(SortOption::default()),
        };

        Ok(View {
            search: self.search.unwrap_or_default(),
            criteria: FilterCriteria {
                first_name: self.first_name,
                department: self.department,
                role: self.role,
                date_of_joining: self.date_of_joining,
            },
            sort,
            page: self.page.unwrap_or(1),
            items_per_page,
        })
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/v1/employee")
            .route(web::get().to(employee::get_employees))
            .route(web::post().to(employee::create_employee))
            .route(web::delete().to(employee::bulk_delete_employees)),
    )
    .service(
        web::resource("/v1/employee/{id}")
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    )
    .service(
        web::resource("/v1/selection")
            .route(web::get().to(selection::get_selection)),
    )
    .service(
        web::resource("/v1/selection/page")
            .route(web::post().to(selection::toggle_page_selection)),
    )
    .service(
        web::resource("/v1/selection/{id}")
            .route(web::post().to(selection::toggle_selection)),
    )
    .service(
        web::resource("/v1/department")
            .route(web::get().to(department::get_departments)),
    )
    .service(
        web::resource("/v1/filter-options")
            .route(web::get().to(department::get_filter_options)),
    )
    .service(
        web::resource("/v1/analytics")
            .route(web::get().to(analytics::get_analytics)),
    )
    .service(
        web::resource("/v1/export")
            .route(web::get().to(export::export_employees)),
    )
    .service(
        web::resource("/v1/theme")
            .route(web::get().to(theme::get_theme))
            .route(web::put().to(theme::set_theme)),
    )
    .service(
        web::resource("/v1/theme/toggle")
            .route(web::post().to(theme::toggle_theme)),
    );
}

#[cfg(test)]
pub mod testing {
    use std::path::Path;
    use actix_web::web;
    use crate::directory::Directory;
    use crate::models::theme::Theme;
    use crate::store::seed::seed_employees;
    use crate::store::theme::ThemeStore;
    use crate::store::AppState;

    pub fn seeded_state(prefs_dir: &Path) -> web::Data<AppState> {
        web::Data::new(AppState::new(
            Directory::new(seed_employees()),
            ThemeStore::new(prefs_dir.join("theme.json"), Theme::Light),
            Theme::Light,
        ))
    }
}
