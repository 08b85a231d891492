use actix_web::{web, HttpResponse};
use crate::errors::AppError;
use crate::models::department::{Department, DepartmentInfo};
use crate::store::AppState;

pub async fn get_departments() -> HttpResponse {
    let departments: Vec<DepartmentInfo> = Department::ALL.into_iter().map(DepartmentInfo::from).collect();
    HttpResponse::Ok().json(departments)
}

/// Departments and roles actually present, for the filter panel.
pub async fn get_filter_options(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let options = state.directory()?.filter_options();
    Ok(HttpResponse::Ok().json(options))
}
