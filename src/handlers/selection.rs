use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::errors::AppError;
use crate::handlers::DirectoryQuery;
use crate::store::AppState;

pub async fn get_selection(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let selected = state.directory()?.selected();
    Ok(HttpResponse::Ok().json(json!({ "selected": selected })))
}

pub async fn toggle_selection(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let mut directory = state.directory()?;
    let id = id.into_inner();
    let is_selected = directory.toggle_selection(id)?;
    Ok(HttpResponse::Ok().json(json!({
        "id": id,
        "isSelected": is_selected,
        "selected": directory.selected(),
    })))
}

/// Select-all / deselect-all for the page described by the query string.
pub async fn toggle_page_selection(
    state: web::Data<AppState>,
    query: web::Query<DirectoryQuery>,
) -> Result<HttpResponse, AppError> {
    let view = query.into_inner().into_view()?;
    let selected = state.directory()?.toggle_select_page(&view);
    Ok(HttpResponse::Ok().json(json!({ "selected": selected })))
}
