use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use crate::directory::export::ExportFormat;
use crate::errors::AppError;
use crate::handlers::DirectoryQuery;
use crate::store::AppState;

#[derive(Deserialize)]
pub struct ExportParams {
    #[serde(default)]
    format: ExportFormat,
}

pub async fn export_employees(
    state: web::Data<AppState>,
    query: web::Query<DirectoryQuery>,
    params: web::Query<ExportParams>,
) -> Result<HttpResponse, AppError> {
    let view = query.into_inner().into_view()?;
    let matching = state.directory()?.matching(&view);
    let format = params.format;
    let body = format.render(&matching)?;
    log::info!("Exported {} employees as {}", matching.len(), format.file_name());

    Ok(HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(format.file_name().to_string())],
        })
        .body(body))
}
