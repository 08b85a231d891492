use actix_web::{web, HttpResponse};
use crate::directory::analytics::analyze;
use crate::errors::AppError;
use crate::handlers::DirectoryQuery;
use crate::store::AppState;

/// Dashboard figures over the filtered set, ignoring pagination.
pub async fn get_analytics(
    state: web::Data<AppState>,
    query: web::Query<DirectoryQuery>,
) -> Result<HttpResponse, AppError> {
    let view = query.into_inner().into_view()?;
    let matching = state.directory()?.matching(&view);
    let today = chrono::Local::now().date_naive();
    Ok(HttpResponse::Ok().json(analyze(&matching, today)))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::Value;
    use tempfile::tempdir;
    use crate::handlers::{configure, testing::seeded_state};

    #[actix_web::test]
    async fn analytics_cover_filtered_set() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        let req = test::TestRequest::get().uri("/v1/analytics?itemsPerPage=12&page=2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalEmployees"], 24);
        assert_eq!(body["departmentCount"], 7);
        assert_eq!(body["topRoles"].as_array().unwrap().len(), 8);
        assert_eq!(body["joiningYears"][0]["year"], 2023);

        let req = test::TestRequest::get().uri("/v1/analytics?department=Sales").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalEmployees"], 2);
        assert_eq!(body["departments"][0]["percentage"], 100);
    }

    #[actix_web::test]
    async fn empty_selection_has_no_tenure() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        let req = test::TestRequest::get().uri("/v1/analytics?search=nobody").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalEmployees"], 0);
        assert!(body["averageTenureYears"].is_null());
    }
}
