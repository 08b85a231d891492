use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;
use crate::errors::AppError;
use crate::handlers::DirectoryQuery;
use crate::models::employee::EmployeeDraft;
use crate::store::AppState;
use crate::utils::validation::{
    calendar_date, email_shape, image_reference, known_department, not_blank, validate_payload,
    DATE_FORMAT,
};

#[derive(Deserialize, Validate, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeForm {
    #[validate(custom = "not_blank")]
    first_name: String,
    #[validate(custom = "not_blank")]
    last_name: String,
    #[validate(custom = "email_shape")]
    email: String,
    #[validate(custom = "known_department")]
    department: String,
    #[validate(custom = "not_blank")]
    role: String,
    #[validate(custom = "calendar_date")]
    date_of_joining: String,
    #[validate(custom = "image_reference")]
    profile_picture: Option<String>,
}

impl EmployeeForm {
    fn into_draft(self) -> Result<EmployeeDraft, AppError> {
        validate_payload(&self)?;
        let date_of_joining = NaiveDate::parse_from_str(self.date_of_joining.trim(), DATE_FORMAT)
            .map_err(|_| AppError::BadRequest("Invalid date of joining".to_string()))?;

        Ok(EmployeeDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            department: self.department,
            role: self.role,
            date_of_joining,
            profile_picture: self
                .profile_picture
                .map(|pic| pic.trim().to_string())
                .filter(|pic| !pic.is_empty()),
        })
    }
}

pub async fn get_employees(
    state: web::Data<AppState>,
    query: web::Query<DirectoryQuery>,
) -> Result<HttpResponse, AppError> {
    let view = query.into_inner().into_view()?;
    let page = state.directory()?.page(&view);
    Ok(HttpResponse::Ok().json(page))
}

pub async fn create_employee(
    state: web::Data<AppState>,
    form: web::Json<EmployeeForm>,
) -> Result<HttpResponse, AppError> {
    let draft = form.into_inner().into_draft()?;
    let employee = state.directory()?.add(draft);
    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    form: web::Json<EmployeeForm>,
) -> Result<HttpResponse, AppError> {
    let draft = form.into_inner().into_draft()?;
    let employee = state.directory()?.edit(id.into_inner(), draft)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = state.directory()?.delete(id.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully",
        "id": removed.id,
    })))
}

pub async fn bulk_delete_employees(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let removed = state.directory()?.bulk_delete();
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Deleted {} employees", removed.len()),
        "deleted": removed,
    })))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use tempfile::tempdir;
    use crate::handlers::{configure, testing::seeded_state};

    fn valid_form() -> Value {
        serde_json::json!({
            "firstName": "Nora",
            "lastName": "Quinn",
            "email": "nora.quinn@company.com",
            "department": "Sales",
            "role": "Account Executive",
            "dateOfJoining": "2024-03-01",
            "profilePicture": ""
        })
    }

    #[actix_web::test]
    async fn lists_first_page_sorted_by_first_name() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        let req = test::TestRequest::get().uri("/v1/employee").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalItems"], 24);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["currentPage"], 1);
        assert_eq!(body["items"].as_array().unwrap().len(), 12);
        assert_eq!(body["items"][0]["firstName"], "Amanda");
        assert_eq!(body["pageNumbers"], serde_json::json!([1, 2]));
    }

    #[actix_web::test]
    async fn search_and_filter_through_query_string() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        let req = test::TestRequest::get().uri("/v1/employee?search=jane").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalItems"], 1);
        assert_eq!(body["items"][0]["lastName"], "Smith");

        let req = test::TestRequest::get()
            .uri("/v1/employee?department=Engineering&sortBy=dateOfJoining")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalItems"], 7);
        assert_eq!(body["items"][0]["id"], 21);

        let req = test::TestRequest::get().uri("/v1/employee?itemsPerPage=13").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn create_assigns_next_id() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        let req = test::TestRequest::post().uri("/v1/employee").set_json(valid_form()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], 25);
        assert!(body.get("profilePicture").is_none());
    }

    #[actix_web::test]
    async fn invalid_form_reports_each_field() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/v1/employee")
            .set_json(serde_json::json!({ "firstName": "  ", "email": "nora@company" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["fields"]["firstName"], "First name is required");
        assert_eq!(body["fields"]["lastName"], "Last name is required");
        assert_eq!(body["fields"]["email"], "Please enter a valid email address");
        assert_eq!(body["fields"]["department"], "Department is required");
        assert_eq!(body["fields"]["dateOfJoining"], "Date of joining is required");
        assert!(body["fields"].get("profilePicture").is_none());
    }

    #[actix_web::test]
    async fn update_keeps_id_and_missing_id_is_404() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        let req = test::TestRequest::put().uri("/v1/employee/2").set_json(valid_form()).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["id"], 2);
        assert_eq!(body["firstName"], "Nora");

        let req = test::TestRequest::put().uri("/v1/employee/99").set_json(valid_form()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn bulk_delete_clears_selection() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        for id in [3, 8, 20] {
            let req = test::TestRequest::post().uri(&format!("/v1/selection/{id}")).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::delete().uri("/v1/employee").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["deleted"], serde_json::json!([3, 8, 20]));

        let req = test::TestRequest::get().uri("/v1/employee?itemsPerPage=24").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalItems"], 21);
        assert_eq!(body["selected"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn delete_single_employee() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        let req = test::TestRequest::delete().uri("/v1/employee/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete().uri("/v1/employee/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
