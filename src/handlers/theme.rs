use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use crate::errors::AppError;
use crate::models::theme::Theme;
use crate::store::AppState;

#[derive(Deserialize, Serialize)]
pub struct ThemePreference {
    theme: Theme,
}

pub async fn get_theme(state: web::Data<AppState>) -> HttpResponse {
    let theme = state.theme().await;
    HttpResponse::Ok().json(ThemePreference { theme })
}

pub async fn set_theme(
    state: web::Data<AppState>,
    preference: web::Json<ThemePreference>,
) -> Result<HttpResponse, AppError> {
    let requested = preference.into_inner().theme;
    let theme = state.update_theme(|_| requested).await?;
    Ok(HttpResponse::Ok().json(ThemePreference { theme }))
}

pub async fn toggle_theme(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let theme = state.update_theme(Theme::toggled).await?;
    Ok(HttpResponse::Ok().json(ThemePreference { theme }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use tempfile::tempdir;
    use crate::handlers::{configure, testing::seeded_state};

    #[actix_web::test]
    async fn theme_defaults_then_persists() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        let req = test::TestRequest::get().uri("/v1/theme").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["theme"], "light");

        let req = test::TestRequest::post().uri("/v1/theme/toggle").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["theme"], "dark");

        let stored = std::fs::read_to_string(dir.path().join("theme.json")).unwrap();
        assert!(stored.contains("\"dark\""));

        let req = test::TestRequest::put()
            .uri("/v1/theme")
            .set_json(json!({ "theme": "light" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["theme"], "light");
    }

    #[actix_web::test]
    async fn concurrent_toggles_are_not_lost() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        for _ in 0..20 {
            let first = test::TestRequest::post().uri("/v1/theme/toggle").to_request();
            let second = test::TestRequest::post().uri("/v1/theme/toggle").to_request();
            let (a, b) = tokio::join!(test::call_service(&app, first), test::call_service(&app, second));
            assert_eq!(a.status(), StatusCode::OK);
            assert_eq!(b.status(), StatusCode::OK);

            let req = test::TestRequest::get().uri("/v1/theme").to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["theme"], "light");
        }

        let stored: Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("theme.json")).unwrap()).unwrap();
        assert_eq!(stored["theme"], "light");
    }

    #[actix_web::test]
    async fn startup_reads_saved_preference() {
        let dir = tempdir().unwrap();
        let theme_file = dir.path().join("theme.json");
        std::fs::write(&theme_file, r#"{"theme": "dark"}"#).unwrap();
        let config = crate::config::Config {
            bind_address: "127.0.0.1:0".to_string(),
            theme_file: theme_file.clone(),
            prefers_color_scheme: crate::models::theme::Theme::Light,
        };
        let state = actix_web::web::Data::new(crate::store::create_state(&config).await.unwrap());
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        // later edits to the file are not re-read
        std::fs::write(&theme_file, r#"{"theme": "light"}"#).unwrap();
        let req = test::TestRequest::get().uri("/v1/theme").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["theme"], "dark");
    }

    #[actix_web::test]
    async fn rejects_unknown_theme() {
        let dir = tempdir().unwrap();
        let app = test::init_service(App::new().app_data(seeded_state(dir.path())).configure(configure)).await;

        let req = test::TestRequest::put()
            .uri("/v1/theme")
            .set_json(json!({ "theme": "sepia" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
