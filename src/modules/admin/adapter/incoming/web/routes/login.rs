use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    admin::{
        adapter::incoming::web::{
            contact_notice, extractors::AdminClient, render_admin_page, AdminTab, DashboardSource,
        },
        application::{domain::Credentials, ports::incoming::AdminSessionError},
    },
    AppState,
};

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[post("/admin/login")]
pub async fn admin_login_handler(
    client: AdminClient,
    form: web::Form<LoginForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.deployment_mode.is_static() {
        return contact_notice(&data);
    }

    let form = form.into_inner();
    let error = match Credentials::new(form.username, form.password) {
        Ok(credentials) => match data.admin_session.login(client.session(), credentials).await {
            Ok(()) => return client.see_other_with_session("/admin"),
            Err(AdminSessionError::LoginInProgress) => AdminSessionError::LoginInProgress.to_string(),
            // every other failure reads the same to the visitor
            Err(_) => AdminSessionError::InvalidCredentials.to_string(),
        },
        Err(e) => e.to_string(),
    };

    render_admin_page(
        &data,
        &client,
        AdminTab::Dashboard,
        Some(error),
        DashboardSource::LastLoad,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::adapter::incoming::web::extractors::SESSION_COOKIE;
    use crate::admin::application::domain::{SessionId, SessionState};
    use crate::tests::support::{
        app_state_builder::{owner_cookie, owner_session, TestAppStateBuilder},
        stubs::StubAdminApi,
    };
    use actix_web::{test, App};

    fn login_request(username: &str, password: &str) -> actix_web::test::TestRequest {
        test::TestRequest::post()
            .uri("/admin/login")
            .set_form([("username", username), ("password", password)])
    }

    #[actix_web::test]
    async fn test_login_success_redirects_to_admin() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(admin_login_handler),
        )
        .await;

        let resp = test::call_service(&app, login_request("admin", "admin123").to_request()).await;

        assert_eq!(resp.status(), 303);
        assert_eq!(resp.headers().get("location").unwrap(), "/admin");
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .unwrap();
        assert_eq!(cookie.http_only(), Some(true));
        let session = SessionId::parse(cookie.value()).unwrap();
        assert_eq!(
            state.admin_session.state(&session).await,
            SessionState::Authenticated
        );
        assert_eq!(
            state.admin_session.state(&SessionId::generate()).await,
            SessionState::Anonymous
        );
    }

    #[actix_web::test]
    async fn test_login_keeps_the_browser_cookie() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(admin_login_handler),
        )
        .await;

        let req = login_request("admin", "admin123")
            .cookie(owner_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .unwrap();
        assert_eq!(cookie.value(), owner_session().to_string());
        assert_eq!(
            state.admin_session.state(&owner_session()).await,
            SessionState::Authenticated
        );
    }

    #[actix_web::test]
    async fn test_login_failure_shows_generic_error() {
        let state = TestAppStateBuilder::default()
            .with_admin_api(StubAdminApi::rejecting_login())
            .build();
        let app = test::init_service(App::new().app_data(state.clone()).service(admin_login_handler)).await;

        let req = login_request("admin", "admin123")
            .cookie(owner_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains("action=\"/admin/login\""));
        assert_eq!(
            state.admin_session.state(&owner_session()).await,
            SessionState::Anonymous
        );
    }

    #[actix_web::test]
    async fn test_blank_password_is_rejected_without_request() {
        let api = StubAdminApi::default();
        let state = TestAppStateBuilder::default()
            .with_admin_api(api.clone())
            .build();
        let app = test::init_service(App::new().app_data(state).service(admin_login_handler)).await;

        let resp = test::call_service(&app, login_request("admin", "   ").to_request()).await;

        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("Password cannot be empty"));
        assert_eq!(api.calls().login, 0);
    }

    #[actix_web::test]
    async fn test_static_mode_renders_notice_without_request() {
        let api = StubAdminApi::default();
        let state = TestAppStateBuilder::static_only()
            .with_admin_api(api.clone())
            .build();
        let email = state.portfolio.data.personal.email.clone();
        let app = test::init_service(App::new().app_data(state).service(admin_login_handler)).await;

        let resp = test::call_service(&app, login_request("admin", "admin123").to_request()).await;

        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains(&email));
        assert!(!html.contains("action=\"/admin/login\""));
        assert_eq!(api.calls().total(), 0);
    }
}
