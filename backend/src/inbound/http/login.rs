//! Form login and logout.
//!
//! ```text
//! POST /login   username=admin&password=secret
//! POST /logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{Error, LoginCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login form fields. Missing fields are treated like wrong credentials.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Verify credentials and remember the user in the session cookie.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Logged in", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tags = ["autenticacion"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let LoginForm { username, password } = form.into_inner();
    let credentials = LoginCredentials::try_from_parts(
        username.as_deref().unwrap_or_default(),
        password.as_deref().unwrap_or_default(),
    )
    .map_err(|err| Error::unauthorized(err.to_string()))?;
    let user = state.login.authenticate(&credentials).await?;
    session.persist_user(&user)?;
    info!(username = user.username(), "form login succeeded");
    Ok(HttpResponse::Ok().finish())
}

/// Drop the session. Always succeeds.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 200, description = "Logged out")),
    tags = ["autenticacion"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::inbound::http::test_utils::{memory_state, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    async fn post_login(body: &str) -> actix_web::dev::ServiceResponse {
        let (state, _) = memory_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(test_session_middleware())
                .configure(crate::inbound::http::extractors::configure)
                .service(login)
                .service(logout),
        )
        .await;
        let request = test::TestRequest::post()
            .uri("/login")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload(body.to_owned())
            .to_request();
        test::call_service(&app, request).await
    }

    #[rstest]
    #[actix_web::test]
    async fn valid_form_sets_session_cookie() {
        let response = post_login("username=admin&password=secret").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .response()
                .cookies()
                .any(|cookie| cookie.name() == "session")
        );
    }

    #[rstest]
    #[case("username=admin&password=wrong")]
    #[case("username=nobody&password=secret")]
    #[case("username=admin")]
    #[case("")]
    #[actix_web::test]
    async fn rejected_form_is_unauthorised(#[case] body: &str) {
        let response = post_login(body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload: ErrorResponse = test::read_body_json(response).await;
        assert_eq!(payload.error_code, 401);
    }

    #[rstest]
    #[::core::prelude::v1::test]
    fn blank_credentials_map_to_unauthorised() {
        let err = LoginCredentials::try_from_parts("  ", "x")
            .map_err(|err| Error::unauthorized(err.to_string()))
            .expect_err("blank username");
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }
}
