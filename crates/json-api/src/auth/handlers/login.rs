//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vend_app::auth::IssuedSession;

use crate::{auth::errors::into_status_error, extensions::*, state::State};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub expires_at: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<IssuedSession> for LoginResponse {
    fn from(session: IssuedSession) -> Self {
        Self {
            success: true,
            token: session.token,
            expires_at: session.expires_at.to_string(),
            user: UserResponse {
                uuid: session.user.uuid.into(),
                name: session.user.name,
                email: session.user.email,
                role: session.user.role.as_str().to_owned(),
            },
        }
    }
}

/// Login Handler
///
/// Verifies credentials and issues a bearer token.
#[endpoint(
    tags("auth"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "Session issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let session = state
        .app
        .auth
        .login(&request.email, &request.password)
        .await
        .map_err(into_status_error)?;

    Ok(Json(session.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use vend_app::auth::{AuthServiceError, MockAuthService, Role};

    use crate::test_helpers::{auth_service, make_issued_session};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        auth_service(auth, Router::with_path("auth/login").post(handler))
    }

    #[tokio::test]
    async fn test_login_success_returns_token_and_user() -> TestResult {
        let session = make_issued_session(Role::Admin);
        let token = session.token.clone();

        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .withf(|email, password| email == "admin@example.com" && password == "hunter2")
            .return_once(move |_, _| Ok(session));

        let response: LoginResponse = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "email": "admin@example.com", "password": "hunter2" }))
            .send(&make_service(auth))
            .await
            .take_json()
            .await?;

        assert!(response.success);
        assert_eq!(response.token, token);
        assert_eq!(response.user.role, "admin");

        Ok(())
    }

    #[tokio::test]
    async fn test_login_wrong_password_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .return_once(|_, _| Err(AuthServiceError::InvalidCredentials));

        let res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "email": "admin@example.com", "password": "wrong" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
