//! Current User Handler

use salvo::prelude::*;

use crate::{auth::handlers::login::UserResponse, extensions::*};

/// Current User Handler
///
/// Returns the authenticated user.
#[endpoint(tags("auth"), summary = "Current User", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let user = depot.authed_user_or_401()?;

    Ok(Json(UserResponse {
        uuid: user.uuid.into(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.as_str().to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use vend_app::auth::{MockAuthService, Role};

    use crate::test_helpers::{authed_service, strict_auth_mock};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        authed_service(auth, Role::Staff, Router::with_path("auth/me").get(handler))
    }

    #[tokio::test]
    async fn test_me_returns_authed_user() -> TestResult {
        let response: UserResponse = TestClient::get("http://example.com/auth/me")
            .send(&make_service(strict_auth_mock()))
            .await
            .take_json()
            .await?;

        assert_eq!(response.email, "staff@example.com");
        assert_eq!(response.role, "staff");

        Ok(())
    }
}
