//! App Router
//!
//! Three rings: public storefront reads plus order placement, authenticated
//! staff routes, and admin-only catalog and order management.

use salvo::Router;

use crate::{
    auth, categories, healthcheck, notifications, orders, products, subcategories,
};

pub(crate) fn api_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(public_routes())
                .push(authenticated_routes())
                .push(admin_routes()),
        )
}

fn public_routes() -> Router {
    Router::new()
        .push(Router::with_path("auth/login").post(auth::handlers::login::handler))
        .push(
            Router::with_path("categories")
                .get(categories::handlers::index::handler)
                .push(Router::with_path("{uuid}").get(categories::handlers::get::handler)),
        )
        .push(
            Router::with_path("subcategories")
                .get(subcategories::handlers::index::handler)
                .push(Router::with_path("{uuid}").get(subcategories::handlers::get::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::handlers::index::handler)
                // Literal segments have to land before the uuid catch-all.
                .push(Router::with_path("search").get(products::handlers::search::handler))
                .push(Router::with_path("all").get(products::handlers::all::handler))
                .push(Router::with_path("{uuid}").get(products::handlers::get::handler)),
        )
        .push(Router::with_path("orders").post(orders::handlers::create::handler))
}

fn authenticated_routes() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(Router::with_path("auth/me").get(auth::handlers::me::handler))
        .push(Router::with_path("auth/logout").post(auth::handlers::logout::handler))
        .push(
            Router::with_path("notifications")
                .get(notifications::handlers::index::handler)
                .push(
                    Router::with_path("read-all")
                        .put(notifications::handlers::mark_all_read::handler),
                )
                .push(Router::with_path("events").get(notifications::handlers::events::handler))
                .push(
                    Router::with_path("{uuid}")
                        .delete(notifications::handlers::delete::handler)
                        .push(
                            Router::with_path("read")
                                .put(notifications::handlers::mark_read::handler),
                        ),
                ),
        )
}

fn admin_routes() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .hoop(auth::middleware::require_admin)
        .push(
            Router::with_path("categories")
                .post(categories::handlers::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .put(categories::handlers::update::handler)
                        .delete(categories::handlers::delete::handler),
                ),
        )
        .push(
            Router::with_path("subcategories")
                .post(subcategories::handlers::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .put(subcategories::handlers::update::handler)
                        .delete(subcategories::handlers::delete::handler),
                ),
        )
        .push(
            Router::with_path("products")
                .post(products::handlers::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .put(products::handlers::update::handler)
                        .delete(products::handlers::delete::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::handlers::index::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(orders::handlers::get::handler)
                        .delete(orders::handlers::delete::handler)
                        .push(Router::with_path("status").put(orders::handlers::status::handler)),
                ),
        )
        .push(Router::with_path("notifications").post(notifications::handlers::create::handler))
}

#[cfg(test)]
mod tests {
    use salvo::{affix_state::inject, prelude::*, test::TestClient};
    use testresult::TestResult;

    use vend_app::domain::{categories::MockCategoriesService, listing::PageInfo};

    use crate::test_helpers::state_with_categories;

    use super::*;

    #[tokio::test]
    async fn test_public_catalog_read_needs_no_token() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_list_categories()
            .once()
            .return_once(|_, page| Ok((vec![], PageInfo::new(page, 0))));

        let service = Service::new(
            Router::new()
                .hoop(inject(state_with_categories(categories)))
                .push(api_router()),
        );

        let res = TestClient::get("http://example.com/api/categories")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_write_requires_token() -> TestResult {
        let service = Service::new(
            Router::new()
                .hoop(inject(state_with_categories(MockCategoriesService::new())))
                .push(api_router()),
        );

        let res = TestClient::post("http://example.com/api/categories")
            .json(&serde_json::json!({ "name": "Electronics" }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_notifications_require_token() -> TestResult {
        let service = Service::new(
            Router::new()
                .hoop(inject(state_with_categories(MockCategoriesService::new())))
                .push(api_router()),
        );

        let res = TestClient::get("http://example.com/api/notifications")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
