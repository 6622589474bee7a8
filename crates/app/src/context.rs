//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        categories::{CategoriesService, PgCategoriesService},
        notifications::{NotificationsService, PgNotificationsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        subcategories::{PgSubcategoriesService, SubcategoriesService},
    },
    mail::{HttpMailer, MailGatewayConfig, Mailer},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub categories: Arc<dyn CategoriesService>,
    pub subcategories: Arc<dyn SubcategoriesService>,
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub notifications: Arc<dyn NotificationsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL and mail gateway config.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        mail: MailGatewayConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);
        let mailer: Arc<dyn Mailer> = Arc::new(HttpMailer::new(mail));

        Ok(Self::assemble(db, mailer))
    }

    /// Wire the service graph over an established database handle.
    #[must_use]
    pub fn assemble(db: Db, mailer: Arc<dyn Mailer>) -> Self {
        let notifications: Arc<dyn NotificationsService> =
            Arc::new(PgNotificationsService::new(db.clone()));

        Self {
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            subcategories: Arc::new(PgSubcategoriesService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(
                db.clone(),
                Arc::clone(&notifications),
                mailer,
            )),
            notifications,
            auth: Arc::new(PgAuthService::new(db)),
        }
    }
}
