//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        categories::{
            data::{CategoryFilter, CategoryUpdate, NewCategory},
            errors::CategoriesServiceError,
            records::{CategoryRecord, CategoryUuid},
            repository::PgCategoriesRepository,
        },
        listing::{PageInfo, PageRequest},
    },
    slug::slugify,
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(
        &self,
        filter: CategoryFilter,
        page: PageRequest,
    ) -> Result<(Vec<CategoryRecord>, PageInfo), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self
            .repository
            .list_categories(&mut tx, &filter, page)
            .await?;

        let total = self.repository.count_categories(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok((categories, PageInfo::new(page, total)))
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let slug = slugify(&category.name);

        let created = self
            .repository
            .create_category(
                &mut tx,
                CategoryUuid::new(),
                &category.name,
                &slug,
                &category.description,
                category.image_url.as_deref(),
            )
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        // Renaming regenerates the slug; other updates leave it untouched.
        let slug = update.name.as_deref().map(slugify);

        let updated = self
            .repository
            .update_category(
                &mut tx,
                category,
                update.name.as_deref(),
                slug.as_deref(),
                update.description.as_deref(),
                update.image_url.as_deref(),
            )
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_category(
        &self,
        category: CategoryUuid,
    ) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_category(&mut tx, category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieve a filtered page of active categories.
    async fn list_categories(
        &self,
        filter: CategoryFilter,
        page: PageRequest,
    ) -> Result<(Vec<CategoryRecord>, PageInfo), CategoriesServiceError>;

    /// Retrieve a single active category.
    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Create a category; the slug is derived from the name.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Update a category; renaming regenerates the slug.
    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Soft-delete a category by clearing its active flag.
    async fn delete_category(
        &self,
        category: CategoryUuid,
    ) -> Result<(), CategoriesServiceError>;
}
