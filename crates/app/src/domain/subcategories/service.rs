//! Subcategories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        listing::{PageInfo, PageRequest},
        subcategories::{
            data::{NewSubcategory, SubcategoryFilter, SubcategoryUpdate},
            errors::SubcategoriesServiceError,
            records::{SubcategoryRecord, SubcategoryUuid},
            repository::PgSubcategoriesRepository,
        },
    },
    slug::slugify,
    uuids::TypedUuid,
};

#[derive(Debug, Clone)]
pub struct PgSubcategoriesService {
    db: Db,
    repository: PgSubcategoriesRepository,
}

impl PgSubcategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSubcategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl SubcategoriesService for PgSubcategoriesService {
    async fn list_subcategories(
        &self,
        filter: SubcategoryFilter,
        page: PageRequest,
    ) -> Result<(Vec<SubcategoryRecord>, PageInfo), SubcategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let subcategories = self
            .repository
            .list_subcategories(&mut tx, &filter, page)
            .await?;

        let total = self
            .repository
            .count_subcategories(&mut tx, &filter)
            .await?;

        tx.commit().await?;

        Ok((subcategories, PageInfo::new(page, total)))
    }

    async fn get_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<SubcategoryRecord, SubcategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let subcategory = self
            .repository
            .get_subcategory(&mut tx, subcategory)
            .await?;

        tx.commit().await?;

        Ok(subcategory)
    }

    async fn create_subcategory(
        &self,
        subcategory: NewSubcategory,
    ) -> Result<SubcategoryRecord, SubcategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let slug = slugify(&subcategory.name);

        let created = self
            .repository
            .create_subcategory(
                &mut tx,
                TypedUuid::new(),
                &subcategory.name,
                &slug,
                &subcategory.description,
                subcategory.category_uuid,
                subcategory.image_url.as_deref(),
            )
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_subcategory(
        &self,
        subcategory: SubcategoryUuid,
        update: SubcategoryUpdate,
    ) -> Result<SubcategoryRecord, SubcategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let slug = update.name.as_deref().map(slugify);

        let updated = self
            .repository
            .update_subcategory(
                &mut tx,
                subcategory,
                update.name.as_deref(),
                slug.as_deref(),
                update.description.as_deref(),
                update.category_uuid.map(Into::into),
                update.image_url.as_deref(),
            )
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<(), SubcategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_subcategory(&mut tx, subcategory)
            .await?;

        if rows_affected == 0 {
            return Err(SubcategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait SubcategoriesService: Send + Sync {
    /// Retrieve a filtered page of active subcategories.
    async fn list_subcategories(
        &self,
        filter: SubcategoryFilter,
        page: PageRequest,
    ) -> Result<(Vec<SubcategoryRecord>, PageInfo), SubcategoriesServiceError>;

    /// Retrieve a single active subcategory.
    async fn get_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<SubcategoryRecord, SubcategoriesServiceError>;

    /// Create a subcategory under an existing category.
    async fn create_subcategory(
        &self,
        subcategory: NewSubcategory,
    ) -> Result<SubcategoryRecord, SubcategoriesServiceError>;

    /// Update a subcategory; renaming regenerates the slug.
    async fn update_subcategory(
        &self,
        subcategory: SubcategoryUuid,
        update: SubcategoryUpdate,
    ) -> Result<SubcategoryRecord, SubcategoriesServiceError>;

    /// Soft-delete a subcategory by clearing its active flag.
    async fn delete_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<(), SubcategoriesServiceError>;
}
