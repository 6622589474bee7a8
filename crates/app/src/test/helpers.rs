//! Seeding helpers for service-level tests.

use crate::{
    domain::{
        categories::{CategoriesService, data::NewCategory},
        products::{ProductsService, data::NewProduct, records::ProductRecord},
        subcategories::{SubcategoriesService, data::NewSubcategory},
    },
    test::TestContext,
};

/// Seed a product with its own category and subcategory. Product names must
/// be unique within a test because slugs are derived from them.
pub(crate) async fn seed_product(ctx: &TestContext, name: &str, stock: i32) -> ProductRecord {
    let category = ctx
        .categories
        .create_category(NewCategory {
            name: format!("{name} Category"),
            description: String::new(),
            image_url: None,
        })
        .await
        .expect("failed to seed category");

    let subcategory = ctx
        .subcategories
        .create_subcategory(NewSubcategory {
            name: format!("{name} Subcategory"),
            description: String::new(),
            category_uuid: category.uuid,
            image_url: None,
        })
        .await
        .expect("failed to seed subcategory");

    ctx.products
        .create_product(NewProduct {
            name: name.to_owned(),
            description: format!("{name} description"),
            price_cents: 19_900,
            stock,
            category_uuid: category.uuid,
            subcategory_uuid: subcategory.uuid,
            image_urls: Vec::new(),
            brand: Some("Acme".to_owned()),
        })
        .await
        .expect("failed to seed product")
}
