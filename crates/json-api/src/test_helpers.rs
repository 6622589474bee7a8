//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use vend_app::{
    auth::{AdminUserUuid, AuthedUser, IssuedSession, MockAuthService, Role},
    context::AppContext,
    domain::{
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        notifications::{
            MockNotificationsService,
            data::NotificationKind,
            records::{NotificationRecord, NotificationUuid},
        },
        orders::{
            MockOrdersService,
            records::{
                Address, CustomerSnapshot, OrderItemRecord, OrderRecord, OrderStatus, OrderUuid,
                PaymentInfo,
            },
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        subcategories::{
            MockSubcategoriesService,
            records::{SubcategoryRecord, SubcategoryUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) fn make_authed_user(role: Role) -> AuthedUser {
    let (name, email) = match role {
        Role::Admin => ("Admin", "admin@example.com"),
        Role::Staff => ("Staff", "staff@example.com"),
    };

    AuthedUser {
        uuid: AdminUserUuid::from_uuid(Uuid::nil()),
        name: name.to_owned(),
        email: email.to_owned(),
        role,
    }
}

pub(crate) fn make_issued_session(role: Role) -> IssuedSession {
    IssuedSession {
        token: "vend_v1_test.token".to_owned(),
        user: make_authed_user(role),
        expires_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_category(name: &str) -> CategoryRecord {
    CategoryRecord {
        uuid: CategoryUuid::new(),
        name: name.to_owned(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: format!("{name} description"),
        image_url: None,
        active: true,
        subcategory_count: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_subcategory(name: &str) -> SubcategoryRecord {
    SubcategoryRecord {
        uuid: SubcategoryUuid::new(),
        name: name.to_owned(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: format!("{name} description"),
        category_uuid: CategoryUuid::new(),
        category_name: "Electronics".to_owned(),
        image_url: None,
        active: true,
        product_count: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(name: &str) -> ProductRecord {
    ProductRecord {
        uuid: ProductUuid::new(),
        name: name.to_owned(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: format!("{name} description"),
        price_cents: 19_900,
        stock: 25,
        in_stock: true,
        category_uuid: CategoryUuid::new(),
        category_name: "Electronics".to_owned(),
        subcategory_uuid: SubcategoryUuid::new(),
        subcategory_name: "Laptops".to_owned(),
        image_urls: vec![],
        brand: Some("Acme".to_owned()),
        rating: 0.0,
        num_reviews: 0,
        active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(customer: &str) -> OrderRecord {
    OrderRecord {
        uuid: OrderUuid::new(),
        customer: CustomerSnapshot {
            name: customer.to_owned(),
            email: "customer@example.com".to_owned(),
            phone: "+1-555-0100".to_owned(),
            address: Address {
                street: "1 Main St".to_owned(),
                city: "Springfield".to_owned(),
                state: "IL".to_owned(),
                country: "US".to_owned(),
                zip_code: "62701".to_owned(),
            },
        },
        items: vec![OrderItemRecord {
            product_uuid: ProductUuid::new(),
            name: "X1 Laptop".to_owned(),
            price_cents: 19_900,
            quantity: 1,
            image_url: None,
        }],
        items_cents: 19_900,
        tax_cents: 1_990,
        shipping_cents: 500,
        total_cents: 22_390,
        payment: PaymentInfo::default(),
        status: OrderStatus::Received,
        is_paid: false,
        paid_at: None,
        is_delivered: false,
        delivered_at: None,
        notes: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_notification(title: &str) -> NotificationRecord {
    NotificationRecord {
        uuid: NotificationUuid::new(),
        title: title.to_owned(),
        message: format!("{title} message"),
        kind: NotificationKind::Order,
        data: serde_json::json!({}),
        read: false,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login().never();
    auth.expect_authenticate_bearer().never();
    auth.expect_logout().never();

    auth
}

fn strict_categories_mock() -> MockCategoriesService {
    let mut categories = MockCategoriesService::new();

    categories.expect_list_categories().never();
    categories.expect_get_category().never();
    categories.expect_create_category().never();
    categories.expect_update_category().never();
    categories.expect_delete_category().never();

    categories
}

fn strict_subcategories_mock() -> MockSubcategoriesService {
    let mut subcategories = MockSubcategoriesService::new();

    subcategories.expect_list_subcategories().never();
    subcategories.expect_get_subcategory().never();
    subcategories.expect_create_subcategory().never();
    subcategories.expect_update_subcategory().never();
    subcategories.expect_delete_subcategory().never();

    subcategories
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_place_order().never();
    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_update_status().never();
    orders.expect_delete_order().never();

    orders
}

fn strict_notifications_mock() -> MockNotificationsService {
    let mut notifications = MockNotificationsService::new();

    notifications.expect_list_notifications().never();
    notifications.expect_create_notification().never();
    notifications.expect_mark_read().never();
    notifications.expect_mark_all_read().never();
    notifications.expect_delete_notification().never();
    notifications.expect_subscribe().never();

    notifications
}

struct Mocks {
    categories: MockCategoriesService,
    subcategories: MockSubcategoriesService,
    products: MockProductsService,
    orders: MockOrdersService,
    notifications: MockNotificationsService,
    auth: MockAuthService,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            categories: strict_categories_mock(),
            subcategories: strict_subcategories_mock(),
            products: strict_products_mock(),
            orders: strict_orders_mock(),
            notifications: strict_notifications_mock(),
            auth: strict_auth_mock(),
        }
    }
}

fn state_from_mocks(mocks: Mocks) -> Arc<State> {
    Arc::new(State::new(AppContext {
        categories: Arc::new(mocks.categories),
        subcategories: Arc::new(mocks.subcategories),
        products: Arc::new(mocks.products),
        orders: Arc::new(mocks.orders),
        notifications: Arc::new(mocks.notifications),
        auth: Arc::new(mocks.auth),
    }))
}

pub(crate) fn state_with_categories(categories: MockCategoriesService) -> Arc<State> {
    state_from_mocks(Mocks {
        categories,
        ..Mocks::default()
    })
}

pub(crate) fn state_with_subcategories(subcategories: MockSubcategoriesService) -> Arc<State> {
    state_from_mocks(Mocks {
        subcategories,
        ..Mocks::default()
    })
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    state_from_mocks(Mocks {
        products,
        ..Mocks::default()
    })
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    state_from_mocks(Mocks {
        orders,
        ..Mocks::default()
    })
}

pub(crate) fn state_with_notifications(notifications: MockNotificationsService) -> Arc<State> {
    state_from_mocks(Mocks {
        notifications,
        ..Mocks::default()
    })
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state_from_mocks(Mocks {
        auth,
        ..Mocks::default()
    })
}

#[salvo::handler]
async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_authed_user(make_authed_user(Role::Admin));
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
async fn inject_staff(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_authed_user(make_authed_user(Role::Staff));
    ctrl.call_next(req, depot, res).await;
}

// Test services carry the same error catcher as production so error bodies
// can be asserted, not just status codes.
fn service_with_state(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route)).catcher(crate::errors::catcher())
}

/// Service for public routes backed by one mocked domain service.
pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    service_with_state(state_with_categories(categories), route)
}

pub(crate) fn subcategories_service(
    subcategories: MockSubcategoriesService,
    route: Router,
) -> Service {
    service_with_state(state_with_subcategories(subcategories), route)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with_state(state_with_products(products), route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with_state(state_with_orders(orders), route)
}

pub(crate) fn notifications_service(
    notifications: MockNotificationsService,
    route: Router,
) -> Service {
    service_with_state(state_with_notifications(notifications), route)
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    service_with_state(state_with_auth(auth), route)
}

/// Service with a pre-authenticated user of the given role in the depot.
pub(crate) fn authed_service(auth: MockAuthService, role: Role, route: Router) -> Service {
    let router = Router::new().hoop(inject(state_with_auth(auth)));

    let router = match role {
        Role::Admin => router.hoop(inject_admin),
        Role::Staff => router.hoop(inject_staff),
    };

    Service::new(router.push(route)).catcher(crate::errors::catcher())
}
