//! Order Index Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;
use uuid::Uuid;
use vend_app::domain::{
    listing::{PageInfo, PageRequest, SortOrder},
    orders::{
        data::{OrderFilter, OrderSortKey},
        records::OrderStatus,
    },
};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    pagination::ListResponse,
    state::State,
};

fn parse_timestamp(value: Option<String>) -> Option<Timestamp> {
    value.and_then(|raw| raw.parse().ok())
}

/// Order Index Handler
///
/// Returns a filtered page of orders with line items attached. `search` is
/// an exact order uuid; anything that is not a uuid matches nothing.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ListResponse<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = PageRequest::new(
        req.query("page"),
        req.query("limit"),
        PageRequest::DEFAULT_LIMIT,
    );

    let search = req.query::<String>("search");
    let uuid = search.as_deref().and_then(|raw| Uuid::parse_str(raw).ok());

    if search.is_some() && uuid.is_none() {
        return Ok(Json(ListResponse::new(vec![], PageInfo::new(page, 0))));
    }

    let filter = OrderFilter {
        uuid: uuid.map(Into::into),
        status: req
            .query::<String>("status")
            .and_then(|raw| OrderStatus::parse(&raw)),
        min_date: parse_timestamp(req.query("minDate")),
        max_date: parse_timestamp(req.query("maxDate")),
        min_total_cents: req.query("minTotal"),
        max_total_cents: req.query("maxTotal"),
        sort_key: OrderSortKey::from_query(req.query::<String>("sortBy").as_deref()),
        sort_order: SortOrder::from_query(req.query::<String>("sortOrder").as_deref()),
    };

    let (orders, info) = state
        .app
        .orders
        .list_orders(filter, page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ListResponse::new(
        orders.into_iter().map(Into::into).collect(),
        info,
    )))
}
