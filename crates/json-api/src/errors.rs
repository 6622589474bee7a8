//! Error response envelope.
//!
//! Handlers return `StatusError`; this catcher renders every failed request
//! as `{ "success": false, "message": ... }` so clients always see the same
//! error shape, whatever ring the failure came from.

use salvo::{catcher::Catcher, http::ResBody, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// Catcher that renders failed requests into the error envelope.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(handler)
}

#[handler]
async fn handler(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = match &res.body {
        ResBody::Error(error) => error.brief.clone(),
        _ => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_owned(),
    };

    res.status_code(status);
    res.render(Json(ErrorResponse {
        success: false,
        message,
    }));

    ctrl.skip_rest();
}
