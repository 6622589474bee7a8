//! Notification Events Handler
//!
//! Server-sent events stream of notifications as they are created. The push
//! channel is bounded; a subscriber that lags simply misses messages and
//! picks the records up on its next list poll.

use std::sync::Arc;

use salvo::{
    prelude::*,
    sse::{self, SseEvent},
};
use tokio_stream::{
    StreamExt,
    wrappers::{BroadcastStream, errors::BroadcastStreamRecvError},
};

use crate::{extensions::*, notifications::models::NotificationResponse, state::State};

/// Notification Events Handler
#[handler]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let receiver = state.app.notifications.subscribe();

    let stream = BroadcastStream::new(receiver).filter_map(|notification| match notification {
        Ok(notification) => Some(
            SseEvent::default()
                .name("notification")
                .json(NotificationResponse::from(notification)),
        ),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::debug!(skipped, "notification event subscriber lagged");

            None
        }
    });

    sse::stream(res, stream);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use tokio::sync::broadcast;

    use vend_app::domain::notifications::{
        MockNotificationsService, records::NotificationRecord,
    };

    use crate::test_helpers::{make_notification, notifications_service};

    use super::*;

    fn make_service(notifications: MockNotificationsService) -> Service {
        notifications_service(
            notifications,
            Router::with_path("notifications/events").get(handler),
        )
    }

    #[tokio::test]
    async fn test_events_streams_pushed_notifications() -> TestResult {
        let mut notifications = MockNotificationsService::new();
        let (tx, rx) = broadcast::channel(8);

        tx.send(make_notification("New order"))?;
        drop(tx);

        notifications.expect_subscribe().once().return_once(move || rx);

        let body = TestClient::get("http://example.com/notifications/events")
            .send(&make_service(notifications))
            .await
            .take_string()
            .await?;

        assert!(body.contains("event: notification"));
        assert!(body.contains("New order"));

        Ok(())
    }

    #[tokio::test]
    async fn test_events_ends_when_channel_closes() -> TestResult {
        let mut notifications = MockNotificationsService::new();
        let (tx, rx) = broadcast::channel::<NotificationRecord>(8);

        drop(tx);

        notifications.expect_subscribe().once().return_once(move || rx);

        let body = TestClient::get("http://example.com/notifications/events")
            .send(&make_service(notifications))
            .await
            .take_string()
            .await?;

        assert!(body.is_empty());

        Ok(())
    }
}
