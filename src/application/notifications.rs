//! Notification housekeeping use case

use tracing::warn;

use crate::domain::item::ItemId;

use super::ports::{BackendError, NotificationBackend, View};

/// Mark-read, delete and clear-all for the notification dropdown.
///
/// Failures here are cosmetic: they are logged and returned, but never
/// raised as alerts.
pub struct NotificationsUseCase<N, V>
where
    N: NotificationBackend,
    V: View,
{
    backend: N,
    view: V,
}

impl<N, V> NotificationsUseCase<N, V>
where
    N: NotificationBackend,
    V: View,
{
    pub fn new(backend: N, view: V) -> Self {
        Self { backend, view }
    }

    /// Mark everything read (clears the unread badge)
    pub async fn mark_read(&self) -> Result<(), BackendError> {
        self.backend
            .mark_read()
            .await
            .inspect_err(|e| warn!(error = %e, "failed to mark notifications as read"))
    }

    /// Delete one notification, then redraw the list
    pub async fn delete(&self, id: &ItemId) -> Result<(), BackendError> {
        self.backend
            .delete_notification(id)
            .await
            .inspect_err(|e| warn!(error = %e, %id, "failed to delete notification"))?;
        self.view.refresh().await;
        Ok(())
    }

    /// Delete every notification, then redraw the list
    pub async fn clear_all(&self) -> Result<(), BackendError> {
        self.backend
            .clear_notifications()
            .await
            .inspect_err(|e| warn!(error = %e, "failed to clear notifications"))?;
        self.view.refresh().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::Notice;
    use crate::domain::item::ItemKind;

    #[derive(Default)]
    struct MockNotifications {
        fail: bool,
        deleted: Mutex<Vec<ItemId>>,
    }

    impl MockNotifications {
        fn result(&self) -> Result<(), BackendError> {
            if self.fail {
                Err(BackendError::Network("offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl NotificationBackend for MockNotifications {
        async fn mark_read(&self) -> Result<(), BackendError> {
            self.result()
        }

        async fn delete_notification(&self, id: &ItemId) -> Result<(), BackendError> {
            self.deleted.lock().unwrap().push(id.clone());
            self.result()
        }

        async fn clear_notifications(&self) -> Result<(), BackendError> {
            self.result()
        }
    }

    #[derive(Clone, Default)]
    struct CountingView {
        refreshes: Arc<Mutex<usize>>,
        alerts: Arc<Mutex<usize>>,
    }

    #[async_trait]
    impl View for CountingView {
        async fn checked_items(&self) -> Vec<(ItemKind, ItemId)> {
            Vec::new()
        }

        async fn confirm(&self, _message: &str) -> bool {
            true
        }

        async fn prompt(&self, _message: &str) -> Option<String> {
            None
        }

        async fn notify(&self, _message: &str, _notice: Notice) {
            *self.alerts.lock().unwrap() += 1;
        }

        async fn is_favorite(&self, _kind: ItemKind, _id: &ItemId) -> Option<bool> {
            Some(false)
        }

        async fn set_favorite(&self, _kind: ItemKind, _id: &ItemId, _favorited: Option<bool>) {}

        async fn refresh(&self) {
            *self.refreshes.lock().unwrap() += 1;
        }
    }

    #[tokio::test]
    async fn delete_refreshes_list() {
        let view = CountingView::default();
        let use_case = NotificationsUseCase::new(MockNotifications::default(), view.clone());

        use_case.delete(&ItemId::from(3)).await.unwrap();

        assert_eq!(*view.refreshes.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn failures_are_not_alerted() {
        let view = CountingView::default();
        let backend = MockNotifications {
            fail: true,
            ..Default::default()
        };
        let use_case = NotificationsUseCase::new(backend, view.clone());

        assert!(use_case.mark_read().await.is_err());
        assert!(use_case.clear_all().await.is_err());
        assert_eq!(*view.alerts.lock().unwrap(), 0);
        assert_eq!(*view.refreshes.lock().unwrap(), 0);
    }
}
