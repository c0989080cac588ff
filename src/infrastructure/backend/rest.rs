//! Dashboard REST backend adapter

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ports::{
    BackendError, DocumentBackend, FavoriteOutcome, NotificationBackend,
};
use crate::domain::clipboard::ClipboardEntry;
use crate::domain::item::{ItemId, ItemKind};
use crate::domain::selection::{Disposition, SelectionSet};

use super::csrf::csrf_token_from_html;
use super::routes;

/// Header carrying the anti-forgery token
const CSRF_HEADER: &str = "X-CSRFToken";

// Request bodies

#[derive(Debug, Serialize)]
struct TransferRequest {
    parent_id: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct RenameRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct BulkDeleteRequest<'a> {
    action: &'static str,
    documents: &'a [ItemId],
    folders: &'a [ItemId],
}

// Response envelope shared by every JSON endpoint

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    favorited: Option<bool>,
}

impl Envelope {
    /// Interpret a raw response.
    ///
    /// A body that is not a JSON envelope is malformed on a 2xx and a plain
    /// rejection otherwise. A parsed envelope succeeds only with
    /// `success: true` on a 2xx status.
    fn interpret(status: StatusCode, body: &str) -> Result<Self, BackendError> {
        let envelope: Envelope = match serde_json::from_str(body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                return Err(BackendError::MalformedResponse(e.to_string()));
            }
            Err(_) => {
                return Err(BackendError::ServerRejected(None));
            }
        };

        if envelope.success && status.is_success() {
            Ok(envelope)
        } else {
            Err(BackendError::ServerRejected(
                envelope.error.or(envelope.message),
            ))
        }
    }
}

/// reqwest-backed client for the dashboard's REST endpoints
pub struct RestBackend {
    base_url: String,
    csrf_token: Option<String>,
    session_cookie: Option<String>,
    client: reqwest::Client,
}

impl RestBackend {
    /// Create a backend for the given base URL with a default client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a backend using a preconfigured client (timeouts, proxies)
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            csrf_token: None,
            session_cookie: None,
            client,
        }
    }

    /// Anti-forgery token echoed on every mutating request
    pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Raw `Cookie` header value identifying the logged-in session
    pub fn session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn has_csrf_token(&self) -> bool {
        self.csrf_token.is_some()
    }

    /// Build a full URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn session_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = self
            .session_cookie
            .as_deref()
            .and_then(|c| HeaderValue::from_str(c).ok())
        {
            headers.insert(COOKIE, cookie);
        }
        headers
    }

    /// POST with the AJAX marker, session cookie and anti-forgery token
    fn post(&self, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .post(self.url(path))
            .headers(self.session_headers())
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(ref token) = self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        request
    }

    async fn send(&self, request: RequestBuilder) -> Result<(StatusCode, String), BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        debug!(%status, bytes = body.len(), "backend response");
        Ok((status, body))
    }

    /// Send and require a successful JSON envelope
    async fn send_json(&self, request: RequestBuilder) -> Result<Envelope, BackendError> {
        let (status, body) = self.send(request).await?;
        Envelope::interpret(status, &body)
    }

    /// Send and require only a 2xx status (body may be empty)
    async fn send_status(&self, request: RequestBuilder) -> Result<(), BackendError> {
        let (status, body) = self.send(request).await?;
        if status.is_success() {
            return Ok(());
        }
        let message = serde_json::from_str::<Envelope>(&body)
            .ok()
            .and_then(|e| e.error.or(e.message));
        Err(BackendError::ServerRejected(message))
    }

    /// Fetch a dashboard page and pick up its anti-forgery token
    pub async fn discover_csrf_token(&mut self, page: &str) -> Result<bool, BackendError> {
        let request = self.client.get(self.url(page)).headers(self.session_headers());
        let (status, body) = self.send(request).await?;
        if !status.is_success() {
            return Err(BackendError::ServerRejected(Some(format!(
                "HTTP {} while loading {}",
                status, page
            ))));
        }
        match csrf_token_from_html(&body) {
            Some(token) => {
                self.csrf_token = Some(token);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl DocumentBackend for RestBackend {
    async fn transfer(
        &self,
        entry: &ClipboardEntry,
        destination: Option<&ItemId>,
    ) -> Result<(), BackendError> {
        let body = TransferRequest {
            parent_id: destination
                .map(ItemId::to_wire_value)
                .unwrap_or(serde_json::Value::Null),
        };
        self.send_json(self.post(&routes::transfer(entry)).json(&body))
            .await
            .map(|_| ())
    }

    async fn rename(&self, kind: ItemKind, id: &ItemId, name: &str) -> Result<(), BackendError> {
        let body = RenameRequest { name };
        self.send_json(self.post(&routes::rename(kind, id)).json(&body))
            .await
            .map(|_| ())
    }

    async fn toggle_favorite(
        &self,
        kind: ItemKind,
        id: &ItemId,
    ) -> Result<FavoriteOutcome, BackendError> {
        let envelope = self
            .send_json(self.post(&routes::favorite_toggle(kind, id)))
            .await?;
        Ok(FavoriteOutcome {
            favorited: envelope.favorited,
        })
    }

    async fn archive(&self, document_id: &ItemId) -> Result<(), BackendError> {
        self.send_json(self.post(&routes::archive(document_id)))
            .await
            .map(|_| ())
    }

    async fn delete_item(
        &self,
        kind: ItemKind,
        id: &ItemId,
        disposition: Disposition,
    ) -> Result<(), BackendError> {
        self.send_json(self.post(&routes::delete(kind, id, disposition)))
            .await
            .map(|_| ())
    }

    async fn bulk_delete(
        &self,
        selection: &SelectionSet,
        disposition: Disposition,
    ) -> Result<Option<String>, BackendError> {
        let body = BulkDeleteRequest {
            action: disposition.wire_action(),
            documents: selection.documents(),
            folders: selection.folders(),
        };
        let envelope = self
            .send_json(self.post(routes::BULK_DELETE).json(&body))
            .await?;
        Ok(envelope.message)
    }

    async fn create_folder(&self, name: &str, parent: Option<&ItemId>) -> Result<(), BackendError> {
        let parent = parent.map(ItemId::as_str).unwrap_or("");
        let form = [("name", name), ("parent_id", parent)];
        self.send_status(self.post(routes::CREATE_FOLDER).form(&form))
            .await
    }

    async fn restore(&self, kind: ItemKind, id: &ItemId) -> Result<(), BackendError> {
        self.send_status(self.post(&routes::restore(kind, id))).await
    }

    async fn unarchive(&self, document_id: &ItemId) -> Result<(), BackendError> {
        self.send_status(self.post(&routes::unarchive(document_id)))
            .await
    }

    async fn empty_bin(&self) -> Result<(), BackendError> {
        self.send_status(self.post(routes::EMPTY_BIN)).await
    }
}

#[async_trait]
impl NotificationBackend for RestBackend {
    async fn mark_read(&self) -> Result<(), BackendError> {
        self.send_status(self.post(routes::NOTIFICATIONS_MARK_READ))
            .await
    }

    async fn delete_notification(&self, id: &ItemId) -> Result<(), BackendError> {
        self.send_status(self.post(&routes::notification_delete(id)))
            .await
    }

    async fn clear_notifications(&self) -> Result<(), BackendError> {
        self.send_status(self.post(routes::NOTIFICATIONS_CLEAR_ALL))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = RestBackend::new("http://localhost:5000/");
        assert_eq!(backend.url("/documents/1/bin"), "http://localhost:5000/documents/1/bin");
    }

    #[test]
    fn interpret_success() {
        let envelope = Envelope::interpret(StatusCode::OK, r#"{"success":true}"#).unwrap();
        assert!(envelope.success);
    }

    #[test]
    fn interpret_rejection_with_error() {
        let err = Envelope::interpret(
            StatusCode::FORBIDDEN,
            r#"{"success":false,"error":"Permission denied"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            BackendError::ServerRejected(Some("Permission denied".to_string()))
        );
    }

    #[test]
    fn interpret_rejection_uses_message_field() {
        let err =
            Envelope::interpret(StatusCode::OK, r#"{"success":false,"message":"No items"}"#)
                .unwrap_err();
        assert_eq!(err.user_message(), "No items");
    }

    #[test]
    fn interpret_non_json_success_is_malformed() {
        let err = Envelope::interpret(StatusCode::OK, "<html>login</html>").unwrap_err();
        assert!(matches!(err, BackendError::MalformedResponse(_)));
    }

    #[test]
    fn interpret_missing_success_field_is_malformed() {
        let err = Envelope::interpret(StatusCode::OK, r#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, BackendError::MalformedResponse(_)));
    }

    #[test]
    fn interpret_non_json_error_status_is_generic_rejection() {
        let err = Envelope::interpret(StatusCode::NOT_FOUND, "Not Found").unwrap_err();
        assert_eq!(err, BackendError::ServerRejected(None));
    }

    #[test]
    fn bulk_request_shape() {
        let selection: SelectionSet = vec![
            (ItemKind::Document, ItemId::new("1").unwrap()),
            (ItemKind::Document, ItemId::new("2").unwrap()),
            (ItemKind::Folder, ItemId::new("5").unwrap()),
        ]
        .into_iter()
        .collect();
        let body = BulkDeleteRequest {
            action: Disposition::SoftDelete.wire_action(),
            documents: selection.documents(),
            folders: selection.folders(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"action": "recycle", "documents": ["1", "2"], "folders": ["5"]})
        );
    }
}
