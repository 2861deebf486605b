//! # HTTP client wrapper
//!
//! [`ApiClient`] is the flat request layer: one async method per endpoint,
//! parameters forwarded as-is, response bodies parsed into
//! [`crate::models`] types. The stored bearer token is attached to every
//! outgoing request when present. There is no retry, caching, or request
//! coordination — each call is awaited by exactly one UI action and its
//! failure ends there.

use reqwest::multipart;
use serde::Serialize;
use store::{Session, SharedStore};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    Category, Comment, ListResponse, NewUser, Post, PostDraft, RegisteredUser, TokenPair,
};
use crate::query::PostQuery;

/// Client for the remote blog API.
///
/// Cheap to clone; clones share the underlying connection pool and the
/// session store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: SharedStore,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    content: &'a str,
}

/// An image file picked by the user, ready for multipart upload.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Wrap raw file bytes, guessing the MIME type from the extension.
    pub fn from_file(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for_file(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }
}

/// MIME type for the image formats the backend accepts.
fn mime_for_file(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit('.')
        .next()
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, store: SharedStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            store,
        }
    }

    /// The stored session, if any.
    pub fn session(&self) -> Option<Session> {
        self.store.load()
    }

    /// Whether a bearer token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.store.load().is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.store.load() {
            Some(session) => builder.bearer_auth(session.access),
            None => builder,
        }
    }

    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "API request failed");
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let mut builder = self.bearer(self.http.get(self.endpoint(path)));
        if !pairs.is_empty() {
            builder = builder.query(pairs);
        }
        let response = Self::expect_success(builder.send().await?).await?;
        Ok(response.json().await?)
    }

    // --- authentication -------------------------------------------------

    /// `POST /auth/login/`. On success the returned token pair is
    /// persisted, so subsequent requests authenticate automatically.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/auth/login/"))
            .json(&LoginRequest { username, password })
            .send()
            .await?;
        let tokens: TokenPair = Self::expect_success(response).await?.json().await?;
        self.store
            .save(&Session::new(tokens.access.clone(), tokens.refresh.clone()));
        Ok(tokens)
    }

    /// `POST /auth/register/`. Does not log the new user in.
    pub async fn register(&self, user: &NewUser) -> Result<RegisteredUser, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/auth/register/"))
            .json(user)
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    /// Drop the stored session. Client-side only; tokens are not revoked.
    pub fn logout(&self) {
        self.store.clear();
    }

    // --- posts ----------------------------------------------------------

    /// `GET /posts/` with the given filters.
    pub async fn posts(&self, query: &PostQuery) -> Result<Vec<Post>, ApiError> {
        let list: ListResponse<Post> = self.get_json("/posts/", &query.pairs()).await?;
        Ok(list.into_vec())
    }

    /// `GET /posts/{id}/`.
    pub async fn post(&self, id: i64) -> Result<Post, ApiError> {
        self.get_json(&format!("/posts/{id}/"), &[]).await
    }

    /// `POST /posts/` as JSON, for posts without an image.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        let response = self
            .bearer(self.http.post(self.endpoint("/posts/")))
            .json(draft)
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    /// `POST /posts/` as multipart, attaching an image when given.
    pub async fn create_post_with_image(
        &self,
        draft: &PostDraft,
        image: Option<&ImageUpload>,
    ) -> Result<Post, ApiError> {
        let form = Self::draft_form(draft, image)?;
        let response = self
            .bearer(self.http.post(self.endpoint("/posts/")))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    /// `PUT /posts/{id}/` as multipart.
    pub async fn update_post_with_image(
        &self,
        id: i64,
        draft: &PostDraft,
        image: Option<&ImageUpload>,
    ) -> Result<Post, ApiError> {
        let form = Self::draft_form(draft, image)?;
        let response = self
            .bearer(self.http.put(self.endpoint(&format!("/posts/{id}/"))))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    /// `GET /posts/my_posts/` — the authenticated user's own posts.
    pub async fn my_posts(&self) -> Result<Vec<Post>, ApiError> {
        let list: ListResponse<Post> = self.get_json("/posts/my_posts/", &[]).await?;
        Ok(list.into_vec())
    }

    /// `GET /posts/popular/` — the most-commented published posts.
    pub async fn popular_posts(&self) -> Result<Vec<Post>, ApiError> {
        let list: ListResponse<Post> = self.get_json("/posts/popular/", &[]).await?;
        Ok(list.into_vec())
    }

    fn draft_form(
        draft: &PostDraft,
        image: Option<&ImageUpload>,
    ) -> Result<multipart::Form, ApiError> {
        let mut form = multipart::Form::new()
            .text("title", draft.title.clone())
            .text("content", draft.content.clone())
            .text("status", draft.status.as_str());
        if let Some(category_id) = draft.category_id {
            form = form.text("category_id", category_id.to_string());
        }
        if let Some(image) = image {
            let part = multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.mime)?;
            form = form.part("image", part);
        }
        Ok(form)
    }

    // --- categories -----------------------------------------------------

    /// `GET /categories/`.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let list: ListResponse<Category> = self.get_json("/categories/", &[]).await?;
        Ok(list.into_vec())
    }

    // --- comments -------------------------------------------------------

    /// `POST /posts/{id}/add_comment/`.
    pub async fn add_comment(&self, post_id: i64, content: &str) -> Result<Comment, ApiError> {
        let response = self
            .bearer(
                self.http
                    .post(self.endpoint(&format!("/posts/{post_id}/add_comment/"))),
            )
            .json(&CommentRequest { content })
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    /// `GET /posts/{id}/comments/` — the post's approved comments.
    pub async fn comments(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        let list: ListResponse<Comment> = self
            .get_json(&format!("/posts/{post_id}/comments/"), &[])
            .await?;
        Ok(list.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use store::{MemoryStore, SessionStore};

    use super::*;

    fn client_with_store(store: Arc<MemoryStore>) -> ApiClient {
        ApiClient::new(
            ApiConfig::with_base_url("http://localhost:8000/api"),
            store,
        )
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = client_with_store(Arc::new(MemoryStore::new()));
        assert_eq!(
            client.endpoint("/posts/"),
            "http://localhost:8000/api/posts/"
        );
    }

    #[test]
    fn test_anonymous_request_has_no_auth_header() {
        let client = client_with_store(Arc::new(MemoryStore::new()));
        let request = client
            .bearer(client.http.get(client.endpoint("/posts/")))
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_bearer_header_attached_when_logged_in() {
        let store = Arc::new(MemoryStore::new());
        store.save(&Session::new("token-123", "refresh-456"));
        let client = client_with_store(store);

        let request = client
            .bearer(client.http.get(client.endpoint("/posts/")))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer token-123"
        );
    }

    #[test]
    fn test_logout_clears_session() {
        let store = Arc::new(MemoryStore::new());
        store.save(&Session::new("token", "refresh"));
        let client = client_with_store(store);

        assert!(client.is_authenticated());
        client.logout();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_mime_guessing() {
        assert_eq!(mime_for_file("photo.JPG"), "image/jpeg");
        assert_eq!(mime_for_file("cover.png"), "image/png");
        assert_eq!(mime_for_file("anim.gif"), "image/gif");
        assert_eq!(mime_for_file("pic.webp"), "image/webp");
        assert_eq!(mime_for_file("notes.txt"), "application/octet-stream");
    }

    #[test]
    fn test_image_upload_from_file() {
        let upload = ImageUpload::from_file("header.png", vec![1, 2, 3]);
        assert_eq!(upload.mime, "image/png");
        assert_eq!(upload.bytes.len(), 3);
    }
}
