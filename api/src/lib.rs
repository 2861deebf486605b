//! # API crate — typed client for the remote blog REST API
//!
//! This crate is the single gateway between the Inkwell frontends and the
//! blog platform's REST API. It defines the domain models the API serves,
//! a thin async wrapper with one method per endpoint, and the error type
//! every call resolves to. The API contract is owned by the remote backend;
//! nothing here caches, retries, or reconciles — each call maps one UI
//! action to one HTTP request.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — reqwest wrapper that attaches the stored bearer token and maps responses to models |
//! | [`config`] | [`ApiConfig`] — base URL, overridable at build time via `BLOG_API_URL` |
//! | [`error`] | [`ApiError`] — transport failures and server-reported errors with message extraction |
//! | [`models`] | Posts, categories, comments, users, token pairs, pagination envelopes |
//! | [`query`] | [`PostQuery`] — the filter/search/ordering parameters the post list accepts |
//!
//! ## Authentication
//!
//! [`ApiClient::login`] persists the returned token pair into the
//! [`store::SessionStore`] it was constructed with; every subsequent
//! request carries `Authorization: Bearer <access>` until
//! [`ApiClient::logout`] clears the store. Token presence is the client's
//! only notion of being logged in.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;

pub use client::{ApiClient, ImageUpload};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    Author, Category, Comment, NewUser, Post, PostDraft, PostStatus, RegisteredUser, TokenPair,
};
pub use query::PostQuery;
