//! # WordPress API Rust Client
//!
//! A Rust client for the WordPress REST API, providing type-safe
//! configuration, pluggable authentication, a deterministic query builder,
//! and typed CRUD services over the core resources.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`WpConfig`] and [`WpConfigBuilder`]
//! - Validated newtypes for the site URL and credentials
//! - Pluggable authentication strategies via [`AuthStrategy`]
//!   (application passwords, Basic, JWT, cookie + nonce)
//! - A shared request engine with retry, backoff, and single-flight
//!   credential refresh
//! - A deterministic fluent [`QueryBuilder`] for list endpoints
//! - Typed services for posts, pages, categories, tags, users, media, and
//!   comments
//! - Async and blocking client shells with identical behavior
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wordpress_api::{AppPassword, AuthStrategy, WordPress, PostParams, QueryBuilder};
//!
//! # async fn run() -> Result<(), wordpress_api::Error> {
//! let wp = WordPress::for_site(
//!     "https://example.com",
//!     AuthStrategy::app_password("admin", AppPassword::new("abcd efgh ijkl mnop")),
//! )?;
//!
//! // List recent posts
//! let page = wp.posts().list(QueryBuilder::new().per_page(10).build()?).await?;
//! for post in &page.items {
//!     println!("{:?}", post.title);
//! }
//!
//! // Create a draft
//! let draft = wp.posts().create(&PostParams::draft("Hello", "<p>World</p>")).await?;
//! println!("created post {}", draft.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocking Usage
//!
//! The [`blocking`] module offers the same surface without an async runtime:
//!
//! ```rust,no_run
//! use wordpress_api::blocking::WordPress;
//! use wordpress_api::AuthStrategy;
//!
//! # fn run() -> Result<(), wordpress_api::Error> {
//! let wp = WordPress::for_site("https://example.com", AuthStrategy::None)?;
//! let post = wp.posts().get(42)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns a single [`Error`] taxonomy. Retries for rate
//! limiting (429), server errors (5xx), and transport failures happen inside
//! the engine; callers see them only as latency. A 404 is never retried, and
//! a credential rejection triggers at most one refresh for strategies that
//! support it.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and credentials validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Deterministic queries**: Identical builder calls produce identical wire
//!   parameters
//! - **One engine**: Both client shells drive the same async request path

pub mod auth;
pub mod blocking;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod resources;
pub mod services;

// Re-export public types at crate root for convenience
pub use auth::{AuthStrategy, CredentialContext, Credentials};
pub use client::WordPress;
pub use config::{AppPassword, SiteUrl, WpConfig, WpConfigBuilder};
pub use error::{ConfigError, Error};
pub use query::{Order, Query, QueryBuilder, MAX_PER_PAGE};
pub use services::ListPage;

// Re-export HTTP client types
pub use clients::{HttpClient, HttpMethod, RawBody, WpRequest, WpRequestBuilder, WpResponse};

// Re-export resource models
pub use resources::{
    Category, CategoryParams, Comment, CommentParams, CommentStatus, Context, Media,
    MediaParams, Page, PageParams, PingStatus, Post, PostFormat, PostParams, PostStatus,
    Rendered, Tag, TagParams, User, UserParams,
};
