//! tikfetch - HTTP edge service for TikTok media lookups
//!
//! This crate exposes a small HTTP service that accepts a TikTok post URL,
//! forwards it to the third-party TikWM resolver, and reshapes the resolver's
//! loosely-typed response into a stable contract that separates photo posts
//! from video posts and normalizes the available video variants.
//!
//! # Endpoints
//!
//! - `GET /api?url=<tiktok-url>` - JSON lookup result
//! - `OPTIONS *` - CORS preflight
//! - any other path - the bundled single-page web UI
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tikfetch::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     tikfetch::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! The interesting part of the crate is [`normalize`], the pure
//! transformation from the resolver's ad hoc schema to the outbound
//! [`NormalizedResult`] contract. Everything else is routing and glue.

pub mod config;
pub mod error;
pub mod middleware;
pub mod normalize;
pub mod routes;
pub mod server;
pub mod state;
pub mod upstream;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use normalize::{normalize, NormalizedResult, PhotoSet, VideoVariants};
pub use server::{build_router, start_server};
pub use state::AppState;
pub use upstream::{MediaResolver, TikwmClient};
