//! HTTP route handlers
//!
//! - `api`: the JSON lookup endpoint (`GET /api?url=...`)
//! - `ui`: the single-page web UI served for every other path

pub mod api;
pub mod ui;
