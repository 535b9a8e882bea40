//! Tower layers and Axum middleware applied to every route.

pub mod compression;
pub mod cors;
pub mod logging;
