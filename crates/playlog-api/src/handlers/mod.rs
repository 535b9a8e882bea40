//! Route handlers organized by domain.

pub mod auth;
pub mod collection;
pub mod game;
pub mod health;
pub mod review;
pub mod user;
