//! HTTP-level integration tests. Every test builds its own app over
//! in-memory stores and a fixed catalog, so they run without Postgres or
//! network access.

mod helpers;

mod auth_test;
mod collection_test;
mod game_test;
mod review_test;
mod user_test;
