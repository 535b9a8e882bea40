//! IGDB implementation of the `GameCatalog` port.

mod catalog;
pub mod model;

pub use catalog::{DEFAULT_FIELDS, IgdbCatalog};
pub use model::IgdbGame;
