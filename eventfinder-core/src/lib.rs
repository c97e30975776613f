//! Core of eventfinder.
//!
//! This crate holds everything the front end needs besides rendering:
//! - `event` / `loader` for the event catalog and where it comes from
//! - `criteria` / `select` for the filter/sort engine and the home page sections
//! - `geo` for distances and the nearby view
//! - `favorites` / `reviews` on top of the local `store`

pub mod config;
pub mod criteria;
pub mod date_expr;
pub mod error;
pub mod event;
pub mod favorites;
pub mod geo;
pub mod links;
pub mod loader;
pub mod period;
pub mod reviews;
pub mod select;
pub mod status;
pub mod store;

pub use error::{EventfinderError, EventfinderResult};
pub use event::{Event, EventCatalog};
