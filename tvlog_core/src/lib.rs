#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Core of the tvlog series tracker.
//!
//! Everything the interactive session needs lives here: the record model,
//! field validators, the in-memory store, search filters, menu commands and
//! the console-driven session loop itself.

pub mod console;
pub mod display;
pub mod menu;
pub mod record;
pub mod search;
pub mod session;
pub mod store;
pub mod validate;

pub use console::{Console, ConsoleError};
pub use display::DisplayConfig;
pub use menu::{MenuCommand, SearchCommand};
pub use record::{RecordId, SeriesDraft, SeriesRecord};
pub use search::SearchFilter;
pub use session::Session;
pub use store::{SeriesStore, StoreError};
pub use validate::{FieldError, RawFields};
