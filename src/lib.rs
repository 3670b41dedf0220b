pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::DirectoryConfig;

pub use crate::adapters::HttpAdvocateSource;
pub use crate::core::controller::{CancellationFlag, LoadState, PageController};
pub use crate::core::pagination::{visible_rows, PaginationWindow, PAGE_SIZE};
pub use crate::core::search::{build_advocate_filter, contains, matches_advocate_query, SearchField};
pub use crate::domain::model::AdvocateRow;
pub use crate::utils::error::{DirectoryError, LoadError, Result};
