pub mod controller;
pub mod pagination;
pub mod search;

pub use crate::domain::model::{AdvocateRow, AdvocatesResponse};
pub use crate::domain::ports::{AdvocateSource, ConfigProvider, OutputFormat};
pub use crate::utils::error::Result;
