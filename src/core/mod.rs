pub mod delays;
pub mod github;
pub mod http;
pub mod stream;
pub mod typed;

pub use crate::domain::model::Number;
pub use crate::domain::ports::JsonFetcher;
pub use crate::utils::error::Result;
