pub mod data;
pub mod models;

pub use data::{ActionItemSummary, ExtractResponse};
pub use models::ActionItem;
