pub mod action_item;

pub use action_item::{ActionItemSummary, ExtractResponse};
