// HTTP routes
pub mod action_items;
pub mod health;
pub mod notes;

pub use action_items::*;
pub use health::*;
pub use notes::*;
