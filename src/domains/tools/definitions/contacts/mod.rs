//! Contact tool definitions.

mod get;
mod search;

pub use get::GetContactTool;
pub use search::SearchContactsTool;
