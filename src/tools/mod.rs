//! Tool-calling surface for the conversational layer.
//!
//! The model sees the four operations as named functions with JSON
//! arguments; every result is a JSON value it can phrase a reply from.

mod declarations;
mod dispatch;

pub use declarations::{declarations, ToolDeclaration, ToolName};
pub use dispatch::{dispatch, dispatch_in_session, ToolCall, ToolError, ToolFailure, ToolResponse};
