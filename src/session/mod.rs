//! Multiple concurrent games, one per session.

mod registry;

pub use registry::{SessionRegistry, SharedReferee};
