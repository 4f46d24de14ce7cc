//! State Management
//!
//! Global feed state shared by all components.

pub mod global;

pub use global::{provide_global_state, GlobalState};
