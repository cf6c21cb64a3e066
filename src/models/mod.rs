//! Data models for the content hierarchy and the gateway wire format.

mod gateway;
mod node;

pub use gateway::*;
pub use node::*;
