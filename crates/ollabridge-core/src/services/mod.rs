//! Application services.

mod bridge;

pub use bridge::{BridgeError, BridgeService};
