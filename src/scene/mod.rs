/// Serde model of a scene document.
pub mod model;
/// Live scene state and per-frame snapshots.
pub mod runtime;
