// Adapters layer: concrete implementations backed by the host OS.

#[cfg(feature = "cli")]
pub mod system;
