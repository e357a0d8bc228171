//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`sidebar`, `profile`, `location`, `toast`) so
//! components depend on small focused models provided as `RwSignal` context.

pub mod location;
pub mod profile;
pub mod sidebar;
pub mod toast;
