//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (geolocation, charting, alerts
//! and page navigation) from page and component logic so the decisions can
//! be tested natively.

pub mod browser;
pub mod charts;
pub mod generation;
pub mod geolocation;
