//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and sidebar panels while reading shared
//! state from Leptos context providers.

pub mod location_card;
pub mod profile_sections;
pub mod sidebar;
pub mod toast_stack;
pub mod vital_charts;
