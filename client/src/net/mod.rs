//! Networking and external-service adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` reads the profile collections, `session` reads the persisted auth
//! session, `geocode` resolves coordinates to an address, and `types` defines
//! the record schema shared by all of them.

pub mod geocode;
pub mod session;
pub mod store;
pub mod types;
