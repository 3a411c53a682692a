//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, navigation)
//! from page and flow logic to improve reuse and testability.

pub mod auth;
pub mod nav;
pub mod storage;
