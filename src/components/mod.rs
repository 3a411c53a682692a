//! Reusable view components.

pub mod alert_box;
pub mod result_panel;
