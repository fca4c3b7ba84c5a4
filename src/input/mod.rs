//! Input adapters that translate host input into controller events.

#[cfg(feature = "gui")]
pub mod gui;
