//! GUI input adapter for interactive multibrot exploration.
//!
//! Uses winit for the window and input events, pixels for the framebuffer
//! and egui for the control panel.

pub mod app;
pub mod commands;
