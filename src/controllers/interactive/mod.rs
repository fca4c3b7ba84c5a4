//! Interactive controller for exploring the multibrot.
//!
//! Input adapters translate host events (clicks, wheel, buttons, keys) into
//! [`InputEvent`]s; the controller applies them to its [`ViewState`] and
//! renders on request.
//!
//! [`ViewState`]: crate::core::data::view_state::ViewState

mod controller;
pub mod data;
pub mod events;

pub use controller::{InteractiveController, apply_event};
pub use data::frame_data::FrameData;
pub use events::input::{Button, InputEvent, PanDirection, WheelDirection};
