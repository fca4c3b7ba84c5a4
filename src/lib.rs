mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use adapters::pixel_format::{PixelFormatError, copy_pixel_buffer_to_rgba};
pub use controllers::headless::headless_controller::{HeadlessController, HeadlessError};
pub use controllers::interactive::{
    Button, FrameData, InputEvent, InteractiveController, PanDirection, WheelDirection,
    apply_event,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, render_frame, render_frame_sequential,
};
pub use crate::core::data::colour::{Colour, Hsl};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::view_state::ViewState;
pub use crate::core::fractals::multibrot::algorithm::evaluate;
pub use crate::core::fractals::multibrot::colour_mapping::errors::{ColourMapError, ConfigurationError};
pub use crate::core::fractals::multibrot::colour_mapping::kinds::Palette;
pub use crate::core::fractals::multibrot::colour_mapping::map::colour_for;
pub use crate::core::fractals::multibrot::kernel::multibrot_step;
pub use crate::core::fractals::multibrot::multibrot_config;
pub use crate::core::util::pixel_to_complex_coords::{to_complex, to_pixel};
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
