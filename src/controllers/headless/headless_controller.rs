use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::ViewState;

#[derive(Debug)]
pub enum HeadlessError {
    Render(RenderFrameError),
    NothingRendered,
    Io(std::io::Error),
}

impl fmt::Display for HeadlessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::NothingRendered => write!(f, "no frame has been rendered yet"),
            Self::Io(err) => write!(f, "could not write frame: {}", err),
        }
    }
}

impl Error for HeadlessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::NothingRendered => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RenderFrameError> for HeadlessError {
    fn from(err: RenderFrameError) -> Self {
        Self::Render(err)
    }
}

impl From<std::io::Error> for HeadlessError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Renders single frames without a window and hands them to a file presenter.
pub struct HeadlessController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> HeadlessController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, view: &ViewState, width: u32, height: u32) -> Result<(), HeadlessError> {
        info!(
            "rendering {}x{} multibrot: magnification {}, pan ({}, {}), exponent {}, rotation {}, palette {}",
            width,
            height,
            view.magnification,
            view.pan_x,
            view.pan_y,
            view.exponent,
            view.rotation_degrees,
            view.palette
        );

        let start = Instant::now();
        self.buffer = Some(render_frame(view, width, height)?);
        info!("render finished in {:?}", start.elapsed());

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), HeadlessError> {
        let buffer = self.buffer.as_ref().ok_or(HeadlessError::NothingRendered)?;

        self.presenter.present(buffer, filepath.as_ref())?;
        info!("saved to {}", filepath.as_ref().display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    #[test]
    fn write_before_generate_fails() {
        let presenter = RecordingPresenter::default();
        let controller = HeadlessController::new(&presenter);

        assert!(matches!(
            controller.write("frame.ppm"),
            Err(HeadlessError::NothingRendered)
        ));
        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn generate_then_write_presents_frame() {
        let presenter = RecordingPresenter::default();
        let mut controller = HeadlessController::new(&presenter);

        controller.generate(&ViewState::default(), 16, 8).unwrap();
        controller.write("frame.ppm").unwrap();

        assert_eq!(
            *presenter.presented.borrow(),
            vec![(PathBuf::from("frame.ppm"), 16 * 8 * 3)]
        );
    }

    #[test]
    fn generate_rejects_empty_surface() {
        let presenter = RecordingPresenter::default();
        let mut controller = HeadlessController::new(&presenter);

        assert!(matches!(
            controller.generate(&ViewState::default(), 0, 0),
            Err(HeadlessError::Render(RenderFrameError::Surface(_)))
        ));
        assert!(controller.buffer().is_none());
    }
}
