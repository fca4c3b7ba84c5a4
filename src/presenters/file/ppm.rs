use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::write_ppm;

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        write_ppm(buffer, BufWriter::new(File::create(filepath)?))
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn present_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("multibrot-ppm-{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::from_data(PixelRect::new(4, 3).unwrap(), vec![0; 36]).unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n4 3\n255\n"));
        assert_eq!(written.len(), b"P6\n4 3\n255\n".len() + 4 * 3 * 3);

        fs::remove_dir_all(&dir).unwrap();
    }
}
