use std::io::Write;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary PPM (P6) image.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}
