//! Pure-computation conversion of a [`Frame`] into display formats.
//!
//! Frames hold fixed-point values in `[0, SCALE]`; viewers want 8-bit
//! intensities, and the CLI wants something it can print to a terminal.

use fixnoise_core::fixed::{to_u8, SCALE};
use fixnoise_core::frame::Frame;

/// Shade ramp from dark to light, one character per intensity band.
const SHADES: &[u8] = b" .:-=+*#%@";

/// Maps frame values to an 8-bit grayscale buffer via `v * 255 / SCALE`.
///
/// The buffer length is `width * height`, row-major.
pub fn frame_to_gray8(frame: &Frame) -> Vec<u8> {
    frame.data().iter().map(|&v| to_u8(v)).collect()
}

/// Renders a frame as lines of shade characters, one per pixel.
///
/// Every `stride`-th column and row is kept so large frames fit a terminal;
/// a stride of 0 is treated as 1.
pub fn frame_to_shades(frame: &Frame, stride: usize) -> String {
    let stride = stride.max(1);
    let last = (SHADES.len() - 1) as i32;
    let mut out = String::new();
    for y in (0..frame.height()).step_by(stride) {
        for x in (0..frame.width()).step_by(stride) {
            let v = frame.get(x as isize, y as isize).clamp(0, SCALE);
            let band = (v * last / SCALE) as usize;
            out.push(char::from(SHADES[band]));
        }
        out.push('\n');
    }
    out
}
