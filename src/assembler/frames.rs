use image::imageops::{self, FilterType};
use image::{Delay, DynamicImage, Frame, Frames};

use super::AssembleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self::square(300)
    }
}

/// Decoded frames of one move, read on demand until the GIF runs out.
pub struct MoveFrames {
    name: String,
    frames: Frames<'static>,
}

impl MoveFrames {
    pub(super) fn new(name: String, frames: Frames<'static>) -> Self {
        Self { name, frames }
    }
}

impl Iterator for MoveFrames {
    type Item = Result<Frame, AssembleError>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frames.next()?;
        Some(frame.map_err(|source| AssembleError::Decode {
            name: self.name.clone(),
            source,
        }))
    }
}

/// Resizes to `size` with Lanczos3 and drops transparency, so frames from
/// different sources share one canvas and colour model.
pub fn normalize_frame(frame: Frame, size: FrameSize, delay: Delay) -> Frame {
    let resized = imageops::resize(
        frame.buffer(),
        size.width,
        size.height,
        FilterType::Lanczos3,
    );
    let opaque = DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(resized).into_rgb8()).into_rgba8();
    Frame::from_parts(opaque, 0, 0, delay)
}
