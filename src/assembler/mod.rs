pub mod frames;
pub mod resources;

use std::fmt;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageError};
use tracing::{debug, info};

use crate::parser::types::{DanceProgram, StyleTag};
use frames::{FrameSize, normalize_frame};
use resources::ResourceLayout;

#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("'{name}' is either an invalid step or spelled wrong (no file at {})", path.display())]
    UnknownMove { name: String, path: PathBuf },
    #[error("failed to open move '{name}' at {}", path.display())]
    OpenResource {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode move '{name}'")]
    Decode {
        name: String,
        #[source]
        source: ImageError,
    },
    #[error("the dance has no frames to write")]
    NoFrames,
    #[error("failed to encode combined GIF")]
    Encode(#[source] ImageError),
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyConfig {
    pub resource_root: PathBuf,
    pub frame_size: FrameSize,
    /// Display time of every frame; 30 ms (0.03 s) by default.
    pub frame_delay_ms: u32,
    /// GIF quantizer speed, 1 (best) to 30 (fastest).
    pub encoder_speed: i32,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            resource_root: PathBuf::from("."),
            frame_size: FrameSize::default(),
            frame_delay_ms: 30,
            encoder_speed: 10,
        }
    }
}

impl AssemblyConfig {
    fn frame_delay(&self) -> Delay {
        Delay::from_numer_denom_ms(self.frame_delay_ms, 1)
    }
}

/// Every frame of every move, in dance order, ready to encode.
pub struct CombinedArtifact {
    frames: Vec<Frame>,
    encoder_speed: i32,
}

impl fmt::Debug for CombinedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedArtifact")
            .field("frame_count", &self.frames.len())
            .field("encoder_speed", &self.encoder_speed)
            .finish()
    }
}

impl CombinedArtifact {
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Encodes an infinitely looping GIF into memory.
    pub fn encode(&self) -> Result<Vec<u8>, AssembleError> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new_with_speed(&mut bytes, self.encoder_speed);
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(AssembleError::Encode)?;
            for frame in &self.frames {
                encoder
                    .encode_frame(frame.clone())
                    .map_err(AssembleError::Encode)?;
            }
        }
        Ok(bytes)
    }

    /// Writes the GIF to `path`, replacing any existing file. Nothing is
    /// written if encoding fails.
    pub fn write_to(&self, path: &Path) -> Result<(), AssembleError> {
        let bytes = self.encode()?;
        std::fs::write(path, bytes).map_err(|source| AssembleError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), frames = self.frames.len(), "wrote combined GIF");
        Ok(())
    }
}

pub fn assemble(
    moves: &[String],
    style: StyleTag,
    config: &AssemblyConfig,
) -> Result<CombinedArtifact, AssembleError> {
    let layout = ResourceLayout::new(&config.resource_root);
    let delay = config.frame_delay();
    let mut frames = Vec::new();

    for move_name in moves {
        let resource = layout.resolve(style, move_name)?;
        let before = frames.len();
        for frame in resource.frames()? {
            frames.push(normalize_frame(frame?, config.frame_size, delay));
        }
        debug!(
            dance_move = %move_name,
            path = %resource.path().display(),
            frames = frames.len() - before,
            "added move"
        );
    }

    if frames.is_empty() {
        return Err(AssembleError::NoFrames);
    }

    Ok(CombinedArtifact {
        frames,
        encoder_speed: config.encoder_speed,
    })
}

/// Assembles `program` and writes `<out_dir>/<name>.gif`, returning its path.
pub fn render_dance(
    program: &DanceProgram,
    config: &AssemblyConfig,
    out_dir: &Path,
) -> Result<PathBuf, AssembleError> {
    let artifact = assemble(&program.moves, program.style, config)?;
    let path = out_dir.join(format!("{}.gif", program.name));
    artifact.write_to(&path)?;
    Ok(path)
}
