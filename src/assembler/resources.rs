use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use super::AssembleError;
use super::frames::MoveFrames;
use crate::parser::types::StyleTag;

/// Maps styles and move names onto `<root>/<style> gifs/<move>.gif`.
#[derive(Debug, Clone)]
pub struct ResourceLayout {
    root: PathBuf,
}

impl ResourceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn style_dir(&self, style: StyleTag) -> PathBuf {
        self.root.join(style.directory_name())
    }

    pub fn move_path(&self, style: StyleTag, move_name: &str) -> PathBuf {
        self.style_dir(style).join(format!("{move_name}.gif"))
    }

    pub fn resolve(&self, style: StyleTag, move_name: &str) -> Result<MoveResource, AssembleError> {
        let path = self.move_path(style, move_name);
        if !path.is_file() {
            return Err(AssembleError::UnknownMove {
                name: move_name.to_string(),
                path,
            });
        }
        Ok(MoveResource {
            name: move_name.to_string(),
            path,
        })
    }
}

/// A move GIF on disk. Never written by this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResource {
    pub name: String,
    pub path: PathBuf,
}

impl MoveResource {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the GIF and returns its frames lazily. Call again to restart.
    pub fn frames(&self) -> Result<MoveFrames, AssembleError> {
        let file = File::open(&self.path).map_err(|source| AssembleError::OpenResource {
            name: self.name.clone(),
            path: self.path.clone(),
            source,
        })?;
        let decoder =
            GifDecoder::new(BufReader::new(file)).map_err(|source| AssembleError::Decode {
                name: self.name.clone(),
                source,
            })?;
        Ok(MoveFrames::new(self.name.clone(), decoder.into_frames()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_dir_naming() {
        let layout = ResourceLayout::new("/assets");
        assert_eq!(
            layout.style_dir(StyleTag::Breaking),
            PathBuf::from("/assets/breaking gifs")
        );
    }

    #[test]
    fn test_move_path_is_case_sensitive() {
        let layout = ResourceLayout::new("/assets");
        assert_eq!(
            layout.move_path(StyleTag::Ballet, "Pirouette"),
            PathBuf::from("/assets/ballet gifs/Pirouette.gif")
        );
    }

    #[test]
    fn test_resolve_missing_move() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ResourceLayout::new(dir.path());
        let err = layout.resolve(StyleTag::Ballet, "spin").unwrap_err();
        match err {
            AssembleError::UnknownMove { name, path } => {
                assert_eq!(name, "spin");
                assert!(path.ends_with("ballet gifs/spin.gif"));
            }
            other => panic!("Expected UnknownMove, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_directory_is_not_a_move() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("ballet gifs/spin.gif")).unwrap();
        let layout = ResourceLayout::new(dir.path());
        assert!(matches!(
            layout.resolve(StyleTag::Ballet, "spin"),
            Err(AssembleError::UnknownMove { .. })
        ));
    }

    #[test]
    fn test_resolve_existing_move() {
        let dir = tempfile::tempdir().unwrap();
        let style_dir = dir.path().join("dancehall gifs");
        std::fs::create_dir_all(&style_dir).unwrap();
        std::fs::write(style_dir.join("bogle.gif"), b"GIF89a").unwrap();

        let layout = ResourceLayout::new(dir.path());
        let resource = layout.resolve(StyleTag::Dancehall, "bogle").unwrap();
        assert_eq!(resource.name, "bogle");
        assert_eq!(resource.path(), style_dir.join("bogle.gif"));
    }

    #[test]
    fn test_frames_on_corrupt_gif_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let style_dir = dir.path().join("ballet gifs");
        std::fs::create_dir_all(&style_dir).unwrap();
        std::fs::write(style_dir.join("broken.gif"), b"not a gif at all").unwrap();

        let layout = ResourceLayout::new(dir.path());
        let resource = layout.resolve(StyleTag::Ballet, "broken").unwrap();
        let err = resource.frames().err().unwrap();
        assert!(err.to_string().contains("broken"), "{err}");
    }
}
