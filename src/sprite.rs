//! Finding and loading the images that go into a spritesheet.

use std::{
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use fs_err as fs;
use walkdir::WalkDir;

use crate::image::Image;

/// An image to be packed, along with where it came from.
#[derive(Debug, Clone)]
pub(crate) struct Sprite {
    /// The file name of the image, without its extension.
    pub name: String,
    pub path: PathBuf,
    pub image: Image,
}

impl Sprite {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = BufReader::new(fs::File::open(path)?);
        let image = Image::decode_png(file)
            .with_context(|| format!("Could not decode {}", path.display()))?;

        log::debug!(
            "Loaded {} ({}x{})",
            path.display(),
            image.size().0,
            image.size().1
        );

        Ok(Self {
            name: sprite_name(path),
            path: path.to_owned(),
            image,
        })
    }
}

fn sprite_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Expands the given paths into a list of image files.
///
/// Files are kept as given, in order. Directories are searched recursively for
/// files with a `.png` extension, sorted by name so that the result doesn't
/// depend on the platform's directory listing order.
pub(crate) fn discover_inputs(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        let meta = fs::metadata(path)?;

        if meta.is_file() {
            found.push(path.clone());
            continue;
        }

        log::trace!("Searching for images in {}", path.display());

        for entry in WalkDir::new(path).sort_by(|a, b| a.file_name().cmp(b.file_name())) {
            let entry = entry?;

            if entry.file_type().is_file() && is_png(entry.path()) {
                found.push(entry.into_path());
            } else if entry.file_type().is_file() {
                log::warn!("Skipping {}, it isn't a PNG image", entry.path().display());
            }
        }
    }

    Ok(found)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("png"))
}
