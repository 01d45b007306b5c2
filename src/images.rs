// Image collection module
// Resolves command line arguments into the list of images to show

use anyhow::{Context, Result};
use image::ImageFormat;
use log::{debug, warn};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Whether `path` names a file in a format the viewer can decode
pub fn is_image(path: &Path) -> bool {
    path.is_file()
        && ImageFormat::from_path(path)
            .map(|format| format.reading_enabled())
            .unwrap_or(false)
}

/// Collect images from files and directories.
///
/// Files are kept when they are images; directories contribute their images
/// in name order (not recursively). With no arguments the working directory
/// is scanned.
pub fn collect_images(args: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if args.is_empty() {
        let cwd = env::current_dir().context("Failed to get working directory")?;
        return Ok(images_in_dir(&cwd));
    }

    let mut images = Vec::new();
    for path in args {
        if path.is_dir() {
            images.extend(images_in_dir(path));
        } else if is_image(path) {
            images.push(path.clone());
        } else if path.exists() {
            debug!("Skipping non-image file: {}", path.display());
        } else {
            warn!("No such file or directory: {}", path.display());
        }
    }
    Ok(images)
}

fn images_in_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to read directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_image(path))
        .collect();
    images.sort();

    debug!("Found {} images in {}", images.len(), dir.display());
    images
}
