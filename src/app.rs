// Application state module
// Navigation, zoom and rotation state of the viewer

use crate::settings::Settings;
use std::path::PathBuf;

/// State of the viewer between frames
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Images in display order
    pub images: Vec<PathBuf>,
    /// Index of the image on screen, `None` while the list is empty
    pub current: Option<usize>,
    /// Zoom level (1.0 = 100%)
    pub scale: f32,
    /// Rotation in degrees, a multiple of 90 in (-360, 360)
    pub angle: i32,
    scale_factor: f32,
    min_scale: f32,
}

impl ViewerState {
    pub fn new(images: Vec<PathBuf>, settings: &Settings) -> Self {
        let current = if images.is_empty() { None } else { Some(0) };
        Self {
            images,
            current,
            scale: 1.0,
            angle: 0,
            scale_factor: settings.scale_factor,
            min_scale: settings.min_scale,
        }
    }

    pub fn current_image(&self) -> Option<&PathBuf> {
        self.images.get(self.current?)
    }

    /// Add images, e.g. after a drop; shows the first one if nothing was shown
    pub fn add_images(&mut self, images: impl IntoIterator<Item = PathBuf>) {
        self.images.extend(images);
        if self.current.is_none() && !self.images.is_empty() {
            self.current = Some(0);
            self.reset_view();
        }
    }

    /// Move to the next image. Returns false at the end of the list.
    pub fn next(&mut self) -> bool {
        match self.current {
            Some(i) if i + 1 < self.images.len() => {
                self.current = Some(i + 1);
                self.reset_view();
                true
            }
            _ => false,
        }
    }

    /// Move to the previous image. Returns false at the start of the list.
    pub fn prev(&mut self) -> bool {
        match self.current {
            Some(i) if i > 0 => {
                self.current = Some(i - 1);
                self.reset_view();
                true
            }
            _ => false,
        }
    }

    pub fn rotate_left(&mut self) {
        self.angle = (self.angle + 90) % 360;
    }

    pub fn rotate_right(&mut self) {
        self.angle = (self.angle - 90) % 360;
    }

    /// Apply a scroll-wheel step, never going below the minimum zoom
    pub fn zoom(&mut self, scroll: f32) {
        self.scale = (self.scale + scroll * self.scale_factor).max(self.min_scale);
    }

    pub fn reset_view(&mut self) {
        self.scale = 1.0;
        self.angle = 0;
    }

    /// Status text shown under the image, e.g. `[2/5](zoom 130.00%) cat.png`
    pub fn status_line(&self) -> String {
        match (self.current, self.current_image()) {
            (Some(i), Some(path)) => format!(
                "[{}/{}](zoom {:.2}%) {}",
                i + 1,
                self.images.len(),
                self.scale * 100.0,
                path.display()
            ),
            _ => "Drag and Drop image(s) file or Folder containing image(s)".to_string(),
        }
    }
}
