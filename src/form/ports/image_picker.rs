//! Image acquisition port.

use crate::task::domain::ImageRef;
use serde::{Deserialize, Serialize};

/// Options handed to the platform picker.
///
/// The form does not interpret the crop settings; they are passed through
/// unchanged.
///
/// # Examples
///
/// ```
/// use taskpad::form::ports::ImagePickerConfig;
///
/// let config = ImagePickerConfig::default();
/// assert_eq!((config.width, config.height), (300, 300));
/// assert!(config.cropping);
///
/// let raw = ImagePickerConfig::uncropped();
/// assert!(!raw.cropping);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePickerConfig {
    /// Crop width in pixels.
    pub width: u32,
    /// Crop height in pixels.
    pub height: u32,
    /// Whether the user is asked to crop the picked image.
    pub cropping: bool,
}

impl Default for ImagePickerConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            cropping: true,
        }
    }
}

impl ImagePickerConfig {
    /// Creates a configuration that returns the image without cropping.
    #[must_use]
    pub fn uncropped() -> Self {
        Self {
            cropping: false,
            ..Self::default()
        }
    }
}

/// Image returned by the platform picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedImage {
    /// Location of the picked (and possibly cropped) image.
    pub path: String,
    /// Format tag, e.g. `image/jpeg`.
    pub mime: String,
}

impl From<PickedImage> for ImageRef {
    fn from(image: PickedImage) -> Self {
        Self::new(image.path, image.mime)
    }
}

/// Platform image picker.
///
/// Returns `None` when the user cancels; a cancelled pick is not an error.
#[cfg_attr(test, mockall::automock)]
pub trait ImagePicker {
    /// Lets the user pick and crop an image.
    fn pick(&self, config: &ImagePickerConfig) -> Option<PickedImage>;
}
