//! Port contracts for the entry form.

pub mod image_picker;

pub use image_picker::{ImagePicker, ImagePickerConfig, PickedImage};

#[cfg(test)]
pub use image_picker::MockImagePicker;
