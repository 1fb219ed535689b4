//! Image references attached to tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to externally owned image data.
///
/// The task list never reads or releases the image itself; it only keeps
/// the locator and format tag handed over by the platform picker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    uri: String,
    mime: String,
}

impl ImageRef {
    /// Creates an image reference from a locator and a format tag.
    #[must_use]
    pub fn new(uri: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime: mime.into(),
        }
    }

    /// Returns the image locator.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the image format tag, e.g. `image/jpeg`.
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.uri, self.mime)
    }
}
