//! Receipt scan domain model.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{OmycookError, Result};
use crate::ingredient::{Category, NewIngredient};

/// A receipt photo, kept only as a preview data URL.
///
/// Pixel content is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime: String,
    pub data_url: String,
}

impl UploadedImage {
    /// Wraps raw file bytes.
    ///
    /// # Errors
    ///
    /// - `UnsupportedImage` when `mime` is not an `image/*` type
    /// - `InvalidInput` when `bytes` is empty
    pub fn from_bytes(file_name: impl Into<String>, mime: &str, bytes: &[u8]) -> Result<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if !mime.starts_with("image/") {
            return Err(OmycookError::unsupported_image(mime));
        }
        let file_name = file_name.into();
        if bytes.is_empty() {
            return Err(OmycookError::invalid_input(format!("{} is empty", file_name)));
        }

        let data_url = format!("data:{};base64,{}", mime, STANDARD.encode(bytes));
        Ok(Self {
            file_name,
            mime,
            data_url,
        })
    }

    /// Size of the encoded preview in bytes.
    pub fn preview_len(&self) -> usize {
        self.data_url.len()
    }
}

/// A line item recognised on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    pub category: Category,
    /// Only confirmed items are committed to the pantry.
    pub confirmed: bool,
}

impl ScannedIngredient {
    pub fn confirmed(name: impl Into<String>, quantity: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity.into()),
            category,
            confirmed: true,
        }
    }

    pub fn to_new_ingredient(&self) -> NewIngredient {
        NewIngredient::new(self.name.clone(), self.category, self.quantity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_data_url() {
        let image = UploadedImage::from_bytes("receipt.png", "image/png", b"abc").unwrap();
        assert_eq!(image.data_url, "data:image/png;base64,YWJj");
        assert_eq!(image.file_name, "receipt.png");
    }

    #[test]
    fn test_image_mime_is_normalized() {
        let image = UploadedImage::from_bytes("r.JPG", " Image/JPEG ", b"x").unwrap();
        assert_eq!(image.mime, "image/jpeg");
    }

    #[test]
    fn test_non_image_rejected() {
        let err = UploadedImage::from_bytes("notes.txt", "text/plain", b"hi").unwrap_err();
        assert!(matches!(err, OmycookError::UnsupportedImage { .. }));
    }

    #[test]
    fn test_empty_file_rejected() {
        let err = UploadedImage::from_bytes("empty.png", "image/png", b"").unwrap_err();
        assert!(err.is_invalid_input());
    }
}
