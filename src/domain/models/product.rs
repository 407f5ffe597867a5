use serde::{Deserialize, Serialize};

/// Path the embedding UI serves when a product has no usable image
pub const PLACEHOLDER_IMAGE_URL: &str = "/images/product-placeholder.svg";

/// Catalog product as the workstation displays it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(id: String, name: String, image_url: Option<String>) -> Self {
        Self {
            id,
            name,
            image_url,
        }
    }

    /// URL to display for this product
    ///
    /// Falls back to the placeholder when no image was recorded or the
    /// recorded value is blank.
    pub fn display_image_url(&self) -> &str {
        match &self.image_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_IMAGE_URL,
        }
    }
}
