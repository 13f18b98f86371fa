//! Random Fox payload.

use serde::{Deserialize, Serialize};

/// Body returned by the random fox endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoxImage {
    pub image: String,
    pub link: String,
}

impl FoxImage {
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BindError;

    #[test]
    fn test_parse_floof() {
        let fox = FoxImage::from_json(
            r#"{"image":"https:\/\/randomfox.ca\/images\/73.jpg","link":"https:\/\/randomfox.ca\/?i=73"}"#,
        )
        .unwrap();
        assert_eq!(fox.image, "https://randomfox.ca/images/73.jpg");
        assert_eq!(fox.link, "https://randomfox.ca/?i=73");
    }

    #[test]
    fn test_parse_missing_field() {
        assert!(matches!(
            FoxImage::from_json(r#"{"image":"x"}"#),
            Err(BindError::Json(_))
        ));
    }
}
