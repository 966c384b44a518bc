//! Image intake: type check and data-URI encoding for uploaded files.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::MediPlantError;

/// True when the declared MIME type is an image type.
pub fn is_image_type(mime: &str) -> bool {
    mime.starts_with("image/")
}

pub fn check_type(mime: &str) -> Result<(), MediPlantError> {
    if is_image_type(mime) {
        Ok(())
    } else {
        Err(MediPlantError::UnsupportedType(if mime.is_empty() {
            "(none)".to_string()
        } else {
            mime.to_string()
        }))
    }
}

/// Build a `data:` URI carrying `bytes` as standard base64.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read a browser `File` into a data URI.
///
/// Files whose declared type is not `image/*` are rejected before any bytes
/// are read.
pub async fn read_as_data_uri(file: web_sys::File) -> Result<String, MediPlantError> {
    let mime = file.type_();
    check_type(&mime)?;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| MediPlantError::FileRead(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| MediPlantError::FileRead("result is not an ArrayBuffer".to_string()))?;

    let bytes = Uint8Array::new(&array_buffer).to_vec();
    tracing::info!(name = %file.name(), %mime, size = bytes.len(), "image accepted");

    Ok(encode_data_uri(&mime, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_image_types_accepted() {
        for mime in ["image/png", "image/jpeg", "image/webp", "image/svg+xml"] {
            assert!(check_type(mime).is_ok(), "{} should be accepted", mime);
        }
    }

    #[test]
    fn test_non_image_types_rejected() {
        for mime in ["text/plain", "application/pdf", "video/mp4", "", "image", "IMAGE/PNG"] {
            assert!(
                matches!(check_type(mime), Err(MediPlantError::UnsupportedType(_))),
                "{:?} should be rejected",
                mime
            );
        }
    }

    #[test]
    fn test_missing_type_message() {
        let err = check_type("").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type: (none)");
    }

    #[test]
    fn test_encode_data_uri() {
        assert_eq!(
            encode_data_uri("image/png", b"hello"),
            "data:image/png;base64,aGVsbG8="
        );
        assert_eq!(encode_data_uri("image/gif", b""), "data:image/gif;base64,");
    }

    fn mime_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "image/[a-z0-9+.-]{1,10}",
            "[a-z]{0,12}/?[a-z0-9+.-]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn test_prefix_decides_acceptance(mime in mime_strategy()) {
            prop_assert_eq!(check_type(&mime).is_ok(), mime.starts_with("image/"));
        }

        #[test]
        fn test_image_prefix_always_accepted(subtype in "[a-z0-9+.-]{1,10}") {
            let mime = format!("image/{}", subtype);
            prop_assert!(check_type(&mime).is_ok());
        }
    }
}
