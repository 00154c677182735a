//! Static files compiled into the binary.

use log::debug;
use rust_embed::RustEmbed;

use super::types::HandlerResponse;
use crate::error_handling::types::WebError;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/static/"]
struct Assets;

/// Looks up an embedded file by its path below `/static/`.
pub fn serve_asset(path: &str) -> Result<HandlerResponse, WebError> {
    let file = Assets::get(path).ok_or_else(|| WebError::NotFound(format!("static/{}", path)))?;
    let content_type = mime_guess::from_path(path).first_or_octet_stream();
    debug!("Serving asset {} as {}", path, content_type);
    Ok(HandlerResponse::Asset {
        content_type: content_type.to_string(),
        body: file.data.into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_embedded() {
        match serve_asset("style.css").unwrap() {
            HandlerResponse::Asset { content_type, body } => {
                assert_eq!(content_type, "text/css");
                assert!(!body.is_empty());
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn unknown_asset_is_not_found() {
        assert!(matches!(serve_asset("missing.js"), Err(WebError::NotFound(_))));
    }
}
