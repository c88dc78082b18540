//! Card Image Loader
//!
//! Displays a catalog image. Local files are read off the UI thread and
//! embedded as base64 data URIs; URLs and data URIs are used as-is.

use base64::Engine;
use dioxus::prelude::*;
use phonecards_core::ImageRef;

/// Encode raw image bytes as a data URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}

/// Display a catalog image, loading local files asynchronously
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     CardImage {
///         image: ImageRef::new("assets/france/telecarte_50.jpg"),
///         class: "gallery-table__thumb".to_string(),
///     }
/// }
/// ```
#[component]
pub fn CardImage(
    /// Image to display
    image: ImageRef,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let mut image_data = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let source = image.clone();
    use_effect(move || {
        let source = source.clone();
        if source.is_inline() {
            image_data.set(Some(source.src));
            loading.set(false);
            return;
        }
        spawn(async move {
            loading.set(true);
            error.set(None);

            let path = source.src.clone();
            let mime = source.mime_type();
            match tokio::task::spawn_blocking(move || std::fs::read(&path)).await {
                Ok(Ok(bytes)) => {
                    image_data.set(Some(data_uri(mime, &bytes)));
                }
                Ok(Err(e)) => {
                    tracing::warn!(src = %source.src, "Failed to read card image: {}", e);
                    error.set(Some(format!("Cannot read image: {}", e)));
                }
                Err(e) => {
                    error.set(Some(format!("Image loader failed: {}", e)));
                }
            }
            loading.set(false);
        });
    });

    let css_class = class.unwrap_or_else(|| "card-image__img".to_string());
    let alt = image.display_name();

    rsx! {
        if loading() {
            div { class: "card-image__loading",
                div { class: "loading-spinner" }
            }
        } else if let Some(err) = error() {
            div { class: "card-image__placeholder", title: "{err}",
                "?"
            }
        } else if let Some(uri) = image_data() {
            img { class: "{css_class}", src: "{uri}", alt: "{alt}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_has_mime_and_payload() {
        let uri = data_uri("image/png", b"abc");
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }
}
