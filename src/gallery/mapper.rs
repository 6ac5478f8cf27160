//! Result mapper: turns image records into cards in the results container.

use super::surface::Surface;
use crate::types::ImageResult;

/// Caption shown for images without a description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Escape the five markup-significant characters.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn card_html(image: &ImageResult) -> String {
    let alt = image.description.as_deref().unwrap_or("");
    let caption = image.description.as_deref().unwrap_or(NO_DESCRIPTION);

    format!(
        r#"<div class="card"><img src="{}" alt="{}" class="image" /><p>{}</p></div>"#,
        escape(&image.thumbnail_url),
        escape(alt),
        escape(caption)
    )
}

/// Replace the results container with one card per image, in order.
pub fn render_images(surface: &mut Surface, images: &[ImageResult]) {
    surface.clear_results();
    for image in images {
        surface.append_card(card_html(image));
    }
}
