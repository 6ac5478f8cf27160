//! View renderer: the fixed skeleton of search input, orientation
//! selector, search button and results container.

use super::mapper::escape;
use super::surface::Surface;
use crate::types::Orientation;

pub const SEARCH_INPUT_ID: &str = "searchQuery";
pub const ORIENTATION_SELECT_ID: &str = "orientationFilter";
pub const SEARCH_BUTTON_ID: &str = "searchButton";
pub const RESULTS_CONTAINER_ID: &str = "imageGrid";

/// Reset the surface to the initial skeleton. Root style properties are
/// owned by the host and survive a re-render.
pub fn render(surface: &mut Surface) {
    surface.search_text.clear();
    surface.orientation = Orientation::default();
    surface.clear_results();
}

pub fn markup(surface: &Surface) -> String {
    let options: String = Orientation::ALL
        .iter()
        .map(|orientation| {
            let selected = if *orientation == surface.orientation { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                orientation.as_str(),
                selected,
                orientation.label()
            )
        })
        .collect();

    let style = surface.style_attribute();
    let style_attr = if style.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, escape(&style))
    };

    format!(
        r#"<section class="imageGallery"{style_attr}>
  <div class="filters">
    <label for="{input_id}">Search</label>
    <input type="text" id="{input_id}" placeholder="Search images..." value="{value}" />
    <select id="{select_id}">{options}</select>
    <button id="{button_id}">Search</button>
  </div>
  <div id="{grid_id}" class="grid">{results}</div>
</section>"#,
        style_attr = style_attr,
        input_id = SEARCH_INPUT_ID,
        value = escape(&surface.search_text),
        select_id = ORIENTATION_SELECT_ID,
        options = options,
        button_id = SEARCH_BUTTON_ID,
        grid_id = RESULTS_CONTAINER_ID,
        results = surface.results_html(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_contains_controls() {
        let mut surface = Surface::new();
        render(&mut surface);
        let html = surface.to_html();

        assert!(html.contains(r#"id="searchQuery""#));
        assert!(html.contains(r#"placeholder="Search images...""#));
        assert!(html.contains(r#"<button id="searchButton">Search</button>"#));
        assert!(html.contains(r#"<div id="imageGrid" class="grid"></div>"#));

        let landscape = html.find(r#"value="landscape""#).unwrap();
        let portrait = html.find(r#"value="portrait""#).unwrap();
        let squarish = html.find(r#"value="squarish""#).unwrap();
        assert!(landscape < portrait && portrait < squarish);
    }

    #[test]
    fn test_render_is_idempotent_and_resets() {
        let mut surface = Surface::new();
        render(&mut surface);
        let first = surface.to_html();

        surface.search_text = "\"quoted\"".to_string();
        surface.orientation = Orientation::Squarish;
        surface.append_card("<div class=\"card\"></div>".to_string());
        assert!(surface.to_html().contains("value=\"&quot;quoted&quot;\""));

        render(&mut surface);
        assert_eq!(surface.to_html(), first);
        render(&mut surface);
        assert_eq!(surface.to_html(), first);
    }

    #[test]
    fn test_render_keeps_root_style() {
        let mut surface = Surface::new();
        surface.set_style_property("--link", Some("#0078d4"));
        render(&mut surface);
        assert!(surface.to_html().contains(r#"style="--link: #0078d4;""#));
    }
}
