use std::collections::BTreeMap;

use crate::types::Orientation;

/// In-process model of the component's rendering surface.
///
/// Holds the two input values the dispatcher reads at trigger time, the
/// results container, and the custom properties set on the root element.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    pub search_text: String,
    pub orientation: Orientation,
    cards: Vec<String>,
    style: BTreeMap<String, String>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered cards, in display order.
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn clear_results(&mut self) {
        self.cards.clear();
    }

    pub fn append_card(&mut self, card: String) {
        self.cards.push(card);
    }

    /// Inner markup of the results container.
    pub fn results_html(&self) -> String {
        self.cards.concat()
    }

    /// Set a CSS custom property on the root element; `None` removes it.
    ///
    /// A value that could end the declaration or open a block is refused and
    /// the property is left as it was. Returns whether the value was applied.
    pub fn set_style_property(&mut self, name: &str, value: Option<&str>) -> bool {
        match value {
            Some(value) if !is_single_css_value(value) => false,
            Some(value) => {
                self.style.insert(name.to_string(), value.to_string());
                true
            }
            None => {
                self.style.remove(name);
                true
            }
        }
    }

    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    /// Inline `style` attribute value for the root element.
    pub fn style_attribute(&self) -> String {
        self.style
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full markup of the component.
    pub fn to_html(&self) -> String {
        super::view::markup(self)
    }
}

fn is_single_css_value(value: &str) -> bool {
    !value.contains(|c| matches!(c, ';' | '{' | '}'))
}
