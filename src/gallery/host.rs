//! Host boundary: lifecycle callbacks and the settings-pane schema the
//! hosting runtime renders.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::AppResult;

pub const DATA_VERSION: &str = "1.0";

pub const PROPERTY_PANE_DESCRIPTION: &str = "Description";
pub const BASIC_GROUP_NAME: &str = "Group Name";
pub const DESCRIPTION_FIELD_LABEL: &str = "Description Field";

/// Lifecycle hooks a host runtime calls on the component.
#[async_trait]
pub trait HostAdapter: Send + Sync {
    async fn on_init(&self) -> AppResult<()>;

    async fn on_theme_change(&self, theme: Option<&Theme>);

    fn config_schema(&self) -> PropertyPaneConfiguration;

    fn data_version(&self) -> &'static str {
        DATA_VERSION
    }
}

/// Properties persisted by the host for one component instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryProperties {
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub semantic_colors: Option<SemanticColors>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticColors {
    #[serde(default)]
    pub body_text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_hovered: Option<String>,
}

impl SemanticColors {
    /// CSS custom properties this palette maps onto, in a fixed order.
    pub fn css_properties(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("--bodyText", self.body_text.as_deref()),
            ("--link", self.link.as_deref()),
            ("--linkHovered", self.link_hovered.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyPaneConfiguration {
    pub pages: Vec<PropertyPanePage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyPanePage {
    pub header: PropertyPaneHeader,
    pub groups: Vec<PropertyPaneGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyPaneHeader {
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPaneGroup {
    pub group_name: String,
    pub group_fields: Vec<PropertyPaneField>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropertyPaneField {
    #[serde(rename_all = "camelCase")]
    TextField { target_property: String, label: String },
}

impl PropertyPaneConfiguration {
    pub fn gallery_settings() -> Self {
        Self {
            pages: vec![PropertyPanePage {
                header: PropertyPaneHeader {
                    description: PROPERTY_PANE_DESCRIPTION.to_string(),
                },
                groups: vec![PropertyPaneGroup {
                    group_name: BASIC_GROUP_NAME.to_string(),
                    group_fields: vec![PropertyPaneField::TextField {
                        target_property: "description".to_string(),
                        label: DESCRIPTION_FIELD_LABEL.to_string(),
                    }],
                }],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_shape() {
        let schema = serde_json::to_value(PropertyPaneConfiguration::gallery_settings()).unwrap();
        assert_eq!(
            schema,
            serde_json::json!({
                "pages": [{
                    "header": { "description": "Description" },
                    "groups": [{
                        "groupName": "Group Name",
                        "groupFields": [{
                            "type": "textField",
                            "targetProperty": "description",
                            "label": "Description Field"
                        }]
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_theme_deserializes_partial_palette() {
        let theme: Theme = serde_json::from_str(r##"{"semanticColors": {"link": "#0078d4"}}"##).unwrap();
        let colors = theme.semantic_colors.unwrap();
        assert_eq!(
            colors.css_properties(),
            [("--bodyText", None), ("--link", Some("#0078d4")), ("--linkHovered", None)]
        );
    }
}
