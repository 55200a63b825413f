//! Saved label templates and folders.
//!
//! These mirror the JSON records of the template persistence service, so
//! field names serialize in camelCase.

use crate::error::{TemplateError, TemplateResult};
use crate::types::{CanvasItem, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// Enclosing folder; `None` at the root
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// A named input of a template used for mail-merge style filling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateField {
    pub name: String,
    pub label: String,
    /// Item whose content the field fills
    pub target_item_id: ItemId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateRole {
    Draft,
    Filled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub folder_id: Option<String>,
    /// Label width in millimeters
    pub width: f32,
    /// Label height in millimeters
    pub height: f32,
    pub items: Vec<CanvasItem>,
    /// Creation time, milliseconds since the Unix epoch
    #[serde(default)]
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<TemplateRole>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<TemplateField>,
}

impl LabelTemplate {
    /// Parse and validate a template from JSON.
    pub fn from_json(json: &str) -> TemplateResult<Self> {
        let template: Self = serde_json::from_str(json)?;
        template.validate()?;
        Ok(template)
    }

    /// Check the label size and that item ids are unique.
    pub fn validate(&self) -> TemplateResult<()> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(TemplateError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(&item.id) {
                return Err(TemplateError::DuplicateItemId(item.id.to_string()));
            }
        }
        Ok(())
    }

    pub fn is_filled(&self) -> bool {
        self.role == Some(TemplateRole::Filled)
    }
}

/// Body of a save request: everything the service does not assign itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePayload {
    pub name: String,
    pub folder_id: Option<String>,
    pub width: f32,
    pub height: f32,
    pub items: Vec<CanvasItem>,
}

impl TemplatePayload {
    pub fn to_json_pretty(&self) -> TemplateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
