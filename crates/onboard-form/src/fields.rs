//! # Field-Requiredness Catalog
//!
//! The static description of every form field: its id, display label, the
//! wizard step it belongs to, and whether it must be answered. Requiredness
//! is advisory; it feeds the review, never blocks input.

use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::FormResult;

/// One form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    /// Label for messages, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// All field descriptors, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    fields: Vec<FieldDescriptor>,
}

impl FieldCatalog {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// Load a field catalog from a JSON or YAML file.
    pub fn load(path: &Path) -> FormResult<Self> {
        let catalog: Self = onboard_consent::load_typed(path)?;
        tracing::debug!(
            path = %path.display(),
            fields = catalog.fields.len(),
            required = catalog.required_fields().count(),
            "loaded field catalog"
        );
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Whether the field must be answered. Unknown ids are optional.
    pub fn is_field_required(&self, id: &str) -> bool {
        self.get(id).is_some_and(|f| f.required)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn fields_for_step<'a>(
        &'a self,
        step: &'a str,
    ) -> impl Iterator<Item = &'a FieldDescriptor> {
        self.fields
            .iter()
            .filter(move |f| f.step.as_deref() == Some(step))
    }

    /// Step names in first-seen order. Fields without a step are skipped.
    pub fn steps(&self) -> IndexSet<String> {
        self.fields.iter().filter_map(|f| f.step.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
