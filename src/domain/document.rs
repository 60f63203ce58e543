use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One document flattened out of its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentRecord {
    pub id: u32,
    pub title: String,
    pub doc_type: String,
    pub category: String,
    pub category_id: String,
    pub url: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

impl DocumentRecord {
    pub fn search_fields(&self) -> [&str; 4] {
        [&self.title, &self.category, &self.doc_type, &self.description]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocStyle {
    pub icon: String,
    pub color: String,
}

impl DocStyle {
    pub fn new(icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// Icon and color per document type, with a fallback for unknown types.
#[derive(Debug, Clone, PartialEq)]
pub struct DocStyleTable {
    styles: HashMap<String, DocStyle>,
    fallback: DocStyle,
}

impl DocStyleTable {
    pub fn new(fallback: DocStyle) -> Self {
        Self {
            styles: HashMap::new(),
            fallback,
        }
    }

    pub fn with_style(mut self, doc_type: impl Into<String>, style: DocStyle) -> Self {
        self.styles.insert(doc_type.into(), style);
        self
    }

    pub fn style_for(&self, doc_type: &str) -> &DocStyle {
        self.styles.get(doc_type).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &DocStyle {
        &self.fallback
    }
}

impl Default for DocStyleTable {
    fn default() -> Self {
        Self::new(DocStyle::new("📄", "#2563eb"))
            .with_style("User Manual", DocStyle::new("📖", "#3b82f6"))
            .with_style("Spec Sheet", DocStyle::new("📋", "#8b5cf6"))
            .with_style("Warranty Info", DocStyle::new("🛡️", "#10b981"))
            .with_style("Installation Guide", DocStyle::new("🔧", "#f59e0b"))
            .with_style("Quick Start", DocStyle::new("⚡", "#ef4444"))
            .with_style("Technical Specifications", DocStyle::new("📊", "#06b6d4"))
            .with_style("Datasheet", DocStyle::new("📄", "#6366f1"))
    }
}
