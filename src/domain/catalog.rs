use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Source files use both `"id": "ceiling"` and `"id": 3`.
fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Prices are usually text (`"$1,299"`) but some files carry bare numbers.
fn price_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Top-level entry of `products.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductCategory {
    #[serde(default, deserialize_with = "id_from_any")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub series: Vec<ProductSeries>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductSeries {
    #[serde(default, deserialize_with = "id_from_any")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub models: Vec<ProductModel>,
    #[serde(default)]
    pub submittals: Option<Vec<DocumentLink>>,
    #[serde(default)]
    pub other_docs: Option<Vec<DocumentLink>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductModel {
    pub name: String,
    #[serde(default, deserialize_with = "price_from_any")]
    pub price: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub specs: Option<Vec<DocumentLink>>,
}

/// Top-level entry of `documents.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentCategory {
    #[serde(default, deserialize_with = "id_from_any")]
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentEntry {
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Reference to a related document (spec, submittal, other doc).
///
/// Only `type`, `url` and `title` are read by the UI; every other field is
/// kept verbatim in `extra` so records round-trip without loss.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentLink {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentLink {
    /// Label shown in link lists: type first, then title, then the URL.
    pub fn label(&self) -> &str {
        self.doc_type
            .as_deref()
            .or(self.title.as_deref())
            .or(self.url.as_deref())
            .unwrap_or("Document")
    }
}

impl ProductCategory {
    /// Image used for the category tile: the first series' image.
    pub fn cover_image(&self) -> Option<&str> {
        self.series.first().and_then(|s| s.image.as_deref())
    }
}
