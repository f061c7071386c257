//! Saved item model: the backend wire shape and the frontend view model.
//!
//! The backend speaks Mongo-flavoured JSON (`_id`, `image`); clients work
//! with [`SavedItem`] (`id`, `thumbnail`). [`SavedItem::from`] is the single
//! place that vocabulary is translated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// ItemType
// ---------------------------------------------------------------------------

/// Kind of saved content. Fixed at creation; decides which optional fields
/// carry meaning (only links have a `url`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Note,
    Link,
    Code,
    Component,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Note,
        ItemType::Link,
        ItemType::Code,
        ItemType::Component,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Note => "note",
            ItemType::Link => "link",
            ItemType::Code => "code",
            ItemType::Component => "component",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown item type '{s}'. Expected one of: note, link, code, component"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Wire and view models
// ---------------------------------------------------------------------------

/// Body of a save request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub content: String,
    pub title: String,
}

/// An item as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Filled in by AI enrichment; absent until it completes.
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub domain: Option<String>,
    pub favicon: Option<String>,
    pub language: Option<String>,
    pub platform: Option<String>,
    pub category: Option<String>,
    /// Fields the backend added that this model does not name.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An item as clients present it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub domain: Option<String>,
    pub favicon: Option<String>,
    pub language: Option<String>,
    pub platform: Option<String>,
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl From<BackendItem> for SavedItem {
    fn from(item: BackendItem) -> Self {
        let url = match item.item_type {
            ItemType::Link => item.url.or_else(|| Some(item.content.trim().to_string())),
            _ => None,
        };

        Self {
            id: item.id,
            item_type: item.item_type,
            title: item.title,
            content: item.content,
            summary: item.summary,
            tags: item.tags,
            created_at: item.created_at,
            updated_at: item.updated_at,
            url,
            thumbnail: item.image,
            domain: item.domain,
            favicon: item.favicon,
            language: item.language,
            platform: item.platform,
            category: item.category,
            extra: item.extra,
        }
    }
}
