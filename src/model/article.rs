use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// A board question as returned by the API.
///
/// Every field defaults so partial records still decode; the default value
/// is the all-empty placeholder shown before a detail fetch completes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub id: ItemId,
    pub uid: ItemId,
    pub nickname: String,
    pub email: String,
    pub category_id: ItemId,
    pub category_name: String,
    pub title: String,
    pub description: String,
    pub answers: Vec<Comment>,
    pub created_at: String,
    pub modified_at: String,
}

/// An answer attached to an article.
///
/// Only `id` and `description` are interpreted; any other fields the API
/// sends are carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: ItemId,
    pub description: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
