use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_TITLE: &str = "New Article";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
    pub summary: String,
}

impl Article {
    /// A fresh article dated `today`, with the default title and empty body.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            date: today,
            content: String::new(),
            summary: String::new(),
        }
    }
}

/// An article sitting in the trash. Core fields stay frozen; only the
/// deletion stamp is added, and it lives exactly as long as the item does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrashItem {
    #[serde(flatten)]
    pub article: Article,
    #[serde(rename = "deletedAt")]
    pub deleted_at: DateTime<Utc>,
}

impl TrashItem {
    pub fn new(article: Article, deleted_at: DateTime<Utc>) -> Self {
        Self {
            article,
            deleted_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.article.id
    }

    /// Strips the deletion stamp, yielding the article for re-insertion.
    pub fn into_article(self) -> Article {
        self.article
    }
}

/// Process-wide UI preference bag. Shares the persistence mechanism with
/// the article data but has no relational ties to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub sidebar_width: u32,
    pub authenticated: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_width: 288,
            authenticated: false,
        }
    }
}

/// The finalized export artifact: rendered HTML under `content`, no raw
/// markup field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedPost {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub last_modified: DateTime<Utc>,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trash_item_serializes_flat_with_deleted_at() {
        let article = Article::new(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        let item = TrashItem::new(article.clone(), Utc::now());

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], article.id);
        assert_eq!(value["title"], "New Article");
        assert!(value.get("deletedAt").is_some());
        assert!(value.get("article").is_none());
    }

    #[test]
    fn preferences_default_matches_reference_values() {
        let prefs = Preferences::default();
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.sidebar_width, 288);
        assert!(!prefs.authenticated);

        // Absent fields fall back to defaults when loading older payloads.
        let parsed: Preferences = serde_json::from_str(r#"{"darkMode":true}"#).unwrap();
        assert!(parsed.dark_mode);
        assert_eq!(parsed.sidebar_width, 288);
    }

    #[test]
    fn exported_post_uses_camel_case_keys() {
        let post = ExportedPost {
            id: "1".to_string(),
            title: "Hello".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            summary: String::new(),
            last_modified: Utc::now(),
            content: "<p>hi</p>".to_string(),
        };

        let value = serde_json::to_value(&post).unwrap();
        assert!(value.get("lastModified").is_some());
        assert!(value.get("last_modified").is_none());
    }
}
