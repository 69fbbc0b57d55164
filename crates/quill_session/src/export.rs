use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use quill_core::{Article, ExportedPost, Result, Summarizer};
use regex::Regex;
use tracing::error;

/// Substituted when the summarization collaborator fails, so that an
/// export always completes.
pub const FALLBACK_SUMMARY: &str = "Error generating summary";

/// Upper bound on the single summarization attempt.
pub const SUMMARY_TIMEOUT: Duration = Duration::from_secs(20);

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Best-effort markup removal. A tag that never closes is left in place
/// rather than failing.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Lowercases and collapses whitespace runs to dashes. May come out empty
/// for whitespace-only titles.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// The named, downloadable result of an export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub post: ExportedPost,
}

/// Export workflow: strip markup, ask the collaborator for a summary
/// (one attempt, bounded), assemble the finalized document, and serialize
/// it as a named artifact. Summarization failure degrades to the fallback
/// text; it never aborts the export.
pub async fn export(
    article: &Article,
    rendered: &str,
    summarizer: &dyn Summarizer,
    now: DateTime<Utc>,
) -> Result<ExportArtifact> {
    let plain = strip_tags(rendered);

    let summary = match tokio::time::timeout(SUMMARY_TIMEOUT, summarizer.summarize(&plain)).await {
        Ok(Ok(summary)) => summary,
        Ok(Err(e)) => {
            error!("Error generating summary via {}: {}", summarizer.name(), e);
            FALLBACK_SUMMARY.to_string()
        }
        Err(_) => {
            error!("Summary request to {} timed out", summarizer.name());
            FALLBACK_SUMMARY.to_string()
        }
    };

    let post = ExportedPost {
        id: article.id.clone(),
        title: article.title.clone(),
        date: article.date,
        summary,
        last_modified: now,
        content: rendered.to_string(),
    };
    let bytes = serde_json::to_vec_pretty(&post)?;

    let slug = slugify(&post.title);
    let stem = if slug.is_empty() { post.id.clone() } else { slug };

    Ok(ExportArtifact {
        file_name: format!("{}.json", stem),
        bytes,
        post,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use quill_core::Error;

    struct Fixed(&'static str);

    #[async_trait]
    impl Summarizer for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn summarize(&self, _text: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl Summarizer for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn summarize(&self, _text: &str) -> Result<String> {
            Err(Error::Summarization("boom".to_string()))
        }
    }

    fn article() -> Article {
        Article {
            id: "a1".to_string(),
            title: "Getting Started with React".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            content: "<p>Hello <b>world</b></p>".to_string(),
            summary: String::new(),
        }
    }

    #[test]
    fn strips_tags_best_effort() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_tags("no markup"), "no markup");
        // Malformed: an unterminated tag is left alone.
        assert_eq!(strip_tags("<p>unclosed <b tag"), "unclosed <b tag");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn slugs_collapse_whitespace() {
        assert_eq!(
            slugify("Getting  Started\twith React"),
            "getting-started-with-react"
        );
        assert_eq!(slugify("   "), "");
    }

    #[tokio::test]
    async fn failed_summarization_degrades_not_fails() {
        let article = article();
        let artifact = export(&article, &article.content, &Failing, Utc::now())
            .await
            .unwrap();

        assert_eq!(artifact.post.summary, FALLBACK_SUMMARY);
        assert_eq!(artifact.post.content, "<p>Hello <b>world</b></p>");
    }

    #[tokio::test]
    async fn artifact_is_named_by_slugified_title() {
        let article = article();
        let artifact = export(&article, &article.content, &Fixed("A summary"), Utc::now())
            .await
            .unwrap();

        assert_eq!(artifact.file_name, "getting-started-with-react.json");
        assert_eq!(artifact.post.summary, "A summary");
    }

    #[tokio::test]
    async fn empty_title_falls_back_to_the_id() {
        let mut article = article();
        article.title = "  ".to_string();

        let artifact = export(&article, &article.content, &Fixed("s"), Utc::now())
            .await
            .unwrap();
        assert_eq!(artifact.file_name, "a1.json");
    }

    #[tokio::test]
    async fn artifact_json_carries_the_expected_fields() {
        let article = article();
        let artifact = export(&article, &article.content, &Fixed("short"), Utc::now())
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&artifact.bytes).unwrap();
        assert_eq!(value["id"], "a1");
        assert_eq!(value["title"], "Getting Started with React");
        assert_eq!(value["date"], "2024-03-20");
        assert_eq!(value["summary"], "short");
        assert_eq!(value["content"], "<p>Hello <b>world</b></p>");
        assert!(value.get("lastModified").is_some());
        assert!(value.get("markdown").is_none());
    }

    #[tokio::test]
    async fn empty_content_still_exports() {
        let mut article = article();
        article.content.clear();

        let artifact = export(&article, "", &Fixed("s"), Utc::now()).await.unwrap();
        assert_eq!(artifact.post.content, "");
    }
}
