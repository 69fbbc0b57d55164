use chrono::NaiveDate;
use quill_core::Article;

/// The collection the `articles` key seeds on first run, matching the
/// reference content shipped with the original editor.
pub fn seed_articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".to_string(),
            title: "Getting Started with React".to_string(),
            date: date(2024, 3, 20),
            content: "<p>This is where the content would go...</p>".to_string(),
            summary: "An introduction to React and its core concepts".to_string(),
        },
        Article {
            id: "2".to_string(),
            title: "Understanding TypeScript".to_string(),
            date: date(2024, 3, 19),
            content: "<p>This is where the content would go...</p>".to_string(),
            summary: "Deep dive into TypeScript fundamentals".to_string(),
        },
        Article {
            id: "3".to_string(),
            title: "Mastering Tailwind CSS".to_string(),
            date: date(2024, 3, 18),
            content: "<p>This is where the content would go...</p>".to_string(),
            summary: "Learn how to build beautiful interfaces with Tailwind".to_string(),
        },
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}
