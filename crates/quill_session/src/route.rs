/// Deep-link address space: `/` is no selection, `/article/<id>` opens one
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Article(String),
}

impl Route {
    /// Anything that is not a well-formed article address resolves to the
    /// root; bad addresses are never an error.
    pub fn parse(path: &str) -> Route {
        match path.strip_prefix("/article/") {
            Some(id) if !id.is_empty() => Route::Article(id.to_string()),
            _ => Route::Root,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Article(id) => format!("/article/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_article_addresses() {
        assert_eq!(
            Route::parse("/article/abc-123"),
            Route::Article("abc-123".to_string())
        );
    }

    #[test]
    fn everything_else_is_root() {
        assert_eq!(Route::parse("/"), Route::Root);
        assert_eq!(Route::parse(""), Route::Root);
        assert_eq!(Route::parse("/article/"), Route::Root);
        assert_eq!(Route::parse("/settings"), Route::Root);
    }

    #[test]
    fn round_trips_through_paths() {
        let route = Route::Article("42".to_string());
        assert_eq!(Route::parse(&route.to_path()), route);
        assert_eq!(Route::Root.to_path(), "/");
    }
}
