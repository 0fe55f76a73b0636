//! Query string of the note list routes.

use std::fmt;

/// `?keyword=...` on `/` and `/archives`. An empty keyword writes no query at
/// all, so clearing the search leaves a bare path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub keyword: String,
}

impl ListQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

impl From<&str> for ListQuery {
    fn from(query: &str) -> Self {
        let keyword = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| *name == "keyword")
            .map(|(_, value)| {
                let value = value.replace('+', " ");
                urlencoding::decode(&value)
                    .map(|v| v.into_owned())
                    .unwrap_or(value)
            })
            .unwrap_or_default();
        Self { keyword }
    }
}

impl fmt::Display for ListQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keyword.is_empty() {
            return Ok(());
        }
        write!(f, "keyword={}", urlencoding::encode(&self.keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_keyword_writes_nothing() {
        assert_eq!(ListQuery::default().to_string(), "");
        assert_eq!(ListQuery::new("").to_string(), "");
    }

    #[test]
    fn test_keyword_is_encoded() {
        assert_eq!(ListQuery::new("react hooks").to_string(), "keyword=react%20hooks");
        assert_eq!(ListQuery::new("a&b").to_string(), "keyword=a%26b");
    }

    #[test]
    fn test_parse_keyword() {
        assert_eq!(ListQuery::from("keyword=react%20hooks").keyword, "react hooks");
        assert_eq!(ListQuery::from("?keyword=a+b&page=2").keyword, "a b");
        assert_eq!(ListQuery::from("page=2").keyword, "");
        assert_eq!(ListQuery::from("").keyword, "");
    }

    #[test]
    fn test_written_query_parses_back() {
        let query = ListQuery::new("Babel & co");
        assert_eq!(ListQuery::from(query.to_string().as_str()), query);
    }
}
