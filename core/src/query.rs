//! Filter intents and their query-string parameters.
//!
//! # Design
//! Each variant is one filter intent the catalog understands. Combining
//! filters is only possible where a variant carries several fields
//! (`Latest` with its optional topic), so unsupported combinations cannot
//! be expressed. List-valued filters are joined in caller order: the service
//! treats them as ordered criteria, so nothing is sorted or de-duplicated.

/// Sort orders accepted by the `sort` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Oldest,
    Latest,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Oldest => "oldest",
            SortOrder::Latest => "latest",
        }
    }
}

/// A named request for a subset or ordering of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Query {
    #[default]
    All,
    Copyright(bool),
    Ids(Vec<u64>),
    Languages(Vec<String>),
    Search(String),
    MimeType(String),
    Ascending,
    Oldest,
    Latest { topic: Option<String> },
}

impl Query {
    /// Works in the public domain (`copyright=false`).
    pub fn public_domain() -> Self {
        Query::Copyright(false)
    }

    /// Works still under copyright (`copyright=true`).
    pub fn copyrighted() -> Self {
        Query::Copyright(true)
    }

    pub fn latest(topic: Option<&str>) -> Self {
        Query::Latest {
            topic: topic.map(str::to_string),
        }
    }

    /// Parameter name/value pairs for this intent, in emission order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Query::All => Vec::new(),
            Query::Copyright(copyright) => vec![("copyright", copyright.to_string())],
            Query::Ids(ids) => vec![("ids", join(ids))],
            Query::Languages(languages) => vec![("languages", languages.join(","))],
            Query::Search(text) => vec![("search", text.clone())],
            Query::MimeType(mime_type) => vec![("mime_type", mime_type.clone())],
            Query::Ascending => vec![("sort", SortOrder::Ascending.as_str().to_string())],
            Query::Oldest => vec![("sort", SortOrder::Oldest.as_str().to_string())],
            Query::Latest { topic } => {
                let mut params = vec![("sort", SortOrder::Latest.as_str().to_string())];
                if let Some(topic) = topic {
                    params.push(("topic", topic.clone()));
                }
                params
            }
        }
    }
}

fn join(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: Query) -> Vec<(&'static str, String)> {
        query.params()
    }

    #[test]
    fn all_has_no_params() {
        assert!(params(Query::All).is_empty());
        assert_eq!(Query::default(), Query::All);
    }

    #[test]
    fn copyright_flag_is_textual() {
        assert_eq!(params(Query::public_domain()), vec![("copyright", "false".to_string())]);
        assert_eq!(params(Query::copyrighted()), vec![("copyright", "true".to_string())]);
    }

    #[test]
    fn ids_keep_caller_order() {
        assert_eq!(params(Query::Ids(vec![5, 2, 9])), vec![("ids", "5,2,9".to_string())]);
    }

    #[test]
    fn ids_are_not_deduplicated() {
        assert_eq!(params(Query::Ids(vec![3, 3, 1])), vec![("ids", "3,3,1".to_string())]);
    }

    #[test]
    fn languages_keep_caller_order() {
        let query = Query::Languages(vec!["fr".to_string(), "en".to_string()]);
        assert_eq!(params(query), vec![("languages", "fr,en".to_string())]);
    }

    #[test]
    fn search_and_mime_type_pass_through() {
        assert_eq!(
            params(Query::Search("dickens great".to_string())),
            vec![("search", "dickens great".to_string())]
        );
        assert_eq!(
            params(Query::MimeType("text/html".to_string())),
            vec![("mime_type", "text/html".to_string())]
        );
    }

    #[test]
    fn sort_intents() {
        assert_eq!(params(Query::Ascending), vec![("sort", "ascending".to_string())]);
        assert_eq!(params(Query::Oldest), vec![("sort", "oldest".to_string())]);
        assert_eq!(params(Query::latest(None)), vec![("sort", "latest".to_string())]);
    }

    #[test]
    fn latest_with_topic() {
        assert_eq!(
            params(Query::latest(Some("children"))),
            vec![("sort", "latest".to_string()), ("topic", "children".to_string())]
        );
    }
}
