//! `/data` endpoint
//!
//! Reads the identifier file, applies the query filters and answers with a
//! single decoded record, a plain text list, or a JSON list.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;
use std::path::Path;

use crate::http;
use crate::logger;
use crate::roster::{self, IdentifierQuery, LookupError};

/// Output format for identifier lists
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Json,
    Text,
}

impl ListFormat {
    /// Only the exact value `text` selects plain text
    fn from_param(value: &str) -> Self {
        if value == "text" {
            Self::Text
        } else {
            Self::Json
        }
    }
}

/// Parameters accepted by `/data`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DataParams {
    pub filter: IdentifierQuery,
    pub id: Option<String>,
    pub format: ListFormat,
}

impl DataParams {
    /// Parse a raw query string.
    ///
    /// Values are form-urlencoded. The first occurrence of a key wins and
    /// empty values count as absent.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut params = Self::default();
        let mut format = None;

        let pairs = url::form_urlencoded::parse(query.unwrap_or_default().as_bytes());
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            let slot = match &*key {
                "branch" => &mut params.filter.branch,
                "year" => &mut params.filter.year,
                "id" => &mut params.id,
                "format" => &mut format,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        params.format = format.as_deref().map(ListFormat::from_param).unwrap_or_default();
        params
    }
}

#[derive(Serialize)]
struct IdList<'a> {
    id: &'a [String],
}

/// Serve `/data` for `params` from the identifier file at `data_file`
pub async fn serve_data(
    params: &DataParams,
    data_file: &Path,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match lookup(params, data_file).await {
        Ok(Lookup::Record(record)) => http::build_json_response(&record, is_head),
        Ok(Lookup::List(ids)) => match params.format {
            ListFormat::Text => http::build_text_response(ids.join("\n"), is_head),
            ListFormat::Json => http::build_json_response(&IdList { id: &ids }, is_head),
        },
        Err(err) => {
            if let LookupError::SourceUnavailable { path, source } = &err {
                logger::log_error(&format!(
                    "Cannot read identifier file {}: {source}",
                    path.display()
                ));
            }
            http::build_not_found_response(err.reason())
        }
    }
}

enum Lookup {
    Record(roster::Record),
    List(Vec<String>),
}

async fn lookup(params: &DataParams, data_file: &Path) -> Result<Lookup, LookupError> {
    let ids = roster::read_identifiers(data_file).await?;
    let ids = roster::filter_identifiers(ids, &params.filter);

    match params.id.as_deref() {
        Some(id) => roster::resolve_record(id, &ids).map(Lookup::Record),
        None => Ok(Lookup::List(ids)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_query() {
        assert_eq!(DataParams::from_query(None), DataParams::default());
        assert_eq!(DataParams::from_query(Some("")), DataParams::default());
    }

    #[test]
    fn test_parse_all_params() {
        let params = DataParams::from_query(Some("branch=CS&year=4&id=2021A7PS0001P&format=text"));
        assert_eq!(params.filter.branch.as_deref(), Some("CS"));
        assert_eq!(params.filter.year.as_deref(), Some("4"));
        assert_eq!(params.id.as_deref(), Some("2021A7PS0001P"));
        assert_eq!(params.format, ListFormat::Text);
    }

    #[test]
    fn test_parse_first_value_wins_and_empty_is_absent() {
        let params = DataParams::from_query(Some("id=&branch=eee&branch=cs&format=&format=text"));
        assert!(params.id.is_none());
        assert_eq!(params.filter.branch.as_deref(), Some("eee"));
        assert_eq!(params.format, ListFormat::Text);
    }

    #[test]
    fn test_parse_decodes_values() {
        let params = DataParams::from_query(Some("branch=%3F%3F%3F&id=2021+A7"));
        assert_eq!(params.filter.branch.as_deref(), Some("???"));
        assert_eq!(params.id.as_deref(), Some("2021 A7"));
    }

    #[test]
    fn test_format_other_than_text_is_json() {
        assert_eq!(DataParams::from_query(Some("format=TEXT")).format, ListFormat::Json);
        assert_eq!(DataParams::from_query(Some("format=xml")).format, ListFormat::Json);
    }
}
