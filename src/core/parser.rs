//! Turns raw CSV documents into typed [`Article`] and [`Comment`] records.
//!
//! Columns are looked up by header name. Missing columns read as empty
//! strings and extra columns are ignored. Parsing is all-or-nothing per
//! document: one bad `Rating` value fails the whole comments file.

use crate::domain::model::{Article, Comment};
use crate::utils::error::{EtlError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::borrow::Cow;
use std::collections::HashMap;

pub const ARTICLES_DOCUMENT: &str = "articles";
pub const COMMENTS_DOCUMENT: &str = "comments";

/// Result of a lenient load: the records, or nothing plus a description of
/// what went wrong.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub error: Option<String>,
}

impl<T> Parsed<T> {
    fn from_result(document: &str, result: Result<Vec<T>>) -> Self {
        match result {
            Ok(records) => Self {
                records,
                error: None,
            },
            Err(e) => {
                let verb = if e.is_parse_error() { "parse" } else { "read" };
                tracing::warn!("⚠️ Failed to {} {} file: {}", verb, document, e);
                Self {
                    records: Vec::new(),
                    error: Some(format!("Failed to {} {} file: {}", verb, document, e)),
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Header name to column index. A repeated header resolves to its last column.
struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    fn new(headers: &StringRecord) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();
        Self { index }
    }

    fn raw<'r>(&self, record: &'r StringRecord, name: &str) -> &'r str {
        self.index
            .get(name)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
    }

    fn text(&self, record: &StringRecord, name: &str) -> String {
        self.raw(record, name).trim().to_string()
    }
}

fn read_rows<T>(
    document: &str,
    input: &[u8],
    mut build: impl FnMut(&Columns, &StringRecord, usize) -> Result<T>,
) -> Result<Vec<T>> {
    let text = std::str::from_utf8(input).map_err(|source| EtlError::DecodeError {
        document: document.to_string(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = Columns::new(reader.headers()?);
    let mut rows = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // 行號以檔案為準（標題列是第 1 行）
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 2);
        rows.push(build(&columns, &record, line)?);
    }

    tracing::debug!("Parsed {} {} rows", rows.len(), document);
    Ok(rows)
}

/// Drops `_` separators that sit between two digits (`1_000.5`). Any other
/// underscore is kept so the float parse rejects it.
fn strip_digit_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('_') {
        return Cow::Borrowed(text);
    }
    let chars: Vec<char> = text.chars().collect();
    let kept = chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let separator = c == '_'
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            !separator
        })
        .map(|(_, &c)| c)
        .collect();
    Cow::Owned(kept)
}

fn parse_rating(raw: &str, line: usize) -> Result<f64> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    strip_digit_separators(raw.trim())
        .parse::<f64>()
        .map_err(|source| EtlError::FieldParseError {
            field: "Rating".to_string(),
            row: line,
            value: raw.to_string(),
            source,
        })
}

pub fn parse_articles(input: &[u8]) -> Result<Vec<Article>> {
    read_rows(ARTICLES_DOCUMENT, input, |columns, record, _| {
        Ok(Article {
            id: columns.text(record, "IdBerita"),
            headline: columns.text(record, "Headline"),
            content: columns.text(record, "Content"),
        })
    })
}

pub fn parse_comments(input: &[u8]) -> Result<Vec<Comment>> {
    read_rows(COMMENTS_DOCUMENT, input, |columns, record, line| {
        Ok(Comment {
            id: columns.text(record, "IdKomentar"),
            article_id: columns.text(record, "IdBerita"),
            text: columns.text(record, "Komentar"),
            rating: parse_rating(columns.raw(record, "Rating"), line)?,
        })
    })
}

/// Like [`parse_articles`], but a failure becomes an empty list plus a warning.
pub fn load_articles(input: &[u8]) -> Parsed<Article> {
    Parsed::from_result(ARTICLES_DOCUMENT, parse_articles(input))
}

/// Like [`parse_comments`], but a failure becomes an empty list plus a warning.
pub fn load_comments(input: &[u8]) -> Parsed<Comment> {
    Parsed::from_result(COMMENTS_DOCUMENT, parse_comments(input))
}
