//! Serializes a [`Report`] for the load phase and for terminal display.

use crate::domain::model::{OutputFormat, Report, ReportRow, SummaryStats};
use crate::utils::error::{EtlError, Result};
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const TABLE_HEADERS: [&str; 4] = [
    "ID Berita",
    "Headline",
    "Rata-rata Rating",
    "Jumlah Komentar",
];

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    summary: &'a SummaryStats,
    rows: &'a [ReportRow],
}

fn delimited(rows: &[ReportRow], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());

    // 空報表也要有標題列
    writer.write_record(TABLE_HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.into_inner().map_err(|e| EtlError::ProcessingError {
        message: format!("Failed to flush report writer: {}", e),
    })
}

pub fn to_csv(rows: &[ReportRow]) -> Result<Vec<u8>> {
    delimited(rows, b',')
}

pub fn to_tsv(rows: &[ReportRow]) -> Result<Vec<u8>> {
    delimited(rows, b'\t')
}

pub fn to_json(report: &Report, generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let body = JsonReport {
        generated_at,
        summary: &report.summary,
        rows: &report.rows,
    };
    Ok(serde_json::to_vec_pretty(&body)?)
}

pub fn encode(
    report: &Report,
    format: OutputFormat,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => to_csv(&report.rows),
        OutputFormat::Tsv => to_tsv(&report.rows),
        OutputFormat::Json => to_json(report, generated_at),
    }
}

/// Bundles `(filename, bytes)` pairs into one in-memory ZIP archive.
pub fn to_zip(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    for (name, data) in files {
        zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
        zip.write_all(data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Plain-text table with padded columns, headline truncated to `max_headline` chars.
pub fn render_table(rows: &[ReportRow], max_headline: usize) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.article_id.clone(),
                truncate(&row.headline, max_headline),
                format!("{:.2}", row.average_rating),
                row.comment_count.to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &TABLE_HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            // 數字欄靠右
            if i >= 2 {
                format!("{:>width$}", cell, width = *width)
            } else {
                format!("{:<width$}", cell, width = *width)
            }
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

pub fn render_summary(summary: &SummaryStats) -> String {
    format!(
        "Total Berita: {}\nTotal Komentar: {}\nBerita Tanpa Komentar: {}\n",
        summary.total_articles, summary.total_comments, summary.articles_without_comments
    )
}
