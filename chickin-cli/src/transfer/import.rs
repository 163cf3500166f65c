//! Lender list import from user-supplied files
//!
//! Two formats are accepted: CSV with a header row (columns located by
//! case-insensitive substring match on header text, order irrelevant) and
//! loosely structured text blocks separated by blank lines. Parsing is
//! best-effort: malformed numeric fields fall back to fixed defaults and only
//! fully blank rows are skipped. An import replaces the lender list
//! wholesale; it never merges.

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::services::matching::models::Lender;

const DEFAULT_TIER: u8 = 3;
const DEFAULT_MIN_FICO: u16 = 500;
const DEFAULT_MAX_NSFS: u32 = 10;
const DEFAULT_MIN_REVENUE: f64 = 10_000.0;
const DEFAULT_MAX_AMOUNT: f64 = 100_000.0;

/// Import lenders from a `.csv` or `.txt` file. Any other extension is an
/// error and leaves existing data untouched.
pub fn import_lenders(path: &Path) -> Result<Vec<Lender>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let lenders = match extension.as_str() {
        "csv" => parse_csv(&text)?,
        "txt" => parse_text(&text),
        _ => bail!(
            "Unsupported file format: {}. Please provide a .csv or .txt file.",
            path.display()
        ),
    };
    log::info!("Parsed {} lenders from {}", lenders.len(), path.display());
    Ok(lenders)
}

fn parse_num<T: FromStr>(field: Option<&str>, default: T) -> T {
    field
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse CSV content with header-driven column detection
pub fn parse_csv(text: &str) -> Result<Vec<Lender>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());
    let headers = reader.headers().context("Failed to read CSV header row")?.clone();
    let column = |needle: &str| {
        headers
            .iter()
            .position(|header| header.to_lowercase().contains(needle))
    };

    let name_col = column("name");
    let tier_col = column("tier");
    let fico_col = column("fico");
    let nsf_col = column("nsf");
    let revenue_col = column("revenue");
    let amount_col = column("amount");
    let industries_col = column("industr");
    let notes_col = column("note");

    let mut lenders = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.context("Failed to read CSV record")?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let field = |col: Option<usize>| {
            col.and_then(|i| record.get(i)).map(str::trim).filter(|s| !s.is_empty())
        };

        let row_number = index + 1;
        lenders.push(Lender {
            id: format!("imported-{row_number}"),
            name: field(name_col)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Lender {row_number}")),
            tier: parse_num(field(tier_col), DEFAULT_TIER),
            min_fico: parse_num(field(fico_col), DEFAULT_MIN_FICO),
            max_nsfs: parse_num(field(nsf_col), DEFAULT_MAX_NSFS),
            min_revenue: parse_num(field(revenue_col), DEFAULT_MIN_REVENUE),
            max_amount: parse_num(field(amount_col), DEFAULT_MAX_AMOUNT),
            industries: field(industries_col)
                .map(split_industries)
                .unwrap_or_else(|| vec!["All".to_string()]),
            notes: field(notes_col).map(str::to_string),
        });
    }
    Ok(lenders)
}

fn split_industries(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(|industry| industry.trim().to_string())
        .filter(|industry| !industry.is_empty())
        .collect()
}

/// Parse blank-line-separated `Key: value` text blocks. Entries without a
/// name line are dropped.
pub fn parse_text(text: &str) -> Vec<Lender> {
    let mut lenders = Vec::new();
    for (index, entry) in text.replace("\r\n", "\n").split("\n\n").enumerate() {
        let mut name = None;
        let mut tier = None;
        let mut min_fico = None;
        let mut max_nsfs = None;
        let mut min_revenue = None;
        let mut max_amount = None;
        let mut industries = None;
        let mut notes = None;

        for line in entry.lines() {
            if let Some(value) = key_value(line, "name:") {
                name = Some(value);
            } else if let Some(value) = key_value(line, "tier:") {
                tier = value.parse::<u8>().ok();
            } else if let Some(value) = key_value(line, "fico:") {
                min_fico = value.parse::<u16>().ok();
            } else if let Some(value) = key_value(line, "nsf:") {
                max_nsfs = value.parse::<u32>().ok();
            } else if let Some(value) = key_value(line, "revenue:") {
                min_revenue = parse_money(&value);
            } else if let Some(value) = key_value(line, "max amount:") {
                max_amount = parse_money(&value);
            } else if let Some(value) = key_value(line, "industries:") {
                industries = Some(
                    value
                        .split(',')
                        .map(|industry| industry.trim().to_string())
                        .filter(|industry| !industry.is_empty())
                        .collect::<Vec<_>>(),
                );
            } else if let Some(value) = key_value(line, "notes:") {
                notes = Some(value);
            }
        }

        let Some(name) = name else {
            continue;
        };
        lenders.push(Lender {
            id: format!("imported-{}", index + 1),
            name,
            tier: tier.unwrap_or(DEFAULT_TIER),
            min_fico: min_fico.unwrap_or(DEFAULT_MIN_FICO),
            max_nsfs: max_nsfs.unwrap_or(DEFAULT_MAX_NSFS),
            min_revenue: min_revenue.unwrap_or(DEFAULT_MIN_REVENUE),
            max_amount: max_amount.unwrap_or(DEFAULT_MAX_AMOUNT),
            industries: industries.unwrap_or_else(|| vec!["All".to_string()]),
            notes,
        });
    }
    lenders
}

fn key_value(line: &str, key: &str) -> Option<String> {
    if !line.to_lowercase().contains(key) {
        return None;
    }
    line.splitn(2, ':')
        .nth(1)
        .map(|value| value.trim().to_string())
}

fn parse_money(value: &str) -> Option<f64> {
    value.replace(['$', ','], "").trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_columns_found_by_substring_any_order() {
        let csv = "Max Amount,Lender Name,Min FICO,Tier\n100000,Acme Capital,620,2\n";
        let lenders = parse_csv(csv).unwrap();
        assert_eq!(lenders.len(), 1);
        assert_eq!(lenders[0].name, "Acme Capital");
        assert_eq!(lenders[0].tier, 2);
        assert_eq!(lenders[0].min_fico, 620);
        assert_eq!(lenders[0].max_amount, 100_000.0);
        // Absent columns fall back to defaults
        assert_eq!(lenders[0].max_nsfs, 10);
        assert_eq!(lenders[0].min_revenue, 10_000.0);
        assert_eq!(lenders[0].industries, vec!["All".to_string()]);
    }

    #[test]
    fn test_csv_quoted_industries_split_on_semicolon() {
        let csv = "Name,Industries\nAcme,\"Retail; Food Services;Technology\"\n";
        let lenders = parse_csv(csv).unwrap();
        assert_eq!(
            lenders[0].industries,
            vec!["Retail".to_string(), "Food Services".to_string(), "Technology".to_string()]
        );
    }

    #[test]
    fn test_csv_malformed_numbers_use_defaults() {
        let csv = "Name,Tier,FICO,NSFs\nAcme,platinum,n/a,\n";
        let lenders = parse_csv(csv).unwrap();
        assert_eq!(lenders[0].tier, 3);
        assert_eq!(lenders[0].min_fico, 500);
        assert_eq!(lenders[0].max_nsfs, 10);
    }

    #[test]
    fn test_csv_blank_rows_skipped_and_nameless_rows_numbered() {
        let csv = "Name,Tier\nAcme,1\n,\n,2\n";
        let lenders = parse_csv(csv).unwrap();
        assert_eq!(lenders.len(), 2);
        assert_eq!(lenders[1].name, "Lender 3");
        assert_eq!(lenders[1].tier, 2);
    }

    #[test]
    fn test_text_blocks() {
        let text = "Name: Acme Capital\n\
                    Tier: 1\n\
                    FICO: 650\n\
                    NSF: 2\n\
                    Revenue: $25,000\n\
                    Max Amount: $120,000\n\
                    Industries: Retail, Food Services\n\
                    Notes: fast closes\n\
                    \n\
                    Name: Budget Lending\n\
                    Tier: 3\n";
        let lenders = parse_text(text);
        assert_eq!(lenders.len(), 2);
        assert_eq!(lenders[0].name, "Acme Capital");
        assert_eq!(lenders[0].min_fico, 650);
        assert_eq!(lenders[0].max_nsfs, 2);
        assert_eq!(lenders[0].min_revenue, 25_000.0);
        assert_eq!(lenders[0].max_amount, 120_000.0);
        assert_eq!(
            lenders[0].industries,
            vec!["Retail".to_string(), "Food Services".to_string()]
        );
        assert_eq!(lenders[0].notes.as_deref(), Some("fast closes"));
        assert_eq!(lenders[1].name, "Budget Lending");
        assert_eq!(lenders[1].min_fico, 500);
    }

    #[test]
    fn test_text_entry_without_name_dropped() {
        let text = "Tier: 1\nFICO: 700\n\nName: Kept\n";
        let lenders = parse_text(text);
        assert_eq!(lenders.len(), 1);
        assert_eq!(lenders[0].name, "Kept");
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lenders.xlsx");
        std::fs::write(&path, "not a real workbook").unwrap();
        let error = import_lenders(&path).unwrap_err();
        assert!(error.to_string().contains("Unsupported file format"));
    }
}
