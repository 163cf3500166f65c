//! Lender list CSV export

use anyhow::{Context, Result};
use csv::Writer;
use std::path::Path;

use crate::services::matching::models::Lender;

const HEADER: [&str; 8] = [
    "Name", "Tier", "Min FICO", "Max NSFs", "Min Revenue", "Max Amount", "Industries", "Notes",
];

/// Write the lender list as CSV with the fixed export header. Industries are
/// re-joined with `;` inside a single (quoted as needed) field, so an export
/// can be re-imported without loss of the eligibility tuple.
pub fn export_lenders_csv(lenders: &[Lender], path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    writer.write_record(HEADER).context("Failed to write CSV header")?;
    for lender in lenders {
        writer
            .write_record([
                lender.name.clone(),
                lender.tier.to_string(),
                lender.min_fico.to_string(),
                lender.max_nsfs.to_string(),
                format_amount(lender.min_revenue),
                format_amount(lender.max_amount),
                lender.industries.join(";"),
                lender.notes.clone().unwrap_or_default(),
            ])
            .with_context(|| format!("Failed to write lender: {}", lender.name))?;
    }
    writer.flush().context("Failed to flush CSV writer")?;

    log::info!("Exported {} lenders to {}", lenders.len(), path.display());
    Ok(())
}

/// Whole amounts without a trailing ".0" so re-imports parse cleanly
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::matching::models::default_lenders;
    use crate::transfer::import::parse_csv;

    #[test]
    fn test_export_import_round_trip_preserves_eligibility_tuples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lenders.csv");
        let original = default_lenders();

        export_lenders_csv(&original, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let reimported = parse_csv(&text).unwrap();

        assert_eq!(reimported.len(), original.len());
        for (before, after) in original.iter().zip(&reimported) {
            assert_eq!(before.name, after.name);
            assert_eq!(before.tier, after.tier);
            assert_eq!(before.min_fico, after.min_fico);
            assert_eq!(before.max_nsfs, after.max_nsfs);
            assert_eq!(before.min_revenue, after.min_revenue);
            assert_eq!(before.max_amount, after.max_amount);
            assert_eq!(before.industries, after.industries);
        }
    }

    #[test]
    fn test_header_row_is_fixed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lenders.csv");
        export_lenders_csv(&[], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "Name,Tier,Min FICO,Max NSFs,Min Revenue,Max Amount,Industries,Notes"
        );
    }
}
