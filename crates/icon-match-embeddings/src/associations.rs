//! Icon associations CSV and catalog building.
//!
//! Each record is an icon name followed by the words describing it:
//!
//! ```text
//! gear,settings,machine,cog,engineering
//! lightbulb,idea,innovation,light bulb
//! ```
//!
//! Records are ragged and have no header row.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use icon_match_core::{Catalog, CoreResult, Embedder};
use tracing::{info, warn};

use crate::error::{EmbeddingError, EmbeddingResult};

/// One icon and its descriptive words (lowercased, phrases split into words).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAssociations {
    pub icon: String,
    pub words: Vec<String>,
}

/// Read an associations CSV file.
pub fn read_associations(path: &Path) -> EmbeddingResult<Vec<IconAssociations>> {
    let records = parse_associations(File::open(path)?)?;
    info!(path = %path.display(), icons = records.len(), "read icon associations");
    Ok(records)
}

/// Parse associations from any reader.
///
/// # Errors
///
/// - `Csv` for unreadable input
/// - `DuplicateIcon` when an icon name appears in two records
pub fn parse_associations<R: Read>(reader: R) -> EmbeddingResult<Vec<IconAssociations>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let mut fields = record.iter();
        let icon = match fields.next() {
            Some(icon) if !icon.is_empty() => icon.to_string(),
            _ => continue,
        };
        if !seen.insert(icon.clone()) {
            return Err(EmbeddingError::DuplicateIcon { icon });
        }

        let words: Vec<String> = fields
            .flat_map(str::split_whitespace)
            .map(str::to_lowercase)
            .collect();
        records.push(IconAssociations { icon, words });
    }

    Ok(records)
}

/// Embed each icon's words into a catalog entry.
///
/// An icon whose words are all unknown to the embedder gets the zero vector
/// and is logged; it stays in the catalog and scores `0.0` against everything.
pub fn build_catalog<E: Embedder + ?Sized>(
    records: &[IconAssociations],
    embedder: &E,
) -> CoreResult<Catalog> {
    let mut builder = Catalog::builder(embedder.dimension());
    let mut degenerate = 0usize;

    for record in records {
        let vector = embedder.embed(&record.words)?;
        if vector.iter().all(|v| *v == 0.0) {
            degenerate += 1;
            warn!(icon = %record.icon, "icon embedded to the zero vector");
        }
        builder.insert(record.icon.clone(), vector)?;
    }

    let catalog = builder.build()?;
    info!(
        icons = catalog.len(),
        degenerate,
        dimension = catalog.dimension(),
        model = embedder.model_id(),
        "built icon catalog"
    );
    Ok(catalog)
}
