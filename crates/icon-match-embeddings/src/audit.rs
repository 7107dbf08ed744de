//! Find icons in a reference list that have no associations record.

use std::collections::HashSet;
use std::io::BufRead;

use crate::associations::IconAssociations;
use crate::error::EmbeddingResult;

/// Read an icon list: one name per line, trimmed, blank lines skipped.
pub fn read_icon_list<R: BufRead>(reader: R) -> EmbeddingResult<Vec<String>> {
    let mut icons = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let icon = line.trim();
        if !icon.is_empty() {
            icons.push(icon.to_string());
        }
    }
    Ok(icons)
}

/// Icons from `icons` with no record in `associations`, in list order,
/// each reported once.
pub fn find_missing_icons(icons: &[String], associations: &[IconAssociations]) -> Vec<String> {
    let known: HashSet<&str> = associations.iter().map(|a| a.icon.as_str()).collect();
    let mut reported = HashSet::new();
    icons
        .iter()
        .filter(|icon| !known.contains(icon.as_str()))
        .filter(|icon| reported.insert(icon.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(icon: &str) -> IconAssociations {
        IconAssociations {
            icon: icon.to_string(),
            words: vec![],
        }
    }

    #[test]
    fn test_missing_in_list_order_without_repeats() {
        let icons = read_icon_list("rocket\n  gear \n\nanchor\nbolt\nanchor\n".as_bytes()).unwrap();
        assert_eq!(icons, vec!["rocket", "gear", "anchor", "bolt", "anchor"]);

        let missing = find_missing_icons(&icons, &[record("gear"), record("bolt")]);
        assert_eq!(missing, vec!["rocket", "anchor"]);
    }

    #[test]
    fn test_nothing_missing() {
        let icons = vec!["gear".to_string()];
        assert!(find_missing_icons(&icons, &[record("gear")]).is_empty());
    }
}
