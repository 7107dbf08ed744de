//! In-memory word-vector table loaded from the fastText text format.
//!
//! ```text
//! 2000000 300          <- header: word count, dimension
//! the 0.0231 -0.114 ...
//! gear 0.511 0.032 ...
//! ```
//!
//! Vectors live in one contiguous buffer indexed by word.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::error::{EmbeddingError, EmbeddingResult};

#[derive(Debug, Clone)]
pub struct WordVectorTable {
    dimension: usize,
    index: HashMap<String, usize>,
    data: Vec<f32>,
}

impl WordVectorTable {
    /// Load a `.vec` file, keeping at most `max_words` entries when given.
    pub fn load(path: &Path, max_words: Option<usize>) -> EmbeddingResult<Self> {
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file), max_words)?;
        info!(
            path = %path.display(),
            words = table.len(),
            dimension = table.dimension(),
            "loaded word vectors"
        );
        Ok(table)
    }

    /// Parse the fastText text format from any buffered reader.
    ///
    /// # Errors
    ///
    /// - `Parse` for a missing/invalid header or a non-numeric component
    /// - `InvalidDimension` when a row has the wrong number of components
    /// - `EmptyVocabulary` when no rows follow the header
    pub fn from_reader<R: BufRead>(reader: R, max_words: Option<usize>) -> EmbeddingResult<Self> {
        let mut lines = reader.lines();

        let header = lines.next().ok_or(EmbeddingError::Parse {
            line: 1,
            message: "missing header".to_string(),
        })??;
        let (declared, dimension) = parse_header(&header)?;
        let limit = max_words.unwrap_or(declared).min(declared);

        // The header is untrusted: preallocate a bounded amount and grow as rows arrive.
        let reserve_words = limit.min(PREALLOC_WORDS);
        let reserve_values = reserve_words
            .checked_mul(dimension)
            .map_or(0, |n| n.min(PREALLOC_VALUES));
        let mut index = HashMap::with_capacity(reserve_words);
        let mut data = Vec::with_capacity(reserve_values);

        for (offset, line) in lines.enumerate() {
            if index.len() >= limit {
                break;
            }
            let line_no = offset + 2;
            let line = line?;
            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                continue;
            }

            let mut parts = trimmed.split(' ');
            let word = parts.next().unwrap_or_default();
            let start = data.len();
            for part in parts.filter(|p| !p.is_empty()) {
                let value: f32 = part.parse().map_err(|_| EmbeddingError::Parse {
                    line: line_no,
                    message: format!("invalid component '{}' for word '{}'", part, word),
                })?;
                if !value.is_finite() {
                    return Err(EmbeddingError::Parse {
                        line: line_no,
                        message: format!("non-finite component '{}' for word '{}'", part, word),
                    });
                }
                data.push(value);
            }

            let actual = data.len() - start;
            if actual != dimension {
                return Err(EmbeddingError::InvalidDimension {
                    expected: dimension,
                    actual,
                    context: format!("line {} (word '{}')", line_no, word),
                });
            }

            if index.contains_key(word) {
                trace!(word, line = line_no, "duplicate word ignored");
                data.truncate(start);
                continue;
            }
            index.insert(word.to_string(), start / dimension);
        }

        if index.is_empty() {
            return Err(EmbeddingError::EmptyVocabulary);
        }

        debug!(words = index.len(), declared, dimension, "parsed word-vector table");
        Ok(Self {
            dimension,
            index,
            data,
        })
    }

    /// Build a table from in-memory pairs.
    pub fn from_pairs<I, S>(dimension: usize, pairs: I) -> EmbeddingResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut index = HashMap::new();
        let mut data = Vec::new();
        for (word, vector) in pairs {
            let word = word.into();
            if vector.len() != dimension {
                return Err(EmbeddingError::InvalidDimension {
                    expected: dimension,
                    actual: vector.len(),
                    context: format!("word '{}'", word),
                });
            }
            if index.contains_key(&word) {
                continue;
            }
            index.insert(word, data.len() / dimension);
            data.extend_from_slice(&vector);
        }
        if index.is_empty() {
            return Err(EmbeddingError::EmptyVocabulary);
        }
        Ok(Self {
            dimension,
            index,
            data,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.index.get(word).map(|&row| {
            let start = row * self.dimension;
            &self.data[start..start + self.dimension]
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }
}

const PREALLOC_WORDS: usize = 1 << 20;
const PREALLOC_VALUES: usize = 1 << 26;

fn parse_header(header: &str) -> EmbeddingResult<(usize, usize)> {
    let invalid = || EmbeddingError::Parse {
        line: 1,
        message: format!("expected '<count> <dimension>', got '{}'", header.trim()),
    };
    let mut parts = header.split_whitespace();
    let count = parts.next().and_then(|p| p.parse::<usize>().ok()).ok_or_else(invalid)?;
    let dimension = parts.next().and_then(|p| p.parse::<usize>().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() || dimension == 0 {
        return Err(invalid());
    }
    Ok((count, dimension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "3 4\n\
gear 1 0 0 0\n\
rocket 0 1 0 0 \n\
idea 0 0 1 0.5\n";

    #[test]
    fn test_parse_sample() {
        let table = WordVectorTable::from_reader(Cursor::new(SAMPLE), None).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.dimension(), 4);
        assert_eq!(table.get("idea"), Some(&[0.0, 0.0, 1.0, 0.5][..]));
        assert_eq!(table.get("rocket"), Some(&[0.0, 1.0, 0.0, 0.0][..]));
        assert!(table.get("unicorn").is_none());
    }

    #[test]
    fn test_max_words_limits_load() {
        let table = WordVectorTable::from_reader(Cursor::new(SAMPLE), Some(2)).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("gear"));
        assert!(!table.contains("idea"));
    }

    #[test]
    fn test_bad_header() {
        let err = WordVectorTable::from_reader(Cursor::new("three four\n"), None).unwrap_err();
        assert!(matches!(err, EmbeddingError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_wrong_row_dimension() {
        let err = WordVectorTable::from_reader(Cursor::new("1 3\ngear 1 0\n"), None).unwrap_err();
        assert!(matches!(
            err,
            EmbeddingError::InvalidDimension {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_non_numeric_component() {
        let err = WordVectorTable::from_reader(Cursor::new("1 2\ngear 1 x\n"), None).unwrap_err();
        assert!(matches!(err, EmbeddingError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_header_only_is_empty_vocabulary() {
        let err = WordVectorTable::from_reader(Cursor::new("0 300\n"), None).unwrap_err();
        assert!(matches!(err, EmbeddingError::EmptyVocabulary));
    }

    #[test]
    fn test_oversized_header_count_does_not_preallocate() {
        let table =
            WordVectorTable::from_reader(Cursor::new("18446744073709551615 3\ngear 1 0 0\n"), None)
                .unwrap();
        assert_eq!(table.len(), 1);

        let table = WordVectorTable::from_reader(Cursor::new("4000000000 300\n"), None);
        assert!(matches!(table, Err(EmbeddingError::EmptyVocabulary)));
    }

    #[test]
    fn test_non_finite_component_rejected_with_line() {
        for value in ["NaN", "inf", "-inf"] {
            let input = format!("2 2\ngear 1 0\nrocket 0 {}\n", value);
            let err = WordVectorTable::from_reader(Cursor::new(input), None).unwrap_err();
            assert!(
                matches!(err, EmbeddingError::Parse { line: 3, .. }),
                "{}: {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_duplicate_word_keeps_first() {
        let table =
            WordVectorTable::from_reader(Cursor::new("2 2\ngear 1 0\ngear 0 1\n"), None).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("gear"), Some(&[1.0, 0.0][..]));
    }
}
