//! Immutable catalog of labeled vectors.
//!
//! Rows are kept in lexical label order inside one contiguous row-major
//! matrix with precomputed row norms, so scoring a query against the whole
//! catalog is a single pass over memory.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::Vector;
use crate::error::{CoreError, CoreResult};
use crate::similarity::{cosine_from_parts, dot, l2_norm};

/// Serializable (label, vector) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub label: String,
    pub vector: Vector,
}

/// Read-only catalog of labeled vectors with a fixed dimension.
///
/// # Example
///
/// ```rust
/// use icon_match_core::Catalog;
///
/// let mut builder = Catalog::builder(2);
/// builder.insert("rocket", vec![0.0, 1.0]).unwrap();
/// builder.insert("gear", vec![1.0, 0.0]).unwrap();
/// let catalog = builder.build().unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.labels().next(), Some("gear"));
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    dimension: usize,
    labels: Vec<String>,
    matrix: Vec<f32>,
    norms: Vec<f32>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Start building a catalog of the given dimension.
    pub fn builder(dimension: usize) -> CatalogBuilder {
        CatalogBuilder {
            dimension,
            entries: BTreeMap::new(),
        }
    }

    /// Build a catalog from (label, vector) pairs.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if `dimension == 0` or a component is not finite
    /// - `DimensionMismatch` if a vector has the wrong length
    /// - `DuplicateLabel` if a label appears twice
    pub fn from_entries<I>(dimension: usize, entries: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (String, Vector)>,
    {
        let mut builder = Self::builder(dimension);
        for (label, vector) in entries {
            builder.insert(label, vector)?;
        }
        builder.build()
    }

    /// Fixed vector dimension D.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in lexical order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Label of row `row`.
    pub fn label_at(&self, row: usize) -> Option<&str> {
        self.labels.get(row).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Vector stored under `label`.
    pub fn vector(&self, label: &str) -> Option<&[f32]> {
        self.index.get(label).map(|&row| self.row(row))
    }

    /// Iterate `(label, vector)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.labels
            .iter()
            .enumerate()
            .map(move |(row, label)| (label.as_str(), self.row(row)))
    }

    /// Owned entries, for persistence.
    pub fn to_entries(&self) -> Vec<CatalogEntry> {
        self.iter()
            .map(|(label, vector)| CatalogEntry {
                label: label.to_string(),
                vector: vector.to_vec(),
            })
            .collect()
    }

    /// Score `query` against every row in one batched pass.
    ///
    /// Element `i` of the result is the cosine similarity with row `i`
    /// (see [`label_at`](Self::label_at)). A zero query vector scores `0.0`
    /// everywhere.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `query.len() != self.dimension()`.
    pub fn score_all(&self, query: &[f32]) -> CoreResult<Vec<f32>> {
        self.check_dimension(query)?;

        let query_norm = l2_norm(query);
        if query_norm < f32::EPSILON {
            return Ok(vec![0.0; self.len()]);
        }

        Ok(self
            .matrix
            .chunks_exact(self.dimension)
            .zip(self.norms.iter())
            .map(|(row, &row_norm)| cosine_from_parts(dot(query, row), query_norm, row_norm))
            .collect())
    }

    /// Fail with `DimensionMismatch` unless `vector` has dimension D.
    pub fn check_dimension(&self, vector: &[f32]) -> CoreResult<()> {
        if vector.len() != self.dimension {
            return Err(CoreError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    fn row(&self, row: usize) -> &[f32] {
        let start = row * self.dimension;
        &self.matrix[start..start + self.dimension]
    }
}

/// Incremental catalog construction with validation on every insert.
#[derive(Debug)]
pub struct CatalogBuilder {
    dimension: usize,
    entries: BTreeMap<String, Vector>,
}

impl CatalogBuilder {
    /// Add one entry.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch`, `ValidationError` (non-finite component) or
    /// `DuplicateLabel`.
    pub fn insert(&mut self, label: impl Into<String>, vector: Vector) -> CoreResult<&mut Self> {
        let label = label.into();
        if vector.len() != self.dimension {
            return Err(CoreError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        if let Some(pos) = vector.iter().position(|v| !v.is_finite()) {
            return Err(CoreError::validation(
                format!("catalog[{}]", label),
                format!("component {} is not finite", pos),
            ));
        }
        if self.entries.contains_key(&label) {
            return Err(CoreError::DuplicateLabel { label });
        }
        self.entries.insert(label, vector);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze into a [`Catalog`].
    ///
    /// # Errors
    ///
    /// `ValidationError` if the dimension is zero.
    pub fn build(self) -> CoreResult<Catalog> {
        if self.dimension == 0 {
            return Err(CoreError::validation(
                "catalog.dimension",
                "dimension must be greater than 0",
            ));
        }

        let count = self.entries.len();
        let mut labels = Vec::with_capacity(count);
        let mut matrix = Vec::with_capacity(count * self.dimension);
        let mut norms = Vec::with_capacity(count);
        let mut index = HashMap::with_capacity(count);

        for (row, (label, vector)) in self.entries.into_iter().enumerate() {
            norms.push(l2_norm(&vector));
            matrix.extend_from_slice(&vector);
            index.insert(label.clone(), row);
            labels.push(label);
        }

        Ok(Catalog {
            dimension: self.dimension,
            labels,
            matrix,
            norms,
            index,
        })
    }
}
