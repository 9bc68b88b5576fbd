//! Keyword based category assignment.
//!
//! The taxonomy is read once at startup and shared read-only between workers.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use thiserror::Error;

use crate::domain::types::CategoryName;
use crate::similarity::{normalize, weighted_ratio};

/// Label returned when no keyword is similar enough.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Minimum [`weighted_ratio`] score for a keyword to count as a match.
pub const MATCH_THRESHOLD: f64 = 70.0;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse taxonomy: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid category label: {0}")]
    InvalidLabel(String),
}

/// Category labels and their representative keywords, in file order.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    categories: IndexMap<String, Vec<String>>,
}

impl Taxonomy {
    pub fn new(categories: IndexMap<String, Vec<String>>) -> Self {
        Self { categories }
    }

    /// Parse a JSON object of the form `{"Label": ["keyword", ...]}`.
    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let categories: IndexMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::new(categories))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TaxonomyError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Keyword {
    normalized: String,
    category: CategoryName,
}

/// Maps free text onto the best matching taxonomy category.
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    keywords: Vec<Keyword>,
    fallback: CategoryName,
}

impl CategoryMatcher {
    /// Flatten `taxonomy` into keyword/category pairs.
    ///
    /// A keyword listed under several categories belongs to the first one.
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, TaxonomyError> {
        let mut keywords: Vec<Keyword> = Vec::new();
        for (label, words) in &taxonomy.categories {
            let category = CategoryName::new(label.as_str())
                .map_err(|_| TaxonomyError::InvalidLabel(label.clone()))?;
            for word in words {
                let normalized = normalize(word);
                // A repeated keyword keeps its first category.
                if normalized.is_empty() || keywords.iter().any(|k| k.normalized == normalized) {
                    continue;
                }
                keywords.push(Keyword {
                    normalized,
                    category: category.clone(),
                });
            }
        }

        let fallback = CategoryName::new(UNCATEGORIZED)
            .map_err(|_| TaxonomyError::InvalidLabel(UNCATEGORIZED.to_string()))?;

        Ok(Self { keywords, fallback })
    }

    /// Return the category of the most similar keyword, or
    /// [`UNCATEGORIZED`] when the best score is below [`MATCH_THRESHOLD`].
    ///
    /// Ties go to the keyword that appears first in the taxonomy.
    pub fn categorize(&self, text: &str) -> CategoryName {
        let hint = normalize(text);

        let mut best: Option<(&Keyword, f64)> = None;
        for keyword in &self.keywords {
            let score = weighted_ratio(&hint, &keyword.normalized);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((keyword, score));
            }
        }

        match best {
            Some((keyword, score)) if score >= MATCH_THRESHOLD => {
                log::debug!(
                    "Matched '{}' to keyword '{}' ({score:.1})",
                    text,
                    keyword.normalized
                );
                keyword.category.clone()
            }
            _ => self.fallback.clone(),
        }
    }
}
