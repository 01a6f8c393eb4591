use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::Color;

/// One category/value sample of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub category: String,
    pub value: f64,
}

impl CategoryPoint {
    #[must_use]
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// Named, colored sequence of samples sharing a category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub title: String,
    pub color: Color,
    pub points: Vec<CategoryPoint>,
}

impl Series {
    #[must_use]
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        Self {
            title: title.into(),
            color,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_point(mut self, category: impl Into<String>, value: f64) -> Self {
        self.points.push(CategoryPoint::new(category, value));
        self
    }

    /// Value of the first sample for `category`, if any.
    #[must_use]
    pub fn value_for(&self, category: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|point| point.category == category)
            .map(|point| point.value)
    }
}

/// Dense series-by-category value matrix.
///
/// The category order is taken from the first ("primary") series; duplicate
/// keys collapse onto their first position. Missing or non-finite values are
/// stored as `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    categories: IndexSet<String>,
    values: Vec<Vec<f64>>,
}

impl CategoryTable {
    #[must_use]
    pub fn build(series: &[Series]) -> Self {
        let categories: IndexSet<String> = series
            .first()
            .map(|primary| {
                primary
                    .points
                    .iter()
                    .map(|point| point.category.clone())
                    .collect()
            })
            .unwrap_or_default();

        let values = series
            .iter()
            .map(|s| {
                categories
                    .iter()
                    .map(|category| {
                        s.value_for(category)
                            .filter(|value| value.is_finite())
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect();

        Self { categories, values }
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.values.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    #[must_use]
    pub fn category(&self, index: usize) -> Option<&str> {
        self.categories.get_index(index).map(String::as_str)
    }

    #[must_use]
    pub fn value(&self, series_index: usize, category_index: usize) -> f64 {
        self.values
            .get(series_index)
            .and_then(|row| row.get(category_index))
            .copied()
            .unwrap_or(0.0)
    }

    /// Largest single value in the table, `0.0` when empty.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }
}
