use ordered_float::OrderedFloat;

use crate::core::series::CategoryTable;

/// Running per-category totals across series for stacked layouts.
///
/// Only strictly positive values contribute; zero, negative and missing
/// entries are never drawn and therefore never stacked.
#[derive(Debug, Clone, PartialEq)]
pub struct StackAccumulator {
    totals: Vec<f64>,
}

impl StackAccumulator {
    #[must_use]
    pub fn from_table(table: &CategoryTable) -> Self {
        let totals = (0..table.category_count())
            .map(|category| {
                (0..table.series_count())
                    .map(|series| table.value(series, category))
                    .filter(|value| *value > 0.0)
                    .sum()
            })
            .collect();
        Self { totals }
    }

    #[must_use]
    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    #[must_use]
    pub fn total(&self, category_index: usize) -> f64 {
        self.totals.get(category_index).copied().unwrap_or(0.0)
    }

    /// Largest stack total, used uniformly as the value-axis ceiling.
    #[must_use]
    pub fn max_total(&self) -> f64 {
        self.totals
            .iter()
            .copied()
            .max_by_key(|total| OrderedFloat(*total))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::StackAccumulator;
    use crate::core::Color;
    use crate::core::series::{CategoryTable, Series};

    #[test]
    fn totals_skip_non_positive_values() {
        let series = vec![
            Series::new("a", Color::RED)
                .with_point("x", 10.0)
                .with_point("y", -4.0),
            Series::new("b", Color::BLACK)
                .with_point("x", 15.0)
                .with_point("y", 3.0),
        ];
        let stack = StackAccumulator::from_table(&CategoryTable::build(&series));
        assert_eq!(stack.totals(), &[25.0, 3.0]);
        assert_eq!(stack.max_total(), 25.0);
    }

    #[test]
    fn empty_table_has_zero_max() {
        let stack = StackAccumulator::from_table(&CategoryTable::build(&[]));
        assert_eq!(stack.max_total(), 0.0);
        assert_eq!(stack.total(3), 0.0);
    }
}
