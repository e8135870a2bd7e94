use contracts::projections::p900_production_suggestion::dto::ProductionSuggestion;

/// Render key of a report line.
///
/// Codes are not unique in the report, so the position is part of the key;
/// the contents are too, so a refresh that changes a line re-renders it.
pub fn row_key(index: usize, line: &ProductionSuggestion) -> String {
    format!(
        "{index}:{}:{}:{}:{}",
        line.code, line.quantity, line.unit_price, line.total_value
    )
}

#[derive(Clone, Debug, Default)]
pub struct SuggestionListState {
    pub items: Vec<ProductionSuggestion>,
    pub is_loading: bool,
}

impl SuggestionListState {
    /// Sum of `quantity * unit_price` over every line
    pub fn grand_total(&self) -> f64 {
        self.items.iter().map(|s| s.line_total()).sum()
    }

    pub fn total_units(&self) -> i64 {
        self.items.iter().map(|s| s.quantity).sum()
    }
}
