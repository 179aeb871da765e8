use serde::{Serialize, Deserialize};

use crate::data::normalize::ColumnScale;

/// One test-set row of the final report: ground truth on the original scale,
/// the raw normalized prediction, its denormalized value, and the absolute
/// error on the original scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TestRow {
    pub actual: f64,
    pub predicted_norm: f64,
    pub predicted: f64,
    pub abs_error: f64,
}

/// Pairs normalized predictions with original-scale ground truth, using the
/// target scale captured before normalization.
///
/// # Panics
/// Panics if the two series differ in length.
pub fn build_report(
    actual: &[f64],
    predicted_norm: &[f64],
    target_scale: ColumnScale,
) -> Vec<TestRow> {
    assert_eq!(
        actual.len(),
        predicted_norm.len(),
        "actual and predicted series must have equal length"
    );

    actual
        .iter()
        .zip(predicted_norm.iter())
        .map(|(&a, &p)| {
            let predicted = target_scale.denormalize(p);
            TestRow {
                actual: a,
                predicted_norm: p,
                predicted,
                abs_error: (a - predicted).abs(),
            }
        })
        .collect()
}

/// Renders the first `limit` rows as an aligned text table.
pub fn render_report(rows: &[TestRow], limit: usize) -> String {
    let mut s = String::new();
    s.push_str("   actual   pred(norm)   predicted   abs error\n");
    s.push_str("  ---------------------------------------------\n");
    for row in rows.iter().take(limit) {
        s.push_str(&format!(
            "  {:8.2}   {:9.4}   {:9.2}   {:9.2}\n",
            row.actual, row.predicted_norm, row.predicted, row.abs_error
        ));
    }
    if rows.len() > limit {
        s.push_str(&format!("  ... {} more rows\n", rows.len() - limit));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denormalizes_with_the_captured_target_scale() {
        let scale = ColumnScale { min: 20.0, max: 80.0 };
        let rows = build_report(&[50.0, 35.0], &[0.5, 0.5], scale);

        assert_eq!(rows[0].predicted, 50.0);
        assert_eq!(rows[0].abs_error, 0.0);
        assert_eq!(rows[1].predicted, 50.0);
        assert_eq!(rows[1].abs_error, 15.0);
    }

    #[test]
    fn render_truncates_at_limit() {
        let scale = ColumnScale { min: 0.0, max: 1.0 };
        let rows = build_report(&[0.1, 0.2, 0.3], &[0.1, 0.2, 0.3], scale);
        let text = render_report(&rows, 2);
        assert!(text.contains("... 1 more rows"));
    }
}
