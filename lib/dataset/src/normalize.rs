//! Yes/No normalization of questionnaire cells
//!
//! Textual cells map "yes" to 1 and "no" to 0, ignoring case and surrounding
//! whitespace. Everything else, including empty cells, becomes 0.

/// How a column's cells are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-empty cell parses as a number
    Numeric,
    /// Yes/No answers (or anything non-numeric)
    Textual,
}

impl ColumnKind {
    /// Detect the kind of a column from its raw cells
    pub fn detect<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let all_numeric = cells
            .into_iter()
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .all(|cell| cell.parse::<f64>().is_ok());

        if all_numeric {
            ColumnKind::Numeric
        } else {
            ColumnKind::Textual
        }
    }
}

/// Map a yes/no answer to 1/0; unrecognized input gives `None`
pub fn normalize_answer(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("yes") {
        Some(1)
    } else if trimmed.eq_ignore_ascii_case("no") {
        Some(0)
    } else {
        None
    }
}

/// Normalize one dataset cell to a feature value; never NaN
pub fn normalize_cell(raw: &str, kind: ColumnKind) -> f64 {
    match kind {
        ColumnKind::Textual => normalize_answer(raw).map(f64::from).unwrap_or(0.0),
        ColumnKind::Numeric => match raw.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => v,
            _ => 0.0,
        },
    }
}

/// Normalize a label cell to a 0/1 outcome flag
pub fn normalize_label(raw: &str) -> u8 {
    normalize_answer(raw).unwrap_or(0)
}
