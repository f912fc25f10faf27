//! Internal helpers for validation and name matching.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation and normalization so every write and query applies the same
//! rules.

use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, ResultEngine};

/// Escape character used in the stats `LIKE` pattern.
pub(crate) const LIKE_ESCAPE: char = '\\';

/// Reject months outside `1..=12`.
pub(crate) fn validate_month(month: i32) -> ResultEngine<()> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    Ok(())
}

/// Amounts are minor units and never negative; the type carries the sign.
pub(crate) fn validate_amount(amount: i64) -> ResultEngine<()> {
    if amount < 0 {
        return Err(EngineError::InvalidAmount(format!(
            "amount must be >= 0, got {amount}"
        )));
    }
    Ok(())
}

pub(crate) fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Key used to match author names: NFC, then Unicode lower-case.
///
/// Stored in `authors.name_norm` and applied to the query side as well, so
/// the comparison does not depend on the database's `LOWER()`, which only
/// folds ASCII in SQLite.
pub(crate) fn search_key(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

/// Build a `LIKE` pattern matching `needle` anywhere, with wildcards in the
/// needle taken literally.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
