//! Totals over a filtered set of budget entries.
//!
//! The stats query feeds this with *every* entry matching its filter, before
//! any paging, so the count and per-type sums never depend on which page was
//! requested.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{BudgetType, EngineError, ResultEngine};

/// Row count and per-type amount sums of a filtered set.
///
/// Types with no matching entry are absent from `by_type`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total: u64,
    pub by_type: BTreeMap<BudgetType, i64>,
}

/// Count `entries` and sum their amounts per budget type.
///
/// Fails with [`EngineError::TotalOverflow`] when a sum leaves the `i64`
/// range.
pub fn aggregate<I>(entries: I) -> ResultEngine<Totals>
where
    I: IntoIterator<Item = (BudgetType, i64)>,
{
    entries
        .into_iter()
        .try_fold(Totals::default(), |mut totals, (kind, amount)| {
            totals.total += 1;
            let sum = totals.by_type.entry(kind).or_insert(0);
            *sum = sum
                .checked_add(amount)
                .ok_or(EngineError::TotalOverflow(kind))?;
            Ok(totals)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_categories() {
        let totals = aggregate(Vec::<(BudgetType, i64)>::new()).unwrap();
        assert_eq!(totals.total, 0);
        assert!(totals.by_type.is_empty());
    }

    #[test]
    fn sums_per_type() {
        let totals = aggregate([
            (BudgetType::Income, 10),
            (BudgetType::Expense, 3),
            (BudgetType::Income, 95),
        ])
        .unwrap();
        assert_eq!(totals.total, 3);
        assert_eq!(totals.by_type.get(&BudgetType::Income), Some(&105));
        assert_eq!(totals.by_type.get(&BudgetType::Expense), Some(&3));
    }

    #[test]
    fn missing_type_is_absent_not_zero() {
        let totals = aggregate([(BudgetType::Income, 0)]).unwrap();
        assert_eq!(totals.by_type.len(), 1);
        assert!(!totals.by_type.contains_key(&BudgetType::Expense));
    }

    #[test]
    fn overflowing_sum_is_an_error() {
        let err = aggregate([
            (BudgetType::Expense, 1),
            (BudgetType::Income, i64::MAX),
            (BudgetType::Income, 10),
        ])
        .unwrap_err();
        assert_eq!(err, EngineError::TotalOverflow(BudgetType::Income));
    }

    #[test]
    fn sum_up_to_max_is_exact() {
        let totals = aggregate([(BudgetType::Income, i64::MAX - 10), (BudgetType::Income, 10)]).unwrap();
        assert_eq!(totals.by_type.get(&BudgetType::Income), Some(&i64::MAX));
    }
}
