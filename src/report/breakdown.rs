//! Expense totals grouped by category.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    category::{Category, CategoryId},
    transaction::{Transaction, TransactionKind},
};

use super::window::DateWindow;

/// The group label used for transactions without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Fallback chart colors for categories without a stored color, cycled in
/// group first-seen order.
const CHART_PALETTE: [&str; 9] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272", "#fc8452", "#9a60b4",
    "#ea7ccc",
];

/// One slice of a category breakdown: a category and how much was spent in
/// it over the report window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The display name of the category, or [UNCATEGORIZED_LABEL].
    pub name: String,
    /// The summed expense amount, always positive.
    pub total: f64,
    /// The display color for this slice as a hex string.
    pub color: String,
}

/// Group expense transactions within `window` by category and sum their
/// amounts.
///
/// Income transactions and transactions outside the window are ignored.
/// Transactions without a category, or whose category ID has no matching
/// entry in `categories`, fall into a single group labelled
/// [UNCATEGORIZED_LABEL]. Colors come from the category metadata where
/// present, otherwise from a fixed palette cycled in the order groups first
/// appear.
///
/// The result is sorted by total, largest first; ties keep their first-seen
/// order. An empty input produces an empty vector, never an error.
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
    window: DateWindow,
) -> Vec<CategoryTotal> {
    let categories_by_id: HashMap<CategoryId, &Category> = categories
        .iter()
        .map(|category| (category.id, category))
        .collect();

    // Groups are keyed by category ID, with None pooling the uncategorized.
    // A Vec keeps first-seen order for palette assignment and tie-breaks.
    let mut group_index: HashMap<Option<CategoryId>, usize> = HashMap::new();
    let mut groups: Vec<(Option<CategoryId>, f64)> = Vec::new();

    let expenses = transactions.iter().filter(|transaction| {
        transaction.kind == TransactionKind::Expense && window.contains(transaction.date)
    });

    for transaction in expenses {
        let key = transaction
            .category_id
            .filter(|id| categories_by_id.contains_key(id));

        match group_index.get(&key) {
            Some(&index) => groups[index].1 += transaction.amount,
            None => {
                group_index.insert(key, groups.len());
                groups.push((key, transaction.amount));
            }
        }
    }

    let mut totals: Vec<CategoryTotal> = groups
        .into_iter()
        .enumerate()
        .map(|(index, (key, total))| {
            let (name, color) = match key.and_then(|id| categories_by_id.get(&id)) {
                Some(category) => (category.name.to_string(), category.color.clone()),
                None => (UNCATEGORIZED_LABEL.to_owned(), None),
            };
            let color =
                color.unwrap_or_else(|| CHART_PALETTE[index % CHART_PALETTE.len()].to_owned());

            CategoryTotal { name, total, color }
        })
        .collect();

    // Stable sort keeps first-seen order for equal totals.
    totals.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    totals
}
