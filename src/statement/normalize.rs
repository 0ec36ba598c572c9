//! Normalizes raw statement rows into transaction drafts.
//!
//! Bank statement exports disagree on column naming, date formats, and how
//! they express direction (a signed amount column versus separate debit and
//! credit columns). The normalizer resolves all three, dropping rows it
//! cannot make sense of rather than failing the whole import, because real
//! statements are noisy.

use time::{Date, PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::transaction::{TransactionDraft, TransactionKind};

use super::rows::{CellValue, RawRow};

/// Accepted date column names, probed in order. The order is a contract:
/// when a row carries more than one variant, the first match wins.
const DATE_COLUMNS: [&str; 5] = ["Date", "date", "DATE", "Transaction Date", "transaction_date"];

/// Accepted description column names, probed in order.
const DESCRIPTION_COLUMNS: [&str; 5] = [
    "Description",
    "description",
    "DESCRIPTION",
    "Narration",
    "narration",
];

/// Accepted signed-amount column names, probed in order.
const AMOUNT_COLUMNS: [&str; 3] = ["Amount", "amount", "AMOUNT"];

/// Accepted debit column names, probed in order.
const DEBIT_COLUMNS: [&str; 3] = ["Debit", "debit", "DEBIT"];

/// Accepted credit column names, probed in order.
const CREDIT_COLUMNS: [&str; 3] = ["Credit", "credit", "CREDIT"];

/// The provenance note attached to every imported transaction.
const IMPORT_NOTES: &str = "Imported from bank statement";

/// Normalize raw statement rows into transaction drafts.
///
/// Pure and infallible: rows that are missing a date or description column,
/// whose date cannot be parsed, or whose derived amount is not strictly
/// positive are dropped with a debug log entry. The output therefore never
/// contains a partial or invalid draft, and normalizing the same rows twice
/// yields identical output.
///
/// Surviving drafts are uncategorized, tagged with a provenance note, and
/// carry an import ID so stores can skip duplicates when overlapping
/// statement exports are imported.
pub fn normalize(rows: &[RawRow]) -> Vec<TransactionDraft> {
    let mut drafts = Vec::new();

    for (row_number, row) in rows.iter().enumerate() {
        let Some(date_cell) = probe(row, &DATE_COLUMNS) else {
            tracing::debug!("dropping row {row_number}: no date column");
            continue;
        };

        let Some(description_cell) = probe(row, &DESCRIPTION_COLUMNS) else {
            tracing::debug!("dropping row {row_number}: no description column");
            continue;
        };
        let description = description_cell.to_text();
        let description = description.trim();

        if description.is_empty() {
            tracing::debug!("dropping row {row_number}: empty description");
            continue;
        }

        let (amount, kind) = match probe(row, &AMOUNT_COLUMNS) {
            Some(amount_cell) => match parse_signed_amount(amount_cell) {
                Some(signed) => classify_amount(signed),
                None => {
                    tracing::debug!("dropping row {row_number}: unparseable amount");
                    continue;
                }
            },
            None => debit_or_credit(row),
        };

        if amount <= 0.0 {
            tracing::debug!("dropping row {row_number}: no positive amount");
            continue;
        }

        let Some(date) = parse_date_cell(date_cell) else {
            tracing::debug!("dropping row {row_number}: unparseable date");
            continue;
        };

        let draft = TransactionDraft::new(date, description, amount, kind)
            .notes(IMPORT_NOTES)
            .import_id(Some(create_import_id(date, description, amount, kind)));

        drafts.push(draft);
    }

    drafts
}

/// Return the first cell present under any of `candidates`, in order.
///
/// This is an ordered scan of literal keys, not a case-insensitive lookup:
/// the probe order defines which column wins when a row carries several
/// variants.
fn probe<'a>(row: &'a RawRow, candidates: &[&str]) -> Option<&'a CellValue> {
    candidates.iter().find_map(|column| row.get(column))
}

/// Classify a signed amount into a magnitude and a direction.
///
/// Strictly positive amounts are income, everything else is an expense.
/// A signed amount of exactly zero classifies as an expense: zero-valued
/// adjustment entries are never income. Existing imports depend on this
/// policy, do not change it.
fn classify_amount(signed: f64) -> (f64, TransactionKind) {
    if signed > 0.0 {
        (signed, TransactionKind::Income)
    } else {
        (signed.abs(), TransactionKind::Expense)
    }
}

/// Resolve the amount from separate debit/credit columns.
///
/// A strictly positive debit wins as an expense before credit is even
/// looked at; a strictly positive credit is income. Anything else yields a
/// zero magnitude, which the caller drops.
fn debit_or_credit(row: &RawRow) -> (f64, TransactionKind) {
    if let Some(debit) = probe(row, &DEBIT_COLUMNS).and_then(parse_signed_amount)
        && debit > 0.0
    {
        return (debit, TransactionKind::Expense);
    }

    if let Some(credit) = probe(row, &CREDIT_COLUMNS).and_then(parse_signed_amount)
        && credit > 0.0
    {
        return (credit, TransactionKind::Income);
    }

    (0.0, TransactionKind::Expense)
}

/// Parse a cell as a signed amount.
///
/// Text cells are stripped down to digits, signs, and the decimal point
/// before parsing, so currency symbols and thousands separators do not get
/// in the way ("$1,234.56" parses as 1234.56).
fn parse_signed_amount(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(value) => Some(*value),
        CellValue::Text(text) => {
            let cleaned: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
                .collect();

            cleaned.parse().ok()
        }
        CellValue::Date(_) => None,
    }
}

const ISO_DATE: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");
const SLASH_DMY: &[BorrowedFormatItem] = format_description!("[day]/[month]/[year]");
const DASH_DMY: &[BorrowedFormatItem] = format_description!("[day]-[month]-[year]");
const ISO_DATETIME: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const ISO_DATETIME_SPACED: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Parse a cell as a calendar date, truncating any time component.
///
/// Native date cells pass through. Text cells are tried against ISO dates,
/// day-first slash and dash forms, then ISO date-times. Slash dates are
/// day-first: "01/05/2024" is the 1st of May.
fn parse_date_cell(cell: &CellValue) -> Option<Date> {
    let text = match cell {
        CellValue::Date(date) => return Some(*date),
        CellValue::Text(text) => text.trim(),
        CellValue::Number(_) => return None,
    };

    for format in [ISO_DATE, SLASH_DMY, DASH_DMY] {
        if let Ok(date) = Date::parse(text, format) {
            return Some(date);
        }
    }

    for format in [ISO_DATETIME, ISO_DATETIME_SPACED] {
        if let Ok(datetime) = PrimitiveDateTime::parse(text, format) {
            return Some(datetime.date());
        }
    }

    None
}

/// Creates a content hash for an imported transaction.
///
/// Rows that normalize to the same date, description, amount, and kind get
/// the same import ID, which is what lets stores skip duplicates when the
/// user imports statement exports that overlap in time.
pub(crate) fn create_import_id(
    date: Date,
    description: &str,
    amount: f64,
    kind: TransactionKind,
) -> i64 {
    let (year, ordinal) = date.to_ordinal_date();

    let mut bytes: Vec<u8> = [
        &year.to_le_bytes()[..],
        &ordinal.to_le_bytes()[..],
        description.as_bytes(),
        &amount.to_le_bytes()[..],
        &[kind as u8][..],
    ]
    .concat();

    while bytes.len() % 8 != 0 {
        bytes.push(0);
    }

    let mut hash: i64 = 0;

    for chunk in bytes.chunks_exact(8) {
        let mut chunk_bytes = [0u8; 8];
        chunk_bytes.copy_from_slice(chunk);

        hash ^= i64::from_le_bytes(chunk_bytes);
        hash = hash.wrapping_mul(0x5bd1e995);
        hash ^= hash >> 15;
        hash = hash.wrapping_mul(0x5bd1e995);
        hash ^= hash >> 13;
    }

    hash
}
