//! Ledger transactions as seen by the progression engines.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Displayable;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Serialization format used when a transaction is built from a local timestamp.
pub const DATE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// An immutable ledger record. Amounts are stored as positive magnitudes with a
/// separate [`TransactionKind`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_iso: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        date: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            kind,
            category: category.into(),
            date_iso: date.map(|value| value.format(DATE_ISO_FORMAT).to_string()),
            tags: Vec::new(),
        }
    }

    pub fn income(amount: f64, category: impl Into<String>, date: Option<NaiveDateTime>) -> Self {
        Self::new(TransactionKind::Income, amount, category, date)
    }

    pub fn expense(amount: f64, category: impl Into<String>, date: Option<NaiveDateTime>) -> Self {
        Self::new(TransactionKind::Expense, amount, category, date)
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount usable in aggregates. `None` for NaN, infinite or negative values.
    pub fn magnitude(&self) -> Option<f64> {
        if self.amount.is_finite() && self.amount >= 0.0 {
            Some(self.amount)
        } else {
            None
        }
    }

    /// Signed contribution to cumulative savings: income adds, expense subtracts.
    pub fn signed_amount(&self) -> f64 {
        match (self.magnitude(), self.kind) {
            (Some(value), TransactionKind::Income) => value,
            (Some(value), TransactionKind::Expense) => -value,
            (None, _) => 0.0,
        }
    }

    /// Parses `date_iso` into the host's local wall-clock time.
    ///
    /// Offset-bearing timestamps are converted to local time; naive timestamps
    /// and bare dates are taken as already local. Anything else yields `None`.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(self.date_iso.as_deref()?)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp().map(|ts| ts.date())
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "txn:{} [{} {:.2} {}]",
            self.id, self.kind, self.amount, self.category
        )
    }
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local).naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
