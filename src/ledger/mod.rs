//! Read-only ledger access and the aggregates the progression engines share.
//!
//! The ledger itself is owned by the host; this module only describes how the
//! engines query it.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::domain::Transaction;

/// Query surface the host's ledger must expose.
pub trait LedgerView {
    /// Every transaction, in insertion (chronological) order.
    fn all_transactions(&self) -> &[Transaction];

    /// Transactions dated within `[start, end]`. Undated or unparseable
    /// records never match.
    fn transactions_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Vec<&Transaction> {
        self.all_transactions()
            .iter()
            .filter(|txn| {
                txn.timestamp()
                    .map(|ts| ts >= start && ts <= end)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Transactions dated at or after `since`.
    fn transactions_since(&self, since: NaiveDateTime) -> Vec<&Transaction> {
        self.transactions_between(since, NaiveDateTime::MAX)
    }

    fn len(&self) -> usize {
        self.all_transactions().len()
    }

    fn is_empty(&self) -> bool {
        self.all_transactions().is_empty()
    }
}

impl LedgerView for [Transaction] {
    fn all_transactions(&self) -> &[Transaction] {
        self
    }
}

impl LedgerView for Vec<Transaction> {
    fn all_transactions(&self) -> &[Transaction] {
        self.as_slice()
    }
}

/// Σ income − Σ expense. Invalid amounts contribute nothing.
pub fn net_savings<'a, I>(transactions: I) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .map(Transaction::signed_amount)
        .sum()
}

/// Σ amount of every transaction filed under `category`, regardless of kind.
pub fn category_total<'a, I>(transactions: I, category: &str) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|txn| txn.in_category(category))
        .filter_map(Transaction::magnitude)
        .sum()
}

/// Distinct calendar days carrying at least one dated transaction.
pub fn active_days<'a, I>(transactions: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter_map(Transaction::date)
        .collect()
}

/// Dated transactions sorted by timestamp, oldest first.
pub fn dated_chronological(ledger: &(impl LedgerView + ?Sized)) -> Vec<NaiveDateTime> {
    let mut stamps: Vec<NaiveDateTime> = ledger
        .all_transactions()
        .iter()
        .filter_map(Transaction::timestamp)
        .collect();
    stamps.sort();
    stamps
}

/// Number of transactions dated in the same calendar month as `reference`.
pub fn count_in_month(ledger: &(impl LedgerView + ?Sized), reference: NaiveDate) -> usize {
    ledger
        .all_transactions()
        .iter()
        .filter_map(Transaction::date)
        .filter(|date| date.year() == reference.year() && date.month() == reference.month())
        .count()
}

/// Whether any transaction on the ledger is dated `day`.
pub fn has_activity_on(ledger: &(impl LedgerView + ?Sized), day: NaiveDate) -> bool {
    ledger
        .all_transactions()
        .iter()
        .any(|txn| txn.date() == Some(day))
}
