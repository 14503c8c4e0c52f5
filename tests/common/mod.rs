#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use progression_core::domain::Transaction;
use progression_core::storage::save_ledger_to_path;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(hour, 0, 0).expect("valid time")
}

/// Writes `transactions` as a ledger file named `ledger.json` under `dir`.
pub fn write_ledger(dir: &Path, transactions: &[Transaction]) -> PathBuf {
    let path = dir.join("ledger.json");
    save_ledger_to_path(transactions, &path).expect("write ledger");
    path
}
