// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;

use crate::engine::currency::RateTable;
use crate::models::{
    AssetClass, Category, Holding, NetWorthSnapshot, Transaction, TxKind,
};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.wealthcompass", "Wealthcompass", "wealthcompass"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("wealthcompass.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);

    CREATE TABLE IF NOT EXISTS holdings(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        symbol TEXT NOT NULL,
        name TEXT NOT NULL,
        class TEXT NOT NULL CHECK(class IN ('cash','crypto','other')),
        quantity TEXT NOT NULL,
        avg_buy_price TEXT NOT NULL DEFAULT '0',
        current_price TEXT NOT NULL DEFAULT '0',
        currency TEXT NOT NULL,
        UNIQUE(symbol, class)
    );

    CREATE TABLE IF NOT EXISTS snapshots(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        value TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_snapshots_date ON snapshots(date);

    -- Current rates only: one row per currency, base currency in settings
    CREATE TABLE IF NOT EXISTS fx_rates(
        code TEXT PRIMARY KEY,
        rate TEXT NOT NULL,
        fetched_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}

// Base/display currency settings
pub fn get_base_currency(conn: &Connection) -> Result<String> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='base_currency'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v.unwrap_or_else(|| "USD".to_string()))
}

pub fn set_base_currency(conn: &Connection, ccy: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('base_currency', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![ccy],
    )?;
    Ok(())
}

pub fn get_display_currency(conn: &Connection) -> Result<String> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='display_currency'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    match v {
        Some(ccy) => Ok(ccy),
        None => get_base_currency(conn),
    }
}

pub fn set_display_currency(conn: &Connection, ccy: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('display_currency', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![ccy],
    )?;
    Ok(())
}

fn parse_stored_date(s: &str, what: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid stored {} date '{}'", what, s))
}

fn parse_stored_decimal(s: &str, what: &str) -> Result<Decimal> {
    Decimal::from_str_exact(s).with_context(|| format!("Invalid stored {} '{}'", what, s))
}

/// Full ledger snapshot for the engine, unordered.
pub fn load_ledger(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt =
        conn.prepare("SELECT id, date, kind, amount, category, description FROM transactions")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, Option<String>>(5)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, date_s, kind_s, amount_s, category_s, description) = row?;
        let kind = TxKind::parse(&kind_s)
            .with_context(|| format!("Unknown transaction kind '{}' (id {})", kind_s, id))?;
        out.push(Transaction {
            id,
            date: parse_stored_date(&date_s, "transaction")?,
            kind,
            amount: parse_stored_decimal(&amount_s, "amount")?,
            category: Category::parse(kind, &category_s),
            description,
        });
    }
    Ok(out)
}

pub fn load_holdings(conn: &Connection) -> Result<Vec<Holding>> {
    let mut stmt = conn.prepare(
        "SELECT id, symbol, name, class, quantity, avg_buy_price, current_price, currency
         FROM holdings ORDER BY symbol",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, String>(6)?,
            r.get::<_, String>(7)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, symbol, name, class_s, qty_s, avg_s, cur_s, currency) = row?;
        out.push(Holding {
            id,
            class: AssetClass::from(class_s.as_str()),
            quantity: parse_stored_decimal(&qty_s, "quantity")?,
            avg_buy_price: parse_stored_decimal(&avg_s, "avg buy price")?,
            current_price: parse_stored_decimal(&cur_s, "current price")?,
            symbol,
            name,
            currency,
        });
    }
    Ok(out)
}

pub fn load_snapshots(conn: &Connection) -> Result<Vec<NetWorthSnapshot>> {
    let mut stmt = conn.prepare("SELECT id, date, value FROM snapshots ORDER BY date")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, date_s, value_s) = row?;
        out.push(NetWorthSnapshot {
            id,
            date: parse_stored_date(&date_s, "snapshot")?,
            value: parse_stored_decimal(&value_s, "snapshot value")?,
        });
    }
    Ok(out)
}

pub fn load_rate_table(conn: &Connection) -> Result<RateTable> {
    let base = get_base_currency(conn)?;
    let mut table = RateTable::new(&base);
    let mut stmt = conn.prepare("SELECT code, rate FROM fx_rates")?;
    let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)))?;
    for row in rows {
        let (code, rate_s) = row?;
        let rate = parse_stored_decimal(&rate_s, "fx rate")
            .with_context(|| format!("for currency {}", code))?;
        table.insert(&code, rate);
    }
    Ok(table)
}
