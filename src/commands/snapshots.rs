// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::{load_holdings, load_rate_table};
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("take", sub)) => take(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Values every holding in the base currency and appends a snapshot. A
/// missing rate fails the capture: a snapshot recorded from a partial
/// valuation would silently distort the trend.
fn take(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(raw) => parse_date(raw)?,
        None => Utc::now().date_naive(),
    };
    let holdings = load_holdings(conn)?;
    let rates = load_rate_table(conn)?;
    let base = rates.base().to_string();

    let mut total = Decimal::ZERO;
    for h in &holdings {
        let value = rates
            .convert(h.value(), &h.currency, &base)
            .with_context(|| format!("Cannot value holding '{}'; fetch rates first", h.symbol))?;
        total += value;
    }

    conn.execute(
        "INSERT INTO snapshots(date, value) VALUES (?1, ?2)",
        params![date.to_string(), total.to_string()],
    )?;
    println!("Snapshot on {}: {}", date, fmt_money(&total, &base));
    Ok(())
}

#[derive(Serialize)]
struct SnapshotRow {
    id: i64,
    date: String,
    value: String,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut stmt = conn.prepare("SELECT id, date, value FROM snapshots ORDER BY date DESC")?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(SnapshotRow {
            id: r.get(0)?,
            date: r.get(1)?,
            value: r.get(2)?,
        });
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| vec![r.id.to_string(), r.date.clone(), r.value.clone()])
            .collect();
        println!("{}", pretty_table(&["Id", "Date", "Value"], rows));
    }
    Ok(())
}
