// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

use crate::db::get_base_currency;
use crate::utils::pretty_table;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Negative stored amounts: the ledger is sign-free, type carries direction
    let mut stmt =
        conn.prepare("SELECT id, amount FROM transactions WHERE CAST(amount AS REAL) < 0")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let amount: String = r.get(1)?;
        rows.push(vec!["negative_amount".into(), format!("tx {} ({})", id, amount)]);
    }

    // 2) Negative quantities violate the holding invariant
    let mut stmt2 =
        conn.prepare("SELECT symbol, quantity FROM holdings WHERE CAST(quantity AS REAL) < 0")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let symbol: String = r.get(0)?;
        let qty: String = r.get(1)?;
        rows.push(vec!["negative_quantity".into(), format!("{} ({})", symbol, qty)]);
    }

    // 3) Holding currencies with no stored rate: valuations will fall back raw
    let base = get_base_currency(conn)?;
    let mut stmt3 = conn.prepare(
        "SELECT DISTINCT currency FROM holdings WHERE currency != ?1
         EXCEPT SELECT code FROM fx_rates",
    )?;
    let mut cur3 = stmt3.query([&base])?;
    while let Some(r) = cur3.next()? {
        let ccy: String = r.get(0)?;
        rows.push(vec!["missing_fx".into(), ccy]);
    }

    // 4) Snapshots with unparsable values
    let mut stmt4 = conn.prepare("SELECT id, value FROM snapshots")?;
    let mut cur4 = stmt4.query([])?;
    while let Some(r) = cur4.next()? {
        let id: i64 = r.get(0)?;
        let value: String = r.get(1)?;
        if rust_decimal::Decimal::from_str_exact(&value).is_err() {
            rows.push(vec!["bad_snapshot_value".into(), format!("snapshot {}", id)]);
        }
    }

    if rows.is_empty() {
        let dangling: Option<i64> = conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
            .optional()?;
        println!(
            "doctor: no issues found ({} transactions checked)",
            dangling.unwrap_or(0)
        );
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
