// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{Connection, params};
use serde::Deserialize;

use crate::db::{get_base_currency, load_rate_table, set_base_currency, set_display_currency};
use crate::utils::{http_client, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-base", sub)) => {
            let ccy = sub.get_one::<String>("currency").unwrap().to_uppercase();
            set_base_currency(conn, &ccy)?;
            println!("Base currency set to {}", ccy);
        }
        Some(("set-display", sub)) => {
            let ccy = sub.get_one::<String>("currency").unwrap().to_uppercase();
            set_display_currency(conn, &ccy)?;
            println!("Display currency set to {}", ccy);
        }
        Some(("fetch", _)) => fetch_rates(conn)?,
        Some(("list", sub)) => list_rates(conn, sub)?,
        Some(("convert", sub)) => convert_amount(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn distinct_currencies(conn: &Connection) -> Result<Vec<String>> {
    let mut out = Vec::<String>::new();
    let mut stmt = conn.prepare("SELECT DISTINCT currency FROM holdings")?;
    let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
    for row in rows {
        let c: String = row?;
        if !c.is_empty() && !out.contains(&c) {
            out.push(c);
        }
    }
    Ok(out)
}

#[derive(Debug, Deserialize)]
struct Latest {
    rates: std::collections::HashMap<String, f64>,
    #[serde(rename = "base")]
    _base: String,
}

/// Point-in-time fetch: each run replaces the stored rate per currency. No
/// history is kept; conversions are always "as of now".
fn fetch_rates(conn: &Connection) -> Result<()> {
    let base = get_base_currency(conn)?;
    let targets: Vec<String> = distinct_currencies(conn)?
        .into_iter()
        .filter(|c| c != &base)
        .collect();
    if targets.is_empty() {
        println!("No non-base currencies found; nothing to fetch.");
        return Ok(());
    }
    let to_param = targets.join(",");
    let url = format!("https://api.frankfurter.dev/latest?from={base}&to={to_param}");
    let client = http_client()?;
    let resp = client.get(url).send()?.error_for_status()?;
    let latest: Latest = resp.json()?;
    for (code, rate) in latest.rates {
        conn.execute(
            "INSERT INTO fx_rates(code, rate, fetched_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(code) DO UPDATE SET rate=excluded.rate, fetched_at=excluded.fetched_at",
            params![code, rate.to_string()],
        )?;
    }
    println!("FX rates fetched via Frankfurter (ECB).");
    Ok(())
}

fn list_rates(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let base = get_base_currency(conn)?;
    let mut stmt = conn.prepare("SELECT code, rate, fetched_at FROM fx_rates ORDER BY code")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
        ))
    })?;
    let mut data = Vec::new();
    for row in rows {
        let (code, rate, fetched_at) = row?;
        data.push(vec![format!("{}/{}", base, code), rate, fetched_at]);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Pair", "Rate", "Fetched"], data));
    }
    Ok(())
}

fn convert_amount(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let from = sub.get_one::<String>("from").unwrap().to_uppercase();
    let to = sub.get_one::<String>("to").unwrap().to_uppercase();
    let table = load_rate_table(conn)?;
    let res = table.convert(amount, &from, &to)?;
    println!("{} {} -> {:.4} {}", amount, from, res, to);
    Ok(())
}
