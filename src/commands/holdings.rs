// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::AssetClass;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("set-price", sub)) => set_price(conn, sub)?,
        Some(("delete", sub)) => delete(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let symbol = sub.get_one::<String>("symbol").unwrap().trim().to_string();
    let name = sub
        .get_one::<String>("name")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| symbol.clone());
    let class = AssetClass::from(sub.get_one::<String>("class").unwrap().as_str());
    let quantity = parse_decimal(sub.get_one::<String>("quantity").unwrap())?;
    if quantity < Decimal::ZERO {
        bail!("Quantity must be non-negative");
    }
    let avg_buy_price = parse_decimal(sub.get_one::<String>("avg-price").unwrap())?;
    let current_price = parse_decimal(sub.get_one::<String>("price").unwrap())?;
    let currency = sub.get_one::<String>("currency").unwrap().to_uppercase();

    conn.execute(
        "INSERT INTO holdings(symbol, name, class, quantity, avg_buy_price, current_price, currency)
         VALUES (?1,?2,?3,?4,?5,?6,?7)
         ON CONFLICT(symbol, class) DO UPDATE SET
            name=excluded.name,
            quantity=excluded.quantity,
            avg_buy_price=excluded.avg_buy_price,
            current_price=excluded.current_price,
            currency=excluded.currency",
        params![
            symbol,
            name,
            class.as_str().to_lowercase(),
            quantity.to_string(),
            avg_buy_price.to_string(),
            current_price.to_string(),
            currency
        ],
    )?;
    println!(
        "Saved {} holding {} x {} ({})",
        class.as_str(),
        quantity,
        symbol,
        currency
    );
    Ok(())
}

#[derive(Serialize)]
struct HoldingRow {
    id: i64,
    symbol: String,
    name: String,
    class: String,
    quantity: String,
    avg_buy_price: String,
    current_price: String,
    currency: String,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut stmt = conn.prepare(
        "SELECT id, symbol, name, class, quantity, avg_buy_price, current_price, currency
         FROM holdings ORDER BY class, symbol",
    )?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(HoldingRow {
            id: r.get(0)?,
            symbol: r.get(1)?,
            name: r.get(2)?,
            class: r.get(3)?,
            quantity: r.get(4)?,
            avg_buy_price: r.get(5)?,
            current_price: r.get(6)?,
            currency: r.get(7)?,
        });
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.symbol.clone(),
                    r.name.clone(),
                    r.class.clone(),
                    r.quantity.clone(),
                    r.avg_buy_price.clone(),
                    r.current_price.clone(),
                    r.currency.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Symbol", "Name", "Class", "Qty", "Avg Buy", "Price", "CCY"],
                rows,
            )
        );
    }
    Ok(())
}

fn set_price(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let symbol = sub.get_one::<String>("symbol").unwrap().trim().to_string();
    let price = parse_decimal(sub.get_one::<String>("price").unwrap())?;
    let n = conn.execute(
        "UPDATE holdings SET current_price=?1 WHERE symbol=?2",
        params![price.to_string(), symbol],
    )?;
    if n == 0 {
        bail!("No holding with symbol '{}'", symbol);
    }
    println!("Updated {} price to {}", symbol, price);
    Ok(())
}

fn delete(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let n = conn.execute("DELETE FROM holdings WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("No holding with id {}", id);
    }
    println!("Deleted holding {}", id);
    Ok(())
}
