// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::db::{get_display_currency, load_holdings, load_ledger, load_rate_table, load_snapshots};
use crate::engine::cashflow::{cash_flow_trend, monthly_cash_flow};
use crate::engine::currency::RateTable;
use crate::engine::networth::net_worth_series;
use crate::engine::period::{Period, TimeRange};
use crate::engine::portfolio::{allocation, class_allocation, performance, summary};
use crate::engine::transactions::{expenses_by_category, spending_timeline};
use crate::utils::{maybe_print_json, parse_month, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => expenses(conn, sub)?,
        Some(("timeline", sub)) => timeline(conn, sub)?,
        Some(("cashflow", sub)) => cashflow(conn, sub)?,
        Some(("trend", sub)) => trend(conn, sub)?,
        Some(("allocation", sub)) => allocation_cmd(conn, sub)?,
        Some(("classes", sub)) => classes(conn, sub)?,
        Some(("performance", sub)) => performance_cmd(conn, sub)?,
        Some(("summary", sub)) => summary_cmd(conn, sub)?,
        Some(("networth", sub)) => networth(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Amount formatted in the display currency. When the display rate is
/// unavailable the base-currency amount is shown with a '*' marker instead
/// of failing the whole report.
fn display_value(table: &RateTable, display: &str, amount: Decimal) -> String {
    match table.convert(amount, table.base(), display) {
        Ok(v) => format!("{:.2}", v),
        Err(_) => format!("{:.2}*", amount),
    }
}

fn display_setup(conn: &Connection) -> Result<(RateTable, String)> {
    let table = load_rate_table(conn)?;
    let display = get_display_currency(conn)?;
    Ok((table, display))
}

fn expenses(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period: Period = sub.get_one::<String>("period").unwrap().parse()?;
    let interval = period.resolve(Utc::now().date_naive());
    let ledger = load_ledger(conn)?;
    let data = expenses_by_category(&ledger, &interval);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let (table, display) = display_setup(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|c| vec![c.category.clone(), display_value(&table, &display, c.value)])
            .collect();
        let hdr = format!("Spent ({})", display);
        println!("{}", pretty_table(&["Category", &hdr], rows));
    }
    Ok(())
}

fn timeline(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period: Period = sub.get_one::<String>("period").unwrap().parse()?;
    let interval = period.resolve(Utc::now().date_naive());
    let ledger = load_ledger(conn)?;
    let data = spending_timeline(&ledger, &interval);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let (table, display) = display_setup(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|d| {
                vec![
                    d.date.to_string(),
                    display_value(&table, &display, d.amount),
                ]
            })
            .collect();
        let hdr = format!("Spent ({})", display);
        println!("{}", pretty_table(&["Date", &hdr], rows));
    }
    Ok(())
}

fn cashflow(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let (year, month) = match sub.get_one::<String>("month") {
        Some(raw) => parse_month(raw)?,
        None => {
            let now = Utc::now().date_naive();
            (now.year(), now.month())
        }
    };
    let ledger = load_ledger(conn)?;
    let flow = monthly_cash_flow(&ledger, year, month);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &flow)? {
        let (table, display) = display_setup(conn)?;
        let rows = vec![vec![
            format!("{:04}-{:02}", year, month),
            display_value(&table, &display, flow.income),
            display_value(&table, &display, flow.expenses),
            display_value(&table, &display, flow.income - flow.expenses),
            format!("{:.1}%", flow.savings_rate),
        ]];
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Net", "Savings Rate"], rows)
        );
    }
    Ok(())
}

fn trend(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let months = *sub.get_one::<u32>("months").unwrap();
    let ledger = load_ledger(conn)?;
    let data = cash_flow_trend(&ledger, months, Utc::now().date_naive());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let (table, display) = display_setup(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|m| {
                vec![
                    m.month.clone(),
                    display_value(&table, &display, m.income),
                    display_value(&table, &display, m.expenses),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expenses"], rows));
    }
    Ok(())
}

fn allocation_cmd(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let holdings = load_holdings(conn)?;
    let data = allocation(&holdings);
    print_slices(conn, sub, "Symbol", &data)
}

fn classes(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let holdings = load_holdings(conn)?;
    let data = class_allocation(&holdings);
    print_slices(conn, sub, "Class", &data)
}

fn print_slices(
    conn: &Connection,
    sub: &clap::ArgMatches,
    label: &str,
    data: &[crate::engine::portfolio::AllocationSlice],
) -> Result<()> {
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let (table, display) = display_setup(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|s| {
                vec![
                    s.name.clone(),
                    display_value(&table, &display, s.value),
                    format!("{:.1}%", s.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&[label, "Value", "Share"], rows));
    }
    Ok(())
}

fn performance_cmd(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let holdings = load_holdings(conn)?;
    let data = performance(&holdings);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let (table, display) = display_setup(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|p| {
                vec![
                    p.name.clone(),
                    display_value(&table, &display, p.invested),
                    display_value(&table, &display, p.current),
                    display_value(&table, &display, p.current - p.invested),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Symbol", "Invested", "Current", "Gain"], rows)
        );
    }
    Ok(())
}

fn summary_cmd(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let holdings = load_holdings(conn)?;
    let s = summary(&holdings);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        let (table, display) = display_setup(conn)?;
        let rows = vec![vec![
            display_value(&table, &display, s.total_value),
            display_value(&table, &display, s.total_gain),
            format!("{:.2}%", s.total_gain_percent),
        ]];
        println!(
            "{}",
            pretty_table(&["Total Value", "Total Gain", "Gain %"], rows)
        );
    }
    Ok(())
}

fn networth(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let range: TimeRange = sub.get_one::<String>("range").unwrap().parse()?;
    let snapshots = load_snapshots(conn)?;
    let data = net_worth_series(&snapshots, range, Utc::now().date_naive());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|p| vec![p.date.to_string(), format!("{:.2}", p.value)])
            .collect();
        println!("{}", pretty_table(&["Date", "Net Worth"], rows));
    }
    Ok(())
}
