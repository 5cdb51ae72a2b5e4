// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

fn period_arg() -> Arg {
    Arg::new("period")
        .long("period")
        .default_value("30d")
        .help("Period token: 7d, 30d, 3m, ytd, all")
}

pub fn build_cli() -> Command {
    Command::new("wealthcompass")
        .version(crate_version!())
        .about("Personal finance analytics: ledger, holdings, and net-worth tracking")
        .subcommand(Command::new("init").about("Initialize the local store"))
        .subcommand(
            Command::new("tx")
                .about("Manage the transaction ledger")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense entry")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income or expense"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List ledger entries, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(Arg::new("month").long("month").help("Filter by YYYY-MM")),
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a ledger entry by id")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("holding")
                .about("Manage holdings (cash, crypto, other assets)")
                .subcommand(
                    Command::new("add")
                        .about("Add or replace a holding")
                        .arg(Arg::new("symbol").long("symbol").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(
                            Arg::new("class")
                                .long("class")
                                .required(true)
                                .help("cash, crypto, or other"),
                        )
                        .arg(Arg::new("quantity").long("quantity").required(true))
                        .arg(Arg::new("avg-price").long("avg-price").default_value("0"))
                        .arg(Arg::new("price").long("price").default_value("0"))
                        .arg(Arg::new("currency").long("currency").required(true)),
                )
                .subcommand(json_flags(Command::new("list").about("List holdings")))
                .subcommand(
                    Command::new("set-price")
                        .about("Update the current market price of a holding")
                        .arg(Arg::new("symbol").long("symbol").required(true))
                        .arg(Arg::new("price").long("price").required(true)),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a holding by id")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("snapshot")
                .about("Record and list net-worth snapshots")
                .subcommand(
                    Command::new("take")
                        .about("Value all holdings in the base currency and append a snapshot")
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today")),
                )
                .subcommand(json_flags(Command::new("list").about("List snapshots"))),
        )
        .subcommand(
            Command::new("rates")
                .about("Manage the exchange-rate table")
                .subcommand(
                    Command::new("set-base")
                        .about("Set the base currency")
                        .arg(Arg::new("currency").required(true)),
                )
                .subcommand(
                    Command::new("set-display")
                        .about("Set the display currency for analytics output")
                        .arg(Arg::new("currency").required(true)),
                )
                .subcommand(
                    Command::new("fetch").about("Fetch current rates from Frankfurter (ECB)"),
                )
                .subcommand(json_flags(Command::new("list").about("List stored rates")))
                .subcommand(
                    Command::new("convert")
                        .about("Convert an amount between currencies")
                        .arg(Arg::new("amount").required(true))
                        .arg(Arg::new("from").required(true))
                        .arg(Arg::new("to").required(true)),
                ),
        )
        .subcommand(
            Command::new("analytics")
                .about("Aggregated views over the ledger and holdings")
                .subcommand(json_flags(
                    Command::new("expenses")
                        .about("Expense totals by category")
                        .arg(period_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("timeline")
                        .about("Daily spending, zero-filled across the period")
                        .arg(period_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Income, expenses, and savings rate for a month")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, default current")),
                ))
                .subcommand(json_flags(
                    Command::new("trend")
                        .about("Monthly income/expense trend")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .default_value("6")
                                .value_parser(value_parser!(u32)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("allocation").about("Portfolio allocation by instrument"),
                ))
                .subcommand(json_flags(
                    Command::new("classes").about("Portfolio allocation by asset class"),
                ))
                .subcommand(json_flags(
                    Command::new("performance").about("Invested vs current value per holding"),
                ))
                .subcommand(json_flags(
                    Command::new("summary").about("Total value, gain, and gain percent"),
                ))
                .subcommand(json_flags(
                    Command::new("networth")
                        .about("Net-worth snapshot series for a range")
                        .arg(
                            Arg::new("range")
                                .long("range")
                                .default_value("ALL")
                                .help("Range token: 1W, 1M, 6M, 1Y, ALL"),
                        ),
                )),
        )
        .subcommand(Command::new("doctor").about("Check the store for inconsistencies"))
}
