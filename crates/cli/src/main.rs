// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI hand evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use showdown_eval::{Hand, evaluate};

#[derive(Debug, Parser)]
struct Cli {
    /// The five hand cards, e.g. AS KH QD JC TS.
    #[clap(required = true, num_args = 1..)]
    cards: Vec<String>,
    /// Prints the evaluation as JSON.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let hand = cli.cards.join(" ").parse::<Hand>()?;
    debug!("evaluating {hand}");

    let result = evaluate(&hand.ranks(), &hand.suits())
        .with_context(|| format!("evaluating {hand}"))?;

    if cli.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{} (score {})", result.description, result.score);
    }

    Ok(())
}
