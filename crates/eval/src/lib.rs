// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Five cards hand evaluator, a port of the [Subskybox][subskybox] bit math
//! hand analyzer. A single arithmetic pass folds rank counts, straight and
//! flush detection, and wheel handling into one composite value that selects
//! the hand category, with the five tie break ranks packed below it so that
//! comparing two scores compares two hands.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate it:
//!
//! ```
//! # use showdown_eval::*;
//! let hand: Hand = "TS JS QS KS AS".parse().unwrap();
//! let value = HandValue::eval(&hand);
//! assert_eq!(value.rank(), HandRank::RoyalFlush);
//! assert_eq!(value.to_string(), "Royal flush!! holy sh*t!");
//! ```
//!
//! The [evaluate] facade takes raw rank and suit sequences, validates them,
//! and bundles the score with its description:
//!
//! ```
//! # use showdown_eval::*;
//! let result = evaluate(&[5, 5, 5, 5, 9], &[1, 2, 4, 8, 1]).unwrap();
//! assert_eq!(result.description, "Four of a kind, 5s");
//! ```
//!
//! [subskybox]: https://www.codeproject.com/Articles/569271/A-Poker-hand-analyzer-in-JavaScript-using-bit-math
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

mod facade;
pub use facade::{Evaluation, InputFault, InvalidHandInput, evaluate};

// Reexport cards types.
pub use showdown_cards::{Card, Hand, Rank, Suit};
