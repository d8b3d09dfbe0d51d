// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create cards and five cards hands:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! a [Hand] holds exactly five cards and can be parsed from card codes:
//!
//! ```
//! # use showdown_cards::Hand;
//! let hand: Hand = "AS KS QS JS TS".parse().unwrap();
//! assert_eq!(hand.ranks(), [14, 13, 12, 11, 10]);
//! assert_eq!(hand.suits(), [1, 1, 1, 1, 1]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Hand, ParseCardError, ParseHandError, Rank, Suit};
