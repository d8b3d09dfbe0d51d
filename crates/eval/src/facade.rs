// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Raw input evaluation facade.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use showdown_cards::{Card, Hand, Rank, Suit};

use crate::HandValue;

/// A hand evaluation, the packed score with its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The packed score, see [HandValue].
    pub score: u32,
    /// The hand description, see [HandValue::describe].
    pub description: String,
}

/// The one failure the facade reports, a malformed rank or suit input.
///
/// Carries the input as received so a caller can report what was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hand {ranks:?} / {suits:?} ({reason}), required: [[ints], [ints]]")]
pub struct InvalidHandInput {
    /// The ranks input as received.
    pub ranks: Vec<u8>,
    /// The suits input as received.
    pub suits: Vec<u8>,
    /// The first violated constraint.
    pub reason: InputFault,
}

/// The first constraint an invalid input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFault {
    /// The ranks sequence was not exactly five values.
    RankCount(usize),
    /// The suits sequence was not exactly five values.
    SuitCount(usize),
    /// A rank value was outside 2..=14.
    RankRange(u8),
    /// A suit value was not one of 1, 2, 4, 8.
    SuitMask(u8),
    /// The same rank and suit pair appeared twice.
    DuplicateCard(u8, u8),
}

impl fmt::Display for InputFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFault::RankCount(n) => write!(f, "expected 5 ranks, got {n}"),
            InputFault::SuitCount(n) => write!(f, "expected 5 suits, got {n}"),
            InputFault::RankRange(r) => write!(f, "rank {r} outside 2..=14"),
            InputFault::SuitMask(s) => write!(f, "suit {s} not one of 1, 2, 4, 8"),
            InputFault::DuplicateCard(r, s) => {
                write!(f, "card with rank {r} and suit {s} appears twice")
            }
        }
    }
}

/// Evaluates five positionally aligned ranks and suits.
///
/// Ranks are values in 2..=14 with Jack=11, Queen=12, King=13, Ace=14, suits
/// the one hot masks Spades=1, Clubs=2, Hearts=4, Diamonds=8. The call
/// either returns a complete [Evaluation] or rejects the input as a whole,
/// there are no partial results.
///
/// ```
/// # use showdown_eval::evaluate;
/// let result = evaluate(&[6, 6, 6, 9, 9], &[1, 2, 4, 8, 1]).unwrap();
/// assert_eq!(result.description, "Full House, 6s full of 9s");
///
/// assert!(evaluate(&[6, 6, 6, 9], &[1, 2, 4, 8, 1]).is_err());
/// ```
pub fn evaluate(ranks: &[u8], suits: &[u8]) -> Result<Evaluation, InvalidHandInput> {
    let fail = |reason| InvalidHandInput {
        ranks: ranks.to_vec(),
        suits: suits.to_vec(),
        reason,
    };

    if ranks.len() != Hand::SIZE {
        return Err(fail(InputFault::RankCount(ranks.len())));
    }

    if suits.len() != Hand::SIZE {
        return Err(fail(InputFault::SuitCount(suits.len())));
    }

    let mut cards = [Card::new(Rank::Ace, Suit::Spades); Hand::SIZE];
    for (card, (&r, &s)) in cards.iter_mut().zip(ranks.iter().zip(suits)) {
        let rank = Rank::from_value(r).ok_or_else(|| fail(InputFault::RankRange(r)))?;
        let suit = Suit::from_mask(s).ok_or_else(|| fail(InputFault::SuitMask(s)))?;
        *card = Card::new(rank, suit);
    }

    // Duplicated ranks and suits are legal, the same card twice is not, it
    // derails the classification arithmetic, see HandValue::eval.
    for (i, card) in cards.iter().enumerate().skip(1) {
        if cards[..i].contains(card) {
            let fault = InputFault::DuplicateCard(card.rank().value(), card.suit().mask());
            return Err(fail(fault));
        }
    }

    let value = HandValue::eval(&Hand::new(cards));
    Ok(Evaluation {
        score: value.score(),
        description: value.describe(),
    })
}
