// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand scoring and description.
//!
//! This evaluator is a port of the [Subskybox][subskybox] bit math hand
//! analyzer: per rank nibble counters, a rank presence mask, and two
//! conditional adjustments classify the hand in one arithmetic pass, without
//! a separate detection branch per hand type.
//!
//! [subskybox]: https://www.codeproject.com/Articles/569271/A-Poker-hand-analyzer-in-JavaScript-using-bit-math
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::Hand;

/// Rank presence mask of the wheel straight {A,5,4,3,2}, the Ace playing low.
const WHEEL_MASK: u32 = 0x403C;

/// Rank presence mask of the royal flush ranks {10,J,Q,K,A}.
const ROYAL_MASK: u32 = 0x7C00;

/// Maps the composite shape value 0..=9 to its category.
///
/// The arithmetic in [HandValue::eval] lands every hand shape on a distinct
/// composite value but not in strength order, this permutation, the
/// `[7,8,4,5,0,1,2,9,3,6]` table in the original analyzer, reorders them.
const CATEGORIES: [HandRank; 10] = [
    HandRank::FourOfAKind,
    HandRank::StraightFlush,
    HandRank::Straight,
    HandRank::Flush,
    HandRank::HighCard,
    HandRank::OnePair,
    HandRank::TwoPair,
    HandRank::RoyalFlush,
    HandRank::ThreeOfAKind,
    HandRank::FullHouse,
];

/// Display names for rank values 2..=14.
///
/// The first two slots are placeholders never referenced by a valid score,
/// the wheel tie breaks bottom out at 1 but only its top slot is displayed.
const NAMES: [&str; 15] = [
    "", "", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King", "Ace",
];

/// Hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card
    HighCard = 0,
    /// One pair
    OnePair,
    /// Two pair
    TwoPair,
    /// Three of a kind
    ThreeOfAKind,
    /// Straight
    Straight,
    /// Flush
    Flush,
    /// Full house
    FullHouse,
    /// Four of a kind
    FourOfAKind,
    /// Straight flush
    StraightFlush,
    /// Royal flush
    RoyalFlush,
}

impl HandRank {
    /// Category from the top bits of a packed score.
    ///
    /// Panics on values outside 0..=9 which a [HandValue] cannot produce.
    fn from_bits(bits: u32) -> HandRank {
        match bits {
            0 => HandRank::HighCard,
            1 => HandRank::OnePair,
            2 => HandRank::TwoPair,
            3 => HandRank::ThreeOfAKind,
            4 => HandRank::Straight,
            5 => HandRank::Flush,
            6 => HandRank::FullHouse,
            7 => HandRank::FourOfAKind,
            8 => HandRank::StraightFlush,
            9 => HandRank::RoyalFlush,
            _ => panic!("Invalid hand category {bits}"),
        }
    }
}

/// Packed, comparable strength of a five cards hand.
///
/// The category sits in the top bits with the five tie break ranks in 4 bit
/// slots below it, most significant group first, so that comparing two
/// scores compares two hands:
///
/// ```text
///   +----------+------+------+------+------+------+
///   | category | tb0  | tb1  | tb2  | tb3  | tb4  |
///   |   >>20   | >>16 | >>12 | >>8  | >>4  |      |
///   +----------+------+------+------+------+------+
/// ```
///
/// Tie break slots hold the five card ranks sorted by their count within the
/// hand and then by value, so the defining groups come first: a full house
/// leads with the triple rank, two pairs lead with the higher pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue(u32);

impl HandValue {
    /// Score of the weakest hand, the 7-5-4-3-2 high card.
    pub const MIN: HandValue = HandValue(0x75432);

    /// Score of the strongest hand, the royal flush.
    pub const MAX: HandValue = HandValue(0x9EDCBA);

    /// Evaluates a five cards hand.
    ///
    /// The hand must hold five distinct cards. Duplicated ranks and suits
    /// are what pairs and flushes are made of, but the same card repeated
    /// makes the classification meaningless and may panic; the [evaluate]
    /// facade rejects such input up front.
    ///
    /// [evaluate]: crate::evaluate
    ///
    /// ```
    /// # use showdown_eval::{HandRank, HandValue, Hand};
    /// let hand: Hand = "6S 6C 6H 9D 9S".parse().unwrap();
    /// let value = HandValue::eval(&hand);
    /// assert_eq!(value.rank(), HandRank::FullHouse);
    /// ```
    pub fn eval(hand: &Hand) -> HandValue {
        let ranks = hand.ranks();
        let suits = hand.suits();

        // Which rank values appear, duplicates collapse.
        let mask = ranks.iter().fold(0u32, |m, &r| m | 1 << r);

        // One 4 bit counter per rank value, an occupied nibble steps through
        // 1, 3, 7, 15 so that tally % 15 fingerprints the count multiset.
        let mut tally = 0u64;
        for &r in &ranks {
            let nib = 1u64 << (u64::from(r) * 4);
            tally += nib * (((tally / nib) & 15) + 1);
        }

        // Five consecutive present ranks divide down to 0b11111, the wheel
        // is the one straight the consecutive test misses.
        let straight = mask / (mask & mask.wrapping_neg()) == 31 || mask == WHEEL_MASK;
        let flush = suits[0] == suits[1] | suits[2] | suits[3] | suits[4];

        let mut v = (tally % 15) as i32;
        v -= if straight { 3 } else { 1 };
        if flush {
            v -= if mask == ROYAL_MASK { -5 } else { 1 };
        }

        let category = CATEGORIES[v as usize];

        let tiebreaks = if mask == WHEEL_MASK {
            // The Ace plays low, 1 stands in for its slot below the five.
            [5, 4, 3, 2, 1]
        } else {
            let count = |r: u8| ranks.iter().filter(|&&c| c == r).count();
            let mut tb = ranks;
            tb.sort_unstable_by(|a, b| count(*b).cmp(&count(*a)).then(b.cmp(a)));
            tb
        };

        HandValue::pack(category, tiebreaks)
    }

    /// Packs a category and its five tie break ranks into a score.
    fn pack(rank: HandRank, tb: [u8; 5]) -> HandValue {
        HandValue(
            (rank as u32) << 20
                | u32::from(tb[0]) << 16
                | u32::from(tb[1]) << 12
                | u32::from(tb[2]) << 8
                | u32::from(tb[3]) << 4
                | u32::from(tb[4]),
        )
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        HandRank::from_bits(self.0 >> 20)
    }

    /// The packed score.
    pub fn score(&self) -> u32 {
        self.0
    }

    /// The tie break rank in the given slot, most significant first.
    ///
    /// Panics if the slot is not in 0..=4.
    pub fn tiebreak(&self, slot: usize) -> u8 {
        assert!(slot < 5, "slot {slot} must be 0..=4");
        ((self.0 >> (16 - slot * 4)) & 0xF) as u8
    }

    /// The hand description.
    ///
    /// ```
    /// # use showdown_eval::{HandValue, Hand};
    /// let hand: Hand = "KS KD 5H 5C 9S".parse().unwrap();
    /// let value = HandValue::eval(&hand);
    /// assert_eq!(value.describe(), "Two pairs, Kings and 5s");
    /// ```
    pub fn describe(&self) -> String {
        let name = |slot: usize| NAMES[self.tiebreak(slot) as usize];
        match self.rank() {
            HandRank::HighCard => format!("{} high", name(0)),
            HandRank::OnePair => format!("Pair of {}s", name(0)),
            HandRank::TwoPair => format!("Two pairs, {}s and {}s", name(0), name(2)),
            HandRank::ThreeOfAKind => format!("Three of a kind, {}s", name(0)),
            HandRank::Straight => format!("Straight {} high", name(0)),
            HandRank::Flush => format!("Flush {} high", name(0)),
            HandRank::FullHouse => format!("Full House, {}s full of {}s", name(0), name(3)),
            HandRank::FourOfAKind => format!("Four of a kind, {}s", name(0)),
            HandRank::StraightFlush => format!("Straight flush! {} high", name(0)),
            HandRank::RoyalFlush => "Royal flush!! holy sh*t!".to_string(),
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
