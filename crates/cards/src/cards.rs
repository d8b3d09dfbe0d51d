// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str};
use thiserror::Error;

/// Card rank.
///
/// Discriminants are the rank values used by the evaluator, with the Ace
/// always high: Jack=11, Queen=12, King=13, Ace=14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two
    Two = 2,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value in the 2..=14 range.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank with the given value, `None` outside 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        use Rank::*;
        let rank = match value {
            2 => Two,
            3 => Three,
            4 => Four,
            5 => Five,
            6 => Six,
            7 => Seven,
            8 => Eight,
            9 => Nine,
            10 => Ten,
            11 => Jack,
            12 => Queen,
            13 => King,
            14 => Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Discriminants are one hot masks so that a flush test reduces to bitwise
/// equality across a hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 1,
    /// Clubs suit.
    Clubs = 2,
    /// Hearts suit.
    Hearts = 4,
    /// Diamonds suit.
    Diamonds = 8,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds].into_iter()
    }

    /// The suit one hot mask.
    pub fn mask(&self) -> u8 {
        *self as u8
    }

    /// Returns the suit with the given mask, `None` if not one of 1, 2, 4, 8.
    pub fn from_mask(mask: u8) -> Option<Suit> {
        let suit = match mask {
            1 => Suit::Spades,
            2 => Suit::Clubs,
            4 => Suit::Hearts,
            8 => Suit::Diamonds,
            _ => return None,
        };
        Some(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        };

        write!(f, "{suit}")
    }
}

/// A Poker card.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error parsing a card from its two characters code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card code {0:?}, expected rank and suit like AS or TD")]
pub struct ParseCardError(String);

impl str::FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());

        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };

        let rank = match rank.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(err()),
        };

        let suit = match suit.to_ascii_uppercase() {
            'S' => Suit::Spades,
            'C' => Suit::Clubs,
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            _ => return Err(err()),
        };

        Ok(Card::new(rank, suit))
    }
}

/// A five cards Poker hand.
///
/// Ranks and suits are positionally aligned, the order of the five cards
/// never changes the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; Hand::SIZE],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    pub fn new(cards: [Card; Hand::SIZE]) -> Hand {
        Hand { cards }
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.cards
    }

    /// The card rank values, positionally aligned with [suits](Hand::suits).
    pub fn ranks(&self) -> [u8; Hand::SIZE] {
        self.cards.map(|c| c.rank().value())
    }

    /// The card suit masks, positionally aligned with [ranks](Hand::ranks).
    pub fn suits(&self) -> [u8; Hand::SIZE] {
        self.cards.map(|c| c.suit().mask())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for card in &self.cards {
            write!(f, "{sep}{card}")?;
            sep = " ";
        }

        Ok(())
    }
}

/// Error parsing a five cards hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHandError {
    /// A card code did not parse.
    #[error(transparent)]
    Card(#[from] ParseCardError),
    /// The hand did not have exactly five cards.
    #[error("expected 5 cards, got {0}")]
    CardCount(usize),
}

impl str::FromStr for Hand {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        let cards: [Card; Hand::SIZE] = cards
            .try_into()
            .map_err(|cards: Vec<Card>| ParseHandError::CardCount(cards.len()))?;

        Ok(Hand::new(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Queen.value(), 12);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Ace.value(), 14);

        for rank in Rank::ranks() {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }

        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn suit_masks() {
        assert_eq!(Suit::Spades.mask(), 1);
        assert_eq!(Suit::Clubs.mask(), 2);
        assert_eq!(Suit::Hearts.mask(), 4);
        assert_eq!(Suit::Diamonds.mask(), 8);

        for suit in Suit::suits() {
            assert_eq!(suit.mask().count_ones(), 1);
            assert_eq!(Suit::from_mask(suit.mask()), Some(suit));
        }

        assert_eq!(Suit::from_mask(0), None);
        assert_eq!(Suit::from_mask(3), None);
        assert_eq!(Suit::from_mask(16), None);
    }

    #[test]
    fn cards_are_unique() {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<HashSet<_>>();
        assert_eq!(cards.len(), 52);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_parsing() {
        for card in Suit::suits().flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s))) {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            assert_eq!(card.to_string().to_lowercase().parse::<Card>(), Ok(card));
        }

        assert!("".parse::<Card>().is_err());
        assert!("K".parse::<Card>().is_err());
        assert!("KDX".parse::<Card>().is_err());
        assert!("1S".parse::<Card>().is_err());
        assert!("KK".parse::<Card>().is_err());
        assert!("XD".parse::<Card>().is_err());
    }

    #[test]
    fn hand_parsing() {
        let hand: Hand = "AS KH QD JC TS".parse().unwrap();
        assert_eq!(hand.to_string(), "AS KH QD JC TS");
        assert_eq!(hand.ranks(), [14, 13, 12, 11, 10]);
        assert_eq!(hand.suits(), [1, 4, 8, 2, 1]);

        assert!(matches!(
            "AS KH QD JC".parse::<Hand>(),
            Err(ParseHandError::CardCount(4))
        ));
        assert!(matches!(
            "AS KH QD JC TS 9D".parse::<Hand>(),
            Err(ParseHandError::CardCount(6))
        ));
        assert!(matches!(
            "AS KH QD JC XX".parse::<Hand>(),
            Err(ParseHandError::Card(_))
        ));
    }

    #[test]
    fn hand_alignment() {
        // Duplicate ranks and suits are legal in a hand.
        let hand: Hand = "6S 6C 6H 9D 9S".parse().unwrap();
        assert_eq!(hand.ranks(), [6, 6, 6, 9, 9]);
        assert_eq!(hand.suits(), [1, 2, 4, 8, 1]);

        let cards = *hand.cards();
        assert_eq!(Hand::new(cards), hand);
    }
}
