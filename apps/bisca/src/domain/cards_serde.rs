use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Two-character token: rank then suit letter, e.g. `7S`, `AH`, `3C`.
pub fn card_token(card: Card) -> String {
    let suit_ch = match card.suit {
        Suit::Spades => 'S',
        Suit::Hearts => 'H',
        Suit::Clubs => 'C',
        Suit::Diamonds => 'D',
    };
    format!("{}{suit_ch}", card.rank.symbol())
}

pub fn parse_card_token(s: &str) -> Result<Card, DomainError> {
    let mut chars = s.chars();
    let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(DomainError::ParseCard(s.to_string()));
    };
    let rank = match rank_ch {
        '3' => Rank::Three,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        'J' => Rank::Jack,
        'Q' => Rank::Queen,
        'K' => Rank::King,
        'A' => Rank::Ace,
        _ => return Err(DomainError::ParseCard(s.to_string())),
    };
    let suit = match suit_ch {
        'S' => Suit::Spades,
        'H' => Suit::Hearts,
        'C' => Suit::Clubs,
        'D' => Suit::Diamonds,
        _ => return Err(DomainError::ParseCard(s.to_string())),
    };
    Ok(Card { suit, rank })
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_card_token(s)
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&card_token(*self))
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_card_token(&s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Parse a list of card tokens; test and fixture helper.
pub fn parse_cards(tokens: &[&str]) -> Result<Vec<Card>, DomainError> {
    tokens.iter().map(|t| parse_card_token(t)).collect()
}
