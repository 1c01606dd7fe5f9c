use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// --- 牌面基础类型 ---

/// 扑克牌的花色。
///
/// 变体按领域顺序升序排列：黑桃最大，红心最小，派生出来的 `Ord`
/// 直接就是领域顺序，牌库的顺序检测与排序都建立在它上面。
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Suit {
    Hearts,   // 红心 ♥️
    Clubs,    // 梅花 ♣️
    Diamonds, // 方块 ♦️
    Spades,   // 黑桃 ♠️
}

/// 扑克牌的点数。Ace 固定最小，King 最大，与花色一样派生领域顺序。
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// 一张扑克牌。
///
/// 不派生 `Ord`：牌与牌之间没有单一的全序，花色降序、点数升序的
/// 规范排序属于 [`Deck::unshuffle`](crate::Deck::unshuffle)。
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// 解析牌面短代码失败时的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("empty card code")]
    Empty,
    #[error("unknown rank `{0}`")]
    UnknownRank(String),
    #[error("unknown suit `{0}`")]
    UnknownSuit(char),
}

impl Suit {
    /// 短代码里的花色字符。
    pub fn token(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
        }
    }

    /// [`Suit::token`] 的逆映射，其余字符一律拒绝。
    pub fn from_token(token: char) -> Result<Suit, ParseCardError> {
        match token {
            'S' => Ok(Suit::Spades),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            'H' => Ok(Suit::Hearts),
            other => Err(ParseCardError::UnknownSuit(other)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Hearts => "HEARTS",
                Suit::Clubs => "CLUBS",
                Suit::Diamonds => "DIAMONDS",
                Suit::Spades => "SPADES",
            }
        )
    }
}

impl Rank {
    /// 短代码里的点数记号。只有 10 需要两个字符。
    pub fn token(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// [`Rank::token`] 的逆映射，其余记号一律拒绝。
    pub fn from_token(token: &str) -> Result<Rank, ParseCardError> {
        match token {
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            other => Err(ParseCardError::UnknownRank(other.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Ace => "ACE",
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "JACK",
                Rank::Queen => "QUEEN",
                Rank::King => "KING",
            }
        )
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// 两到三个字符的短代码：点数记号接花色字符，如 `"AS"`、`"10H"`。
    pub fn code(&self) -> String {
        format!("{}{}", self.rank.token(), self.suit.token())
    }

    /// [`Card::code`] 的逆操作：最后一个字符是花色，前面的都是点数。
    ///
    /// 任何一部分不匹配已知记号都会整体失败，不留半解析的结果。
    pub fn from_code(code: &str) -> Result<Card, ParseCardError> {
        let Some(suit_token) = code.chars().next_back() else {
            return Err(ParseCardError::Empty);
        };
        let rank_token = &code[..code.len() - suit_token.len_utf8()];
        let rank = Rank::from_token(rank_token)?;
        let suit = Suit::from_token(suit_token)?;
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_code(s)
    }
}
