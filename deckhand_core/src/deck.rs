use crate::card::{Card, Rank, Suit};
use rand::prelude::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 牌库的唯一标识，建库时随机生成，此后不再变化。
pub type DeckId = Uuid;

// --- 牌库 ---

/// 一叠有序的扑克牌。
///
/// 序列顺序是有意义的：末端是下一张被抽走的"顶部"，规范顺序指
/// 花色降序（黑桃、方块、梅花、红心）、同花色内点数升序。对牌的
/// 组成不做任何校验，重复、缺张、空牌库都是合法状态。
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub cards: Vec<Card>,
}

impl Deck {
    /// 以给定的牌序列建库，分配全新的标识，顺序原样保留。
    pub fn new(cards: Vec<Card>) -> Deck {
        Deck {
            id: Uuid::new_v4(),
            cards,
        }
    }

    /// 规范顺序的标准 52 张牌库。
    pub fn standard() -> Deck {
        let suits = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];
        let ranks = [
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ];
        let mut cards = Vec::with_capacity(52);
        for &suit in &suits {
            for &rank in &ranks {
                cards.push(Card { rank, suit });
            }
        }
        Deck::new(cards)
    }

    /// 空牌库。空牌库照常抽牌，只是抽不出任何东西。
    pub fn empty() -> Deck {
        Deck::new(Vec::new())
    }

    /// 剩余张数。
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// 原地洗牌：对现有序列做一次均匀随机置换，标识不变。
    pub fn shuffle(&mut self) {
        let mut rng = rand::rng();
        self.cards.shuffle(&mut rng);
    }

    /// 当前序列是否处于"已洗过"的状态。
    ///
    /// 这是对牌序的结构判定，每次调用重新计算，不是历史标志位。
    /// 从头扫描相邻牌对：花色必须不升，同花色段内点数必须不降，
    /// 任何一处违反即视为已洗牌。0 张或 1 张永远算未洗牌。
    pub fn is_shuffled(&self) -> bool {
        self.cards.windows(2).any(|pair| {
            pair[0].suit < pair[1].suit
                || (pair[0].suit == pair[1].suit && pair[0].rank > pair[1].rank)
        })
    }

    /// 原地恢复规范顺序，与 [`Deck::is_shuffled`] 的判定互为镜像。
    ///
    /// 排序是稳定的，等值的重复牌保持相对位置。
    pub fn unshuffle(&mut self) {
        self.cards
            .sort_by(|a, b| b.suit.cmp(&a.suit).then(a.rank.cmp(&b.rank)));
    }

    /// 从顶部（序列末端）抽走至多 `count` 张，按抽出顺序返回，
    /// 最先离开牌库的顶牌排在最前。
    ///
    /// `count` 小于 1 时什么都不抽；超过剩余张数时截断为剩余张数，
    /// 把牌库抽空不是错误。
    pub fn draw(&mut self, count: i64) -> Vec<Card> {
        if count < 1 {
            return Vec::new();
        }
        let count = count.min(self.cards.len() as i64) as usize;
        let mut drawn = self.cards.split_off(self.cards.len() - count);
        drawn.reverse();
        drawn
    }
}
