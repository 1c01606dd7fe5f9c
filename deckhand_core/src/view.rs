use crate::card::Card;
use crate::deck::{Deck, DeckId};
use serde::{Deserialize, Serialize};

// --- 传输视图 ---
// 引擎内部表示与对外 JSON 之间的隔离层，字段名就是线上字段名。

/// 建库应答：只报身份和状态，不泄露牌面内容。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSummary {
    pub deck_id: DeckId,
    pub shuffled: bool,
    pub remaining: usize,
}

impl From<&Deck> for DeckSummary {
    fn from(deck: &Deck) -> Self {
        DeckSummary {
            deck_id: deck.id,
            shuffled: deck.is_shuffled(),
            remaining: deck.remaining(),
        }
    }
}

/// 打开牌库的完整视图，按当前顺序列出全部剩余牌。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckView {
    pub deck_id: DeckId,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<CardView>,
}

impl From<&Deck> for DeckView {
    fn from(deck: &Deck) -> Self {
        DeckView {
            deck_id: deck.id,
            shuffled: deck.is_shuffled(),
            remaining: deck.remaining(),
            cards: deck.cards.iter().copied().map(CardView::from).collect(),
        }
    }
}

/// 单张牌的视图。`value` 和 `suit` 是给人看的完整词，`code` 是
/// 紧凑短代码，两种形态都保留。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub value: String,
    pub suit: String,
    pub code: String,
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        CardView {
            value: card.rank.to_string(),
            suit: card.suit.to_string(),
            code: card.code(),
        }
    }
}
