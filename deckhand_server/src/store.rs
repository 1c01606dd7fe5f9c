use dashmap::DashMap;
use deckhand_core::{Deck, DeckId};

// --- 牌库注册表 ---

/// 注册表接口：按标识存取牌库。
///
/// 引擎本身不做任何同步，默认单次操作内对牌库独占访问，并发纪律
/// 由注册表选定。实现方必须保证 `modify` 对同一标识串行执行，
/// 抽牌这类读改写才不会相互交错。
pub trait DeckStore: Send + Sync {
    /// 存入一副牌，相同标识时整副覆盖。
    fn put(&self, deck: Deck);

    /// 取牌库当前状态的快照，不存在时返回 None。
    fn get(&self, id: &DeckId) -> Option<Deck>;

    /// 对指定牌库原地执行一次修改；不存在时返回 None 且不执行。
    fn modify(&self, id: &DeckId, op: &mut dyn FnMut(&mut Deck)) -> Option<()>;
}

/// 进程内注册表，牌库只活在内存里，重启即清空。
///
/// 并发纪律来自 DashMap 的分片锁：`modify` 在持有分片写锁的状态
/// 下运行闭包，同一牌库上的修改天然串行。
#[derive(Default)]
pub struct MemoryDeckStore {
    decks: DashMap<DeckId, Deck>,
}

impl MemoryDeckStore {
    pub fn new() -> MemoryDeckStore {
        MemoryDeckStore {
            decks: DashMap::new(),
        }
    }

    /// 当前注册的牌库数量。
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}

impl DeckStore for MemoryDeckStore {
    fn put(&self, deck: Deck) {
        self.decks.insert(deck.id, deck);
    }

    fn get(&self, id: &DeckId) -> Option<Deck> {
        self.decks.get(id).map(|entry| entry.value().clone())
    }

    fn modify(&self, id: &DeckId, op: &mut dyn FnMut(&mut Deck)) -> Option<()> {
        let mut entry = self.decks.get_mut(id)?;
        op(entry.value_mut());
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_core::Card;
    use uuid::Uuid;

    #[test]
    fn test_put_then_get_round_trips() {
        let store = MemoryDeckStore::new();
        let deck = Deck::standard();
        store.put(deck.clone());
        assert_eq!(store.get(&deck.id), Some(deck));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = MemoryDeckStore::new();
        assert_eq!(store.get(&Uuid::new_v4()), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_overwrites_same_id() {
        let store = MemoryDeckStore::new();
        let mut deck = Deck::standard();
        store.put(deck.clone());
        deck.draw(10);
        store.put(deck.clone());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&deck.id).unwrap().remaining(), 42);
    }

    #[test]
    fn test_modify_changes_deck_in_place() {
        let store = MemoryDeckStore::new();
        let deck = Deck::standard();
        let id = deck.id;
        store.put(deck);

        let mut drawn = Vec::new();
        let outcome = store.modify(&id, &mut |deck| drawn = deck.draw(1));
        assert_eq!(outcome, Some(()));
        assert_eq!(drawn, vec![Card::from_code("KH").unwrap()]);
        assert_eq!(store.get(&id).unwrap().remaining(), 51);
    }

    #[test]
    fn test_modify_unknown_id_skips_op() {
        let store = MemoryDeckStore::new();
        let mut ran = false;
        let outcome = store.modify(&Uuid::new_v4(), &mut |_| ran = true);
        assert_eq!(outcome, None);
        assert!(!ran);
    }
}
