//! 卡牌與貼紙系統定義

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_MAX_STICKERS;

/// 牌面點數
///
/// 數值編碼：A = 1，J/Q/K = 11/12/13。A 在順子判定中以 1 計算，
/// 計分時則給 11 chips。`None` 表示尚未指派的卡牌，分類時會被排除。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rank {
    #[default]
    None = 0,
    A = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    J = 11,
    Q = 12,
    K = 13,
}

impl Rank {
    /// 數值編碼（1..=13，`None` 為 0）
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// 從數值編碼建立點數（範圍外回傳 `None`）
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Rank::A,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::J,
            12 => Rank::Q,
            13 => Rank::K,
            _ => Rank::None,
        }
    }

    /// 基礎分數：A → 11，2..10 → 面值，J/Q/K → 10
    pub fn base_score(&self) -> i64 {
        match self {
            Rank::None => 0,
            Rank::A => 11,
            Rank::J | Rank::Q | Rank::K => 10,
            other => other.value() as i64,
        }
    }

    pub fn is_assigned(&self) -> bool {
        *self != Rank::None
    }

    /// 所有已指派的點數（用於建立牌組）
    pub fn all() -> &'static [Rank] {
        &[
            Rank::A,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::J,
            Rank::Q,
            Rank::K,
        ]
    }
}

/// 花色
///
/// 本作使用 Swords（劍）而非 Spades。`None` 表示尚未指派。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Suit {
    #[default]
    None = 0,
    Clubs = 1,
    Diamonds = 2,
    Swords = 3,
    Hearts = 4,
}

impl Suit {
    /// 整數索引（`None` 為 0）
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// 從整數索引建立花色（範圍外回傳 `None`）
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Suit::Clubs,
            2 => Suit::Diamonds,
            3 => Suit::Swords,
            4 => Suit::Hearts,
            _ => Suit::None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        *self != Suit::None
    }

    /// 所有已指派的花色（用於建立牌組）
    pub fn all() -> &'static [Suit] {
        &[Suit::Clubs, Suit::Diamonds, Suit::Swords, Suit::Hearts]
    }
}

/// 貼紙加成類型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StickerKind {
    #[default]
    None,
    /// 固定加算到卡牌貢獻
    BonusScore,
    /// 以百分比提高卡牌貢獻
    BonusMultiplier,
    /// 乘算基礎分（延後到所有加算結束後）
    MultiplyBonusScore,
    /// 乘算倍率（延後到所有加算結束後）
    MultiplyBonusMultiplier,
    /// 保留給特殊效果
    SpecialEffect,
}

/// 卡牌貼紙
///
/// 只對計入牌型的卡牌（scoring subset）生效。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub name: String,
    pub kind: StickerKind,
    pub bonus_value: i64,
}

impl Sticker {
    pub fn new(name: impl Into<String>, kind: StickerKind, bonus_value: i64) -> Self {
        Self {
            name: name.into(),
            kind,
            bonus_value,
        }
    }
}

/// 卡牌
///
/// `(rank, suit)` 為不可變身份；貼紙數量受 `max_stickers` 限制。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    stickers: Vec<Sticker>,
    max_stickers: usize,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            stickers: Vec::new(),
            max_stickers: DEFAULT_MAX_STICKERS,
        }
    }

    /// 基礎分數（不含貼紙效果）
    pub fn base_score(&self) -> i64 {
        self.rank.base_score()
    }

    /// 點數與花色都已指派才參與牌型判定
    pub fn is_assigned(&self) -> bool {
        self.rank.is_assigned() && self.suit.is_assigned()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::A
    }

    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    pub fn max_stickers(&self) -> usize {
        self.max_stickers
    }

    /// 調整貼紙上限，超出的貼紙會被移除
    pub fn set_max_stickers(&mut self, max: usize) {
        self.max_stickers = max;
        if self.stickers.len() > max {
            self.stickers.truncate(max);
        }
    }

    /// 附加貼紙；已達上限時拒絕並回傳 false
    pub fn add_sticker(&mut self, sticker: Sticker) -> bool {
        if self.stickers.len() >= self.max_stickers {
            log::warn!(
                "cannot add sticker {:?} to {:?} of {:?}: limit {} reached",
                sticker.name,
                self.rank,
                self.suit,
                self.max_stickers
            );
            return false;
        }
        self.stickers.push(sticker);
        true
    }

    /// 便利建構：附帶一張貼紙
    pub fn with_sticker(mut self, sticker: Sticker) -> Self {
        self.add_sticker(sticker);
        self
    }
}

/// 創建標準 52 張牌組（花色優先排序）
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for &suit in Suit::all() {
        for &rank in Rank::all() {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// 創建並洗亂標準牌組
pub fn shuffled_deck<R: Rng>(rng: &mut R) -> Vec<Card> {
    let mut deck = standard_deck();
    deck.shuffle(rng);
    deck
}

/// 卡牌在 52 張牌組中的索引（未指派的卡牌回傳 None）
pub fn card_index(card: &Card) -> Option<usize> {
    if !card.is_assigned() {
        return None;
    }
    Some((card.suit.index() - 1) * 13 + (card.rank.value() as usize - 1))
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rank_base_scores() {
        assert_eq!(Rank::A.base_score(), 11);
        assert_eq!(Rank::Seven.base_score(), 7);
        assert_eq!(Rank::Ten.base_score(), 10);
        assert_eq!(Rank::J.base_score(), 10);
        assert_eq!(Rank::Q.base_score(), 10);
        assert_eq!(Rank::K.base_score(), 10);
        assert_eq!(Rank::None.base_score(), 0);
    }

    #[test]
    fn test_rank_value_round_trip() {
        for &rank in Rank::all() {
            assert_eq!(Rank::from_value(rank.value()), rank);
        }
        assert_eq!(Rank::from_value(0), Rank::None);
        assert_eq!(Rank::from_value(14), Rank::None);
    }

    #[test]
    fn test_suit_index_round_trip() {
        for &suit in Suit::all() {
            assert_eq!(Suit::from_index(suit.index()), suit);
        }
        assert_eq!(Suit::from_index(0), Suit::None);
        assert_eq!(Suit::from_index(9), Suit::None);
    }

    #[test]
    fn test_unassigned_card() {
        let card = Card::new(Rank::None, Suit::Hearts);
        assert!(!card.is_assigned());
        assert_eq!(card_index(&card), None);

        let card = Card::new(Rank::A, Suit::None);
        assert!(!card.is_assigned());
    }

    #[test]
    fn test_sticker_limit() {
        let mut card = Card::new(Rank::Five, Suit::Clubs);
        for i in 0..3 {
            assert!(card.add_sticker(Sticker::new(
                format!("bonus-{i}"),
                StickerKind::BonusScore,
                10
            )));
        }
        // 第四張超出預設上限
        assert!(!card.add_sticker(Sticker::new("extra", StickerKind::BonusScore, 10)));
        assert_eq!(card.stickers().len(), 3);
    }

    #[test]
    fn test_set_max_stickers_truncates() {
        let mut card = Card::new(Rank::Five, Suit::Clubs);
        card.add_sticker(Sticker::new("a", StickerKind::BonusScore, 1));
        card.add_sticker(Sticker::new("b", StickerKind::BonusScore, 2));
        card.set_max_stickers(1);
        assert_eq!(card.stickers().len(), 1);
        assert_eq!(card.stickers()[0].name, "a");
        assert!(!card.add_sticker(Sticker::new("c", StickerKind::BonusScore, 3)));
    }

    #[test]
    fn test_standard_deck_and_index() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);

        let mut seen = HashSet::new();
        for card in &deck {
            let idx = card_index(card).unwrap();
            assert!(idx < 52);
            assert!(seen.insert(idx));
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        let deck = shuffled_deck(&mut rng);
        assert_eq!(deck.len(), 52);

        let indices: HashSet<usize> = deck.iter().map(|c| card_index(c).unwrap()).collect();
        assert_eq!(indices.len(), 52);
    }
}
