//! 牌型定義
//!
//! 每個 `HandTypeDefinition` 對應一種撲克牌型，帶有可配置的基礎分、
//! 倍率、每級增量與目前等級。等級由外部系統提升，計分引擎只讀取。

use serde::{Deserialize, Serialize};

/// 牌型類別，依標準撲克強度升冪排列
///
/// 此排列同時是分類器的評估順序：同分乘積時保留先出現者（見
/// `classifier`）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    // 進階牌型
    FiveOfAKind,
    FlushHouse,
    FlushFive,
}

impl HandCategory {
    /// 顯示名稱
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FiveOfAKind => "Five of a Kind",
            HandCategory::FlushHouse => "Flush House",
            HandCategory::FlushFive => "Flush Five",
        }
    }

    /// 全部類別，升冪（評估順序）
    pub fn all() -> &'static [HandCategory] {
        &[
            HandCategory::HighCard,
            HandCategory::Pair,
            HandCategory::TwoPair,
            HandCategory::ThreeOfAKind,
            HandCategory::Straight,
            HandCategory::Flush,
            HandCategory::FullHouse,
            HandCategory::FourOfAKind,
            HandCategory::StraightFlush,
            HandCategory::FiveOfAKind,
            HandCategory::FlushHouse,
            HandCategory::FlushFive,
        ]
    }

    pub fn to_index(&self) -> usize {
        HandCategory::all()
            .iter()
            .position(|c| c == self)
            .unwrap_or(0)
    }
}

/// 牌型計分配置
///
/// `TotalScore = base_score + base_increment_per_level * (level - 1)`，
/// 倍率同理。實例屬於配置資料，計分過程不會修改它。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandTypeDefinition {
    pub category: HandCategory,
    pub base_score: i64,
    pub multiplier: i64,
    pub base_increment_per_level: i64,
    pub multiplier_increment_per_level: i64,
    pub level: u32,
}

impl HandTypeDefinition {
    pub fn new(
        category: HandCategory,
        base_score: i64,
        multiplier: i64,
        base_increment_per_level: i64,
        multiplier_increment_per_level: i64,
    ) -> Self {
        Self {
            category,
            base_score,
            multiplier,
            base_increment_per_level,
            multiplier_increment_per_level,
            level: 1,
        }
    }

    /// 目前等級的總基礎分
    pub fn total_score(&self) -> i64 {
        self.base_score + self.base_increment_per_level * (self.level as i64 - 1)
    }

    /// 目前等級的總倍率
    pub fn total_multiplier(&self) -> i64 {
        self.multiplier + self.multiplier_increment_per_level * (self.level as i64 - 1)
    }

    /// 分類器用的比較值
    pub fn score_product(&self) -> i64 {
        self.total_score() * self.total_multiplier()
    }

    /// 提升一級（由外部升級系統呼叫）
    pub fn level_up(&mut self) {
        self.level += 1;
    }
}

/// 預設牌型配置表，依評估順序排列
///
/// 基礎 chips/mult 數值沿用經典配置；每級增量為正值，確保升級
/// 單調不減。
pub fn default_definitions() -> Vec<HandTypeDefinition> {
    vec![
        HandTypeDefinition::new(HandCategory::HighCard, 5, 1, 10, 1),
        HandTypeDefinition::new(HandCategory::Pair, 10, 2, 15, 1),
        HandTypeDefinition::new(HandCategory::TwoPair, 20, 2, 20, 1),
        HandTypeDefinition::new(HandCategory::ThreeOfAKind, 30, 3, 20, 2),
        HandTypeDefinition::new(HandCategory::Straight, 30, 4, 30, 3),
        HandTypeDefinition::new(HandCategory::Flush, 35, 4, 15, 2),
        HandTypeDefinition::new(HandCategory::FullHouse, 40, 4, 25, 2),
        HandTypeDefinition::new(HandCategory::FourOfAKind, 60, 7, 30, 3),
        HandTypeDefinition::new(HandCategory::StraightFlush, 100, 8, 40, 4),
        HandTypeDefinition::new(HandCategory::FiveOfAKind, 120, 12, 35, 3),
        HandTypeDefinition::new(HandCategory::FlushHouse, 140, 14, 40, 4),
        HandTypeDefinition::new(HandCategory::FlushFive, 160, 16, 50, 3),
    ]
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_score_formula() {
        let mut def = HandTypeDefinition::new(HandCategory::Pair, 10, 2, 15, 1);
        assert_eq!(def.total_score(), 10);
        assert_eq!(def.total_multiplier(), 2);

        def.level_up();
        def.level_up();
        assert_eq!(def.level, 3);
        assert_eq!(def.total_score(), 10 + 15 * 2);
        assert_eq!(def.total_multiplier(), 2 + 1 * 2);
    }

    #[test]
    fn test_level_up_never_decreases() {
        for mut def in default_definitions() {
            for _ in 0..10 {
                let score = def.total_score();
                let mult = def.total_multiplier();
                def.level_up();
                assert!(def.total_score() >= score);
                assert!(def.total_multiplier() >= mult);
            }
        }
    }

    #[test]
    fn test_default_definitions_order() {
        let defs = default_definitions();
        assert_eq!(defs.len(), 12);
        for (def, &category) in defs.iter().zip(HandCategory::all()) {
            assert_eq!(def.category, category);
            assert_eq!(def.level, 1);
        }
    }

    #[test]
    fn test_default_products_strictly_increase() {
        // 等級 1 時乘積嚴格遞增，確保較強牌型必定勝出
        let defs = default_definitions();
        for pair in defs.windows(2) {
            assert!(pair[1].score_product() > pair[0].score_product());
        }
    }

    #[test]
    fn test_category_index() {
        assert_eq!(HandCategory::HighCard.to_index(), 0);
        assert_eq!(HandCategory::StraightFlush.to_index(), 8);
        assert_eq!(HandCategory::FlushFive.to_index(), 11);
    }
}
