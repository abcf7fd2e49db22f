//! Joker 系統
//!
//! 每個 Joker 帶有至多一個效果。效果為封閉的 enum 變體，
//! 以純函數套用到計分狀態上；
//! 「每回合只觸發一次」的旗標由計分流程持有（見 `scoring`），
//! 不存在配置物件上。

use serde::{Deserialize, Serialize};

use super::cards::{Card, Suit};
use super::hand_types::HandCategory;
use super::scoring::ScoreState;

/// Joker 稀有度（純展示用途，計分不參考）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JokerRarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// 出牌數量的比較運算符
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    Equal,
    LessThan,
    GreaterThan,
    SameOrFewer,
    SameOrGreater,
}

impl ComparisonOp {
    /// 以出牌數量對閾值求值
    pub fn compare(&self, played_count: usize, threshold: usize) -> bool {
        match self {
            ComparisonOp::Equal => played_count == threshold,
            ComparisonOp::LessThan => played_count < threshold,
            ComparisonOp::GreaterThan => played_count > threshold,
            ComparisonOp::SameOrFewer => played_count <= threshold,
            ComparisonOp::SameOrGreater => played_count >= threshold,
        }
    }
}

/// 獎勵套用目標：加算或乘算基礎分/倍率
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardKind {
    Base,
    Multiplier,
    BaseMultiply,
    MultMultiply,
}

impl RewardKind {
    /// 將獎勵套用到計分狀態
    pub fn apply(&self, state: &mut ScoreState, amount: i64) {
        match self {
            RewardKind::Base => state.base += amount,
            RewardKind::Multiplier => state.multiplier += amount,
            RewardKind::BaseMultiply => state.base *= amount,
            RewardKind::MultMultiply => state.multiplier *= amount,
        }
    }
}

/// 不含同點數分組的牌型：`HandCategoryBonus` 對這些牌型不觸發
///
/// 固定名單；注意進階牌型（Five of a Kind、Flush House、
/// Flush Five）不在其中，因此會觸發。
pub const NO_GROUP_CATEGORIES: [HandCategory; 4] = [
    HandCategory::HighCard,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::StraightFlush,
];

/// Joker 效果
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum JokerEffect {
    /// 固定加算倍率，每回合一次
    AdditiveMult { amount: i64 },

    /// 牌型含同點數分組時套用獎勵（排除集見 [`NO_GROUP_CATEGORIES`]）
    HandCategoryBonus { reward: RewardKind, amount: i64 },

    /// 出牌數量符合比較條件時套用獎勵
    CardCountBonus {
        comparison: ComparisonOp,
        threshold: usize,
        reward: RewardKind,
        amount: i64,
    },

    /// 計分子集中每張指定花色的卡牌加算倍率（可多次觸發，每張一次）
    SuitMultBonus { target_suit: Suit, bonus_per_card: i64 },
}

impl JokerEffect {
    /// 是否為逐卡效果（於計分流程的 per-card 階段套用）
    pub fn is_per_card(&self) -> bool {
        matches!(self, JokerEffect::SuitMultBonus { .. })
    }
}

/// Joker 配置資料
///
/// `effect` 為 `None` 表示配置不完整，計分時會略過該 Joker。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Joker {
    pub name: String,
    pub rarity: JokerRarity,
    /// 允許在同一回合內重複觸發
    pub retrigger: bool,
    pub effect: Option<JokerEffect>,
}

impl Joker {
    pub fn new(name: impl Into<String>, rarity: JokerRarity, effect: JokerEffect) -> Self {
        Self {
            name: name.into(),
            rarity,
            retrigger: false,
            effect: Some(effect),
        }
    }

    pub fn retrigger(mut self) -> Self {
        self.retrigger = true;
        self
    }
}

/// 將單一效果套用到計分狀態
///
/// 純函數：條件不成立時狀態不變。觸發旗標由呼叫端（計分流程）管理。
pub fn apply_joker_effect(
    effect: &JokerEffect,
    state: &mut ScoreState,
    category: HandCategory,
    scoring_cards: &[Card],
    played_count: usize,
) {
    match effect {
        JokerEffect::AdditiveMult { amount } => {
            state.multiplier += amount;
        }
        JokerEffect::HandCategoryBonus { reward, amount } => {
            if !NO_GROUP_CATEGORIES.contains(&category) {
                reward.apply(state, *amount);
            }
        }
        JokerEffect::CardCountBonus {
            comparison,
            threshold,
            reward,
            amount,
        } => {
            if comparison.compare(played_count, *threshold) {
                reward.apply(state, *amount);
            }
        }
        JokerEffect::SuitMultBonus {
            target_suit,
            bonus_per_card,
        } => {
            for card in scoring_cards {
                if card.suit == *target_suit {
                    state.multiplier += bonus_per_card;
                }
            }
        }
    }
}

// ============================================================================
// 單元測試
// ============================================================================
