//! 撲克牌型判定與計分引擎
//!
//! 包含 Balatro 式計分迴圈的核心定義：
//! - `constants`: 引擎常量
//! - `cards`: 卡牌、花色、點數、貼紙定義
//! - `hand_types`: 牌型配置（基礎分、倍率、等級）
//! - `hand_logic`: 12 種牌型的判定與計分子集選取
//! - `classifier`: 最佳牌型分類器
//! - `joker`: Joker 系統（封閉效果 enum）
//! - `scoring`: 六階段計分流程
//!
//! 引擎為同步純計算，不含任何呈現或回合流程；呈現層以
//! [`ScoreResult`] 的快照序列自行安排播放節奏。

pub mod cards;
pub mod classifier;
pub mod constants;
pub mod hand_logic;
pub mod hand_types;
pub mod joker;
pub mod scoring;

// Re-export 常用類型（公開 API）
pub use cards::{card_index, shuffled_deck, standard_deck, Card, Rank, Sticker, StickerKind, Suit};
pub use classifier::{classify_and_select, Evaluation, NoHandFound};
pub use constants::*;
pub use hand_logic::{is_valid, scoring_selection};
pub use hand_types::{default_definitions, HandCategory, HandTypeDefinition};
pub use joker::{ComparisonOp, Joker, JokerEffect, JokerRarity, RewardKind};
pub use scoring::{evaluate_and_score, score_hand, ScoreResult, ScoreState};
