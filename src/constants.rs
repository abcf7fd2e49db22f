//! 遊戲常量定義

// ============================================================================
// 遊戲規則常量
// ============================================================================

pub const HAND_SIZE: usize = 8;            // 手牌數量
pub const MAX_SELECTED: usize = 5;         // 最多選擇 5 張打出
pub const JOKER_SLOTS: usize = 5;          // Joker 欄位數
pub const DEFAULT_MAX_STICKERS: usize = 3; // 每張卡牌預設貼紙上限
