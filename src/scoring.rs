//! 計分引擎
//!
//! 對一次出牌執行單向的六階段計分流程：
//!
//! 1. 以勝出牌型的 TotalScore/TotalMultiplier 作為起始值
//! 2. 依出牌順序逐張累加計分子集的卡牌貢獻（含加算類貼紙；A 額外 +1 倍率）
//! 3. 逐卡類 Joker 效果（指定花色），依 Joker 欄位順序
//! 4. 全域類 Joker 效果，依欄位順序，尊重觸發旗標與 retrigger
//! 5. 延後的乘算類貼紙（基礎分與倍率各自乘上所有係數）
//! 6. `final_score = base × multiplier`（整數運算）
//!
//! 整個流程為同步純計算；觸發旗標屬於本次流程，結束即丟棄。

use std::fmt;

use log::{debug, warn};

use super::cards::{Card, StickerKind};
use super::classifier::{classify_and_select, NoHandFound};
use super::hand_types::{HandCategory, HandTypeDefinition};
use super::joker::{apply_joker_effect, Joker};

/// 計分過程中的兩個累加器
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreState {
    pub base: i64,
    pub multiplier: i64,
}

/// 一次計分流程的完整結果
///
/// `base_trace`/`multiplier_trace` 紀錄起始值與每一步之後的累加器
/// 快照，供呈現層分段播放動畫；引擎本身不假設任何播放節奏。
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreResult {
    pub category: HandCategory,
    pub level: u32,
    pub base: i64,
    pub multiplier: i64,
    pub final_score: i64,
    pub base_trace: Vec<i64>,
    pub multiplier_trace: Vec<i64>,
    /// 計入牌型的卡牌（供呈現層標示）
    pub scoring_cards: Vec<Card>,
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} LVL {}\n{} X {} = {}",
            self.category.name().to_uppercase(),
            self.level,
            self.base,
            self.multiplier,
            self.final_score
        )
    }
}

/// 百分比加成的捨入：四捨五入、0.5 遠離零
///
/// `BonusMultiplier` 貼紙的統一捨入政策。
pub fn apply_percent_bonus(value: i64, percent: i64) -> i64 {
    div_round_half_away(value * (100 + percent), 100)
}

fn div_round_half_away(num: i64, den: i64) -> i64 {
    debug_assert!(den > 0);
    if num >= 0 {
        (num + den / 2) / den
    } else {
        -((-num + den / 2) / den)
    }
}

/// 對勝出牌型執行一次計分流程
///
/// `scoring_indices` 為計分子集在 `played` 中的索引（出牌順序），
/// 來自 [`classify_and_select`](crate::classifier::classify_and_select)。
/// `jokers` 依欄位順序套用；沒有效果的 Joker 會被略過，不會中止流程。
pub fn score_hand(
    definition: &HandTypeDefinition,
    played: &[Card],
    scoring_indices: &[usize],
    jokers: &[Joker],
) -> ScoreResult {
    let scoring_cards: Vec<Card> = scoring_indices
        .iter()
        .filter_map(|&i| played.get(i))
        .cloned()
        .collect();

    let mut state = ScoreState {
        base: definition.total_score(),
        multiplier: definition.total_multiplier(),
    };
    let mut base_trace = vec![state.base];
    let mut multiplier_trace = vec![state.multiplier];

    // 階段 2：逐卡累加
    for card in &scoring_cards {
        let mut contribution = card.base_score();
        for sticker in card.stickers() {
            match sticker.kind {
                StickerKind::BonusScore => contribution += sticker.bonus_value,
                StickerKind::BonusMultiplier => {
                    contribution = apply_percent_bonus(contribution, sticker.bonus_value);
                }
                // 乘算類延後到階段 5
                StickerKind::MultiplyBonusScore | StickerKind::MultiplyBonusMultiplier => {}
                StickerKind::SpecialEffect | StickerKind::None => {}
            }
        }
        state.base += contribution;
        if card.is_ace() {
            state.multiplier += 1;
        }
        base_trace.push(state.base);
        multiplier_trace.push(state.multiplier);
    }

    // 階段 3（逐卡類）與階段 4（全域類）：依 Joker 欄位順序
    let mut activated = vec![false; jokers.len()];
    for per_card_stage in [true, false] {
        for (i, joker) in jokers.iter().enumerate() {
            let Some(effect) = &joker.effect else {
                if per_card_stage {
                    warn!("joker {:?} has no effect assigned; skipped", joker.name);
                }
                continue;
            };
            if effect.is_per_card() != per_card_stage {
                continue;
            }
            if activated[i] && !joker.retrigger {
                continue;
            }
            apply_joker_effect(
                effect,
                &mut state,
                definition.category,
                &scoring_cards,
                played.len(),
            );
            activated[i] = true;
            base_trace.push(state.base);
            multiplier_trace.push(state.multiplier);
        }
    }

    // 階段 5：延後的乘算貼紙
    for card in &scoring_cards {
        for sticker in card.stickers() {
            match sticker.kind {
                StickerKind::MultiplyBonusScore => state.base *= sticker.bonus_value,
                StickerKind::MultiplyBonusMultiplier => state.multiplier *= sticker.bonus_value,
                _ => {}
            }
        }
    }
    base_trace.push(state.base);
    multiplier_trace.push(state.multiplier);

    // 階段 6：結算
    let final_score = state.base * state.multiplier;
    debug!(
        "{} LVL {}: {} X {} = {}",
        definition.category.name(),
        definition.level,
        state.base,
        state.multiplier,
        final_score
    );

    ScoreResult {
        category: definition.category,
        level: definition.level,
        base: state.base,
        multiplier: state.multiplier,
        final_score,
        base_trace,
        multiplier_trace,
        scoring_cards,
    }
}

/// 分類並計分的便利入口
pub fn evaluate_and_score(
    played: &[Card],
    definitions: &[HandTypeDefinition],
    jokers: &[Joker],
) -> Result<ScoreResult, NoHandFound> {
    let evaluation = classify_and_select(played, definitions)?;
    Ok(score_hand(
        &definitions[evaluation.hand_index],
        played,
        &evaluation.scoring_indices,
        jokers,
    ))
}

// ============================================================================
// 單元測試
// ============================================================================
