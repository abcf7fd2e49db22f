//! 最佳牌型分類器
//!
//! 依序評估牌型配置表，保留 `TotalScore × TotalMultiplier` 乘積最高者。
//! 候選者必須「嚴格大於」現任者才會取代，因此乘積相同時保留配置表中
//! 較早的條目——評估順序即為同分時的決勝總序。

use std::error::Error;
use std::fmt;

use log::debug;

use super::cards::Card;
use super::hand_logic::{is_valid, scoring_selection};
use super::hand_types::{HandCategory, HandTypeDefinition};

/// 沒有任何牌型成立（例如出牌為空或全部未指派）
///
/// 呼叫端不得對此結果進行計分。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoHandFound;

impl fmt::Display for NoHandFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no valid poker hand found in played cards")
    }
}

impl Error for NoHandFound {}

/// 分類結果：勝出牌型與其計分子集
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// 勝出配置在定義表中的索引
    pub hand_index: usize,
    pub category: HandCategory,
    /// 計入牌型的卡牌在出牌區中的索引（出牌順序）
    pub scoring_indices: Vec<usize>,
    /// 計分起始值（= 勝出牌型的 TotalScore / TotalMultiplier）
    pub base_at_seed: i64,
    pub multiplier_at_seed: i64,
}

impl Evaluation {
    /// 取得計分子集的卡牌
    pub fn scoring_cards<'a>(&self, played: &'a [Card]) -> Vec<&'a Card> {
        self.scoring_indices
            .iter()
            .filter_map(|&i| played.get(i))
            .collect()
    }
}

/// 分類出牌並選出計分子集
///
/// 未指派（點數或花色為 None）的卡牌不參與判定，但不會中止評估。
/// 定義表為空、或沒有任何牌型成立時回傳 [`NoHandFound`]。
pub fn classify_and_select(
    played: &[Card],
    definitions: &[HandTypeDefinition],
) -> Result<Evaluation, NoHandFound> {
    if !played.iter().any(|c| c.is_assigned()) {
        return Err(NoHandFound);
    }

    let mut best: Option<(usize, i64)> = None; // (definition index, product)
    for (index, definition) in definitions.iter().enumerate() {
        if !is_valid(definition.category, played) {
            continue;
        }
        let product = definition.score_product();
        debug!(
            "{} detected: {} X {} = {}",
            definition.category.name(),
            definition.total_score(),
            definition.total_multiplier(),
            product
        );
        if best.map_or(true, |(_, p)| product > p) {
            best = Some((index, product));
        }
    }

    let (hand_index, _) = best.ok_or(NoHandFound)?;
    let definition = &definitions[hand_index];
    let scoring_indices = scoring_selection(definition.category, played);

    debug!(
        "best hand: {} (level {}), {} scoring cards",
        definition.category.name(),
        definition.level,
        scoring_indices.len()
    );

    Ok(Evaluation {
        hand_index,
        category: definition.category,
        scoring_indices,
        base_at_seed: definition.total_score(),
        multiplier_at_seed: definition.total_multiplier(),
    })
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::hand_types::default_definitions;

    fn make_cards(ranks_suits: &[(u8, usize)]) -> Vec<Card> {
        ranks_suits
            .iter()
            .map(|&(r, s)| Card::new(Rank::from_value(r), Suit::from_index(s)))
            .collect()
    }

    #[test]
    fn test_empty_played_is_no_hand() {
        let defs = default_definitions();
        assert_eq!(classify_and_select(&[], &defs), Err(NoHandFound));
    }

    #[test]
    fn test_all_unassigned_is_no_hand() {
        let defs = default_definitions();
        let cards = vec![Card::new(Rank::None, Suit::None); 3];
        assert_eq!(classify_and_select(&cards, &defs), Err(NoHandFound));
    }

    #[test]
    fn test_empty_definitions_is_no_hand() {
        let cards = make_cards(&[(5, 1)]);
        assert_eq!(classify_and_select(&cards, &[]), Err(NoHandFound));
    }

    #[test]
    fn test_three_aces_beats_pair() {
        let defs = default_definitions();
        let cards = make_cards(&[(1, 2), (1, 1), (1, 3), (2, 4), (3, 4)]);
        let eval = classify_and_select(&cards, &defs).unwrap();
        assert_eq!(eval.category, HandCategory::ThreeOfAKind);
        assert_eq!(eval.scoring_indices, vec![0, 1, 2]);
        assert_eq!(eval.base_at_seed, 30);
        assert_eq!(eval.multiplier_at_seed, 3);
    }

    #[test]
    fn test_straight_flush_beats_flush_and_straight() {
        let defs = default_definitions();
        let cards = make_cards(&[(5, 4), (6, 4), (7, 4), (8, 4), (9, 4)]);
        let eval = classify_and_select(&cards, &defs).unwrap();
        assert_eq!(eval.category, HandCategory::StraightFlush);
        assert_eq!(eval.scoring_indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_four_of_a_kind_preferred_over_three() {
        let defs = default_definitions();
        let cards = make_cards(&[(7, 1), (7, 2), (7, 3), (7, 4), (10, 1)]);
        let eval = classify_and_select(&cards, &defs).unwrap();
        assert_eq!(eval.category, HandCategory::FourOfAKind);
        assert_eq!(eval.scoring_indices.len(), 4);
    }

    #[test]
    fn test_equal_product_keeps_earlier_definition() {
        // 兩個配置乘積相同時，較早的條目勝出
        let defs = vec![
            HandTypeDefinition::new(HandCategory::Pair, 10, 2, 0, 0),
            HandTypeDefinition::new(HandCategory::ThreeOfAKind, 5, 4, 0, 0),
        ];
        let cards = make_cards(&[(5, 1), (5, 2), (5, 3)]);
        let eval = classify_and_select(&cards, &defs).unwrap();
        assert_eq!(eval.hand_index, 0);
        assert_eq!(eval.category, HandCategory::Pair);
    }

    #[test]
    fn test_level_changes_winner() {
        // 升級後的 Pair 乘積超過 Three of a Kind 時應勝出
        let mut defs = default_definitions();
        let pair_index = HandCategory::Pair.to_index();
        for _ in 0..10 {
            defs[pair_index].level_up();
        }
        // Pair lvl 11: (10+150) X (2+10) = 1920 > ThreeOfAKind 90
        let cards = make_cards(&[(5, 1), (5, 2), (5, 3)]);
        let eval = classify_and_select(&cards, &defs).unwrap();
        assert_eq!(eval.category, HandCategory::Pair);
        assert_eq!(eval.scoring_indices.len(), 2);
    }

    #[test]
    fn test_unassigned_cards_do_not_abort() {
        let defs = default_definitions();
        let mut cards = make_cards(&[(5, 1), (5, 2)]);
        cards.push(Card::new(Rank::None, Suit::None));
        let eval = classify_and_select(&cards, &defs).unwrap();
        assert_eq!(eval.category, HandCategory::Pair);
        assert_eq!(eval.scoring_indices, vec![0, 1]);
    }

    #[test]
    fn test_classifier_idempotent() {
        let defs = default_definitions();
        let cards = make_cards(&[(2, 1), (2, 2), (8, 3), (8, 4), (10, 1)]);
        let first = classify_and_select(&cards, &defs).unwrap();
        let second = classify_and_select(&cards, &defs).unwrap();
        assert_eq!(first, second);
    }
}
