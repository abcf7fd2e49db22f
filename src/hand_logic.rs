//! 牌型判定與計分子集選取
//!
//! 每個 `HandCategory` 對應一組判定謂詞（`is_valid`）與一個選取器
//! （`scoring_selection`），以封閉的 match 分派。
//! 選取器回傳「計入牌型」卡牌在出牌區中的索引，維持出牌順序，
//! 供計分引擎逐張累加與貼紙/Joker 結算使用。

use super::cards::Card;
use super::hand_types::HandCategory;

// ============================================================================
// 分組輔助
// ============================================================================

/// 各點數出現次數（索引 = 點數值 - 1；未指派的卡牌不計）
fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for card in cards {
        if card.is_assigned() {
            counts[card.rank.value() as usize - 1] += 1;
        }
    }
    counts
}

/// 各花色成員索引（索引 = 花色 index - 1；未指派的卡牌不計）
fn suit_members(cards: &[Card]) -> [Vec<usize>; 4] {
    let mut members: [Vec<usize>; 4] = Default::default();
    for (i, card) in cards.iter().enumerate() {
        if card.is_assigned() {
            members[card.suit.index() - 1].push(i);
        }
    }
    members
}

/// 已指派卡牌數
fn assigned_count(counts: &[u8; 13]) -> usize {
    counts.iter().map(|&c| c as usize).sum()
}

/// 在點數集合中尋找 5 張連續的順子，回傳其點數值（升冪）
///
/// 特例：A-10-J-Q-K 在數值編碼（A = 1）下不連續，仍視為合法順子。
/// A-2-3-4-5 則是天然的數值連續區段，不需特判。
fn straight_run(counts: &[u8; 13]) -> Option<[u8; 5]> {
    let present: Vec<u8> = (0u8..13)
        .filter(|&i| counts[i as usize] > 0)
        .map(|i| i + 1)
        .collect();

    for window in present.windows(5) {
        if window[4] - window[0] == 4 {
            return Some([window[0], window[1], window[2], window[3], window[4]]);
        }
    }

    const BROADWAY: [u8; 5] = [1, 10, 11, 12, 13];
    if BROADWAY.iter().all(|&r| counts[r as usize - 1] > 0) {
        return Some(BROADWAY);
    }

    None
}

/// 滿足 `count >= min` 的最大組：先比組大小，再比點數值
fn best_group_rank(counts: &[u8; 13], min: u8) -> Option<u8> {
    let mut best: Option<(u8, u8)> = None; // (count, rank value)
    for rank in 1..=13u8 {
        let count = counts[rank as usize - 1];
        if count >= min {
            let candidate = (count, rank);
            if best.map_or(true, |b| candidate > b) {
                best = Some(candidate);
            }
        }
    }
    best.map(|(_, rank)| rank)
}

/// 滿足 `count == exact` 的最高點數組
fn exact_group_rank(counts: &[u8; 13], exact: u8) -> Option<u8> {
    (1..=13u8)
        .rev()
        .find(|&rank| counts[rank as usize - 1] == exact)
}

/// 依出牌順序取前 `take` 張指定點數的卡牌索引
fn indices_of_rank(cards: &[Card], rank_value: u8, take: usize) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_assigned() && c.rank.value() == rank_value)
        .map(|(i, _)| i)
        .take(take)
        .collect()
}

/// 在花色成員中依出牌順序取前 `take` 張指定點數的索引
fn indices_of_rank_in(cards: &[Card], members: &[usize], rank_value: u8, take: usize) -> Vec<usize> {
    members
        .iter()
        .copied()
        .filter(|&i| cards[i].rank.value() == rank_value)
        .take(take)
        .collect()
}

/// 花色成員的點數統計
fn rank_counts_in(cards: &[Card], members: &[usize]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for &i in members {
        counts[cards[i].rank.value() as usize - 1] += 1;
    }
    counts
}

// ============================================================================
// 判定謂詞
// ============================================================================

/// 檢查出牌是否構成指定牌型
pub fn is_valid(category: HandCategory, cards: &[Card]) -> bool {
    let counts = rank_counts(cards);
    let total = assigned_count(&counts);
    if total == 0 {
        return false;
    }

    match category {
        HandCategory::HighCard => true,
        HandCategory::Pair => counts.iter().any(|&c| c >= 2),
        HandCategory::TwoPair => counts.iter().filter(|&&c| c >= 2).count() >= 2,
        HandCategory::ThreeOfAKind => counts.iter().any(|&c| c >= 3),
        HandCategory::Straight => total >= 5 && straight_run(&counts).is_some(),
        HandCategory::Flush => {
            total >= 5 && suit_members(cards).iter().any(|m| m.len() >= 5)
        }
        HandCategory::FullHouse => {
            total >= 5
                && counts.iter().any(|&c| c >= 3)
                && counts.iter().filter(|&&c| c >= 2).count() >= 2
        }
        // 恰好 4 張：5 張同點數屬於 Five of a Kind
        HandCategory::FourOfAKind => counts.iter().any(|&c| c == 4),
        HandCategory::StraightFlush => suit_members(cards)
            .iter()
            .filter(|m| m.len() >= 5)
            .any(|m| straight_run(&rank_counts_in(cards, m)).is_some()),
        HandCategory::FiveOfAKind => counts.iter().any(|&c| c >= 5),
        HandCategory::FlushHouse => suit_members(cards)
            .iter()
            .filter(|m| m.len() >= 5)
            .any(|m| {
                let inner = rank_counts_in(cards, m);
                inner.iter().any(|&c| c == 3) && inner.iter().any(|&c| c == 2)
            }),
        HandCategory::FlushFive => suit_members(cards)
            .iter()
            .any(|m| rank_counts_in(cards, m).iter().any(|&c| c >= 5)),
    }
}

// ============================================================================
// 計分子集選取器
// ============================================================================

/// 選出計入牌型的卡牌索引（出牌順序）
///
/// 牌型不成立時回傳空集合；呼叫端應先以 `is_valid` 確認。
pub fn scoring_selection(category: HandCategory, cards: &[Card]) -> Vec<usize> {
    let counts = rank_counts(cards);
    let mut selection = match category {
        HandCategory::HighCard => select_high_card(cards),
        HandCategory::Pair => best_group_rank(&counts, 2)
            .map(|r| indices_of_rank(cards, r, 2))
            .unwrap_or_default(),
        HandCategory::TwoPair => select_two_pair(cards, &counts),
        HandCategory::ThreeOfAKind => best_group_rank(&counts, 3)
            .map(|r| indices_of_rank(cards, r, 3))
            .unwrap_or_default(),
        HandCategory::Straight => select_straight(cards, &counts),
        HandCategory::Flush => select_flush(cards),
        HandCategory::FullHouse => select_full_house(cards, &counts),
        HandCategory::FourOfAKind => exact_group_rank(&counts, 4)
            .map(|r| indices_of_rank(cards, r, 4))
            .unwrap_or_default(),
        HandCategory::StraightFlush => select_straight_flush(cards),
        HandCategory::FiveOfAKind => best_group_rank(&counts, 5)
            .map(|r| indices_of_rank(cards, r, 5))
            .unwrap_or_default(),
        HandCategory::FlushHouse => select_flush_house(cards),
        HandCategory::FlushFive => select_flush_five(cards),
    };
    selection.sort_unstable();
    selection
}

/// 最高的單張卡牌（數值編碼：K 最高，A 最低）
fn select_high_card(cards: &[Card]) -> Vec<usize> {
    let mut best: Option<(u8, usize)> = None;
    for (i, card) in cards.iter().enumerate() {
        if !card.is_assigned() {
            continue;
        }
        let value = card.rank.value();
        if best.map_or(true, |(v, _)| value > v) {
            best = Some((value, i));
        }
    }
    best.map(|(_, i)| vec![i]).unwrap_or_default()
}

/// 兩個最高的對子，各取兩張
fn select_two_pair(cards: &[Card], counts: &[u8; 13]) -> Vec<usize> {
    let mut pair_ranks: Vec<u8> = (1..=13u8)
        .filter(|&r| counts[r as usize - 1] >= 2)
        .collect();
    pair_ranks.sort_unstable_by(|a, b| b.cmp(a));
    if pair_ranks.len() < 2 {
        return Vec::new();
    }
    let mut selection = indices_of_rank(cards, pair_ranks[0], 2);
    selection.extend(indices_of_rank(cards, pair_ranks[1], 2));
    selection
}

/// 順子：每個連續點數各取一張
fn select_straight(cards: &[Card], counts: &[u8; 13]) -> Vec<usize> {
    let Some(run) = straight_run(counts) else {
        return Vec::new();
    };
    run.iter()
        .flat_map(|&r| indices_of_rank(cards, r, 1))
        .collect()
}

/// 同花：成牌花色中點數最高的 5 張
fn select_flush(cards: &[Card]) -> Vec<usize> {
    let members = suit_members(cards);
    let Some(flush) = members
        .iter()
        .filter(|m| m.len() >= 5)
        .max_by_key(|m| m.len())
    else {
        return Vec::new();
    };
    let mut by_rank = flush.clone();
    by_rank.sort_by(|&a, &b| cards[b].rank.value().cmp(&cards[a].rank.value()));
    by_rank.truncate(5);
    by_rank
}

/// 葫蘆：三條加一對（大組優先，點數高者優先）
fn select_full_house(cards: &[Card], counts: &[u8; 13]) -> Vec<usize> {
    let Some(triple_rank) = best_group_rank(counts, 3) else {
        return Vec::new();
    };
    let mut remaining = *counts;
    remaining[triple_rank as usize - 1] = 0;
    let Some(pair_rank) = best_group_rank(&remaining, 2) else {
        return Vec::new();
    };
    let mut selection = indices_of_rank(cards, triple_rank, 3);
    selection.extend(indices_of_rank(cards, pair_rank, 2));
    selection
}

/// 同花順：同一花色內的 5 張連續點數
fn select_straight_flush(cards: &[Card]) -> Vec<usize> {
    for members in suit_members(cards).iter().filter(|m| m.len() >= 5) {
        let inner = rank_counts_in(cards, members);
        if let Some(run) = straight_run(&inner) {
            return run
                .iter()
                .flat_map(|&r| indices_of_rank_in(cards, members, r, 1))
                .collect();
        }
    }
    Vec::new()
}

/// 同花葫蘆：同一花色內的三條加一對
fn select_flush_house(cards: &[Card]) -> Vec<usize> {
    for members in suit_members(cards).iter().filter(|m| m.len() >= 5) {
        let inner = rank_counts_in(cards, members);
        let triple = exact_group_rank(&inner, 3);
        let pair = exact_group_rank(&inner, 2);
        if let (Some(triple_rank), Some(pair_rank)) = (triple, pair) {
            let mut selection = indices_of_rank_in(cards, members, triple_rank, 3);
            selection.extend(indices_of_rank_in(cards, members, pair_rank, 2));
            return selection;
        }
    }
    Vec::new()
}

/// 同花五條：同花色同點數的 5 張
fn select_flush_five(cards: &[Card]) -> Vec<usize> {
    for members in suit_members(cards).iter() {
        let inner = rank_counts_in(cards, members);
        if let Some(rank) = best_group_rank(&inner, 5) {
            return indices_of_rank_in(cards, members, rank, 5);
        }
    }
    Vec::new()
}

// ============================================================================
// 單元測試
// ============================================================================
