//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! The SM-2 algorithm calculates review intervals based on recall quality:
//! - Each card has an ease factor (EF) that adjusts after every review
//! - Quality grades 0-2: lapse, repetitions reset and the card comes back tomorrow
//! - Quality grades 3-5: interval grows 1 day → 6 days → previous interval × EF
//! - EF never falls below 1.3
//!
//! Every function here is pure; "now" is passed in by the caller.

use super::day::start_of_day_after;
use super::{ReviewCard, SimpleQuality};

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// New scheduling fields produced by one review.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewResult {
    pub interval: u32,
    pub repetitions: u32,
    pub ease_factor: f64,
    pub next_review_at: i64,
}

/// Calculates the next review state according to the SM-2 algorithm.
/// quality: 0-5 (0 = complete blackout, 5 = perfect response), clamped.
pub fn compute_next_review(
    quality: i32,
    repetitions: u32,
    ease_factor: f64,
    interval: u32,
    now: i64,
) -> ReviewResult {
    let quality = quality.clamp(0, 5);

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02))
    let q = f64::from(5 - quality);
    let new_ef = (ease_factor + (0.1 - q * (0.08 + q * 0.02))).max(MIN_EASE_FACTOR);

    let (new_interval, new_repetitions) = if quality < 3 {
        (1, 0)
    } else {
        let new_reps = repetitions.saturating_add(1);
        let new_int = match new_reps {
            1 => 1,
            2 => 6,
            _ => (f64::from(interval) * new_ef).round() as u32,
        };
        (new_int, new_reps)
    };

    ReviewResult {
        interval: new_interval,
        repetitions: new_repetitions,
        ease_factor: new_ef,
        next_review_at: start_of_day_after(now, new_interval),
    }
}

/// Builds a fresh card for a word that needs reviewing.
pub fn create_card(
    word: impl Into<String>,
    translations: Vec<String>,
    pronunciation: Option<String>,
    now: i64,
) -> ReviewCard {
    ReviewCard::new(word, translations, pronunciation, now)
}

/// Returns the card snapshot after rating it with `quality` at `now`.
pub fn apply_review(card: &ReviewCard, quality: impl Into<i32>, now: i64) -> ReviewCard {
    let result = compute_next_review(
        quality.into(),
        card.repetitions,
        card.ease_factor,
        card.interval,
        now,
    );

    ReviewCard {
        ease_factor: result.ease_factor,
        interval: result.interval,
        repetitions: result.repetitions,
        next_review_at: result.next_review_at,
        last_review_at: Some(now),
        ..card.clone()
    }
}

/// Interval each button would give: `[again, hard, good, easy]`.
pub fn preview_intervals(card: &ReviewCard) -> [u32; 4] {
    SimpleQuality::ALL.map(|button| {
        compute_next_review(
            button.score(),
            card.repetitions,
            card.ease_factor,
            card.interval,
            card.next_review_at,
        )
        .interval
    })
}

/// Human-readable distance to the next review.
pub fn format_interval(days: u32) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        2..=6 => in_units(days, 1.0, "day"),
        7..=29 => in_units(days, 7.0, "week"),
        30..=364 => in_units(days, 30.0, "month"),
        _ => in_units(days, 365.0, "year"),
    }
}

fn in_units(days: u32, unit_days: f64, unit: &str) -> String {
    let count = (f64::from(days) / unit_days).round() as u32;
    if count == 1 {
        format!("in 1 {}", unit)
    } else {
        format!("in {} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MS_PER_DAY;
    use crate::models::Quality;

    const NOW: i64 = 1_700_000_000_000;

    fn card() -> ReviewCard {
        create_card("abandon", vec!["v. to give up".to_string()], None, NOW)
    }

    #[test]
    fn test_first_review() {
        for quality in 3..=5 {
            let next = compute_next_review(quality, 0, 2.5, 0, NOW);
            assert_eq!(next.interval, 1);
            assert_eq!(next.repetitions, 1);
        }
    }

    #[test]
    fn test_second_review() {
        for quality in 3..=5 {
            let next = compute_next_review(quality, 1, 2.5, 1, NOW);
            assert_eq!(next.interval, 6);
            assert_eq!(next.repetitions, 2);
        }
    }

    #[test]
    fn test_subsequent_review_multiplies_interval() {
        // q=4 leaves EF at 2.5: 10 * 2.5 = 25
        let next = compute_next_review(4, 5, 2.5, 10, NOW);
        assert_eq!(next.interval, 25);
        assert_eq!(next.repetitions, 6);
    }

    #[test]
    fn test_quality_below_3_resets() {
        for quality in 0..3 {
            let next = compute_next_review(quality, 5, 2.5, 10, NOW);
            assert_eq!(next.interval, 1);
            assert_eq!(next.repetitions, 0);
            assert!(next.ease_factor < 2.5);
        }
    }

    #[test]
    fn test_lapse_scenario() {
        let next = compute_next_review(1, 5, 2.8, 30, NOW);
        assert_eq!(next.repetitions, 0);
        assert_eq!(next.interval, 1);
        // 2.8 + (0.1 - 4 * (0.08 + 4 * 0.02)) = 2.26
        assert!((next.ease_factor - 2.26).abs() < 1e-9);
    }

    #[test]
    fn test_quality_is_clamped() {
        assert_eq!(
            compute_next_review(42, 2, 2.5, 6, NOW),
            compute_next_review(5, 2, 2.5, 6, NOW)
        );
        assert_eq!(
            compute_next_review(-7, 2, 2.5, 6, NOW),
            compute_next_review(0, 2, 2.5, 6, NOW)
        );
    }

    #[test]
    fn test_ef_floor() {
        let mut card = card();
        for day in 0..50 {
            card = apply_review(&card, 0, NOW + day * MS_PER_DAY);
            assert!(card.ease_factor >= MIN_EASE_FACTOR);
        }
        assert_eq!(card.ease_factor, MIN_EASE_FACTOR);
    }

    #[test]
    fn test_next_review_is_future_midnight() {
        let next = compute_next_review(4, 1, 2.5, 1, NOW);
        assert_eq!(next.next_review_at, start_of_day_after(NOW, 6));
        assert!(next.next_review_at > NOW);
    }

    #[test]
    fn test_apply_review_keeps_identity() {
        let original = card();
        let later = NOW + 3_600_000;
        let reviewed = apply_review(&original, SimpleQuality::Good, later);

        assert_eq!(reviewed.id, original.id);
        assert_eq!(reviewed.word, original.word);
        assert_eq!(reviewed.translations, original.translations);
        assert_eq!(reviewed.created_at, original.created_at);
        assert_eq!(reviewed.last_review_at, Some(later));
        assert_eq!(reviewed.interval, 1);
        assert_eq!(reviewed.repetitions, 1);
        // the input snapshot is untouched
        assert_eq!(original.repetitions, 0);
        assert_eq!(original.last_review_at, None);
    }

    #[test]
    fn test_abandon_scenario() {
        let card = card();
        assert_eq!(card.ease_factor, 2.5);

        let day1 = apply_review(&card, Quality::CorrectWithHesitation, NOW);
        assert_eq!(day1.interval, 1);
        assert_eq!(day1.repetitions, 1);

        let day2 = apply_review(&day1, Quality::CorrectWithHesitation, NOW + MS_PER_DAY);
        assert_eq!(day2.interval, 6);
        assert_eq!(day2.repetitions, 2);

        let day8 = apply_review(&day2, SimpleQuality::Easy, NOW + 7 * MS_PER_DAY);
        assert!((day8.ease_factor - 2.6).abs() < 1e-9);
        // 6 * 2.6 = 15.6
        assert_eq!(day8.interval, 16);
        assert_eq!(day8.repetitions, 3);
    }

    #[test]
    fn test_preview_intervals() {
        let mut card = card();
        assert_eq!(preview_intervals(&card), [1, 1, 1, 1]);

        card.repetitions = 2;
        card.interval = 10;
        let [again, hard, good, easy] = preview_intervals(&card);
        assert_eq!(again, 1);
        assert!(hard <= good && good <= easy);
        assert_eq!(good, 25);
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(0), "today");
        assert_eq!(format_interval(1), "tomorrow");
        assert_eq!(format_interval(5), "in 5 days");
        assert_eq!(format_interval(7), "in 1 week");
        assert_eq!(format_interval(16), "in 2 weeks");
        assert_eq!(format_interval(45), "in 2 months");
        assert_eq!(format_interval(400), "in 1 year");
    }
}
