//! Streak counting over the recorded score history.

use crate::score_history::History;
use chrono::NaiveDate;

fn meets(history: &History, date: NaiveDate, threshold: u8) -> bool {
    history
        .get(&date)
        .is_some_and(|score| score.daily_score >= threshold)
}

/// Consecutive days at or above `threshold`, ending today
///
/// A day that has not been scored yet does not break the streak, so the
/// count ends yesterday when today is missing from the history.
pub fn current_streak(history: &History, today: NaiveDate, threshold: u8) -> u32 {
    let mut day = if history.contains_key(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };

    let mut streak = 0;
    while meets(history, day, threshold) {
        streak += 1;
        day = match day.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }
    streak
}

/// Longest run of consecutive days at or above `threshold`
pub fn longest_streak(history: &History, threshold: u8) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for (&date, score) in history {
        if score.daily_score < threshold {
            run = 0;
        } else if prev.and_then(|p| p.succ_opt()) == Some(date) && run > 0 {
            run += 1;
        } else {
            run = 1;
        }
        longest = longest.max(run);
        prev = Some(date);
    }

    longest
}
