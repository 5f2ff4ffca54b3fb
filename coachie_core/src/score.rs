//! Daily Coachie Score calculation.
//!
//! Folds one day's logs into three sub-scores and a combined score:
//! - Health: calorie, water, sleep and step adherence, plus a workout bonus
//! - Wellness: mood/energy level, plus meditation, journal and circle bonuses
//! - Habits: completion ratio, plus a focus-task bonus
//!
//! Every function here is pure. Missing or invalid data falls back to
//! [`NEUTRAL_BASELINE`] instead of producing an error or NaN.

use crate::{DailyLog, DaySignals, Goals, HabitProgress, LogEntry, ScoreBreakdown, ScoreWeights};

/// Score substituted for a dimension with no usable data
pub const NEUTRAL_BASELINE: f64 = 50.0;

/// Spread of the calorie adherence bell, as a fraction of the goal
const CALORIE_SIGMA: f64 = 0.25;

const CALORIE_WEIGHT: f64 = 0.35;
const WATER_WEIGHT: f64 = 0.25;
const SLEEP_WEIGHT: f64 = 0.30;
const STEPS_WEIGHT: f64 = 0.10;

const WORKOUT_BONUS: f64 = 15.0;
const MEDITATION_BONUS: f64 = 15.0;
const JOURNAL_BONUS: f64 = 10.0;
const CIRCLE_BONUS: f64 = 10.0;
const FOCUS_BONUS: f64 = 10.0;

/// Everything the sub-scores need, gathered in one pass over the day
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DayTotals {
    pub calories: f64,
    /// Meals with a known calorie count
    pub meal_count: usize,
    pub water_ml: f64,
    pub sleep_hours: f64,
    pub workout_count: usize,
    pub steps: Option<u32>,
    /// Mood and energy levels on the 1-5 scale
    pub mood_levels: Vec<u8>,
    pub meditated: bool,
    pub journaled: bool,
}

impl DayTotals {
    /// Fold every log of the day into totals
    pub fn from_day(day: &DailyLog) -> Self {
        let mut totals = DayTotals::default();

        for entry in day.entries() {
            match entry {
                LogEntry::Meal { calories, .. } => {
                    if let Some(kcal) = calories.filter(|c| c.is_finite() && *c >= 0.0) {
                        totals.meal_count += 1;
                        totals.calories += kcal;
                    }
                }
                LogEntry::Workout { .. } => totals.workout_count += 1,
                LogEntry::Sleep { hours, .. } => totals.sleep_hours += non_negative(*hours),
                LogEntry::Water { amount_ml } => totals.water_ml += non_negative(*amount_ml),
                LogEntry::Mood { level, energy, .. } => {
                    if (1..=5).contains(level) {
                        totals.mood_levels.push(*level);
                    }
                    if let Some(energy) = energy.filter(|e| (1..=5).contains(e)) {
                        totals.mood_levels.push(energy);
                    }
                }
                LogEntry::Meditation { duration_min, .. } => {
                    if non_negative(*duration_min) > 0.0 {
                        totals.meditated = true;
                    }
                }
                LogEntry::Journal { content, .. } => {
                    if !content.trim().is_empty() {
                        totals.journaled = true;
                    }
                }
                LogEntry::Steps { count } => {
                    totals.steps = Some(totals.steps.unwrap_or(0).saturating_add(*count));
                }
                LogEntry::Weight { .. }
                | LogEntry::Supplement { .. }
                | LogEntry::Menstrual { .. }
                | LogEntry::Habit { .. } => {}
            }
        }

        totals
    }
}

/// Compute the full breakdown for one day
pub fn calculate_daily_score(
    day: &DailyLog,
    habits: HabitProgress,
    goals: &Goals,
    signals: DaySignals,
    weights: &ScoreWeights,
) -> ScoreBreakdown {
    let totals = DayTotals::from_day(day);

    let health = calculate_health_score(&totals, goals);
    let wellness = calculate_wellness_score(&totals, signals.circle_interaction);
    let habits = calculate_habits_score(habits, signals.focus_tasks_completed);
    let daily = blend(health, wellness, habits, weights);

    ScoreBreakdown {
        daily_score: to_score(daily),
        health_score: to_score(health),
        wellness_score: to_score(wellness),
        habits_score: to_score(habits),
    }
}

/// Health sub-score in 0..=100
pub fn calculate_health_score(totals: &DayTotals, goals: &Goals) -> f64 {
    let mut components = vec![
        (calorie_adherence(totals, goals.calories), CALORIE_WEIGHT),
        (ratio_score(totals.water_ml, goals.water_ml), WATER_WEIGHT),
        (ratio_score(totals.sleep_hours, goals.sleep_hours), SLEEP_WEIGHT),
    ];

    if let Some(steps) = totals.steps {
        components.push((ratio_score(steps as f64, goals.steps as f64), STEPS_WEIGHT));
    }

    let total_weight: f64 = components.iter().map(|(_, w)| w).sum();
    let base = components.iter().map(|(s, w)| s * w).sum::<f64>() / total_weight;

    let bonus = if totals.workout_count > 0 {
        WORKOUT_BONUS
    } else {
        0.0
    };

    clamp(base + bonus)
}

/// Wellness sub-score in 0..=100
pub fn calculate_wellness_score(totals: &DayTotals, circle_interaction: bool) -> f64 {
    let base = if totals.mood_levels.is_empty() {
        NEUTRAL_BASELINE
    } else {
        let sum: f64 = totals.mood_levels.iter().map(|&l| f64::from(l)).sum();
        let mean = sum / totals.mood_levels.len() as f64;
        (mean - 1.0) / 4.0 * 100.0
    };

    let mut bonus = 0.0;
    if totals.meditated {
        bonus += MEDITATION_BONUS;
    }
    if totals.journaled {
        bonus += JOURNAL_BONUS;
    }
    if circle_interaction {
        bonus += CIRCLE_BONUS;
    }

    clamp(base + bonus)
}

/// Habits sub-score in 0..=100
pub fn calculate_habits_score(habits: HabitProgress, focus_tasks_completed: bool) -> f64 {
    let base = if habits.total > 0 {
        f64::from(habits.completed.min(habits.total)) / f64::from(habits.total) * 100.0
    } else {
        NEUTRAL_BASELINE
    };

    let bonus = if focus_tasks_completed { FOCUS_BONUS } else { 0.0 };
    clamp(base + bonus)
}

/// Weighted blend of the three sub-scores
///
/// Negative or non-finite weights, or weights summing to zero, fall back to
/// [`ScoreWeights::default`].
pub fn blend(health: f64, wellness: f64, habits: f64, weights: &ScoreWeights) -> f64 {
    let weights = if valid_weights(weights) {
        *weights
    } else {
        ScoreWeights::default()
    };

    let total = weights.health + weights.wellness + weights.habits;
    let combined = (clamp(health) * weights.health
        + clamp(wellness) * weights.wellness
        + clamp(habits) * weights.habits)
        / total;

    clamp(combined)
}

fn valid_weights(w: &ScoreWeights) -> bool {
    let parts = [w.health, w.wellness, w.habits];
    parts.iter().all(|p| p.is_finite() && *p >= 0.0) && parts.iter().sum::<f64>() > 0.0
}

/// Bell-shaped adherence: 100 on target, falling off symmetrically either side
fn calorie_adherence(totals: &DayTotals, goal: f64) -> f64 {
    if totals.meal_count == 0 || !valid_goal(goal) {
        return NEUTRAL_BASELINE;
    }

    let deviation = (totals.calories - goal).abs() / goal;
    100.0 * (-(deviation * deviation) / (2.0 * CALORIE_SIGMA * CALORIE_SIGMA)).exp()
}

/// `value / goal` as a percentage, capped at 100
fn ratio_score(value: f64, goal: f64) -> f64 {
    if !valid_goal(goal) {
        return NEUTRAL_BASELINE;
    }
    clamp(non_negative(value) / goal * 100.0)
}

fn valid_goal(goal: f64) -> bool {
    goal.is_finite() && goal > 0.0
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn clamp(value: f64) -> f64 {
    if value.is_nan() {
        return NEUTRAL_BASELINE;
    }
    value.clamp(0.0, 100.0)
}

fn to_score(value: f64) -> u8 {
    clamp(value).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HealthLog, WorkoutType};
    use chrono::NaiveDate;

    fn day(entries: Vec<LogEntry>) -> DailyLog {
        DailyLog::from_logs(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            entries.into_iter().map(HealthLog::new),
        )
    }

    fn meal(calories: f64) -> LogEntry {
        LogEntry::Meal {
            food_name: "oatmeal".into(),
            meal_type: None,
            calories: Some(calories),
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
        }
    }

    fn mood(level: u8) -> LogEntry {
        LogEntry::Mood {
            level,
            energy: None,
            emotions: vec![],
        }
    }

    fn score(day: &DailyLog, habits: HabitProgress, signals: DaySignals) -> ScoreBreakdown {
        calculate_daily_score(
            day,
            habits,
            &Goals::default(),
            signals,
            &ScoreWeights::default(),
        )
    }

    fn in_range(b: &ScoreBreakdown) -> bool {
        [b.daily_score, b.health_score, b.wellness_score, b.habits_score]
            .iter()
            .all(|s| *s <= 100)
    }

    #[test]
    fn test_perfect_day_scores_high() {
        let d = day(vec![
            meal(2000.0),
            LogEntry::Water { amount_ml: 2000.0 },
            LogEntry::Sleep {
                hours: 8.0,
                quality: 5,
            },
            LogEntry::Workout {
                workout_type: WorkoutType::Running,
                duration_min: Some(30.0),
                distance: None,
                distance_unit: None,
                calories_burned: None,
            },
            mood(5),
        ]);
        let signals = DaySignals {
            circle_interaction: true,
            focus_tasks_completed: true,
        };

        let b = score(&d, HabitProgress::new(3, 3), signals);
        assert_eq!(b.health_score, 100);
        assert_eq!(b.wellness_score, 100);
        assert_eq!(b.habits_score, 100);
        assert_eq!(b.daily_score, 100);
    }

    #[test]
    fn test_empty_day_uses_baselines() {
        let b = score(&day(vec![]), HabitProgress::default(), DaySignals::default());

        // No meals -> calorie baseline; zero water and sleep score nothing
        let expected_health = (NEUTRAL_BASELINE * CALORIE_WEIGHT)
            / (CALORIE_WEIGHT + WATER_WEIGHT + SLEEP_WEIGHT);
        assert_eq!(b.health_score, expected_health.round() as u8);
        assert_eq!(b.wellness_score, 50);
        assert_eq!(b.habits_score, 50);
        assert!(in_range(&b));
    }

    #[test]
    fn test_calorie_penalty_is_symmetric() {
        let goals = Goals::default();
        let under = DayTotals::from_day(&day(vec![meal(1500.0)]));
        let over = DayTotals::from_day(&day(vec![meal(2500.0)]));
        let exact = DayTotals::from_day(&day(vec![meal(2000.0)]));

        let u = calorie_adherence(&under, goals.calories);
        let o = calorie_adherence(&over, goals.calories);
        let e = calorie_adherence(&exact, goals.calories);

        assert!((u - o).abs() < 1e-9);
        assert!(u < e);
        assert_eq!(e, 100.0);
    }

    #[test]
    fn test_meal_without_calories_is_no_data() {
        let base = vec![
            LogEntry::Water { amount_ml: 2000.0 },
            LogEntry::Sleep {
                hours: 8.0,
                quality: 4,
            },
        ];
        let mut with_meal = base.clone();
        with_meal.push(LogEntry::Meal {
            food_name: "2 eggs, toast".into(),
            meal_type: Some(crate::MealType::Breakfast),
            calories: None,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
        });

        let totals = DayTotals::from_day(&day(with_meal.clone()));
        assert_eq!(totals.meal_count, 0);
        assert_eq!(calorie_adherence(&totals, 2000.0), NEUTRAL_BASELINE);

        let plain = score(&day(base), HabitProgress::default(), DaySignals::default());
        let logged = score(&day(with_meal), HabitProgress::default(), DaySignals::default());
        assert_eq!(plain, logged);
    }

    #[test]
    fn test_calories_far_from_goal_score_low() {
        let totals = DayTotals::from_day(&day(vec![meal(4500.0)]));
        assert!(calorie_adherence(&totals, 2000.0) < 1.0);
    }

    #[test]
    fn test_water_ratio_caps_at_goal() {
        let goals = Goals::default();
        let half = DayTotals::from_day(&day(vec![LogEntry::Water { amount_ml: 1000.0 }]));
        let double = DayTotals::from_day(&day(vec![LogEntry::Water { amount_ml: 4000.0 }]));

        assert_eq!(ratio_score(half.water_ml, goals.water_ml), 50.0);
        assert_eq!(ratio_score(double.water_ml, goals.water_ml), 100.0);
    }

    #[test]
    fn test_zero_goals_fall_back_to_baseline() {
        let goals = Goals {
            calories: 0.0,
            steps: 0,
            water_ml: 0.0,
            sleep_hours: 0.0,
        };
        let d = day(vec![meal(1800.0), LogEntry::Steps { count: 5000 }]);

        let b = calculate_daily_score(
            &d,
            HabitProgress::default(),
            &goals,
            DaySignals::default(),
            &ScoreWeights::default(),
        );
        assert_eq!(b.health_score, 50);
    }

    #[test]
    fn test_nan_and_negative_inputs_are_no_data() {
        let d = day(vec![
            meal(f64::NAN),
            LogEntry::Water {
                amount_ml: f64::INFINITY,
            },
            LogEntry::Sleep {
                hours: -3.0,
                quality: 1,
            },
            mood(9),
        ]);
        let goals = Goals {
            calories: f64::NAN,
            ..Goals::default()
        };

        let b = calculate_daily_score(
            &d,
            HabitProgress::new(0, 4),
            &goals,
            DaySignals::default(),
            &ScoreWeights {
                health: f64::NAN,
                wellness: 1.0,
                habits: 1.0,
            },
        );
        assert!(in_range(&b));
        assert_eq!(b.wellness_score, 50); // mood level 9 ignored
        assert_eq!(b.habits_score, 50);
    }

    #[test]
    fn test_workout_adds_bonus() {
        let without = DayTotals::from_day(&day(vec![LogEntry::Water { amount_ml: 1000.0 }]));
        let with = DayTotals::from_day(&day(vec![
            LogEntry::Water { amount_ml: 1000.0 },
            LogEntry::Workout {
                workout_type: WorkoutType::Yoga,
                duration_min: None,
                distance: None,
                distance_unit: None,
                calories_burned: None,
            },
        ]));

        let goals = Goals::default();
        let diff = calculate_health_score(&with, &goals) - calculate_health_score(&without, &goals);
        assert!((diff - WORKOUT_BONUS).abs() < 1e-9);
    }

    #[test]
    fn test_steps_only_count_when_present() {
        let goals = Goals::default();
        let no_steps = DayTotals::from_day(&day(vec![LogEntry::Water { amount_ml: 2000.0 }]));
        let full_steps = DayTotals::from_day(&day(vec![
            LogEntry::Water { amount_ml: 2000.0 },
            LogEntry::Steps { count: 12_000 },
        ]));

        assert!(
            calculate_health_score(&full_steps, &goals) > calculate_health_score(&no_steps, &goals)
        );
    }

    #[test]
    fn test_wellness_from_mood_and_energy() {
        let totals = DayTotals::from_day(&day(vec![LogEntry::Mood {
            level: 4,
            energy: Some(2),
            emotions: vec!["calm".into()],
        }]));
        // mean of 4 and 2 is 3 -> 50
        assert_eq!(calculate_wellness_score(&totals, false), 50.0);
        assert_eq!(calculate_wellness_score(&totals, true), 60.0);
    }

    #[test]
    fn test_wellness_bonuses_without_mood() {
        let totals = DayTotals::from_day(&day(vec![
            LogEntry::Meditation {
                duration_min: 10.0,
                meditation_type: None,
            },
            LogEntry::Journal {
                content: "grateful for the sunshine".into(),
                mood: None,
            },
        ]));
        assert_eq!(calculate_wellness_score(&totals, false), 75.0);
    }

    #[test]
    fn test_habits_ratio_and_focus_bonus() {
        assert_eq!(calculate_habits_score(HabitProgress::new(4, 1), false), 25.0);
        assert_eq!(calculate_habits_score(HabitProgress::new(4, 1), true), 35.0);
        assert_eq!(calculate_habits_score(HabitProgress::new(4, 9), true), 100.0);
        assert_eq!(calculate_habits_score(HabitProgress::new(0, 0), false), 50.0);
    }

    #[test]
    fn test_blend_is_monotonic_in_each_score() {
        let w = ScoreWeights::default();
        let base = blend(50.0, 50.0, 50.0, &w);
        assert!(blend(60.0, 50.0, 50.0, &w) > base);
        assert!(blend(50.0, 60.0, 50.0, &w) > base);
        assert!(blend(50.0, 50.0, 60.0, &w) > base);
        // Health carries the most weight
        assert!(blend(60.0, 50.0, 50.0, &w) > blend(50.0, 60.0, 50.0, &w));
    }

    #[test]
    fn test_zero_weights_fall_back_to_defaults() {
        let zero = ScoreWeights {
            health: 0.0,
            wellness: 0.0,
            habits: 0.0,
        };
        assert_eq!(
            blend(80.0, 40.0, 20.0, &zero),
            blend(80.0, 40.0, 20.0, &ScoreWeights::default())
        );
    }

    #[test]
    fn test_deterministic() {
        let d = day(vec![
            meal(1700.0),
            LogEntry::Water { amount_ml: 750.0 },
            mood(4),
        ]);
        let a = score(&d, HabitProgress::new(5, 2), DaySignals::default());
        let b = score(&d, HabitProgress::new(5, 2), DaySignals::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_scores_always_in_range() {
        let calorie_values = [0.0, 500.0, 2000.0, 10_000.0, -1.0];
        let water_values = [0.0, 250.0, 2000.0, 1e9];
        for &calories in &calorie_values {
            for &water in &water_values {
                for completed in 0..4 {
                    let d = day(vec![meal(calories), LogEntry::Water { amount_ml: water }]);
                    let b = score(
                        &d,
                        HabitProgress::new(3, completed),
                        DaySignals {
                            circle_interaction: true,
                            focus_tasks_completed: true,
                        },
                    );
                    assert!(in_range(&b), "out of range: {:?}", b);
                }
            }
        }
    }
}
