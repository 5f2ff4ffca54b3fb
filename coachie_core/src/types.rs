//! Core domain types for Coachie.
//!
//! This module defines the fundamental types used throughout the system:
//! - Health log entries and the per-day aggregate
//! - Goals, habit progress and daily signals fed to the score engine
//! - The score breakdown produced by the score engine
//! - Structured intents produced by the voice command parser

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Log Entry Types
// ============================================================================

/// Meal slot within the day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Kind of workout activity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Running,
    Walking,
    Hiking,
    Cycling,
    Swimming,
    Strength,
    Yoga,
    Pilates,
    Hiit,
    Rowing,
    Dance,
    Other,
}

/// Unit a body weight was reported in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Lbs,
    Kg,
}

/// Unit a workout distance was reported in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Miles,
    Km,
}

/// Meditation style
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeditationType {
    Guided,
    Silent,
    Mindfulness,
    BodyScan,
    Breathing,
}

/// Menstrual flow intensity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlowLevel {
    Spotting,
    Light,
    Medium,
    Heavy,
}

macro_rules! snake_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let value = serde_json::to_value(self).map_err(|_| fmt::Error)?;
                    f.write_str(value.as_str().unwrap_or_default())
                }
            }
        )*
    };
}

snake_display!(MealType, WorkoutType, WeightUnit, DistanceUnit, MeditationType, FlowLevel);

/// A single health event, tagged by `type`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEntry {
    Meal {
        food_name: String,
        meal_type: Option<MealType>,
        /// Unknown when the meal was logged without a calorie count
        #[serde(default)]
        calories: Option<f64>,
        #[serde(default)]
        protein: f64,
        #[serde(default)]
        carbs: f64,
        #[serde(default)]
        fat: f64,
    },
    Workout {
        workout_type: WorkoutType,
        duration_min: Option<f64>,
        distance: Option<f64>,
        distance_unit: Option<DistanceUnit>,
        calories_burned: Option<f64>,
    },
    Sleep {
        hours: f64,
        /// 1 (terrible) to 5 (excellent)
        quality: u8,
    },
    Water {
        amount_ml: f64,
    },
    Weight {
        weight: f64,
        unit: WeightUnit,
    },
    Mood {
        /// 1 (very low) to 5 (great)
        level: u8,
        energy: Option<u8>,
        #[serde(default)]
        emotions: Vec<String>,
    },
    Supplement {
        name: String,
        quantity: Option<f64>,
        unit: Option<String>,
    },
    Menstrual {
        flow: Option<FlowLevel>,
        #[serde(default)]
        symptoms: Vec<String>,
    },
    Meditation {
        duration_min: f64,
        meditation_type: Option<MeditationType>,
    },
    Journal {
        content: String,
        mood: Option<String>,
    },
    Habit {
        name: String,
        notes: Option<String>,
    },
    Steps {
        count: u32,
    },
}

impl LogEntry {
    /// The `type` tag this entry serializes with
    pub fn kind(&self) -> &'static str {
        match self {
            LogEntry::Meal { .. } => "meal",
            LogEntry::Workout { .. } => "workout",
            LogEntry::Sleep { .. } => "sleep",
            LogEntry::Water { .. } => "water",
            LogEntry::Weight { .. } => "weight",
            LogEntry::Mood { .. } => "mood",
            LogEntry::Supplement { .. } => "supplement",
            LogEntry::Menstrual { .. } => "menstrual",
            LogEntry::Meditation { .. } => "meditation",
            LogEntry::Journal { .. } => "journal",
            LogEntry::Habit { .. } => "habit",
            LogEntry::Steps { .. } => "steps",
        }
    }
}

/// A recorded health event. Immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthLog {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub entry: LogEntry,
}

impl HealthLog {
    /// Create a new log stamped with the current time
    pub fn new(entry: LogEntry) -> Self {
        Self::at(entry, Utc::now())
    }

    /// Create a new log with an explicit timestamp
    pub fn at(entry: LogEntry, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            entry,
        }
    }
}

// ============================================================================
// Daily Aggregate
// ============================================================================

/// All health events recorded on one calendar date
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub logs: Vec<HealthLog>,
    /// Cumulative water intake in ml
    pub water_ml: f64,
    /// Cumulative step count, if any step data was recorded
    pub steps: Option<u32>,
}

impl DailyLog {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            logs: Vec::new(),
            water_ml: 0.0,
            steps: None,
        }
    }

    /// Build a day from an existing set of logs
    pub fn from_logs(date: NaiveDate, logs: impl IntoIterator<Item = HealthLog>) -> Self {
        let mut day = Self::new(date);
        for log in logs {
            day.push(log);
        }
        day
    }

    /// Append a log and keep the derived totals in sync
    pub fn push(&mut self, log: HealthLog) {
        match &log.entry {
            LogEntry::Water { amount_ml } if amount_ml.is_finite() && *amount_ml > 0.0 => {
                self.water_ml += amount_ml;
            }
            LogEntry::Steps { count } => {
                self.steps = Some(self.steps.unwrap_or(0).saturating_add(*count));
            }
            _ => {}
        }
        self.logs.push(log);
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter().map(|l| &l.entry)
    }

    /// Names of habits marked complete on this day
    pub fn completed_habits(&self) -> impl Iterator<Item = &str> {
        self.entries().filter_map(|e| match e {
            LogEntry::Habit { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

// ============================================================================
// Score Engine Inputs and Outputs
// ============================================================================

/// Daily targets the health score is measured against
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Goals {
    #[serde(default = "default_calorie_goal")]
    pub calories: f64,
    #[serde(default = "default_steps_goal")]
    pub steps: u32,
    #[serde(default = "default_water_goal_ml")]
    pub water_ml: f64,
    #[serde(default = "default_sleep_goal_hours")]
    pub sleep_hours: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calories: default_calorie_goal(),
            steps: default_steps_goal(),
            water_ml: default_water_goal_ml(),
            sleep_hours: default_sleep_goal_hours(),
        }
    }
}

fn default_calorie_goal() -> f64 {
    2000.0
}

fn default_steps_goal() -> u32 {
    10_000
}

fn default_water_goal_ml() -> f64 {
    2000.0
}

fn default_sleep_goal_hours() -> f64 {
    8.0
}

/// Habit completion counts for one day
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitProgress {
    pub total: u32,
    pub completed: u32,
}

impl HabitProgress {
    pub fn new(total: u32, completed: u32) -> Self {
        Self { total, completed }
    }

    /// Count how many tracked habits have a matching habit log on `day`
    ///
    /// A habit matches when the words of either name appear, in order, among
    /// the words of the other, ignoring case. "stretch" logged by voice ticks
    /// off "morning stretch", but "read" does not tick off "eat bread".
    pub fn from_day(tracked: &[String], day: &DailyLog) -> Self {
        let logged: Vec<Vec<String>> = day.completed_habits().map(habit_words).collect();
        let completed = tracked
            .iter()
            .map(|t| habit_words(t))
            .filter(|t| {
                logged
                    .iter()
                    .any(|l| words_within(t, l) || words_within(l, t))
            })
            .count();

        Self {
            total: tracked.len() as u32,
            completed: completed as u32,
        }
    }
}

fn habit_words(name: &str) -> Vec<String> {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Every word of `needle` occurs in `haystack`, in the same order
fn words_within(needle: &[String], haystack: &[String]) -> bool {
    let mut rest = haystack.iter();
    !needle.is_empty() && needle.iter().all(|word| rest.any(|h| h == word))
}

/// Auxiliary boolean signals for the day
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySignals {
    pub circle_interaction: bool,
    pub focus_tasks_completed: bool,
}

/// Relative weights blending the three sub-scores into the daily score
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreWeights {
    pub health: f64,
    pub wellness: f64,
    pub habits: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            health: 0.5,
            wellness: 0.25,
            habits: 0.25,
        }
    }
}

/// The Coachie Score for one day. Every field is within 0..=100.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub daily_score: u8,
    pub health_score: u8,
    pub wellness_score: u8,
    pub habits_score: u8,
}

// ============================================================================
// Voice Command Types
// ============================================================================

/// One food item spoken in a meal utterance
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedFood {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedMeal {
    pub foods: Vec<ParsedFood>,
    pub meal_type: Option<MealType>,
    pub total_calories: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedWater {
    /// Normalized amount in ml
    pub amount_ml: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedWorkout {
    pub workout_type: WorkoutType,
    pub duration_min: Option<f64>,
    pub distance: Option<f64>,
    pub distance_unit: Option<DistanceUnit>,
    pub calories_burned: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedWeight {
    pub weight: f64,
    pub unit: WeightUnit,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedSleep {
    pub hours: f64,
    pub quality: Option<u8>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedMood {
    pub level: u8,
    pub emotions: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedSupplement {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedMeditation {
    pub duration_min: f64,
    pub meditation_type: Option<MeditationType>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedHabit {
    /// Fragment of the habit name as spoken
    pub name: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedJournal {
    pub content: String,
    pub mood: Option<String>,
}

/// Result of classifying a voice transcript. Exactly one variant is produced.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VoiceCommandResult {
    Meal(ParsedMeal),
    Water(ParsedWater),
    Workout(ParsedWorkout),
    Weight(ParsedWeight),
    Sleep(ParsedSleep),
    Mood(ParsedMood),
    Supplement(ParsedSupplement),
    Meditation(ParsedMeditation),
    Habit(ParsedHabit),
    Journal(ParsedJournal),
    /// No category matched
    Unknown,
    /// A category matched but a required field was missing or malformed
    ParseError { message: String },
}

/// Category a transcript can be classified into
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Habit,
    Journal,
    Meditation,
    Water,
    Weight,
    Sleep,
    Workout,
    Mood,
    Supplement,
    Meal,
}
