//! Keyword and unit tables for the voice command parser.
//!
//! Everything the parser recognises lives here as plain data. Adding a new
//! activity, food, emotion or unit is a table edit; the matchers in
//! [`crate::voice`] never hard-code words.
//!
//! All phrases are written in normalized form: lowercase, no apostrophes,
//! numbers as digits.

use crate::types::*;

// ============================================================================
// Numbers
// ============================================================================

/// Spelled-out quantities rewritten to digits during normalization
pub const NUMBER_WORDS: &[(&str, f64)] = &[
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("thirteen", 13.0),
    ("fourteen", 14.0),
    ("fifteen", 15.0),
    ("sixteen", 16.0),
    ("seventeen", 17.0),
    ("eighteen", 18.0),
    ("nineteen", 19.0),
    ("twenty", 20.0),
    ("thirty", 30.0),
    ("forty", 40.0),
    ("fifty", 50.0),
    ("sixty", 60.0),
    ("seventy", 70.0),
    ("eighty", 80.0),
    ("ninety", 90.0),
    ("half", 0.5),
    ("dozen", 12.0),
];

/// Units that turn a leading "a"/"an" into the number 1
pub const COUNTABLE_UNITS: &[&str] = &[
    "glass", "cup", "bottle", "liter", "litre", "hour", "minute", "mile", "serving", "slice",
    "bowl", "piece", "plate", "scoop", "pill", "capsule", "tablet", "handful", "can", "pint",
];

pub fn number_word_value(word: &str) -> Option<f64> {
    lookup(NUMBER_WORDS, word)
}

// ============================================================================
// Category Triggers
// ============================================================================

/// Filler that may precede a habit-completion verb
pub const HABIT_FILLERS: &[&str] = &[
    "hey coachie", "please", "okay", "ok", "i", "ive", "i have", "im", "i am", "just", "already",
];

pub const HABIT_VERBS: &[&str] = &[
    "complete", "completed", "done with", "finished", "finish", "mark",
];

/// Words trailing a habit name that are not part of it
pub const HABIT_SUFFIXES: &[&str] = &[
    "habit", "as done", "as complete", "as completed", "done", "for today", "today",
];

pub const HABIT_NOTE_MARKERS: &[&str] = &["with notes", "with note", "notes", "note"];

pub const JOURNAL_TRIGGERS: &[&str] = &[
    "journal about", "write about", "journal that", "journal entry", "write in my journal",
];

pub const MEDITATION_TRIGGERS: &[&str] = &[
    "meditate", "meditated", "meditating", "meditation", "mindfulness", "body scan",
    "breathwork", "breathing exercise", "breathing exercises",
];

pub const WATER_TRIGGERS: &[&str] = &["water", "hydrated", "hydration", "hydrate"];

pub const WEIGHT_TRIGGERS: &[&str] = &[
    "weigh", "weighs", "weighed", "weighing", "weight", "bodyweight", "body weight",
];

/// Phrases containing a weight trigger that are really workouts
pub const WEIGHT_EXCLUSIONS: &[&str] = &[
    "weight training", "weight lifting", "lifting weight", "lift weight", "lifted weight",
];

pub const SLEEP_TRIGGERS: &[&str] = &[
    "slept", "sleep", "sleeping", "nap", "napped", "napping", "asleep",
];

/// Words that introduce a feeling directly
pub const FEELING_TRIGGERS: &[&str] = &["feel", "feels", "feeling", "felt", "mood"];

/// Words that introduce a feeling only when followed by an emotion word
pub const STATE_TRIGGERS: &[&str] = &["i am", "im", "i was", "i m"];

/// Allowed between a state trigger and its emotion: "im really tired"
pub const MOOD_INTENSIFIERS: &[&str] = &[
    "so", "very", "really", "pretty", "quite", "super", "kind of", "kinda", "a bit", "a little",
    "totally", "extremely",
];

pub const SUPPLEMENT_TRIGGERS: &[&str] = &[
    "supplement", "supplements", "pill", "pills", "capsule", "capsules", "vitamins",
];

/// Verbs that mark a supplement even when food is mentioned
pub const SUPPLEMENT_VERBS: &[&str] = &["took", "take", "taking", "taken", "popped"];

/// Verbs that mark speech as eating on their own
pub const EAT_VERBS: &[&str] = &[
    "ate", "eat", "eating", "eaten", "snacked", "munched", "consumed",
];

/// Verbs after which the food list starts
pub const CONSUME_VERBS: &[&str] = &[
    "snacked on", "munched on", "ate", "eat", "eating", "eaten", "had", "have", "having",
    "drank", "drink", "drinking", "snacked", "munched", "consumed", "grabbed",
];

// ============================================================================
// Units
// ============================================================================

/// Volume units and their size in ml
pub const VOLUME_UNITS_ML: &[(&str, f64)] = &[
    ("ml", 1.0),
    ("milliliter", 1.0),
    ("milliliters", 1.0),
    ("millilitre", 1.0),
    ("millilitres", 1.0),
    ("l", 1000.0),
    ("liter", 1000.0),
    ("liters", 1000.0),
    ("litre", 1000.0),
    ("litres", 1000.0),
    ("glass", 250.0),
    ("glasses", 250.0),
    ("cup", 250.0),
    ("cups", 250.0),
    ("bottle", 500.0),
    ("bottles", 500.0),
    ("fl oz", 29.5735),
    ("oz", 29.5735),
    ("ounce", 29.5735),
    ("ounces", 29.5735),
    ("pint", 473.176),
    ("pints", 473.176),
];

pub const WEIGHT_UNITS: &[(&str, WeightUnit)] = &[
    ("lbs", WeightUnit::Lbs),
    ("lb", WeightUnit::Lbs),
    ("pounds", WeightUnit::Lbs),
    ("pound", WeightUnit::Lbs),
    ("kg", WeightUnit::Kg),
    ("kgs", WeightUnit::Kg),
    ("kilos", WeightUnit::Kg),
    ("kilo", WeightUnit::Kg),
    ("kilograms", WeightUnit::Kg),
    ("kilogram", WeightUnit::Kg),
];

pub const DISTANCE_UNITS: &[(&str, DistanceUnit)] = &[
    ("miles", DistanceUnit::Miles),
    ("mile", DistanceUnit::Miles),
    ("mi", DistanceUnit::Miles),
    ("kilometers", DistanceUnit::Km),
    ("kilometer", DistanceUnit::Km),
    ("kilometres", DistanceUnit::Km),
    ("kilometre", DistanceUnit::Km),
    ("km", DistanceUnit::Km),
    ("k", DistanceUnit::Km),
];

/// Duration units and their length in minutes
pub const DURATION_UNITS_MIN: &[(&str, f64)] = &[
    ("minutes", 1.0),
    ("minute", 1.0),
    ("mins", 1.0),
    ("min", 1.0),
    ("hours", 60.0),
    ("hour", 60.0),
    ("hrs", 60.0),
    ("hr", 60.0),
    ("h", 60.0),
];

pub const CALORIE_UNITS: &[&str] = &["calories", "calorie", "cals", "cal", "kcal"];

pub const SUPPLEMENT_UNITS: &[&str] = &[
    "mg", "mcg", "iu", "g", "grams", "gram", "pills", "pill", "capsules", "capsule", "tablets",
    "tablet", "softgels", "softgel", "gummies", "gummy", "scoops", "scoop", "drops",
];

pub const FOOD_UNITS: &[&str] = &[
    "cups", "cup", "slices", "slice", "pieces", "piece", "bowls", "bowl", "servings", "serving",
    "plates", "plate", "grams", "gram", "g", "oz", "ounces", "ounce", "tbsp", "tablespoons",
    "tablespoon", "tsp", "teaspoons", "teaspoon", "handfuls", "handful", "scoops", "scoop",
    "glasses", "glass", "cans", "can", "bottles", "bottle", "portions", "portion", "lbs", "lb",
];

// ============================================================================
// Category Keyword Tables
// ============================================================================

pub const MEDITATION_TYPES: &[(&str, MeditationType)] = &[
    ("guided", MeditationType::Guided),
    ("silent", MeditationType::Silent),
    ("mindfulness", MeditationType::Mindfulness),
    ("mindful", MeditationType::Mindfulness),
    ("body scan", MeditationType::BodyScan),
    ("breathing", MeditationType::Breathing),
    ("breathwork", MeditationType::Breathing),
];

/// Sleep quality words on the 1-5 scale
pub const SLEEP_QUALITY: &[(&str, u8)] = &[
    ("terrible", 1),
    ("awful", 1),
    ("horrible", 1),
    ("barely", 1),
    ("poorly", 2),
    ("poor", 2),
    ("badly", 2),
    ("bad", 2),
    ("restless", 2),
    ("not well", 2),
    ("not great", 2),
    ("okay", 3),
    ("ok", 3),
    ("fair", 3),
    ("alright", 3),
    ("decent", 3),
    ("good", 4),
    ("well", 4),
    ("soundly", 4),
    ("great", 5),
    ("excellent", 5),
    ("amazing", 5),
    ("deeply", 5),
    ("perfectly", 5),
    ("like a baby", 5),
    ("like a rock", 5),
];

pub const WORKOUT_ACTIVITIES: &[(&str, WorkoutType)] = &[
    ("ran", WorkoutType::Running),
    ("run", WorkoutType::Running),
    ("running", WorkoutType::Running),
    ("jog", WorkoutType::Running),
    ("jogged", WorkoutType::Running),
    ("jogging", WorkoutType::Running),
    ("treadmill", WorkoutType::Running),
    ("walk", WorkoutType::Walking),
    ("walked", WorkoutType::Walking),
    ("walking", WorkoutType::Walking),
    ("hike", WorkoutType::Hiking),
    ("hiked", WorkoutType::Hiking),
    ("hiking", WorkoutType::Hiking),
    ("bike", WorkoutType::Cycling),
    ("biked", WorkoutType::Cycling),
    ("biking", WorkoutType::Cycling),
    ("bike ride", WorkoutType::Cycling),
    ("cycled", WorkoutType::Cycling),
    ("cycling", WorkoutType::Cycling),
    ("spin class", WorkoutType::Cycling),
    ("spinning", WorkoutType::Cycling),
    ("swim", WorkoutType::Swimming),
    ("swam", WorkoutType::Swimming),
    ("swimming", WorkoutType::Swimming),
    ("lift", WorkoutType::Strength),
    ("lifted", WorkoutType::Strength),
    ("lifting", WorkoutType::Strength),
    ("weights", WorkoutType::Strength),
    ("weight training", WorkoutType::Strength),
    ("weightlifting", WorkoutType::Strength),
    ("strength training", WorkoutType::Strength),
    ("strength", WorkoutType::Strength),
    ("yoga", WorkoutType::Yoga),
    ("pilates", WorkoutType::Pilates),
    ("hiit", WorkoutType::Hiit),
    ("crossfit", WorkoutType::Hiit),
    ("intervals", WorkoutType::Hiit),
    ("rowed", WorkoutType::Rowing),
    ("rowing", WorkoutType::Rowing),
    ("danced", WorkoutType::Dance),
    ("dancing", WorkoutType::Dance),
    ("zumba", WorkoutType::Dance),
    ("workout", WorkoutType::Other),
    ("worked out", WorkoutType::Other),
    ("exercise", WorkoutType::Other),
    ("exercised", WorkoutType::Other),
    ("gym", WorkoutType::Other),
];

/// Emotion words and the mood level (1-5) they indicate
pub const EMOTIONS: &[(&str, u8)] = &[
    ("not good", 2),
    ("not great", 2),
    ("not bad", 3),
    ("stressed out", 2),
    ("burned out", 1),
    ("amazing", 5),
    ("fantastic", 5),
    ("great", 5),
    ("excellent", 5),
    ("excited", 5),
    ("ecstatic", 5),
    ("wonderful", 5),
    ("awesome", 5),
    ("happy", 4),
    ("good", 4),
    ("calm", 4),
    ("content", 4),
    ("relaxed", 4),
    ("grateful", 4),
    ("energized", 4),
    ("motivated", 4),
    ("peaceful", 4),
    ("okay", 3),
    ("ok", 3),
    ("fine", 3),
    ("meh", 3),
    ("neutral", 3),
    ("alright", 3),
    ("tired", 2),
    ("stressed", 2),
    ("anxious", 2),
    ("sad", 2),
    ("down", 2),
    ("frustrated", 2),
    ("lonely", 2),
    ("overwhelmed", 2),
    ("exhausted", 2),
    ("worried", 2),
    ("irritable", 2),
    ("angry", 1),
    ("terrible", 1),
    ("awful", 1),
    ("depressed", 1),
    ("miserable", 1),
    ("hopeless", 1),
];

/// Supplement names as spoken; the first longest match names the supplement
pub const SUPPLEMENTS: &[&str] = &[
    "vitamin a", "vitamin b", "vitamin b12", "vitamin c", "vitamin d", "vitamin d3", "vitamin e",
    "vitamin k", "b12", "multivitamin", "multi vitamin", "fish oil", "omega 3", "omega", "magnesium",
    "zinc", "iron", "calcium", "potassium", "creatine", "probiotic", "probiotics", "melatonin",
    "collagen", "ashwagandha", "turmeric", "biotin", "electrolytes", "folic acid", "fiber",
    "glucosamine", "cod liver oil", "elderberry", "protein powder",
];

pub const MEAL_TYPES: &[(&str, MealType)] = &[
    ("breakfast", MealType::Breakfast),
    ("brunch", MealType::Lunch),
    ("lunch", MealType::Lunch),
    ("dinner", MealType::Dinner),
    ("supper", MealType::Dinner),
    ("snack", MealType::Snack),
    ("snacks", MealType::Snack),
];

/// Common foods; any of these marks an utterance as food-related
pub const FOOD_KEYWORDS: &[&str] = &[
    "apple", "apples", "avocado", "bacon", "bagel", "banana", "bananas", "beans", "beef", "berries",
    "bread", "broccoli", "burger", "burrito", "butter", "cake", "carrots", "cereal", "cheese",
    "chicken", "chips", "chocolate", "coffee", "cookie", "cookies", "curry", "egg", "eggs", "fish",
    "fries", "fruit", "granola", "ham", "ice cream", "juice", "milk", "muffin", "noodles", "nuts",
    "oatmeal", "oats", "orange", "pancakes", "pasta", "peanut butter", "pizza", "pork", "potato",
    "potatoes", "quinoa", "rice", "salad", "salmon", "sandwich", "smoothie", "soup", "spinach",
    "steak", "sushi", "taco", "tacos", "tea", "toast", "tofu", "tuna", "turkey", "vegetables",
    "waffles", "yogurt",
];

/// Words to drop around a food name
pub const FOOD_FILLERS: &[&str] = &[
    "a", "an", "some", "the", "my", "of", "i", "also", "just", "today", "earlier", "this morning",
    "tonight", "this evening", "for", "at", "with", "about", "around",
];

// ============================================================================
// Lookup Helpers
// ============================================================================

/// Exact lookup in a keyword table
pub fn lookup<T: Copy>(table: &[(&str, T)], word: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == word).map(|(_, v)| *v)
}

/// Regex alternation over phrases, longest first so multi-word phrases win
pub fn alternation<'a>(phrases: impl IntoIterator<Item = &'a str>) -> String {
    let mut phrases: Vec<&str> = phrases.into_iter().collect();
    phrases.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    phrases.dedup();
    phrases
        .iter()
        .map(|p| regex::escape(p).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

/// Keys of a keyword table
pub fn keys<'a, T>(table: &'a [(&'static str, T)]) -> impl Iterator<Item = &'static str> + 'a {
    table.iter().map(|(k, _)| *k)
}
