//! Voice command parser.
//!
//! Turns a finalized speech transcript into exactly one structured intent.
//! Classification runs an ordered table of matchers; the first category whose
//! trigger words appear wins, so an utterance is never classified twice:
//!
//! 1. Habit completion  2. Journal  3. Meditation  4. Water  5. Weight
//! 6. Sleep  7. Workout  8. Mood  9. Supplement  10. Meal
//!
//! A matcher that triggers but cannot find its required data returns
//! [`VoiceCommandResult::ParseError`] naming the missing field. Nothing here
//! panics, performs I/O or keeps state.

use crate::numbers::{self, NUMBER};
use crate::types::*;
use crate::vocabulary::{self as vocab, alternation, keys, lookup};
use once_cell::sync::Lazy;
use regex::Regex;

static HABIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:(?:{})\s+)*(?:{})\b\s*(.*)$",
        alternation(vocab::HABIT_FILLERS.iter().copied()),
        alternation(vocab::HABIT_VERBS.iter().copied()),
    ))
    .expect("valid habit regex")
});

static JOURNAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:{})\b\s*(.*)$",
        alternation(vocab::JOURNAL_TRIGGERS.iter().copied())
    ))
    .expect("valid journal regex")
});

static VOLUME: Lazy<Regex> = Lazy::new(|| {
    quantity_regex(&alternation(keys(vocab::VOLUME_UNITS_ML)))
});

static BODY_WEIGHT: Lazy<Regex> = Lazy::new(|| {
    quantity_regex(&alternation(keys(vocab::WEIGHT_UNITS)))
});

static DISTANCE: Lazy<Regex> = Lazy::new(|| {
    quantity_regex(&alternation(keys(vocab::DISTANCE_UNITS)))
});

static DURATION: Lazy<Regex> = Lazy::new(|| {
    quantity_regex(&alternation(keys(vocab::DURATION_UNITS_MIN)))
});

static CALORIES: Lazy<Regex> = Lazy::new(|| {
    quantity_regex(&alternation(vocab::CALORIE_UNITS.iter().copied()))
});

static CALORIE_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:(?:about|around|roughly|approximately|that was|totaling|totalling)\s+)?{}\s*(?:{})\b",
        NUMBER,
        alternation(vocab::CALORIE_UNITS.iter().copied())
    ))
    .expect("valid calorie phrase regex")
});

static MOOD_SCALE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b{}\s*(?:out of|of)\s*(5|10)\b", NUMBER)).expect("valid mood scale regex")
});

static SUPPLEMENT_DOSE: Lazy<Regex> = Lazy::new(|| {
    quantity_regex(&alternation(vocab::SUPPLEMENT_UNITS.iter().copied()))
});

static MEAL_TYPE_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:(?:for|at|with|during|as)\s+(?:a\s+|my\s+)?|my\s+)?(?:{})\b",
        alternation(keys(vocab::MEAL_TYPES))
    ))
    .expect("valid meal type regex")
});

static FOOD_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:and|with|plus|then|also)\b").expect("valid separator regex"));

static FOOD_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:{}\s*)?(?:({})\b\s*)?(?:of\s+)?(.*)$",
        NUMBER,
        alternation(vocab::FOOD_UNITS.iter().copied())
    ))
    .expect("valid food item regex")
});

/// `<number> <unit>` where the unit is captured as group 2
fn quantity_regex(units: &str) -> Regex {
    Regex::new(&format!(r"\b{}\s*({})\b", NUMBER, units)).expect("valid quantity regex")
}

// ============================================================================
// Utterance
// ============================================================================

/// A transcript in the forms the matchers need
#[derive(Clone, Debug)]
pub struct Utterance {
    /// Normalized text
    pub text: String,
    /// Normalized text with commas and semicolons turned into "and"
    pub listed: String,
    padded: String,
}

impl Utterance {
    pub fn new(transcript: &str) -> Self {
        let text = numbers::normalize(transcript);
        let listed = transcript
            .split([',', ';'])
            .map(numbers::normalize)
            .filter(|clause| !clause.is_empty())
            .collect::<Vec<_>>()
            .join(" and ");
        let padded = format!(" {} ", text);

        Self {
            text,
            listed,
            padded,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whole-word (or whole-phrase) containment
    pub fn has(&self, phrase: &str) -> bool {
        self.padded.contains(&format!(" {} ", phrase))
    }

    pub fn has_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.has(p))
    }

    /// Longest phrase from a keyword table present in the utterance
    pub fn find<T: Copy>(&self, table: &[(&'static str, T)]) -> Option<(&'static str, T)> {
        table
            .iter()
            .filter(|(k, _)| self.has(k))
            .max_by_key(|(k, _)| k.len())
            .copied()
    }
}

// ============================================================================
// Classification
// ============================================================================

type Matcher = fn(&Utterance) -> Option<VoiceCommandResult>;

/// Categories in priority order
const MATCHERS: &[(IntentKind, Matcher)] = &[
    (IntentKind::Habit, match_habit),
    (IntentKind::Journal, match_journal),
    (IntentKind::Meditation, match_meditation),
    (IntentKind::Water, match_water),
    (IntentKind::Weight, match_weight),
    (IntentKind::Sleep, match_sleep),
    (IntentKind::Workout, match_workout),
    (IntentKind::Mood, match_mood),
    (IntentKind::Supplement, match_supplement),
    (IntentKind::Meal, match_meal),
];

/// Parse a finalized transcript into a structured intent
pub fn parse_voice_command(transcript: &str) -> VoiceCommandResult {
    classify(&Utterance::new(transcript))
        .map(|(_, result)| result)
        .unwrap_or(VoiceCommandResult::Unknown)
}

/// The category a transcript triggers, if any
pub fn classify_intent(transcript: &str) -> Option<IntentKind> {
    classify(&Utterance::new(transcript)).map(|(kind, _)| kind)
}

fn classify(utterance: &Utterance) -> Option<(IntentKind, VoiceCommandResult)> {
    if utterance.is_empty() {
        return None;
    }

    MATCHERS
        .iter()
        .find_map(|(kind, matcher)| matcher(utterance).map(|result| (*kind, result)))
}

fn parse_error(message: impl Into<String>) -> Option<VoiceCommandResult> {
    Some(VoiceCommandResult::ParseError {
        message: message.into(),
    })
}

// ============================================================================
// Matchers
// ============================================================================

fn match_habit(u: &Utterance) -> Option<VoiceCommandResult> {
    let caps = HABIT.captures(&u.text)?;
    let rest = caps.get(1).map_or("", |m| m.as_str());

    let (name, notes) = split_notes(rest);
    let name = strip_habit_affixes(name);

    if name.is_empty() {
        return parse_error("missing habit name");
    }

    Some(VoiceCommandResult::Habit(ParsedHabit {
        name,
        notes: notes.filter(|n| !n.is_empty()),
    }))
}

fn split_notes(text: &str) -> (&str, Option<String>) {
    let padded = format!(" {} ", text);
    let earliest = vocab::HABIT_NOTE_MARKERS
        .iter()
        .filter_map(|marker| {
            padded
                .find(&format!(" {} ", marker))
                .map(|pos| (pos, marker.len()))
        })
        .min_by_key(|(pos, len)| (*pos, usize::MAX - len));

    match earliest {
        Some((pos, len)) => {
            // A marker at padded offset `pos` starts at `pos + 1` in `text`
            let name_end = pos.min(text.len());
            let notes_start = (pos + len + 1).min(text.len());
            let notes = text
                .get(notes_start..)
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty());
            (text.get(..name_end).unwrap_or(text), notes)
        }
        None => (text, None),
    }
}

fn strip_habit_affixes(name: &str) -> String {
    let mut words: Vec<&str> = name.split_whitespace().collect();

    while matches!(words.first(), Some(&("my" | "the" | "a" | "an" | "habit"))) {
        words.remove(0);
    }

    'outer: loop {
        for suffix in vocab::HABIT_SUFFIXES {
            let suffix_words: Vec<&str> = suffix.split(' ').collect();
            if words.len() >= suffix_words.len() && words.ends_with(&suffix_words) {
                words.truncate(words.len() - suffix_words.len());
                continue 'outer;
            }
        }
        break;
    }

    words.join(" ")
}

fn match_journal(u: &Utterance) -> Option<VoiceCommandResult> {
    let caps = JOURNAL.captures(&u.text)?;
    let content = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();

    if content.is_empty() {
        return parse_error("missing journal content");
    }

    let mood = Utterance::new(&content)
        .find(vocab::EMOTIONS)
        .map(|(word, _)| word.to_string());

    Some(VoiceCommandResult::Journal(ParsedJournal { content, mood }))
}

fn match_meditation(u: &Utterance) -> Option<VoiceCommandResult> {
    if !u.has_any(vocab::MEDITATION_TRIGGERS) {
        return None;
    }

    let Some(duration_min) = duration_minutes(&u.text) else {
        return parse_error("missing meditation duration in minutes");
    };

    let meditation_type = u.find(vocab::MEDITATION_TYPES).map(|(_, t)| t);

    Some(VoiceCommandResult::Meditation(ParsedMeditation {
        duration_min,
        meditation_type,
    }))
}

fn match_water(u: &Utterance) -> Option<VoiceCommandResult> {
    if !u.has_any(vocab::WATER_TRIGGERS) {
        return None;
    }

    let amount = VOLUME.captures(&u.text).and_then(|caps| {
        let value = numbers::parse_number(caps.get(1)?.as_str())?;
        let unit = normalize_spaces(caps.get(2)?.as_str());
        let factor = lookup(vocab::VOLUME_UNITS_ML, &unit)?;
        Some((value * factor).round())
    });

    match amount {
        Some(amount_ml) if amount_ml > 0.0 => {
            Some(VoiceCommandResult::Water(ParsedWater { amount_ml }))
        }
        Some(_) => parse_error("water amount must be greater than zero"),
        None => parse_error("missing water amount"),
    }
}

fn match_weight(u: &Utterance) -> Option<VoiceCommandResult> {
    if !u.has_any(vocab::WEIGHT_TRIGGERS) || u.has_any(vocab::WEIGHT_EXCLUSIONS) {
        return None;
    }

    if let Some(caps) = BODY_WEIGHT.captures(&u.text) {
        let weight = caps
            .get(1)
            .and_then(|m| numbers::parse_number(m.as_str()))
            .filter(|w| *w > 0.0);
        let unit = caps
            .get(2)
            .and_then(|m| lookup(vocab::WEIGHT_UNITS, m.as_str()));

        return match (weight, unit) {
            (Some(weight), Some(unit)) => {
                Some(VoiceCommandResult::Weight(ParsedWeight { weight, unit }))
            }
            _ => parse_error("missing weight value"),
        };
    }

    if numbers::first_number(&u.text).is_some() {
        parse_error("missing weight unit (lbs or kg)")
    } else {
        parse_error("missing weight value")
    }
}

fn match_sleep(u: &Utterance) -> Option<VoiceCommandResult> {
    if !u.has_any(vocab::SLEEP_TRIGGERS) {
        return None;
    }

    let Some(minutes) = duration_minutes(&u.text) else {
        return parse_error("missing sleep duration in hours");
    };

    let quality = u.find(vocab::SLEEP_QUALITY).map(|(_, q)| q);

    Some(VoiceCommandResult::Sleep(ParsedSleep {
        hours: numbers::round_to(minutes / 60.0, 2),
        quality,
    }))
}

fn match_workout(u: &Utterance) -> Option<VoiceCommandResult> {
    let (_, workout_type) = u.find(vocab::WORKOUT_ACTIVITIES)?;

    let (distance, distance_unit) = DISTANCE
        .captures(&u.text)
        .and_then(|caps| {
            let value = numbers::parse_number(caps.get(1)?.as_str())?;
            let unit = lookup(vocab::DISTANCE_UNITS, caps.get(2)?.as_str())?;
            Some((Some(value), Some(unit)))
        })
        .unwrap_or((None, None));

    let calories_burned = CALORIES
        .captures(&u.text)
        .and_then(|caps| numbers::parse_number(caps.get(1)?.as_str()));

    Some(VoiceCommandResult::Workout(ParsedWorkout {
        workout_type,
        duration_min: duration_minutes(&u.text),
        distance,
        distance_unit,
        calories_burned,
    }))
}

fn match_mood(u: &Utterance) -> Option<VoiceCommandResult> {
    let feeling = u.has_any(vocab::FEELING_TRIGGERS);
    let stated = stated_emotion(u);
    if !feeling && !stated {
        return None;
    }

    let emotions = emotion_words(&u.text);

    if let Some(level) = explicit_mood_level(u) {
        return Some(VoiceCommandResult::Mood(ParsedMood {
            level,
            emotions: emotions.into_iter().map(|(w, _)| w).collect(),
        }));
    }

    if emotions.is_empty() {
        // "I'm having eggs" is not a mood; "I feel" with nothing after it is
        return if feeling {
            parse_error("missing mood description")
        } else {
            None
        };
    }

    let sum: u32 = emotions.iter().map(|(_, level)| u32::from(*level)).sum();
    let mean = f64::from(sum) / emotions.len() as f64;
    let level = (mean.round() as u8).clamp(1, 5);

    Some(VoiceCommandResult::Mood(ParsedMood {
        level,
        emotions: emotions.into_iter().map(|(w, _)| w).collect(),
    }))
}

/// "im tired", "i was really happy": an emotion right after the state words
fn stated_emotion(u: &Utterance) -> bool {
    vocab::STATE_TRIGGERS.iter().any(|state| {
        vocab::EMOTIONS.iter().any(|(emotion, _)| {
            u.has(&format!("{} {}", state, emotion))
                || vocab::MOOD_INTENSIFIERS
                    .iter()
                    .any(|i| u.has(&format!("{} {} {}", state, i, emotion)))
        })
    })
}

/// "4 out of 5", "8 out of 10", or "my mood is 3"
fn explicit_mood_level(u: &Utterance) -> Option<u8> {
    if let Some(caps) = MOOD_SCALE.captures(&u.text) {
        let value = numbers::parse_number(caps.get(1)?.as_str())?;
        let scale = numbers::parse_number(caps.get(2)?.as_str())?;
        let level = if scale > 5.0 { value / 2.0 } else { value };
        return Some(level.round().clamp(1.0, 5.0) as u8);
    }

    if u.has("mood") {
        return numbers::first_number(&u.text)
            .filter(|v| (1.0..=5.0).contains(v))
            .map(|v| v.round() as u8);
    }

    None
}

/// Emotion words in order of appearance, longest phrases first so that
/// "not good" is not also read as "good"
fn emotion_words(text: &str) -> Vec<(String, u8)> {
    let mut remaining = format!(" {} ", text);
    let mut phrases: Vec<&(&str, u8)> = vocab::EMOTIONS.iter().collect();
    phrases.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut found: Vec<(usize, String, u8)> = Vec::new();
    for (phrase, level) in phrases {
        let needle = format!(" {} ", phrase);
        while let Some(pos) = remaining.find(&needle) {
            found.push((pos, phrase.to_string(), *level));
            // Blank the match, keeping offsets stable
            let blank = " ".repeat(needle.len());
            remaining.replace_range(pos..pos + needle.len(), &blank);
        }
    }

    found.sort_by_key(|(pos, _, _)| *pos);
    found.into_iter().map(|(_, w, l)| (w, l)).collect()
}

fn match_supplement(u: &Utterance) -> Option<VoiceCommandResult> {
    let name = vocab::SUPPLEMENTS
        .iter()
        .filter(|s| u.has(s))
        .max_by_key(|s| s.len())
        .copied();

    let Some(name) = name else {
        return if u.has_any(vocab::SUPPLEMENT_TRIGGERS) {
            parse_error("missing supplement name")
        } else {
            None
        };
    };

    // "ate a bowl of cereal with fiber" is a meal
    let eating = u.has_any(vocab::EAT_VERBS) && vocab::FOOD_KEYWORDS.iter().any(|f| u.has(f));
    if eating && !u.has_any(vocab::SUPPLEMENT_VERBS) && !u.has_any(vocab::SUPPLEMENT_TRIGGERS) {
        return None;
    }

    let (quantity, unit) = supplement_quantity(&u.text, name);

    Some(VoiceCommandResult::Supplement(ParsedSupplement {
        name: name.to_string(),
        quantity,
        unit,
    }))
}

/// A dose with a unit ("2000 iu", "2 capsules"), or a bare count directly
/// before the name ("took 2 fish oil")
fn supplement_quantity(text: &str, name: &str) -> (Option<f64>, Option<String>) {
    let padded = format!(" {} ", text);
    let needle = format!(" {} ", name);
    let Some(at) = padded.find(&needle) else {
        return (None, None);
    };
    let before = &padded[..at];

    // Digits inside the name ("omega 3") are not a quantity
    let without_name = format!("{} {}", before, &padded[at + needle.len()..]);
    if let Some(caps) = SUPPLEMENT_DOSE.captures(&without_name) {
        let quantity = caps.get(1).and_then(|m| numbers::parse_number(m.as_str()));
        let unit = caps.get(2).map(|m| normalize_spaces(m.as_str()));
        return (quantity, unit);
    }

    let count = before
        .split_whitespace()
        .rev()
        .find(|w| !matches!(*w, "my" | "of" | "the"))
        .and_then(numbers::parse_number);
    (count, None)
}

fn match_meal(u: &Utterance) -> Option<VoiceCommandResult> {
    let meal_type = u.find(vocab::MEAL_TYPES).map(|(_, t)| t);
    let food_named = vocab::FOOD_KEYWORDS.iter().any(|f| u.has(f));

    if !u.has_any(vocab::EAT_VERBS) && meal_type.is_none() && !food_named {
        return None;
    }

    let total_calories = CALORIES
        .captures(&u.text)
        .and_then(|caps| numbers::parse_number(caps.get(1)?.as_str()));

    let foods = parse_foods(&u.listed);
    if foods.is_empty() {
        return parse_error("missing food items");
    }

    Some(VoiceCommandResult::Meal(ParsedMeal {
        foods,
        meal_type,
        total_calories,
    }))
}

/// Split the food list out of a meal utterance
fn parse_foods(text: &str) -> Vec<ParsedFood> {
    let padded = format!(" {} ", text);

    // Everything after the first consumption verb, or the whole text
    let start = vocab::CONSUME_VERBS
        .iter()
        .filter_map(|verb| {
            let needle = format!(" {} ", verb);
            padded.find(&needle).map(|pos| (pos, pos + needle.len()))
        })
        .min_by_key(|(pos, end)| (*pos, usize::MAX - end))
        .map_or(0, |(_, end)| end);
    let body = padded.get(start..).unwrap_or("");

    let body = CALORIE_PHRASE.replace_all(body, " ");
    let body = MEAL_TYPE_PHRASE.replace_all(&body, " ");

    FOOD_SEPARATOR
        .split(&body)
        .filter_map(parse_food_item)
        .collect()
}

fn parse_food_item(chunk: &str) -> Option<ParsedFood> {
    let chunk = trim_fillers(chunk);
    if chunk.is_empty() {
        return None;
    }

    let caps = FOOD_ITEM.captures(&chunk)?;
    let quantity = caps.get(1).and_then(|m| numbers::parse_number(m.as_str()));
    let unit = caps.get(2).map(|m| m.as_str().to_string());
    let name = trim_fillers(caps.get(3).map_or("", |m| m.as_str()));

    if name.is_empty() || name.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    Some(ParsedFood {
        name,
        quantity,
        unit,
    })
}

/// Drop filler words from both ends of a chunk
fn trim_fillers(chunk: &str) -> String {
    let mut words: Vec<&str> = chunk.split_whitespace().collect();

    loop {
        let before = words.len();
        for filler in vocab::FOOD_FILLERS {
            let filler_words: Vec<&str> = filler.split(' ').collect();
            if words.starts_with(&filler_words) {
                words.drain(..filler_words.len());
            }
            if words.len() >= filler_words.len() && words.ends_with(&filler_words) {
                words.truncate(words.len() - filler_words.len());
            }
        }
        if words.len() == before {
            break;
        }
    }

    words.join(" ")
}

// ============================================================================
// Shared Extraction
// ============================================================================

/// Sum of every duration phrase, in minutes ("1 hour 30 minutes" is 90)
fn duration_minutes(text: &str) -> Option<f64> {
    let total: f64 = DURATION
        .captures_iter(text)
        .filter_map(|caps| {
            let value = numbers::parse_number(caps.get(1)?.as_str())?;
            let factor = lookup(vocab::DURATION_UNITS_MIN, caps.get(2)?.as_str())?;
            Some(value * factor)
        })
        .sum();

    (total > 0.0 && total.is_finite()).then(|| numbers::round_to(total, 2))
}

fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Recording
// ============================================================================

impl VoiceCommandResult {
    /// Category of a successful parse
    pub fn intent(&self) -> Option<IntentKind> {
        match self {
            VoiceCommandResult::Meal(_) => Some(IntentKind::Meal),
            VoiceCommandResult::Water(_) => Some(IntentKind::Water),
            VoiceCommandResult::Workout(_) => Some(IntentKind::Workout),
            VoiceCommandResult::Weight(_) => Some(IntentKind::Weight),
            VoiceCommandResult::Sleep(_) => Some(IntentKind::Sleep),
            VoiceCommandResult::Mood(_) => Some(IntentKind::Mood),
            VoiceCommandResult::Supplement(_) => Some(IntentKind::Supplement),
            VoiceCommandResult::Meditation(_) => Some(IntentKind::Meditation),
            VoiceCommandResult::Habit(_) => Some(IntentKind::Habit),
            VoiceCommandResult::Journal(_) => Some(IntentKind::Journal),
            VoiceCommandResult::Unknown | VoiceCommandResult::ParseError { .. } => None,
        }
    }

    /// Convert a successful parse into a storable log entry
    ///
    /// Sleep quality defaults to 3 when it was not spoken.
    pub fn into_log_entry(self) -> Option<LogEntry> {
        let entry = match self {
            VoiceCommandResult::Meal(meal) => LogEntry::Meal {
                food_name: meal
                    .foods
                    .iter()
                    .map(describe_food)
                    .collect::<Vec<_>>()
                    .join(", "),
                meal_type: meal.meal_type,
                calories: meal.total_calories,
                protein: 0.0,
                carbs: 0.0,
                fat: 0.0,
            },
            VoiceCommandResult::Water(water) => LogEntry::Water {
                amount_ml: water.amount_ml,
            },
            VoiceCommandResult::Workout(w) => LogEntry::Workout {
                workout_type: w.workout_type,
                duration_min: w.duration_min,
                distance: w.distance,
                distance_unit: w.distance_unit,
                calories_burned: w.calories_burned,
            },
            VoiceCommandResult::Weight(w) => LogEntry::Weight {
                weight: w.weight,
                unit: w.unit,
            },
            VoiceCommandResult::Sleep(s) => LogEntry::Sleep {
                hours: s.hours,
                quality: s.quality.unwrap_or(3),
            },
            VoiceCommandResult::Mood(m) => LogEntry::Mood {
                level: m.level,
                energy: None,
                emotions: m.emotions,
            },
            VoiceCommandResult::Supplement(s) => LogEntry::Supplement {
                name: s.name,
                quantity: s.quantity,
                unit: s.unit,
            },
            VoiceCommandResult::Meditation(m) => LogEntry::Meditation {
                duration_min: m.duration_min,
                meditation_type: m.meditation_type,
            },
            VoiceCommandResult::Habit(h) => LogEntry::Habit {
                name: h.name,
                notes: h.notes,
            },
            VoiceCommandResult::Journal(j) => LogEntry::Journal {
                content: j.content,
                mood: j.mood,
            },
            VoiceCommandResult::Unknown | VoiceCommandResult::ParseError { .. } => return None,
        };
        Some(entry)
    }

    /// One-line confirmation text
    pub fn summary(&self) -> String {
        match self {
            VoiceCommandResult::Meal(meal) => {
                let foods = meal
                    .foods
                    .iter()
                    .map(describe_food)
                    .collect::<Vec<_>>()
                    .join(", ");
                let mut text = match meal.meal_type {
                    Some(t) => format!("Meal ({}): {}", t, foods),
                    None => format!("Meal: {}", foods),
                };
                if let Some(cal) = meal.total_calories {
                    text.push_str(&format!(" - {} kcal", cal));
                }
                text
            }
            VoiceCommandResult::Water(w) => format!("Water: {} ml", w.amount_ml),
            VoiceCommandResult::Workout(w) => {
                let mut text = format!("Workout: {}", w.workout_type);
                if let Some(d) = w.duration_min {
                    text.push_str(&format!(", {} min", d));
                }
                if let (Some(d), Some(u)) = (w.distance, w.distance_unit) {
                    text.push_str(&format!(", {} {}", d, u));
                }
                if let Some(c) = w.calories_burned {
                    text.push_str(&format!(", {} kcal", c));
                }
                text
            }
            VoiceCommandResult::Weight(w) => format!("Weight: {} {}", w.weight, w.unit),
            VoiceCommandResult::Sleep(s) => match s.quality {
                Some(q) => format!("Sleep: {} hours (quality {}/5)", s.hours, q),
                None => format!("Sleep: {} hours", s.hours),
            },
            VoiceCommandResult::Mood(m) if m.emotions.is_empty() => {
                format!("Mood: {}/5", m.level)
            }
            VoiceCommandResult::Mood(m) => {
                format!("Mood: {}/5 ({})", m.level, m.emotions.join(", "))
            }
            VoiceCommandResult::Supplement(s) => match (s.quantity, &s.unit) {
                (Some(q), Some(u)) => format!("Supplement: {} {} {}", s.name, q, u),
                (Some(q), None) => format!("Supplement: {} x{}", s.name, q),
                _ => format!("Supplement: {}", s.name),
            },
            VoiceCommandResult::Meditation(m) => match m.meditation_type {
                Some(t) => format!("Meditation: {} min ({})", m.duration_min, t),
                None => format!("Meditation: {} min", m.duration_min),
            },
            VoiceCommandResult::Habit(h) => format!("Habit complete: {}", h.name),
            VoiceCommandResult::Journal(j) => format!("Journal: {}", j.content),
            VoiceCommandResult::Unknown => "Sorry, I didn't catch that. Please try again.".into(),
            VoiceCommandResult::ParseError { message } => {
                format!("Couldn't log that: {}. Please try again.", message)
            }
        }
    }
}

fn describe_food(food: &ParsedFood) -> String {
    match (food.quantity, &food.unit) {
        (Some(q), Some(u)) => format!("{} {} {}", q, u, food.name),
        (Some(q), None) => format!("{} {}", q, food.name),
        _ => food.name.clone(),
    }
}
