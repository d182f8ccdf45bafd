//! Formatting utilities for terminal output

use crate::core::{Channel, Feedback, Mark, Syllable, Tone};
use crate::game::{GuessRecord, Hint};
use colored::{ColoredString, Colorize};

/// Placeholder for a hidden hint value
const HIDDEN: &str = "?";

/// Glyph-channel emoji row, e.g. "🟩🟨⬜🟩"
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.channel(Channel::Glyph).to_emoji()
}

/// Color text by mark: teal for exact, orange for present, dim for absent
#[must_use]
pub fn paint(text: &str, mark: Mark) -> ColoredString {
    match mark {
        Mark::Exact => text.truecolor(29, 156, 156).bold(),
        Mark::Present => text.truecolor(222, 126, 0).bold(),
        Mark::Absent => text.bright_black(),
    }
}

/// One guessed slot: the character followed by its colored pinyin parts
#[must_use]
pub fn render_slot(ch: char, syllable: &Syllable, marks: [Mark; 4]) -> String {
    let [glyph, initial, rime, tone] = marks;
    format!(
        "{} {}{}{}",
        paint(&ch.to_string(), glyph),
        paint(syllable.initial(), initial),
        paint(syllable.rime(), rime),
        paint(&tone_label(syllable.tone()), tone),
    )
}

/// A full guess row
#[must_use]
pub fn render_guess(record: &GuessRecord) -> String {
    (0..4)
        .map(|slot| {
            render_slot(
                record.idiom.char_at(slot),
                record.idiom.syllable_at(slot),
                record.feedback.slot(slot),
            )
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// A hint row; hidden values print as `?`, the newly revealed one is exact-colored
#[must_use]
pub fn render_hint(hint: &Hint) -> String {
    hint.slots
        .iter()
        .enumerate()
        .map(|(slot, s)| {
            let mark = |channel: Channel| {
                if hint.revealed == Some((slot, channel)) {
                    Mark::Exact
                } else {
                    Mark::Present
                }
            };
            let part = |value: Option<String>, channel: Channel| match value {
                Some(v) => paint(&v, mark(channel)).to_string(),
                None => HIDDEN.bright_black().to_string(),
            };
            format!(
                "{} {}{}{}",
                part(s.glyph.map(String::from), Channel::Glyph),
                part(s.initial.clone(), Channel::Initial),
                part(s.rime.clone(), Channel::Final),
                part(s.tone.map(tone_label), Channel::Tone),
            )
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// Tone digit, with neutral shown as `0`
#[must_use]
pub fn tone_label(tone: Tone) -> String {
    match tone {
        Tone::Neutral => "0".to_string(),
        other => other.digit().to_string(),
    }
}

/// Categories joined with `、`, or `全部` when unrestricted
#[must_use]
pub fn category_label(categories: &[String]) -> String {
    if categories.is_empty() {
        "全部".to_string()
    } else {
        categories.join("、")
    }
}
