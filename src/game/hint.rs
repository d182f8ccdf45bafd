//! Hint payloads
//!
//! A hint shows the answer's board with every value the player has already
//! seen: a value is seen once it appeared in the same channel of any guess,
//! or an earlier hint revealed it. Each hint also reveals one unseen value,
//! lowest slot first, channels in the order initial, final, tone, glyph.
//! Empty initials and finals are never spent on.

use super::GuessRecord;
use crate::core::{Channel, IDIOM_LEN, Idiom, Tone};

/// Reveal order inside one slot
const REVEAL_ORDER: [Channel; 4] = [Channel::Initial, Channel::Final, Channel::Tone, Channel::Glyph];

/// Visible parts of one answer slot; `None` is still hidden
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintSlot {
    pub glyph: Option<char>,
    pub initial: Option<String>,
    pub rime: Option<String>,
    pub tone: Option<Tone>,
}

/// What a successful hint shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub slots: [HintSlot; IDIOM_LEN],
    /// The value newly revealed by this hint, if anything was left hidden
    pub revealed: Option<(usize, Channel)>,
}

impl Hint {
    /// Build the hint for `answer` given the guesses so far and the values
    /// revealed by earlier hints
    pub(crate) fn build(answer: &Idiom, guesses: &[GuessRecord], earlier: &[(usize, Channel)]) -> Self {
        let known = |slot: usize, channel: Channel| {
            is_blank(answer, slot, channel)
                || earlier.contains(&(slot, channel))
                || seen_in_guesses(answer, guesses, slot, channel)
        };

        let revealed = (0..IDIOM_LEN)
            .flat_map(|slot| REVEAL_ORDER.map(|channel| (slot, channel)))
            .find(|&(slot, channel)| !known(slot, channel));

        let visible = |slot: usize, channel: Channel| {
            revealed == Some((slot, channel)) || known(slot, channel)
        };

        let slots = std::array::from_fn(|slot| {
            let syllable = answer.syllable_at(slot);
            HintSlot {
                glyph: visible(slot, Channel::Glyph).then(|| answer.char_at(slot)),
                initial: visible(slot, Channel::Initial).then(|| syllable.initial().to_string()),
                rime: visible(slot, Channel::Final).then(|| syllable.rime().to_string()),
                tone: visible(slot, Channel::Tone).then(|| syllable.tone()),
            }
        });

        Self { slots, revealed }
    }

    /// Number of hidden values left after this hint
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.slots
            .iter()
            .map(|s| {
                usize::from(s.glyph.is_none())
                    + usize::from(s.initial.is_none())
                    + usize::from(s.rime.is_none())
                    + usize::from(s.tone.is_none())
            })
            .sum()
    }
}

/// Empty initials (`er`, `an`) and finals have nothing to reveal
fn is_blank(answer: &Idiom, slot: usize, channel: Channel) -> bool {
    let syllable = answer.syllable_at(slot);
    match channel {
        Channel::Initial => syllable.initial().is_empty(),
        Channel::Final => syllable.rime().is_empty(),
        Channel::Glyph | Channel::Tone => false,
    }
}

fn seen_in_guesses(answer: &Idiom, guesses: &[GuessRecord], slot: usize, channel: Channel) -> bool {
    let target = answer.syllable_at(slot);
    guesses.iter().any(|record| {
        let guess = &record.idiom;
        match channel {
            Channel::Glyph => guess.has_char(answer.char_at(slot)),
            Channel::Initial => guess
                .syllables()
                .iter()
                .any(|s| s.initial() == target.initial()),
            Channel::Final => guess.syllables().iter().any(|s| s.rime() == target.rime()),
            Channel::Tone => guess.syllables().iter().any(|s| s.tone() == target.tone()),
        }
    })
}
