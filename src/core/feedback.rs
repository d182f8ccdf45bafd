//! Four-channel feedback for one guess
//!
//! Every slot of a guess is compared on four independent channels: the
//! character itself, its initial, its final and its tone. Each channel is
//! scored on its own with [`Pattern::calculate`].

use super::{IDIOM_LEN, Idiom, Mark, Pattern, Tone};
use std::fmt;

/// A dimension along which a slot is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Glyph,
    Initial,
    Final,
    Tone,
}

impl Channel {
    /// All channels in grid order
    pub const ALL: [Self; 4] = [Self::Glyph, Self::Initial, Self::Final, Self::Tone];

    const fn index(self) -> usize {
        match self {
            Self::Glyph => 0,
            Self::Initial => 1,
            Self::Final => 2,
            Self::Tone => 3,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Glyph => "汉字",
            Self::Initial => "声母",
            Self::Final => "韵母",
            Self::Tone => "声调",
        };
        f.write_str(name)
    }
}

/// Slot × channel grid of marks for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    patterns: [Pattern; 4],
}

impl Feedback {
    /// Score `guess` against `answer` on every channel
    ///
    /// # Examples
    /// ```
    /// use handle_wordle::core::{Channel, Feedback, Idiom, Mark};
    ///
    /// let answer = Idiom::from_pinyin("人山人海", "ren2 shan1 ren2 hai3").unwrap();
    /// let guess = Idiom::from_pinyin("山清水秀", "shan1 qing1 shui3 xiu4").unwrap();
    /// let feedback = Feedback::evaluate(&answer, &guess);
    ///
    /// assert_eq!(feedback.mark(0, Channel::Glyph), Mark::Present);
    /// // 清 (qing1) takes the only matching first tone; 山 (shan1) gets none
    /// assert_eq!(feedback.mark(1, Channel::Tone), Mark::Exact);
    /// assert_eq!(feedback.mark(0, Channel::Tone), Mark::Absent);
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn evaluate(answer: &Idiom, guess: &Idiom) -> Self {
        let initials = |idiom: &Idiom| -> [String; IDIOM_LEN] {
            std::array::from_fn(|i| idiom.syllable_at(i).initial().to_string())
        };
        let finals = |idiom: &Idiom| -> [String; IDIOM_LEN] {
            std::array::from_fn(|i| idiom.syllable_at(i).rime().to_string())
        };
        let tones = |idiom: &Idiom| -> [Tone; IDIOM_LEN] {
            std::array::from_fn(|i| idiom.syllable_at(i).tone())
        };

        Self {
            patterns: [
                Pattern::calculate(guess.chars(), answer.chars()),
                Pattern::calculate(&initials(guess), &initials(answer)),
                Pattern::calculate(&finals(guess), &finals(answer)),
                Pattern::calculate(&tones(guess), &tones(answer)),
            ],
        }
    }

    /// Build feedback from per-channel patterns
    #[must_use]
    pub const fn from_patterns(
        glyph: Pattern,
        initial: Pattern,
        rime: Pattern,
        tone: Pattern,
    ) -> Self {
        Self {
            patterns: [glyph, initial, rime, tone],
        }
    }

    /// Pattern of one channel across all slots
    #[inline]
    #[must_use]
    pub const fn channel(&self, channel: Channel) -> Pattern {
        self.patterns[channel.index()]
    }

    #[inline]
    #[must_use]
    pub fn mark(&self, slot: usize, channel: Channel) -> Mark {
        self.channel(channel).mark(slot)
    }

    /// Marks of one slot in [`Channel::ALL`] order
    #[must_use]
    pub fn slot(&self, slot: usize) -> [Mark; 4] {
        Channel::ALL.map(|channel| self.mark(slot, channel))
    }

    /// True iff every slot's glyph is exact
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.channel(Channel::Glyph).is_perfect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Syllable;

    fn idiom(text: &str, pinyin: &str) -> Idiom {
        Idiom::from_pinyin(text, pinyin).unwrap()
    }

    #[test]
    fn evaluate_identical_is_win() {
        let answer = idiom("一心一意", "yi1 xin1 yi1 yi4");
        let feedback = Feedback::evaluate(&answer, &answer);
        assert!(feedback.is_win());
        for channel in Channel::ALL {
            assert!(feedback.channel(channel).is_perfect());
        }
    }

    #[test]
    fn evaluate_channels_scored_independently() {
        // 三心二意 vs 一心一意
        let answer = idiom("一心一意", "yi1 xin1 yi1 yi4");
        let guess = idiom("三心二意", "san1 xin1 er4 yi4");
        let feedback = Feedback::evaluate(&answer, &guess);

        assert_eq!(
            feedback.channel(Channel::Glyph).marks(),
            [Mark::Absent, Mark::Exact, Mark::Absent, Mark::Exact]
        );
        // initials: s x "" y  vs  y x y y
        assert_eq!(
            feedback.channel(Channel::Initial).marks(),
            [Mark::Absent, Mark::Exact, Mark::Absent, Mark::Exact]
        );
        // finals: an in er i  vs  i in i i
        assert_eq!(
            feedback.channel(Channel::Final).marks(),
            [Mark::Absent, Mark::Exact, Mark::Absent, Mark::Exact]
        );
        // tones: 1 1 4 4  vs  1 1 1 4
        assert_eq!(
            feedback.channel(Channel::Tone).marks(),
            [Mark::Exact, Mark::Exact, Mark::Absent, Mark::Exact]
        );
        assert!(!feedback.is_win());
    }

    #[test]
    fn evaluate_same_sound_different_glyph() {
        // Homophones: glyph absent, every phonetic channel exact
        let answer = Idiom::new(
            "甲乙丙丁",
            vec![Syllable::parse("ma1").unwrap(); 4],
        )
        .unwrap();
        let guess = Idiom::new(
            "子丑寅卯",
            vec![Syllable::parse("ma1").unwrap(); 4],
        )
        .unwrap();
        let feedback = Feedback::evaluate(&answer, &guess);

        assert_eq!(feedback.channel(Channel::Glyph).value(), 0);
        assert!(feedback.channel(Channel::Initial).is_perfect());
        assert!(feedback.channel(Channel::Final).is_perfect());
        assert!(feedback.channel(Channel::Tone).is_perfect());
        assert!(!feedback.is_win());
    }

    #[test]
    fn glyph_channel_ignores_pronunciation() {
        // Same characters with different readings still win on glyphs
        let answer = idiom("ABAC", "ba1 ba2 ba3 ba4");
        let guess_a = idiom("BAAA", "ba1 ba1 ba1 ba1");
        let guess_b = idiom("BAAA", "zhuang4 er2 lü3 de");

        let a = Feedback::evaluate(&answer, &guess_a);
        let b = Feedback::evaluate(&answer, &guess_b);
        assert_eq!(a.channel(Channel::Glyph), b.channel(Channel::Glyph));
        assert_eq!(
            a.channel(Channel::Glyph).marks(),
            [Mark::Present, Mark::Present, Mark::Exact, Mark::Absent]
        );
        assert_ne!(a.channel(Channel::Initial), b.channel(Channel::Initial));
    }

    #[test]
    fn slot_view_matches_channel_view() {
        let answer = idiom("人山人海", "ren2 shan1 ren2 hai3");
        let guess = idiom("山清水秀", "shan1 qing1 shui3 xiu4");
        let feedback = Feedback::evaluate(&answer, &guess);

        for slot in 0..IDIOM_LEN {
            let marks = feedback.slot(slot);
            for (i, channel) in Channel::ALL.into_iter().enumerate() {
                assert_eq!(marks[i], feedback.mark(slot, channel));
            }
        }
    }

    #[test]
    fn from_patterns_keeps_channel_order() {
        let feedback = Feedback::from_patterns(
            Pattern::PERFECT,
            Pattern::from_marks([Mark::Absent; 4]),
            Pattern::from_marks([Mark::Present, Mark::Absent, Mark::Absent, Mark::Absent]),
            Pattern::from_marks([Mark::Exact, Mark::Absent, Mark::Absent, Mark::Absent]),
        );
        assert!(feedback.is_win());
        assert_eq!(feedback.channel(Channel::Final).value(), 1);
        assert_eq!(feedback.channel(Channel::Tone).value(), 2);
    }
}
