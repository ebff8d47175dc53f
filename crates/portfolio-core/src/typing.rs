//! Typing Animation
//!
//! Hero-section "typed text" effect: types a word out character by
//! character, pauses, deletes it, pauses, then moves to the next word in
//! the list, cycling forever. Each `tick` returns the text to display and
//! how long to wait before the next tick; the component layer sleeps for
//! that duration and calls again.

use std::time::Duration;

/// Delay after typing one character.
const TYPE_DELAY: Duration = Duration::from_millis(100);
/// Delay after deleting one character.
const DELETE_DELAY: Duration = Duration::from_millis(50);
/// Pause with the full word on screen before deleting starts.
const WORD_COMPLETE_PAUSE: Duration = Duration::from_millis(2000);
/// Pause on the empty string before the next word starts.
const NEXT_WORD_PAUSE: Duration = Duration::from_millis(500);

/// One frame of the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    /// Text to display right now.
    pub text: String,
    /// How long to wait before the next [`TypingAnimation::tick`].
    pub delay: Duration,
}

/// Cycling type/delete state machine over a fixed word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingAnimation {
    words: Vec<String>,
    word: usize,
    chars: usize,
    deleting: bool,
}

impl TypingAnimation {
    /// Words are cycled in order; an empty list degenerates to a blank,
    /// idle animation rather than panicking.
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            word: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advance one character (typed or deleted) and report the frame.
    pub fn tick(&mut self) -> TypingFrame {
        let Some(current) = self.words.get(self.word) else {
            return TypingFrame {
                text: String::new(),
                delay: WORD_COMPLETE_PAUSE,
            };
        };
        let word_len = current.chars().count();

        let delay;
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            delay = DELETE_DELAY;
        } else {
            self.chars = (self.chars + 1).min(word_len);
            delay = TYPE_DELAY;
        }

        let text: String = current.chars().take(self.chars).collect();

        if !self.deleting && self.chars == word_len {
            self.deleting = true;
            return TypingFrame {
                text,
                delay: WORD_COMPLETE_PAUSE,
            };
        }
        if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.word = (self.word + 1) % self.words.len();
            return TypingFrame {
                text,
                delay: NEXT_WORD_PAUSE,
            };
        }

        TypingFrame { text, delay }
    }
}
