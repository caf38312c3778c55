/// Hard ceiling on the task input, in characters.
pub const MAX_INPUT_CHARS: usize = 2000;

/// Remaining capacity below which the counter is flagged.
pub const NEAR_LIMIT_THRESHOLD: usize = 100;

/// A single user edit applied to the task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Paste(String),
    Backspace,
    Clear,
}

/// Raw task text as typed or pasted by the user.
///
/// The value never exceeds [`MAX_INPUT_CHARS`]; edits that would push it over
/// the limit are dropped and the previous value is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskInput {
    text: String,
    chars: usize,
}

impl TaskInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    /// Replace the whole value. Returns `false` if the edit was rejected or
    /// nothing changed.
    pub fn replace(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        let chars = text.chars().count();
        if chars > MAX_INPUT_CHARS || text == self.text {
            return false;
        }
        self.text = text;
        self.chars = chars;
        true
    }

    pub fn apply(&mut self, edit: InputEdit) -> bool {
        match edit {
            InputEdit::Insert(ch) => {
                if self.chars + 1 > MAX_INPUT_CHARS {
                    return false;
                }
                self.text.push(ch);
                self.chars += 1;
                true
            }
            InputEdit::Paste(pasted) => {
                let added = pasted.chars().count();
                if added == 0 || self.chars + added > MAX_INPUT_CHARS {
                    return false;
                }
                self.text.push_str(&pasted);
                self.chars += added;
                true
            }
            InputEdit::Backspace => {
                if self.text.pop().is_some() {
                    self.chars -= 1;
                    true
                } else {
                    false
                }
            }
            InputEdit::Clear => {
                if self.text.is_empty() {
                    return false;
                }
                self.text.clear();
                self.chars = 0;
                true
            }
        }
    }

    /// The value that is sent to the analyzer.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn has_tasks(&self) -> bool {
        !self.trimmed().is_empty()
    }

    pub fn remaining(&self) -> usize {
        MAX_INPUT_CHARS.saturating_sub(self.chars)
    }

    pub fn is_near_limit(&self) -> bool {
        self.remaining() < NEAR_LIMIT_THRESHOLD
    }

    /// Number of non-blank lines. Informational only.
    pub fn task_count(&self) -> usize {
        self.text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count()
    }
}
