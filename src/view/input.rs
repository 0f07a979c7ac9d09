#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    pub fn from_name(name: &str) -> Key {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::Char(c);
        }
        match name {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    Letters,
    Digits,
}

impl Mask {
    pub fn accepts_key(&self, key: &Key) -> bool {
        match (self, key) {
            (_, Key::Char(c)) => self.accepts_char(*c),
            (Mask::Letters, _) => true,
            (Mask::Digits, Key::Backspace | Key::Delete | Key::ArrowLeft | Key::ArrowRight) => true,
            (Mask::Digits, Key::Other(_)) => false,
        }
    }

    pub fn accepts_char(&self, c: char) -> bool {
        match self {
            Mask::Letters => c.is_ascii_alphabetic(),
            Mask::Digits => c.is_ascii_digit(),
        }
    }

    pub fn filter(&self, raw: &str) -> String {
        raw.chars().filter(|c| self.accepts_char(*c)).collect()
    }
}

/// Single-line input. `cursor` counts characters, not bytes; every
/// character a mask admits is ASCII so the two agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    mask: Mask,
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new(mask: Mask) -> Self {
        Self {
            mask,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the whole value, dropping characters the mask rejects, and
    /// moves the cursor to the end.
    pub fn set(&mut self, raw: &str) {
        self.value = self.mask.filter(raw);
        self.cursor = self.value.len();
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.value.len());
    }

    /// Applies a keystroke. Returns `false` when the mask rejected it, in
    /// which case nothing changes.
    pub fn press(&mut self, key: &Key) -> bool {
        if !self.mask.accepts_key(key) {
            return false;
        }
        match key {
            Key::Char(c) => {
                self.value.insert(self.cursor, *c);
                self.cursor += 1;
            }
            Key::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                }
            }
            Key::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
            }
            Key::ArrowLeft => self.cursor = self.cursor.saturating_sub(1),
            Key::ArrowRight => self.cursor = (self.cursor + 1).min(self.value.len()),
            Key::Other(_) => {}
        }
        true
    }
}

/// Inserts a space before every group of three digits counted from the
/// right: `1234567` becomes `1 234 567`.
pub fn format_salary(digits: &str) -> String {
    let len = digits.chars().count();
    let mut formatted = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted
}

pub fn salary_cursor_to_raw(display: &str, display_cursor: usize) -> usize {
    display
        .chars()
        .take(display_cursor)
        .filter(char::is_ascii_digit)
        .count()
}

/// Inverse of [`salary_cursor_to_raw`]: the caret lands right after the
/// `raw_cursor`-th digit of the grouped text.
pub fn salary_cursor_to_display(digits: &str, raw_cursor: usize) -> usize {
    if raw_cursor == 0 {
        return 0;
    }
    let mut seen = 0;
    for (i, c) in format_salary(digits).chars().enumerate() {
        if c.is_ascii_digit() {
            seen += 1;
            if seen == raw_cursor {
                return i + 1;
            }
        }
    }
    format_salary(digits).chars().count()
}
