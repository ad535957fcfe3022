/// Single-line editable text with a byte cursor kept on char boundaries.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set<T: Into<String>>(&mut self, value: T) {
        self.text = value.into();
        self.cursor = self.text.len();
    }

    /// Replace the text only when it differs, so the cursor survives echoes.
    pub fn sync(&mut self, value: &str) {
        if self.text != value {
            self.set(value);
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        self.text.insert_str(self.cursor, encoded);
        self.cursor += encoded.len();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        match self.text[..self.cursor].char_indices().next_back() {
            Some((idx, _)) => {
                self.text.drain(idx..self.cursor);
                self.cursor = idx;
                true
            }
            None => false,
        }
    }

    pub fn delete_char(&mut self) -> bool {
        match self.text[self.cursor..].chars().next() {
            Some(ch) => {
                let end = self.cursor + ch.len_utf8();
                self.text.drain(self.cursor..end);
                true
            }
            None => false,
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Cursor position counted in chars, for placing the terminal cursor.
    pub fn cursor_col(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_places_cursor_at_end() {
        let mut buffer = TextBuffer::new();
        buffer.set("hello");

        assert_eq!(buffer.as_str(), "hello");
        assert_eq!(buffer.cursor_col(), 5);
    }

    #[test]
    fn editing_respects_multibyte_chars() {
        let mut buffer = TextBuffer::new();
        buffer.set("Conclusão");
        buffer.move_left();
        buffer.move_left();
        assert!(buffer.backspace());
        assert_eq!(buffer.as_str(), "Concluão");
        assert_eq!(buffer.cursor_col(), 6);

        buffer.move_home();
        assert!(!buffer.backspace());
        assert!(buffer.delete_char());
        assert_eq!(buffer.as_str(), "oncluão");
    }

    #[test]
    fn sync_keeps_cursor_when_text_matches() {
        let mut buffer = TextBuffer::new();
        buffer.set("Ana");
        buffer.move_home();
        buffer.sync("Ana");
        assert_eq!(buffer.cursor_col(), 0);

        buffer.sync("");
        assert_eq!(buffer.as_str(), "");
        assert_eq!(buffer.cursor_col(), 0);
    }

    #[test]
    fn control_chars_are_ignored() {
        let mut buffer = TextBuffer::new();
        buffer.insert_char('a');
        buffer.insert_char('\n');
        buffer.insert_char('\t');
        assert_eq!(buffer.as_str(), "a");
    }
}
