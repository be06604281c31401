/// Word characters are ASCII letters, digits and `_`.
pub struct Tokens {
    text: String,
    pos: usize,
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let rest = &self.text[self.pos..];
        let start = rest.find(is_word_char)?;
        let rest = &rest[start..];
        let len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        let token = rest[..len].to_string();
        self.pos += start + len;
        Some(token)
    }
}

pub fn tokenize(line: &str) -> Tokens {
    Tokens {
        text: line.to_lowercase(),
        pos: 0,
    }
}

pub fn tokenize_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines().flat_map(tokenize)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
