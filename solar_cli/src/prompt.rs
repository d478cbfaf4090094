//! Line-oriented prompts.
//!
//! Generic over the reader/writer so the screens can be driven from tests.
//! Every prompt returns `None` once input is exhausted or output can no
//! longer be written, which the caller treats as "quit".

use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    pub out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Prompter { input, out }
    }

    /// Print a block of text followed by a newline.
    pub fn say(&mut self, text: &str) -> Option<()> {
        writeln!(self.out, "{}", text).ok()
    }

    /// Print a prompt and read one trimmed line.
    pub fn line(&mut self, prompt: &str) -> Option<String> {
        write!(self.out, "{}", prompt).ok()?;
        self.out.flush().ok()?;

        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf.trim().to_string()),
        }
    }

    /// Number with a default used on blank input. Re-prompts on garbage.
    pub fn f64_or(&mut self, prompt: &str, default: f64) -> Option<f64> {
        loop {
            let line = self.line(prompt)?;
            if line.is_empty() {
                return Some(default);
            }
            match line.parse() {
                Ok(v) => return Some(v),
                Err(_) => self.complain(&line)?,
            }
        }
    }

    /// Required number. Re-prompts on blank or garbage.
    pub fn f64(&mut self, prompt: &str) -> Option<f64> {
        loop {
            let line = self.line(prompt)?;
            match line.parse() {
                Ok(v) => return Some(v),
                Err(_) => self.complain(&line)?,
            }
        }
    }

    /// Optional number: blank gives `Some(None)`.
    pub fn optional_f64(&mut self, prompt: &str) -> Option<Option<f64>> {
        loop {
            let line = self.line(prompt)?;
            if line.is_empty() {
                return Some(None);
            }
            match line.parse() {
                Ok(v) => return Some(Some(v)),
                Err(_) => self.complain(&line)?,
            }
        }
    }

    /// Whole number with a default used on blank input.
    pub fn u32_or(&mut self, prompt: &str, default: u32) -> Option<u32> {
        loop {
            let line = self.line(prompt)?;
            if line.is_empty() {
                return Some(default);
            }
            match line.parse() {
                Ok(v) => return Some(v),
                Err(_) => self.complain(&line)?,
            }
        }
    }

    /// Required whole number.
    pub fn u32(&mut self, prompt: &str) -> Option<u32> {
        loop {
            let line = self.line(prompt)?;
            match line.parse() {
                Ok(v) => return Some(v),
                Err(_) => self.complain(&line)?,
            }
        }
    }

    fn complain(&mut self, line: &str) -> Option<()> {
        self.say(&format!("  '{}' is not a valid number, try again.", line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_default_on_blank() {
        let mut p = prompter("\n");
        assert_eq!(p.f64_or("Gap: ", 20.0), Some(20.0));
    }

    #[test]
    fn test_reprompt_on_garbage() {
        let mut p = prompter("abc\n12\n");
        assert_eq!(p.u32("Panels: "), Some(12));
        let out = String::from_utf8(p.out).unwrap();
        assert!(out.contains("'abc' is not a valid number"));
    }

    #[test]
    fn test_optional_blank_is_none() {
        let mut p = prompter("\n250\n");
        assert_eq!(p.optional_f64("Spacing: "), Some(None));
        assert_eq!(p.optional_f64("Spacing: "), Some(Some(250.0)));
    }

    #[test]
    fn test_eof_is_none() {
        let mut p = prompter("");
        assert_eq!(p.f64("Width: "), None);
    }
}
