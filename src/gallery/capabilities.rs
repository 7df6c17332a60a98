//! Outside capabilities the gallery drives: picking a picture and asking for text.
//!
//! Both return `Ok(None)` when the user cancels.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Something that hands back the bytes of a picture the user chose.
pub trait ImagePicker {
    fn pick(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Something that asks the user for a line of text.
pub trait TextPrompt {
    /// `title` describes the question, `current` is the value being replaced.
    fn prompt(&mut self, title: &str, current: &str) -> io::Result<Option<String>>;
}

impl<F> ImagePicker for F
where
    F: FnMut() -> io::Result<Option<Vec<u8>>>,
{
    fn pick(&mut self) -> io::Result<Option<Vec<u8>>> {
        self()
    }
}

impl<F> TextPrompt for F
where
    F: FnMut(&str, &str) -> io::Result<Option<String>>,
{
    fn prompt(&mut self, title: &str, current: &str) -> io::Result<Option<String>> {
        self(title, current)
    }
}

/// Picks a file from disk. No path means the user backed out.
#[derive(Debug, Clone)]
pub struct FilePicker {
    path: Option<PathBuf>,
}

impl FilePicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn cancelled() -> Self {
        Self { path: None }
    }
}

impl ImagePicker for FilePicker {
    fn pick(&mut self) -> io::Result<Option<Vec<u8>>> {
        match self.path.take() {
            Some(path) => std::fs::read(path).map(Some),
            None => Ok(None),
        }
    }
}

/// Prompts on a writer and reads one line back. End of input cancels.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TextPrompt for LinePrompt<R, W> {
    fn prompt(&mut self, title: &str, current: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} [{}]: ", title, current)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}
