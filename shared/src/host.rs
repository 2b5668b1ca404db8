//! Ambient capabilities the banner touches: the page title and the console.

pub trait TitleStore {
    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);
}

pub trait ConsoleSink {
    /// Writes `message` as a single log line styled with `css`.
    fn styled_log(&mut self, message: &str, css: &str);
}

/// Title held in memory, for hosts without a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTitle {
    title: String,
    writes: usize,
}

impl MemoryTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            writes: 0,
        }
    }

    /// Number of `set_title` calls seen so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TitleStore for MemoryTitle {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.writes += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub message: String,
    pub css: String,
}

/// Console that records every styled line instead of printing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    lines: Vec<ConsoleLine>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    pub fn count(&self) -> usize {
        self.lines.len()
    }
}

impl ConsoleSink for RecordingConsole {
    fn styled_log(&mut self, message: &str, css: &str) {
        self.lines.push(ConsoleLine {
            message: message.to_string(),
            css: css.to_string(),
        });
    }
}
