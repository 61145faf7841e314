//! Injectable output sinks
//!
//! Anything that "prints" goes through [`OutputSink`] so tests can capture
//! the lines instead of reading stdout.

/// Receives one line of human-readable output at a time
pub trait OutputSink {
    fn report(&mut self, text: &str);
}

/// Writes every line to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn report(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Keeps every line in memory
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for BufferSink {
    fn report(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_keeps_order() {
        let mut sink = BufferSink::new();
        sink.report("first");
        sink.report("second");
        assert_eq!(sink.into_lines(), vec!["first".to_string(), "second".to_string()]);
    }
}
