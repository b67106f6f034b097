//! Single responsibility: the journal only manages entries, persisting it
//! is somebody else's job.

use crate::domain::ports::Storage;
use crate::utils::error::{PlaygroundError, Result};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number given to the new entry.
    pub fn add_entry(&mut self, text: &str) -> usize {
        self.count += 1;
        self.entries.push(format!("{}: {}", self.count, text));
        self.count
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<String> {
        if index >= self.entries.len() {
            return Err(PlaygroundError::OutOfRange {
                index: index as i64,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}

pub struct Persistence<S: Storage> {
    storage: S,
}

impl<S: Storage> Persistence<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// One entry per line; line breaks inside an entry are stored escaped.
    pub fn save(&self, journal: &Journal, filename: &str) -> Result<String> {
        let text = journal
            .entries
            .iter()
            .map(|entry| escape_entry(entry))
            .collect::<Vec<_>>()
            .join("\n");
        let location = self.storage.write_file(filename, text.as_bytes())?;
        tracing::debug!("Saved {} journal entries to {}", journal.len(), location);
        Ok(location)
    }

    /// 讀回已儲存的日誌，編號沿用檔案中的最大值
    pub fn load(&self, filename: &str) -> Result<Journal> {
        let data = self.storage.read_file(filename)?;
        let text = String::from_utf8(data).map_err(|e| PlaygroundError::ParseFailure {
            input: filename.to_string(),
            reason: e.to_string(),
        })?;

        let mut journal = Journal::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let (number, _) = line.split_once(": ").ok_or_else(|| PlaygroundError::ParseFailure {
                input: line.to_string(),
                reason: "expected '<number>: <text>'".to_string(),
            })?;
            let number = number
                .parse::<usize>()
                .map_err(|e| PlaygroundError::ParseFailure {
                    input: line.to_string(),
                    reason: e.to_string(),
                })?;
            journal.count = journal.count.max(number);
            journal.entries.push(unescape_entry(line)?);
        }
        Ok(journal)
    }
}

fn escape_entry(entry: &str) -> String {
    let mut escaped = String::with_capacity(entry.len());
    for c in entry.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn unescape_entry(line: &str) -> Result<String> {
    let mut entry = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            entry.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => entry.push('\\'),
            Some('n') => entry.push('\n'),
            Some('r') => entry.push('\r'),
            other => {
                let escape = other.map(String::from).unwrap_or_default();
                return Err(PlaygroundError::ParseFailure {
                    input: line.to_string(),
                    reason: format!("unknown escape sequence '\\{}'", escape),
                });
            }
        }
    }
    Ok(entry)
}
