use serde::{Deserialize, Serialize};
use std::io::BufRead;

pub const DEFAULT_HEADER_WIDTH: usize = 93;
pub const DEFAULT_AMOUNT_ML: u32 = 250;
pub const DEFAULT_JOURNAL_PATH: &str = "./output";
pub const DEFAULT_JOURNAL_FILENAME: &str = "journal.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaygroundSettings {
    pub header_width: usize,
    pub show_banner: bool,
    pub drink_amount_ml: u32,
    pub drink_selection: Option<i64>,
    pub journal_path: String,
    pub journal_filename: String,
}

impl Default for PlaygroundSettings {
    fn default() -> Self {
        Self {
            header_width: DEFAULT_HEADER_WIDTH,
            show_banner: true,
            drink_amount_ml: DEFAULT_AMOUNT_ML,
            drink_selection: None,
            journal_path: DEFAULT_JOURNAL_PATH.to_string(),
            journal_filename: DEFAULT_JOURNAL_FILENAME.to_string(),
        }
    }
}

/// What a single run of a playground gets to see: settings plus the
/// reader used for interactive prompts.
pub struct PlaygroundContext<'a> {
    pub settings: &'a PlaygroundSettings,
    pub input: &'a mut dyn BufRead,
}

impl<'a> PlaygroundContext<'a> {
    pub fn new(settings: &'a PlaygroundSettings, input: &'a mut dyn BufRead) -> Self {
        Self { settings, input }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaygroundInfo {
    pub name: String,
    pub description: String,
}
