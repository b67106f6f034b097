use crate::domain::model::{PlaygroundContext, PlaygroundInfo};
use crate::utils::error::Result;
use std::io::Write;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Returns the location the data ended up at.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait Playground {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn run(&self, ctx: &mut PlaygroundContext<'_>, out: &mut dyn Write) -> Result<()>;

    fn info(&self) -> PlaygroundInfo {
        PlaygroundInfo {
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }
}
