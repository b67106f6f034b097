use crate::domain::model::{PlaygroundContext, PlaygroundSettings};
use crate::domain::ports::Playground;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// 產生示範區塊的標題橫幅
pub fn header(title: &str, width: usize) -> String {
    let rule = "-".repeat(width);
    format!("\n{rule}\n{title:^width$}\n{rule}\n")
}

pub struct PlaygroundEngine {
    settings: PlaygroundSettings,
}

impl PlaygroundEngine {
    pub fn new(settings: PlaygroundSettings) -> Self {
        Self { settings }
    }

    pub fn run<P: Playground + ?Sized>(
        &self,
        playground: &P,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<()> {
        tracing::info!("▶️ Running playground: {}", playground.name());

        if self.settings.show_banner {
            writeln!(out, "{}", header(playground.description(), self.settings.header_width))?;
        }

        let mut ctx = PlaygroundContext::new(&self.settings, input);
        playground.run(&mut ctx, out)?;
        out.flush()?;

        tracing::info!("✅ Playground finished: {}", playground.name());
        Ok(())
    }

    /// Runs every playground in order, stopping at the first failure.
    pub fn run_all(
        &self,
        playgrounds: &[Box<dyn Playground>],
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<usize> {
        for playground in playgrounds {
            self.run(playground.as_ref(), input, out)?;
        }
        tracing::debug!("Ran {} playgrounds", playgrounds.len());
        Ok(playgrounds.len())
    }
}
