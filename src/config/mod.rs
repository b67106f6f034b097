pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::PlaygroundSettings;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "design-playgrounds")]
#[command(about = "Runnable playgrounds for classic design patterns")]
pub struct CliConfig {
    /// Playground to run (builder, factory, abstract-factory, prototype, solid or all)
    #[arg(default_value = "all")]
    pub playground: String,

    #[arg(long, help = "List the available playgrounds and exit")]
    pub list: bool,

    #[arg(long, help = "Print the playground list as JSON")]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Drink index for the abstract factory (skips the interactive prompt)
    #[arg(long, allow_negative_numbers = true)]
    pub drink: Option<i64>,

    /// Amount in ml poured by the abstract factory
    #[arg(long)]
    pub amount: Option<u32>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, settings: &mut PlaygroundSettings) {
        if let Some(drink) = self.drink {
            tracing::debug!("Drink selection overridden to: {}", drink);
            settings.drink_selection = Some(drink);
        }
        if let Some(amount) = self.amount {
            tracing::debug!("Drink amount overridden to: {}ml", amount);
            settings.drink_amount_ml = amount;
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_all_playgrounds() {
        let config = CliConfig::parse_from(["design-playgrounds"]);
        assert_eq!(config.playground, "all");
        assert!(!config.list);
        assert!(config.drink.is_none());
    }

    #[test]
    fn test_overrides_apply_to_settings() {
        let config = CliConfig::parse_from([
            "design-playgrounds",
            "abstract-factory",
            "--drink",
            "-1",
            "--amount",
            "330",
        ]);
        let mut settings = PlaygroundSettings::default();
        config.apply_overrides(&mut settings);

        assert_eq!(config.playground, "abstract-factory");
        assert_eq!(settings.drink_selection, Some(-1));
        assert_eq!(settings.drink_amount_ml, 330);
    }
}
