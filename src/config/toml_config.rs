use crate::domain::model::{
    PlaygroundSettings, DEFAULT_AMOUNT_ML, DEFAULT_HEADER_WIDTH, DEFAULT_JOURNAL_FILENAME,
    DEFAULT_JOURNAL_PATH,
};
use crate::utils::error::{PlaygroundError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub abstract_factory: AbstractFactoryConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub header_width: Option<usize>,
    pub show_banner: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbstractFactoryConfig {
    pub amount_ml: Option<u32>,
    /// 預設選擇；未設定時從 stdin 讀取
    pub selection: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalConfig {
    pub output_path: Option<String>,
    pub filename: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlaygroundError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${JOURNAL_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlaygroundError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn header_width(&self) -> usize {
        self.output.header_width.unwrap_or(DEFAULT_HEADER_WIDTH)
    }

    pub fn show_banner(&self) -> bool {
        self.output.show_banner.unwrap_or(true)
    }

    pub fn amount_ml(&self) -> u32 {
        self.abstract_factory.amount_ml.unwrap_or(DEFAULT_AMOUNT_ML)
    }

    pub fn journal_path(&self) -> &str {
        self.journal
            .output_path
            .as_deref()
            .unwrap_or(DEFAULT_JOURNAL_PATH)
    }

    pub fn journal_filename(&self) -> &str {
        self.journal
            .filename
            .as_deref()
            .unwrap_or(DEFAULT_JOURNAL_FILENAME)
    }

    /// 轉換成執行時使用的設定
    pub fn settings(&self) -> PlaygroundSettings {
        PlaygroundSettings {
            header_width: self.header_width(),
            show_banner: self.show_banner(),
            drink_amount_ml: self.amount_ml(),
            drink_selection: self.abstract_factory.selection,
            journal_path: self.journal_path().to_string(),
            journal_filename: self.journal_filename().to_string(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("output.header_width", self.header_width(), 20, 200)?;
        validation::validate_positive_number(
            "abstract_factory.amount_ml",
            self.amount_ml() as usize,
            1,
        )?;
        validation::validate_path("journal.output_path", self.journal_path())?;
        validation::validate_file_name("journal.filename", self.journal_filename())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.header_width(), DEFAULT_HEADER_WIDTH);
        assert!(config.show_banner());
        assert_eq!(config.amount_ml(), 250);
        assert_eq!(config.journal_path(), "./output");
        assert_eq!(config.journal_filename(), "journal.txt");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[output]
header_width = 60
show_banner = false

[abstract_factory]
amount_ml = 300
selection = 1

[journal]
output_path = "./journals"
filename = "diary.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.settings();

        assert_eq!(settings.header_width, 60);
        assert!(!settings.show_banner);
        assert_eq!(settings.drink_amount_ml, 300);
        assert_eq!(settings.drink_selection, Some(1));
        assert_eq!(settings.journal_path, "./journals");
        assert_eq!(settings.journal_filename, "diary.txt");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PLAYGROUND_TEST_JOURNAL_DIR", "/tmp/journals");

        let toml_content = r#"
[journal]
output_path = "${PLAYGROUND_TEST_JOURNAL_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.journal_path(), "/tmp/journals");

        std::env::remove_var("PLAYGROUND_TEST_JOURNAL_DIR");
    }

    #[test]
    fn test_unknown_env_var_is_left_untouched() {
        let toml_content = r#"
[journal]
output_path = "${PLAYGROUND_TEST_NOT_SET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.journal_path(), "${PLAYGROUND_TEST_NOT_SET}");
    }

    #[test]
    fn test_config_validation() {
        let zero_amount = TomlConfig::from_toml_str("[abstract_factory]\namount_ml = 0\n").unwrap();
        assert!(zero_amount.validate().is_err());

        let narrow = TomlConfig::from_toml_str("[output]\nheader_width = 5\n").unwrap();
        assert!(narrow.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[output\nheader_width = 5");
        assert!(matches!(result, Err(PlaygroundError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[abstract_factory]\namount_ml = 150\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.amount_ml(), 150);
    }
}
