use clap::Parser;
use design_playgrounds::utils::{logger, validation::Validate};
use design_playgrounds::{registry, CliConfig, PlaygroundEngine, PlaygroundError, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if cli.list {
        if cli.json {
            println!("{}", registry::list_playgrounds_json()?);
        } else {
            println!("📋 Available playgrounds:");
            for info in registry::list_playgrounds() {
                println!("  {:<18} {}", info.name, info.description);
            }
        }
        return Ok(());
    }

    // 載入設定檔 (未指定時使用預設值)
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(e.severity().exit_code());
                }
            }
        }
        None => TomlConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let mut settings = config.settings();
    cli.apply_overrides(&mut settings);

    let engine = PlaygroundEngine::new(settings);
    let result = registry::select(&cli.playground).and_then(|playgrounds| {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        engine.run_all(&playgrounds, &mut stdin.lock(), &mut stdout.lock())
    });

    match result {
        Ok(count) => {
            tracing::info!("✅ Finished {} playground(s)", count);
            Ok(())
        }
        Err(e) => {
            report(&e);
            std::process::exit(e.severity().exit_code());
        }
    }
}

fn report(e: &PlaygroundError) {
    tracing::error!(
        "❌ Playground failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
