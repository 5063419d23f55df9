use clap::Parser;
use say::utils::{logger, validation::Validate};
use say::{resolve_script, CliConfig, SayError, Speaker, StderrSink, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting say CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("say failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), SayError> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            Some(file_config)
        }
        None => None,
    };

    let script = resolve_script(file_config.as_ref(), &config.messages, config.repeat);
    if script.is_empty() {
        tracing::warn!("Nothing to say");
        return Ok(());
    }

    let speaker = Speaker::new(StderrSink);
    speaker.speak_repeated(&script.messages, script.repeat)?;
    Ok(())
}
