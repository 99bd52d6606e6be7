use clap::Parser;
use liveliest_year::utils::logger;
use liveliest_year::{CensusEngine, CliConfig, LiveliestYearPipeline, LocalStorage};

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(&config.log_level, config.log_format);
    tracing::debug!("Run config: {:?}", config);

    let writes_to_file = config.output_path.is_some();
    let pipeline = LiveliestYearPipeline::new(LocalStorage::default(), config);
    let engine = CensusEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            if !writes_to_file {
                print!("{}", report);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Liveliest year computation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            if let liveliest_year::CensusError::Validation(rejection) = &e {
                for err in rejection.errors().iter().skip(1) {
                    eprintln!("   {}", err);
                }
            }
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
