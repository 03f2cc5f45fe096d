use anyhow::Context;
use clap::Parser;
use pattern_demos::utils::{logger, validation::Validate};
use pattern_demos::{CliConfig, DemoRunner};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.validate().and_then(|_| cli.resolve()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    DemoRunner::new(config)
        .run(&mut out)
        .context("failed to write demo output")?;
    out.flush().context("failed to flush stdout")?;

    tracing::debug!("All demos finished");
    Ok(())
}
