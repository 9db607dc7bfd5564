use clap::Parser;

use tally::cli::Cli;
use tally::logging::init_tracing;

fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    let stdout = std::io::stdout();
    if let Err(err) = cli.execute(&config, &mut stdout.lock()) {
        tracing::error!(error = %err, "command failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
