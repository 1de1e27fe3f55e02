use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;

use cinema_cli::CliConfig;

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    let config = CliConfig::from_env()?;
    cinema_observability::tracing::init(config.log_format);

    let input = match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let outcome = cinema_cli::run(&config, &input)?;
    println!("{}", outcome.to_json());

    Ok(outcome.exit_code())
}
