
use life_the_game::{
    config::Config,
    draw::{App, Delay, Terminal},
    input,
    proc::Field,
};

use std::{io, process::ExitCode};

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> life_the_game::Result<()> {
    let field = Field::load(&config.input)?;

    let mut app = App::new(field, Terminal::stdout(), Delay(config.frame_delay));
    app.start()?;

    let maxgen = input::prompt_generations(io::stdin().lock(), io::stdout(), io::stderr())?;
    info!(maxgen, "starting simulation");

    let last = app.run(maxgen)?;
    info!(population = last.population(), "simulation finished");
    Ok(())
}
