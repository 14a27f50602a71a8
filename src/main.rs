use anyhow::Context;
use clap::Parser;
use home_theater::utils::logger;
use home_theater::{
    CliConfig, ConsoleAmplifier, ConsoleDvdPlayer, ConsolePopcornPopper, ConsoleProjector,
    HomeTheaterSystem, StdoutAnnouncer, TheaterError,
};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format)
        .context("failed to initialise logging")?;

    tracing::info!("Starting home theater");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Each subsystem is owned by the facade from here on.
    let theater = HomeTheaterSystem::new(
        ConsoleProjector::new(StdoutAnnouncer),
        ConsoleDvdPlayer::new(StdoutAnnouncer),
        ConsoleAmplifier::with_volume(StdoutAnnouncer, config.volume),
        ConsolePopcornPopper::new(StdoutAnnouncer),
    );

    if config.dry_run {
        tracing::info!("Dry run: printing plan for {:?}", config.title);
        let plan = theater.plan(&config.title);
        let json = serde_json::to_string_pretty(&plan)
            .map_err(TheaterError::from)
            .context("failed to serialize movie plan")?;
        println!("{}", json);
        return Ok(());
    }

    theater.watch_movie(&config.title);

    std::io::stdout()
        .flush()
        .map_err(TheaterError::from)
        .context("failed to flush stdout")?;

    tracing::info!("Enjoy the movie");
    Ok(())
}
