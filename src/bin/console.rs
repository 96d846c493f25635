//! Text-mode runner: prints the world after every tick

use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use tracing::info;

use lifelike::{Scheduler, SimulationConfig, World, telemetry};

struct Args {
    config: Option<String>,
    generations: u64,
    fast: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut parsed = Args { config: None, generations: 10, fast: false };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => parsed.config = Some(args.next().context("--config needs a path")?),
            "--generations" => {
                parsed.generations = args
                    .next()
                    .context("--generations needs a number")?
                    .parse()
                    .context("--generations must be a whole number")?;
            }
            // Skip waiting between ticks
            "--fast" => parsed.fast = true,
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(parsed)
}

fn main() -> anyhow::Result<()> {
    telemetry::init_logging();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => SimulationConfig::default(),
    };
    let mut world = World::from_config(&config)?;
    println!("{}\n", world.render());

    if args.fast {
        for _ in 0..args.generations {
            world.tick()?;
            println!("{}\n", world.render());
        }
        return Ok(());
    }

    let mut scheduler = Scheduler::new(config.interval());
    scheduler.start();
    let mut last = Instant::now();
    while world.generation() < args.generations {
        std::thread::sleep(Duration::from_millis(10));
        let now = Instant::now();
        if scheduler.advance(now - last, &mut world)? > 0 {
            println!("{}\n", world.render());
        }
        last = now;
    }
    scheduler.stop();

    info!(
        generations = world.generation(),
        population = world.grid().population(),
        "Finished"
    );
    Ok(())
}
