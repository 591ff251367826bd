use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use pp_gen::args::{Cli, USAGE};
use pp_gen::pattern::OsBitSource;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = match Cli::parse().validate() {
        Ok(settings) => settings,
        Err(err) => {
            println!("{err}");
            println!("{USAGE}");
            std::process::exit(-1);
        }
    };

    pp_gen::run(&settings, &mut OsBitSource)
        .with_context(|| format!("could not generate {}", settings.output.display()))?;

    info!("Image saved as {}", settings.output.display());
    Ok(())
}
