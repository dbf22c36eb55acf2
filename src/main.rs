use ::clap::Parser;
use anyhow::Context;
use loadgen::Generator;
use std::io;

mod clap;
use crate::clap::{is_stdout, ProgArgs};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // parse the arguments, then fold them over the config file
    let config = ProgArgs::parse()
        .into_config()
        .context("could not load the generator config")?;
    let generator = Generator::new(config);
    let path = generator.config().output_path.clone();

    if is_stdout(&path) {
        // keep stdout clean so it can be piped straight into the engine
        eprintln!("Generating to standard output...");
        let stdout = io::stdout();
        generator
            .write_to(stdout.lock())
            .context("could not write the command stream")?;
        eprintln!("Done!");
    } else {
        println!("Generating {}...", path.display());
        generator
            .generate()
            .with_context(|| format!("could not generate {}", path.display()))?;
        println!("Done! You can now pipe this file into your engine.");
    }
    Ok(())
}
