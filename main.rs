use anyhow::Result;
use clap::Parser;
use sortlab::*;

fn main() -> Result<()> {
    let args = Args::parse();
    telemetry::init(args.verbose)?;

    let config = Config::load(&args)?;
    let sorted = run(&config)?;

    println!("{}", format_values(&sorted));
    Ok(())
}
