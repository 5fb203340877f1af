use asset_synth::{
    cli::{self, CommonArgs},
    icons::{FishingIconParams, make_fishing_icon},
};
use clap::Parser;

/// Build the fishing app icon. Failures are reported and the process still exits 0.
#[derive(Parser, Debug)]
#[command(name = "make_fishing_icon", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    cli::init_tracing();

    let params = FishingIconParams::default();
    if args.common.dump_params {
        cli::dump_params(&params)?;
    }

    match make_fishing_icon(&args.common.root, &params) {
        Ok(_) => println!(
            "Fishing app icon created successfully at {}",
            params.output_path.display()
        ),
        Err(e) => println!("Error creating icon: {e:#}"),
    }
    Ok(())
}
