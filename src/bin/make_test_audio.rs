use asset_synth::{
    audio::{default_effects, make_test_audio},
    cli::{self, CommonArgs},
};
use clap::Parser;

/// Write the swap, match and ambient tone effects under `assets/audio`.
#[derive(Parser, Debug)]
#[command(name = "make_test_audio", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    cli::init_tracing();

    let effects = default_effects();
    if args.common.dump_params {
        cli::dump_params(&effects)?;
    }

    make_test_audio(&args.common.root, &effects)?;
    println!("Created assets/audio/swap.wav, match.wav, ambient.wav");
    Ok(())
}
