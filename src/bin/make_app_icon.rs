use asset_synth::{
    cli::{self, CommonArgs},
    icons::{AppIconParams, make_app_icon},
};
use clap::Parser;

/// Build the layered app icon. A missing background is tolerated; missing sprites are not.
#[derive(Parser, Debug)]
#[command(name = "make_app_icon", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    cli::init_tracing();

    let params = AppIconParams::default();
    if args.common.dump_params {
        cli::dump_params(&params)?;
    }

    make_app_icon(&args.common.root, &params)?;
    println!("App icon created successfully at {}", params.output_path.display());
    Ok(())
}
