//responsible for drawing a fidget spinner outline to an svg
//cli accepts the svg location and an optional number of lobes

mod cli;

use std::error::Error;

use clap::Parser;
use cli::Args;
use spinscribe::{config::SpinnerConfig, drawing::Drawing, make_spinner};
use tracing::Level;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config = SpinnerConfig::new(args.spinner_points)?;
    let spinner = make_spinner(config);

    let drawing = Drawing::a4();
    if args.to_stdout() {
        drawing.write(std::io::stdout().lock(), &spinner)?;
    } else {
        drawing.save(&args.svg_out, &spinner)?;
    }
    Ok(())
}
