use std::num::ParseIntError;
use std::path::PathBuf;

use clap::Parser;
use spinscribe::config::MAX_REPEATS;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("Invalid int specification for points")]
    InvalidPointsInt(ParseIntError),
    #[error("A spinner needs at least one lobe")]
    NoLobes,
    #[error("A spinner can have at most {max} lobes", max = MAX_REPEATS)]
    TooManyLobes,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
/// Draw an outline of a fidget spinner.
pub struct Args {
    /// Location to place the svg file. Use - to write it to stdout
    pub svg_out: PathBuf,

    /// The number of lobes on the spinner. Defaults to 3.
    #[arg(long = "points", default_value = "3", value_parser = parse_points)]
    pub spinner_points: usize,

    /// Log the derived layout and file writes
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_stdout(&self) -> bool {
        self.svg_out.as_os_str() == "-"
    }
}

fn parse_points(arg: &str) -> Result<usize, CliError> {
    let points = arg
        .parse::<usize>()
        .map_err(|e| CliError::InvalidPointsInt(e))?;
    if points == 0 {
        return Err(CliError::NoLobes);
    }
    if points > MAX_REPEATS {
        return Err(CliError::TooManyLobes);
    }
    Ok(points)
}
