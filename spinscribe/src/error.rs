use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpinnerError>;

#[derive(Error, Debug)]
pub enum SpinnerError {
    #[error("A spinner needs at least one lobe")]
    NoLobes,
    #[error("A spinner can have at most {max} lobes, got {0}", max = crate::config::MAX_REPEATS)]
    TooManyLobes(usize),
    #[error("Failed to write drawing: {0}")]
    Io(#[from] std::io::Error),
}
