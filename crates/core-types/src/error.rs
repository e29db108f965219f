use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid year range: {from} is after {to}")]
    InvertedYearRange { from: i32, to: i32 },
}
