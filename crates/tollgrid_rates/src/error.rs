use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("invalid day code {0}, expected 1-7")]
    InvalidDayCode(u8),
}
