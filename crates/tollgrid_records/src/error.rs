use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("invalid day name {0:?}")]
    InvalidDayName(String),
}
