use crate::error::HiveError;

pub type HiveResult<T> = Result<T, HiveError>;
