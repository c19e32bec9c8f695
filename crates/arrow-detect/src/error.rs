use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("template image unusable: {0}")]
    Template(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}
