use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlaygroundError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundError {
    #[error("no canvas registered under id `{id}`")]
    MissingSurface { id: String },
}
