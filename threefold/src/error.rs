use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum UnderflowError {
    #[error("cannot remove or keep more elements than the list contains")]
    TooFewElements,
}
