use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("action has {got} components, expected {expected}")]
    ActionSize { expected: usize, got: usize },
    #[error("state has {got} entries, expected {expected}")]
    StateSize { expected: usize, got: usize },
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
}
