
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Automata(#[from] automata::Error),
    #[error("`{0}` can't be used as a terminal name in generated code")]
    InvalidTerminalName(String),
}

pub type Result<T> = std::result::Result<T, Error>;
