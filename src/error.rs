use std::collections::TryReserveError;
use std::error;
use std::fmt;

/// The deque operation that could not be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Front,
    Back,
    RemoveFront,
    RemoveBack,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Front => "front",
            Operation::Back => "back",
            Operation::RemoveFront => "remove_front",
            Operation::RemoveBack => "remove_back",
        })
    }
}

/// The error type returned by the checked (`try_`) operations on
/// [`Deque`].
///
/// [`Deque`]: struct.Deque.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation needs at least one value but the deque was
    /// empty.
    Empty(Operation),
    /// The arena could not grow to hold another node.
    AllocFailed(TryReserveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty(op) => write!(f, "called `{}` on an empty deque", op),
            Error::AllocFailed(_) => f.write_str("failed to allocate a deque node"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Empty(_) => None,
            Error::AllocFailed(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Error {
        Error::AllocFailed(e)
    }
}
