use thiserror::Error;

/// Hard failures while deriving metadata for one bus device.
///
/// An empty topology (a resolved host with no WWN-bearing devices, or a block
/// abstraction reporting zero capacity) is not an error; only a missing
/// host/abstraction link is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    #[error("storage host not bound to the bus device")]
    HostUnresolved,

    #[error("no block abstraction bound to the bus device")]
    NoBlockAbstraction,
}

/// Failures while building the device registry.
///
/// Any of these aborts the whole build: the registry rolls back everything
/// inserted so far and the caller observes no nodes at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("out of memory while building the device registry")]
    OutOfMemory,

    #[error("storage host not bound to the bus device")]
    HostUnresolved,

    #[error("no block abstraction bound to the bus device")]
    NoBlockAbstraction,

    #[error("duplicate bus device name: {0}")]
    DuplicateName(String),
}

impl From<ExtractError> for InitError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::HostUnresolved => Self::HostUnresolved,
            ExtractError::NoBlockAbstraction => Self::NoBlockAbstraction,
        }
    }
}

/// Per-call attribute access failures. These never touch registry state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttrError {
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("attribute target is gone or unreadable")]
    IoError,

    #[error("attribute is read-only")]
    ReadOnly,
}
