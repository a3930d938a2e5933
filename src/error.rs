use thiserror::Error;

use crate::circuit::NodeId;

/// Errors produced while settling a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A gate names a boolean function that does not exist.
    #[error("gate {id} has invalid kind '{kind}'")]
    InvalidGateKind { id: NodeId, kind: String },

    /// No order exists in which every gate's dependencies are settled before it.
    #[error("cyclic dependency between gates {}", join_ids(.ids))]
    CyclicDependency { ids: Vec<NodeId> },

    /// An id was registered twice while duplicates are rejected.
    #[error("id {id} is used by more than one input or gate")]
    DuplicateId { id: NodeId },

    #[error("truth table over {inputs} inputs is too large (limit is {limit})")]
    TableTooLarge { inputs: usize, limit: usize },
}

/// Errors produced while loading a circuit description.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read circuit file: {0}")]
    Io(#[from] std::io::Error),

    #[error("circuit file is not valid json: {0}")]
    Json(#[from] json::Error),

    #[error("malformed descriptor at {location}: {message}")]
    MalformedDescriptor { location: String, message: String },
}

impl ImportError {
    pub(crate) fn malformed(location: impl Into<String>, message: impl Into<String>) -> Self {
        ImportError::MalformedDescriptor { location: location.into(), message: message.into() }
    }
}

fn join_ids(ids: &[NodeId]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod test {
    use super::{EvalError, ImportError};

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(EvalError::InvalidGateKind { id: 30, kind: "XYZ".into() }.to_string(), "gate 30 has invalid kind 'XYZ'");
        assert_eq!(EvalError::CyclicDependency { ids: vec![3, 4] }.to_string(), "cyclic dependency between gates 3, 4");
        assert_eq!(ImportError::malformed("gates[0].id", "missing field").to_string(), "malformed descriptor at gates[0].id: missing field");
    }
}
