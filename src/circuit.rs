use crate::{
    error::EvalError,
    simulation::{self, logic::GateKind, EvalOptions, Evaluation},
};

/// Identifier shared by inputs, gates and outputs. Inputs and gates are expected to use disjoint ids.
pub type NodeId = i64;

/// Anything a gate or output can be wired to.
pub trait Provider {
    fn id(&self) -> NodeId;
    fn output(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputNode {
    pub id: NodeId,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDescriptor {
    pub id: NodeId,
    pub kind: String,
    pub input1: NodeId,
    pub input2: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputDescriptor {
    pub id: NodeId,
    pub input1: NodeId,
}

/// A reference to a provider together with the value it resolved to.
/// `value` is `None` when no settled provider was visible under `reference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub reference: NodeId,
    pub value: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateNode {
    pub id: NodeId,
    pub kind: GateKind,
    pub inputs: [Connection; 2],
    pub output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputNode {
    pub id: NodeId,
    pub input: Connection,
    pub output: bool,
}

/// Everything needed to settle a circuit, as produced by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circuit {
    pub inputs: Vec<InputNode>,
    pub gates: Vec<GateDescriptor>,
    pub outputs: Vec<OutputDescriptor>,
}

impl Connection {
    // dangling references read as false
    pub const FALLBACK: bool = false;

    pub(crate) fn new(reference: NodeId, value: Option<bool>) -> Self {
        Self { reference, value }
    }

    pub fn is_dangling(&self) -> bool {
        self.value.is_none()
    }

    pub fn value_or_fallback(&self) -> bool {
        self.value.unwrap_or(Self::FALLBACK)
    }
}

impl Provider for InputNode {
    fn id(&self) -> NodeId {
        self.id
    }
    fn output(&self) -> bool {
        self.value
    }
}

impl Provider for GateNode {
    fn id(&self) -> NodeId {
        self.id
    }
    fn output(&self) -> bool {
        self.output
    }
}

impl GateNode {
    /// The connections the gate's boolean function actually reads.
    pub fn used_inputs(&self) -> &[Connection] {
        &self.inputs[..self.kind.arity()]
    }
}

impl Circuit {
    pub fn evaluate(&self, options: &EvalOptions) -> Result<Evaluation, Vec<EvalError>> {
        simulation::evaluate(&self.inputs, &self.gates, &self.outputs, options)
    }

    pub fn table(&self, options: &EvalOptions) -> Result<Vec<simulation::TableRow>, Vec<EvalError>> {
        simulation::table(self, options)
    }
}
