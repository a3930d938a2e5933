pub mod circuit;
pub mod display;
pub mod error;
pub mod import;
pub mod simulation;
pub(crate) mod utils;

pub use circuit::{Circuit, Connection, GateDescriptor, GateNode, InputNode, NodeId, OutputDescriptor, OutputNode, Provider};
pub use error::{EvalError, ImportError};
pub use simulation::{evaluate, logic::GateKind, DuplicatePolicy, EvalOptions, EvalOrder, Evaluation, TableRow};
