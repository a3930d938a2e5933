pub mod logic;
pub mod order;

use std::collections::{hash_map::Entry, HashMap};

use crate::{
    circuit::{Circuit, Connection, GateDescriptor, GateNode, InputNode, NodeId, OutputDescriptor, OutputNode, Provider},
    error::EvalError,
    utils::{self, CollectAll},
};
use logic::GateKind;
pub use order::EvalOrder;

/// Largest number of inputs `table` will enumerate.
pub const MAX_TABLE_INPUTS: usize = 16;

/// What happens when the same id is registered more than once across inputs and gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The first registration (inputs in order, then gates by ascending id) shadows later ones.
    #[default]
    FirstWins,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalOptions {
    pub order: EvalOrder,
    pub duplicates: DuplicatePolicy,
}

/// A settled circuit: inputs in their original order, gates by ascending id, outputs in descriptor order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub inputs: Vec<InputNode>,
    pub gates: Vec<GateNode>,
    pub outputs: Vec<OutputNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub inputs: Vec<bool>,
    pub outputs: Vec<bool>,
}

slotmap::new_key_type! {
    pub(crate) struct ProviderKey;
}

pub(crate) type ProviderMap = slotmap::SlotMap<ProviderKey, ProviderEntry>;

pub(crate) struct ProviderEntry {
    pub(crate) id: NodeId,
    pub(crate) source: Source,
    // None until settled
    pub(crate) output: Option<bool>,
}

pub(crate) enum Source {
    Input,
    Gate { kind: GateKind, inputs: [Connection; 2] },
}

/// Arena of every input and gate, with the id lookup used to resolve references.
pub(crate) struct ProviderTable {
    pub(crate) providers: ProviderMap,
    by_id: HashMap<NodeId, ProviderKey>,
    pub(crate) gates: Vec<ProviderKey>,
}

impl ProviderTable {
    /// Registers inputs in order and then gates, which must already be sorted by ascending id.
    fn build(inputs: &[InputNode], gates: &[(&GateDescriptor, GateKind)], duplicates: DuplicatePolicy) -> Result<ProviderTable, Vec<EvalError>> {
        let mut table = ProviderTable { providers: ProviderMap::with_key(), by_id: HashMap::new(), gates: Vec::new() };

        let input_keys = inputs.iter().map(|input| table.register(ProviderEntry { id: input.id, source: Source::Input, output: Some(input.value) }, duplicates)).collect_all::<Vec<_>>();
        let gate_keys = gates
            .iter()
            .map(|(gate, kind)| {
                let inputs = [Connection::new(gate.input1, None), Connection::new(gate.input2, None)];
                table.register(ProviderEntry { id: gate.id, source: Source::Gate { kind: *kind, inputs }, output: None }, duplicates)
            })
            .collect_all::<Vec<_>>();

        match (input_keys, gate_keys) {
            (Ok(_), Ok(gates)) => {
                table.gates = gates;
                Ok(table)
            }
            (input_keys, gate_keys) => Err(input_keys.err().into_iter().chain(gate_keys.err()).flatten().collect()),
        }
    }

    fn register(&mut self, entry: ProviderEntry, duplicates: DuplicatePolicy) -> Result<ProviderKey, Vec<EvalError>> {
        let id = entry.id;
        match self.by_id.entry(id) {
            Entry::Vacant(vacant) => {
                let key = self.providers.insert(entry);
                vacant.insert(key);
                Ok(key)
            }
            Entry::Occupied(_) => match duplicates {
                DuplicatePolicy::FirstWins => {
                    log::warn!("id {id} is registered more than once; the first registration shadows this one");
                    Ok(self.providers.insert(entry))
                }
                DuplicatePolicy::Reject => Err(vec![EvalError::DuplicateId { id }]),
            },
        }
    }

    pub(crate) fn lookup(&self, id: NodeId) -> Option<ProviderKey> {
        self.by_id.get(&id).copied()
    }

    /// The value of the provider registered under `id`, if it has settled yet.
    fn settled(&self, id: NodeId) -> Option<bool> {
        self.lookup(id).and_then(|key| self.providers[key].output)
    }

    pub(crate) fn gate_kind(&self, key: ProviderKey) -> Option<(GateKind, [NodeId; 2])> {
        match &self.providers[key].source {
            Source::Input => None,
            Source::Gate { kind, inputs } => Some((*kind, inputs.map(|c| c.reference))),
        }
    }

    fn settle_gate(&mut self, key: ProviderKey) {
        let Some((kind, references)) = self.gate_kind(key) else { return };
        let id = self.providers[key].id;
        let inputs = references.map(|reference| Connection::new(reference, self.settled(reference)));

        for connection in &inputs[..kind.arity()] {
            if connection.is_dangling() {
                log::warn!("gate {id} references {} which is not available; reading it as {}", connection.reference, Connection::FALLBACK);
            }
        }

        let output = kind.compute(inputs[0].value_or_fallback(), inputs[1].value_or_fallback());
        log::debug!("gate {id} {kind}({}, {}) = {output}", inputs[0].reference, inputs[1].reference);

        let entry = &mut self.providers[key];
        entry.source = Source::Gate { kind, inputs };
        entry.output = Some(output);
    }

    fn resolve_output(&self, descriptor: &OutputDescriptor) -> OutputNode {
        let input = Connection::new(descriptor.input1, self.settled(descriptor.input1));
        if input.is_dangling() {
            log::warn!("output {} references {} which does not exist; it stays {}", descriptor.id, descriptor.input1, Connection::FALLBACK);
        }
        log::debug!("output {} <- {} = {}", descriptor.id, descriptor.input1, input.value_or_fallback());
        OutputNode { id: descriptor.id, input, output: input.value_or_fallback() }
    }

    fn gate_nodes(&self) -> Vec<GateNode> {
        self.gates
            .iter()
            .filter_map(|key| {
                let entry = &self.providers[*key];
                match entry.source {
                    Source::Gate { kind, inputs } => Some(GateNode { id: entry.id, kind, inputs, output: entry.output.unwrap_or(Connection::FALLBACK) }),
                    Source::Input => None,
                }
            })
            .collect()
    }
}

/// Settles every gate and output of a circuit in a single pass.
///
/// Gate kinds are checked for every gate before anything is evaluated, so all invalid kinds are reported together.
/// References that cannot be resolved read as [`Connection::FALLBACK`] rather than failing.
pub fn evaluate(inputs: &[InputNode], gates: &[GateDescriptor], outputs: &[OutputDescriptor], options: &EvalOptions) -> Result<Evaluation, Vec<EvalError>> {
    let mut sorted: Vec<(&GateDescriptor, GateKind)> = gates
        .iter()
        .map(|gate| match GateKind::parse(&gate.kind) {
            Some(kind) => Ok((gate, kind)),
            None => Err(vec![EvalError::InvalidGateKind { id: gate.id, kind: gate.kind.clone() }]),
        })
        .collect_all()?;
    // stable, so duplicate ids keep descriptor order
    sorted.sort_by_key(|(gate, _)| gate.id);

    let mut table = ProviderTable::build(inputs, &sorted, options.duplicates)?;
    for key in order::evaluation_order(&table, options.order)? {
        table.settle_gate(key);
    }

    let outputs: Vec<OutputNode> = outputs.iter().map(|output| table.resolve_output(output)).collect();
    log::info!("settled {} inputs, {} gates and {} outputs", inputs.len(), table.gates.len(), outputs.len());

    Ok(Evaluation { inputs: inputs.to_vec(), gates: table.gate_nodes(), outputs })
}

/// Settles the circuit once for every assignment of its inputs.
pub fn table(circuit: &Circuit, options: &EvalOptions) -> Result<Vec<TableRow>, Vec<EvalError>> {
    if circuit.inputs.len() > MAX_TABLE_INPUTS {
        return Err(vec![EvalError::TableTooLarge { inputs: circuit.inputs.len(), limit: MAX_TABLE_INPUTS }]);
    }

    utils::enumerate_inputs(circuit.inputs.len())
        .into_iter()
        .map(|assignment| -> Result<TableRow, Vec<EvalError>> {
            let inputs: Vec<InputNode> = circuit.inputs.iter().zip(&assignment).map(|(input, value)| InputNode { id: input.id, value: *value }).collect();
            let evaluation = evaluate(&inputs, &circuit.gates, &circuit.outputs, options)?;
            Ok(TableRow { inputs: assignment, outputs: evaluation.output_values() })
        })
        .collect()
}

impl Evaluation {
    /// Looks a provider up by id the same way references are resolved: inputs first, then gates, first match wins.
    pub fn provider(&self, id: NodeId) -> Option<&dyn Provider> {
        let input = self.inputs.iter().find(|input| input.id == id).map(|input| input as &dyn Provider);
        input.or_else(|| self.gates.iter().find(|gate| gate.id == id).map(|gate| gate as &dyn Provider))
    }

    pub fn output_values(&self) -> Vec<bool> {
        self.outputs.iter().map(|output| output.output).collect()
    }
}
