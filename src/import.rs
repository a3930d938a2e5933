use std::path::Path;

use json::JsonValue;

use crate::{
    circuit::{Circuit, GateDescriptor, InputNode, NodeId, OutputDescriptor},
    error::ImportError,
};

/// Loads a circuit description from a json file.
pub fn load(path: impl AsRef<Path>) -> Result<Circuit, ImportError> {
    let path = path.as_ref();
    let circuit = parse(&std::fs::read_to_string(path)?)?;
    log::info!("loaded {} inputs, {} gates and {} outputs from {}", circuit.inputs.len(), circuit.gates.len(), circuit.outputs.len(), path.display());
    Ok(circuit)
}

/// Parses a circuit description of the form
/// `{ "inputs": [{"id", "value"}], "gates": [{"id", "kind", "input1", "input2"}], "outputs": [{"id", "input1"}] }`.
/// Missing top-level arrays are treated as empty.
pub fn parse(source: &str) -> Result<Circuit, ImportError> {
    let JsonValue::Object(mut project) = json::parse(source)? else {
        return Err(ImportError::malformed("<root>", "toplevel json must be object"));
    };

    let inputs = take_array(&mut project, "inputs")?.into_iter().enumerate().map(|(i, input)| parse_input(&format!("inputs[{i}]"), input)).collect::<Result<Vec<_>, _>>()?;
    let gates = take_array(&mut project, "gates")?.into_iter().enumerate().map(|(i, gate)| parse_gate(&format!("gates[{i}]"), gate)).collect::<Result<Vec<_>, _>>()?;
    let outputs = take_array(&mut project, "outputs")?.into_iter().enumerate().map(|(i, output)| parse_output(&format!("outputs[{i}]"), output)).collect::<Result<Vec<_>, _>>()?;

    Ok(Circuit { inputs, gates, outputs })
}

fn take_array(project: &mut json::object::Object, key: &str) -> Result<Vec<JsonValue>, ImportError> {
    match project.remove(key) {
        None | Some(JsonValue::Null) => Ok(Vec::new()),
        Some(JsonValue::Array(items)) => Ok(items),
        Some(_) => Err(ImportError::malformed(key, "must be array")),
    }
}

fn parse_input(location: &str, input: JsonValue) -> Result<InputNode, ImportError> {
    let JsonValue::Object(mut input) = input else { return Err(ImportError::malformed(location, "input must be object")) };
    Ok(InputNode { id: take_id(location, &mut input, "id")?, value: take_bool(location, &mut input, "value")? })
}

fn parse_gate(location: &str, gate: JsonValue) -> Result<GateDescriptor, ImportError> {
    let JsonValue::Object(mut gate) = gate else { return Err(ImportError::malformed(location, "gate must be object")) };
    let id = take_id(location, &mut gate, "id")?;
    let kind = match gate.remove("kind") {
        Some(kind) => kind.as_str().map(str::to_string).ok_or_else(|| ImportError::malformed(format!("{location}.kind"), "must be string"))?,
        None => return Err(ImportError::malformed(location, "gate must have field 'kind'")),
    };

    Ok(GateDescriptor { id, kind, input1: take_id(location, &mut gate, "input1")?, input2: take_id(location, &mut gate, "input2")? })
}

fn parse_output(location: &str, output: JsonValue) -> Result<OutputDescriptor, ImportError> {
    let JsonValue::Object(mut output) = output else { return Err(ImportError::malformed(location, "output must be object")) };
    Ok(OutputDescriptor { id: take_id(location, &mut output, "id")?, input1: take_id(location, &mut output, "input1")? })
}

// ids are integral numbers, or strings holding one
fn take_id(location: &str, object: &mut json::object::Object, key: &str) -> Result<NodeId, ImportError> {
    let value = object.remove(key).ok_or_else(|| ImportError::malformed(location, format!("missing field '{key}'")))?;
    let id = match &value {
        JsonValue::Number(_) => value.as_i64(),
        JsonValue::String(_) | JsonValue::Short(_) => value.as_str().and_then(|s| s.trim().parse().ok()),
        _ => None,
    };
    id.ok_or_else(|| ImportError::malformed(format!("{location}.{key}"), format!("expected integer, found {}", value.dump())))
}

// booleans, or the strings "true" and "false" in any case
fn take_bool(location: &str, object: &mut json::object::Object, key: &str) -> Result<bool, ImportError> {
    let value = object.remove(key).ok_or_else(|| ImportError::malformed(location, format!("missing field '{key}'")))?;
    let parsed = match &value {
        JsonValue::Boolean(b) => Some(*b),
        JsonValue::String(_) | JsonValue::Short(_) => match value.as_str().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Some(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        },
        _ => None,
    };
    parsed.ok_or_else(|| ImportError::malformed(format!("{location}.{key}"), format!("expected boolean, found {}", value.dump())))
}
