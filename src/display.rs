use std::fmt::Write;

use crate::{
    circuit::{Circuit, Connection},
    simulation::{Evaluation, TableRow},
};

fn on_off(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn connection(c: &Connection) -> String {
    if c.is_dangling() {
        format!("{}?", c.reference)
    } else {
        c.reference.to_string()
    }
}

/// Renders every node's id and settled value. Dangling references are marked with `?`.
pub fn report(evaluation: &Evaluation) -> String {
    let mut out = String::new();

    // writing to a String cannot fail
    let _ = writeln!(out, "inputs:");
    for input in &evaluation.inputs {
        let _ = writeln!(out, "  {} = {}", input.id, on_off(input.value));
    }

    let _ = writeln!(out, "gates:");
    for gate in &evaluation.gates {
        let args = gate.used_inputs().iter().map(connection).collect::<Vec<_>>().join(", ");
        let _ = writeln!(out, "  {} {}({}) = {}", gate.id, gate.kind, args, on_off(gate.output));
    }

    let _ = writeln!(out, "outputs:");
    for output in &evaluation.outputs {
        let _ = writeln!(out, "  {} <- {} = {}", output.id, connection(&output.input), on_off(output.output));
    }

    out
}

/// Renders a truth table with one column per input and output, headed by their ids.
pub fn truth_table(circuit: &Circuit, rows: &[TableRow]) -> String {
    let input_headers: Vec<String> = circuit.inputs.iter().map(|input| input.id.to_string()).collect();
    let output_headers: Vec<String> = circuit.outputs.iter().map(|output| output.id.to_string()).collect();

    let format_row = |inputs: Vec<&str>, outputs: Vec<&str>| {
        let pad = |cells: Vec<&str>, headers: &[String]| cells.iter().zip(headers).map(|(cell, header)| format!("{cell:>width$}", width = header.len())).collect::<Vec<_>>().join(" ");
        format!("{} | {}", pad(inputs, &input_headers), pad(outputs, &output_headers)).trim_end().to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", format_row(input_headers.iter().map(String::as_str).collect(), output_headers.iter().map(String::as_str).collect()));
    for row in rows {
        let _ = writeln!(out, "{}", format_row(row.inputs.iter().copied().map(on_off).collect(), row.outputs.iter().copied().map(on_off).collect()));
    }
    out
}
