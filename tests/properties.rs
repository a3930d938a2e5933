use gate_eval::{evaluate, EvalOptions, EvalOrder, GateDescriptor, InputNode, OutputDescriptor};
use proptest::prelude::*;

const KINDS: [&str; 7] = ["AND", "OR", "XOR", "NAND", "NOR", "XNOR", "NOT"];
const FIRST_GATE_ID: i64 = 100;

// inputs get ids 0.., gates FIRST_GATE_ID.., references may dangle
fn circuit() -> impl Strategy<Value = (Vec<InputNode>, Vec<GateDescriptor>, Vec<OutputDescriptor>)> {
    (1usize..6, 0usize..12, 0usize..6).prop_flat_map(|(num_inputs, num_gates, num_outputs)| {
        let max_ref = FIRST_GATE_ID + num_gates as i64 + 3;
        let inputs = proptest::collection::vec(any::<bool>(), num_inputs).prop_map(|values| values.into_iter().enumerate().map(|(id, value)| InputNode { id: id as i64, value }).collect::<Vec<_>>());
        let gates = proptest::collection::vec((0..KINDS.len(), 0..max_ref, 0..max_ref), num_gates)
            .prop_map(|gates| gates.into_iter().enumerate().map(|(i, (kind, input1, input2))| GateDescriptor { id: FIRST_GATE_ID + i as i64, kind: KINDS[kind].into(), input1, input2 }).collect::<Vec<_>>())
            .prop_shuffle();
        let outputs = proptest::collection::vec(0..max_ref, num_outputs).prop_map(|refs| refs.into_iter().enumerate().map(|(i, input1)| OutputDescriptor { id: 1000 + i as i64, input1 }).collect::<Vec<_>>());
        (inputs, gates, outputs)
    })
}

// every gate only reads inputs or gates with lower ids
fn backward_circuit() -> impl Strategy<Value = (Vec<InputNode>, Vec<GateDescriptor>)> {
    (1usize..6, 0usize..12).prop_flat_map(|(num_inputs, num_gates)| {
        let inputs = proptest::collection::vec(any::<bool>(), num_inputs).prop_map(|values| values.into_iter().enumerate().map(|(id, value)| InputNode { id: id as i64, value }).collect::<Vec<_>>());
        let gates = proptest::collection::vec((0..KINDS.len(), any::<usize>(), any::<usize>()), num_gates).prop_map(move |choices| {
            // gate i can read any of the inputs and the i gates before it
            let provider = |i: usize, choice: usize| {
                let index = choice % (num_inputs + i);
                if index < num_inputs {
                    index as i64
                } else {
                    FIRST_GATE_ID + (index - num_inputs) as i64
                }
            };
            choices.into_iter().enumerate().map(|(i, (kind, a, b))| GateDescriptor { id: FIRST_GATE_ID + i as i64, kind: KINDS[kind].into(), input1: provider(i, a), input2: provider(i, b) }).collect::<Vec<_>>()
        });
        (inputs, gates)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn evaluation_is_deterministic((inputs, gates, outputs) in circuit()) {
        let options = EvalOptions::default();
        prop_assert_eq!(evaluate(&inputs, &gates, &outputs, &options), evaluate(&inputs, &gates, &outputs, &options));
    }

    #[test]
    fn result_order((inputs, gates, outputs) in circuit()) {
        let evaluation = evaluate(&inputs, &gates, &outputs, &EvalOptions::default()).unwrap();

        prop_assert_eq!(&evaluation.inputs, &inputs);
        prop_assert_eq!(evaluation.outputs.iter().map(|o| o.id).collect::<Vec<_>>(), outputs.iter().map(|o| o.id).collect::<Vec<_>>());

        let mut expected_gate_ids: Vec<i64> = gates.iter().map(|g| g.id).collect();
        expected_gate_ids.sort();
        prop_assert_eq!(evaluation.gates.iter().map(|g| g.id).collect::<Vec<_>>(), expected_gate_ids);
    }

    #[test]
    fn descriptor_order_does_not_matter((inputs, gates, outputs) in circuit()) {
        let mut reversed = gates.clone();
        reversed.reverse();
        prop_assert_eq!(evaluate(&inputs, &gates, &outputs, &EvalOptions::default()), evaluate(&inputs, &reversed, &outputs, &EvalOptions::default()));
    }

    #[test]
    fn outputs_copy_their_provider((inputs, gates, outputs) in circuit()) {
        let evaluation = evaluate(&inputs, &gates, &outputs, &EvalOptions::default()).unwrap();
        for output in &evaluation.outputs {
            let expected = evaluation.provider(output.input.reference).map(|p| p.output()).unwrap_or(false);
            prop_assert_eq!(output.output, expected);
        }
    }

    #[test]
    fn topological_agrees_when_ids_follow_dependencies((inputs, gates) in backward_circuit()) {
        let ascending = evaluate(&inputs, &gates, &[], &EvalOptions::default()).unwrap();
        let topological = evaluate(&inputs, &gates, &[], &EvalOptions { order: EvalOrder::Topological, ..EvalOptions::default() }).unwrap();
        prop_assert_eq!(ascending, topological);
    }
}
