use std::fmt;

/// The boolean function a gate computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Xnor,
    Not,
}

impl GateKind {
    pub const ALL: [GateKind; 7] = [GateKind::And, GateKind::Or, GateKind::Xor, GateKind::Nand, GateKind::Nor, GateKind::Xnor, GateKind::Not];

    /// Looks up a kind by name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<GateKind> {
        let name = name.trim();
        GateKind::ALL.into_iter().find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Xor => "XOR",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xnor => "XNOR",
            GateKind::Not => "NOT",
        }
    }

    /// Number of inputs the function reads; NOT ignores its second input.
    pub fn arity(self) -> usize {
        match self {
            GateKind::Not => 1,
            _ => 2,
        }
    }

    pub fn compute(self, a: bool, b: bool) -> bool {
        match self {
            GateKind::And => a && b,
            GateKind::Or => a || b,
            GateKind::Xor => a ^ b,
            GateKind::Nand => !(a && b),
            GateKind::Nor => !(a || b),
            GateKind::Xnor => !(a ^ b),
            GateKind::Not => !a,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::GateKind;
    use crate::utils::enumerate_inputs;

    fn truth_table(kind: GateKind) -> Vec<bool> {
        enumerate_inputs(2).into_iter().map(|ab| kind.compute(ab[0], ab[1])).collect()
    }

    #[test]
    fn function_table() {
        // rows are ff, ft, tf, tt
        assert_eq!(truth_table(GateKind::And), [false, false, false, true]);
        assert_eq!(truth_table(GateKind::Or), [false, true, true, true]);
        assert_eq!(truth_table(GateKind::Xor), [false, true, true, false]);
        assert_eq!(truth_table(GateKind::Nand), [true, true, true, false]);
        assert_eq!(truth_table(GateKind::Nor), [true, false, false, false]);
        assert_eq!(truth_table(GateKind::Xnor), [true, false, false, true]);
        assert_eq!(truth_table(GateKind::Not), [true, true, false, false]);
    }

    #[test]
    fn parse_names() {
        assert_eq!(GateKind::parse("AND"), Some(GateKind::And));
        assert_eq!(GateKind::parse("xnor"), Some(GateKind::Xnor));
        assert_eq!(GateKind::parse(" Not "), Some(GateKind::Not));
        assert_eq!(GateKind::parse("XYZ"), None);
        assert_eq!(GateKind::parse(""), None);

        for kind in GateKind::ALL {
            assert_eq!(GateKind::parse(&kind.to_string()), Some(kind));
        }
    }

    #[test]
    fn arity() {
        assert_eq!(GateKind::Not.arity(), 1);
        assert!(GateKind::ALL.into_iter().filter(|k| *k != GateKind::Not).all(|k| k.arity() == 2));
    }
}
