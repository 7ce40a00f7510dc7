use super::Value;

/// Either side of an operator: an existing node or a plain number.
///
/// Constants are wrapped into fresh leaves when the operator runs, so numbers
/// on either side of an operator are treated the same way as nodes.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'g> {
    Node(Value<'g>),
    Constant(f64),
}

impl<'g> From<Value<'g>> for Operand<'g> {
    fn from(value: Value<'g>) -> Self {
        Operand::Node(value)
    }
}

impl<'g> From<&Value<'g>> for Operand<'g> {
    fn from(value: &Value<'g>) -> Self {
        Operand::Node(*value)
    }
}

impl From<f64> for Operand<'_> {
    fn from(constant: f64) -> Self {
        Operand::Constant(constant)
    }
}

impl From<&f64> for Operand<'_> {
    fn from(constant: &f64) -> Self {
        Operand::Constant(*constant)
    }
}

impl From<i32> for Operand<'_> {
    fn from(constant: i32) -> Self {
        Operand::Constant(f64::from(constant))
    }
}

impl Operand<'_> {
    pub fn is_constant(&self) -> bool {
        matches!(self, Operand::Constant(_))
    }

    /// Forward value of the operand.
    pub fn data(&self) -> f64 {
        match self {
            Operand::Node(value) => value.data(),
            Operand::Constant(constant) => *constant,
        }
    }
}
