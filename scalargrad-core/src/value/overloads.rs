// std::ops wrappers over the named operations.
//
// Every operator is defined for `Value ⊕ Value`, `Value ⊕ n` and the
// reversed `n ⊕ Value`, for the same number types `Operand` converts from
// (`f64` and `i32`). The reversed forms build the same graph as the source
// convention: `n + a == a + n`, `n * a == a * n`, `n - a == (-a) + n`,
// `n / a == a^-1 * n`.
//
// Mixing values of two different graphs panics (see `Graph::resolve`).

use super::{Operand, Value};
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, powf_op, sub_op};
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'g> $trait<Value<'g>> for Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: Value<'g>) -> Value<'g> {
                $op_fn(self.graph, Operand::Node(self), Operand::Node(rhs))
            }
        }

        impl_binary_op!(@scalar $trait, $method, $op_fn, f64);
        impl_binary_op!(@scalar $trait, $method, $op_fn, i32);
    };
    (@scalar $trait:ident, $method:ident, $op_fn:ident, $scalar:ty) => {
        impl<'g> $trait<$scalar> for Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: $scalar) -> Value<'g> {
                $op_fn(self.graph, Operand::Node(self), Operand::from(rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Div, div, div_op);

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        neg_op(self.graph, Operand::Node(self))
    }
}

// --- Reversed forms: n ⊕ Value ---

macro_rules! impl_reversed_ops {
    ($scalar:ty) => {
        impl<'g> Add<Value<'g>> for $scalar {
            type Output = Value<'g>;

            fn add(self, rhs: Value<'g>) -> Value<'g> {
                add_op(rhs.graph, Operand::Node(rhs), Operand::from(self))
            }
        }

        impl<'g> Mul<Value<'g>> for $scalar {
            type Output = Value<'g>;

            fn mul(self, rhs: Value<'g>) -> Value<'g> {
                mul_op(rhs.graph, Operand::Node(rhs), Operand::from(self))
            }
        }

        impl<'g> Sub<Value<'g>> for $scalar {
            type Output = Value<'g>;

            fn sub(self, rhs: Value<'g>) -> Value<'g> {
                let negated = neg_op(rhs.graph, Operand::Node(rhs));
                add_op(rhs.graph, Operand::Node(negated), Operand::from(self))
            }
        }

        impl<'g> Div<Value<'g>> for $scalar {
            type Output = Value<'g>;

            fn div(self, rhs: Value<'g>) -> Value<'g> {
                let reciprocal = powf_op(rhs.graph, Operand::Node(rhs), -1.0);
                mul_op(rhs.graph, Operand::Node(reciprocal), Operand::from(self))
            }
        }
    };
}

impl_reversed_ops!(f64);
impl_reversed_ops!(i32);
