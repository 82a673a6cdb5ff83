use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.value())
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("id", &self.id().index())
            .field("data", &self.value())
            .field("grad", &self.grad())
            .field("op", &self.op().to_string())
            .field("label", &self.label())
            .finish()
    }
}

/// Implements a std binary operator for `Value ⊕ Value`, `Value ⊕ f64` and
/// `f64 ⊕ Value` on top of the matching `_op` function. A raw scalar is
/// wrapped into a fresh leaf of the other operand's graph.
///
/// # Panics
/// The operators panic where the `_op` function would return an error
/// (operands from different graphs, division by zero). Call the `_op`
/// function directly to handle those cases.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'g> $trait<Value<'g>> for Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: Value<'g>) -> Value<'g> {
                $op_fn(self, rhs)
                    .unwrap_or_else(|e| panic!("{}: {}", stringify!($op_fn), e))
            }
        }

        impl<'g> $trait<f64> for Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: f64) -> Value<'g> {
                let rhs = self.graph().leaf(rhs);
                $op_fn(self, rhs)
                    .unwrap_or_else(|e| panic!("{}: {}", stringify!($op_fn), e))
            }
        }

        impl<'g> $trait<Value<'g>> for f64 {
            type Output = Value<'g>;

            fn $method(self, rhs: Value<'g>) -> Value<'g> {
                let lhs = rhs.graph().leaf(self);
                $op_fn(lhs, rhs)
                    .unwrap_or_else(|e| panic!("{}: {}", stringify!($op_fn), e))
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);
impl_binary_operator!(Div, div, div_op);

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        neg_op(self).unwrap_or_else(|e| panic!("neg_op: {}", e))
    }
}
