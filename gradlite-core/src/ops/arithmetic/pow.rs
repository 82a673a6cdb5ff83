use crate::autograd::backward_op::Op;
use crate::error::AutogradError;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Raises a node to a constant power: `a ** exponent`.
///
/// The exponent is a plain number, not a node, so no gradient flows to it.
/// Backward: `a` receives `exponent * a ** (exponent - 1) * grad`.
///
/// # Errors
/// - `AutogradError::InvalidExponent` if `exponent` is NaN or infinite.
/// - `AutogradError::PowDomain` if the result is not a real number: a zero base
///   with a negative exponent, or a negative base with a fractional exponent.
pub fn pow_op(a: Value<'_>, exponent: f64) -> Result<Value<'_>, AutogradError> {
    if !exponent.is_finite() {
        return Err(AutogradError::InvalidExponent { exponent });
    }
    let base = a.value();
    let zero_to_negative = base == 0.0 && exponent < 0.0;
    let negative_to_fraction = base < 0.0 && exponent.fract() != 0.0;
    if zero_to_negative || negative_to_fraction {
        return Err(AutogradError::PowDomain { base, exponent });
    }

    apply_unary_op(a, |x| x.powf(exponent), |base| Op::Pow { base, exponent })
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
