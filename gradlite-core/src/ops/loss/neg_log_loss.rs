use crate::autograd::backward_op::Op;
use crate::error::AutogradError;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Negative log loss (binary cross-entropy) of a predicted probability `p`
/// against a true label `y`: `-(y * ln(p) + (1 - y) * ln(1 - p))`.
///
/// Only the term selected by the label is evaluated, so a perfect prediction
/// (`p = 1, y = 1` or `p = 0, y = 0`) gives a loss of 0 instead of `0 * ln(0)`.
///
/// Backward: **assigns** `p.grad = p - y`. This is the closed-form gradient of
/// the loss through a sigmoid output, and it overwrites whatever `p` had
/// accumulated instead of adding to it. It also ignores the loss node's own
/// gradient, so the loss is meant to be the terminal node.
///
/// # Errors
/// - `AutogradError::InvalidLabel` if `label` is neither 0 nor 1.
/// - `AutogradError::ProbabilityOutOfRange` if `p` is outside `[0, 1]` (or NaN).
pub fn neg_log_loss_op(p: Value<'_>, label: f64) -> Result<Value<'_>, AutogradError> {
    if label != 0.0 && label != 1.0 {
        return Err(AutogradError::InvalidLabel { label });
    }
    let prob = p.value();
    if !(0.0..=1.0).contains(&prob) {
        return Err(AutogradError::ProbabilityOutOfRange { value: prob });
    }

    apply_unary_op(
        p,
        |prob| {
            if label == 1.0 {
                -prob.ln()
            } else {
                -(1.0 - prob).ln()
            }
        },
        |input| Op::NegLogLoss { input, label },
    )
}

#[cfg(test)]
#[path = "neg_log_loss_test.rs"]
mod tests;
