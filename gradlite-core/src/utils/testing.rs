use crate::value::Value;

/// Checks that a node's value and gradient are both within `tolerance` of the
/// expected numbers. Panics with the offending field otherwise.
pub fn check_value_near(actual: &Value<'_>, expected_data: f64, expected_grad: f64, tolerance: f64) {
    let data = actual.value();
    let diff = (data - expected_data).abs();
    if !(diff <= tolerance) {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            data, expected_data, diff, tolerance
        );
    }

    let grad = actual.grad();
    let diff = (grad - expected_grad).abs();
    if !(diff <= tolerance) {
        panic!(
            "Grad mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad, expected_grad, diff, tolerance
        );
    }
}
