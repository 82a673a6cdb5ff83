use gradlite_core::{Graph, Value};

// Helper to create several leaves at once.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn create_leaves<'g>(graph: &'g Graph, data: &[f64]) -> Vec<Value<'g>> {
    data.iter().map(|&x| graph.leaf(x)).collect()
}

// Asserts a gradient is within an absolute tolerance, with a readable message.
#[allow(dead_code)]
pub(crate) fn assert_grad_near(value: &Value<'_>, expected: f64, tolerance: f64) {
    let grad = value.grad();
    assert!(
        (grad - expected).abs() <= tolerance,
        "grad of {} is {}, expected {} (tolerance {})",
        value,
        grad,
        expected,
        tolerance
    );
}
