use crate::autograd::graph::Graph;
use crate::error::AutogradError;
use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Tunables for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference.
    pub epsilon: f64,
    /// Accepted absolute or relative difference between both gradients.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and returns the
/// terminal node. It is called once for the analytical pass and twice per input
/// for `f(x + eps)` and `f(x - eps)`, each time on a new graph.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, AutogradError>,
{
    let epsilon = config.epsilon;

    // --- Analytical pass ---
    let graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<Value<'_>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();
    debug!(
        "check_grad: output = {}, analytical grads = {:?}",
        output.value(),
        analytical_grads
    );

    // --- Numerical pass, one input at a time ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate_perturbed(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Evaluates `func` on a new graph with input `index` shifted by `delta`.
fn evaluate_perturbed<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, AutogradError>,
{
    let graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<Value<'_>> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| graph.leaf(if j == index { x + delta } else { x }))
        .collect();
    let output = func(&graph, &leaves)?;
    Ok(output.value())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
