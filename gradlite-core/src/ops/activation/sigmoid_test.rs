#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::{check_grad, GradCheckConfig};
    use crate::error::AutogradError;
    use crate::ops::activation::sigmoid_op;
    use crate::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_sigmoid_forward() -> Result<(), AutogradError> {
        let graph = Graph::new();
        assert_eq!(sigmoid_op(graph.leaf(0.0))?.value(), 0.5);
        assert_relative_eq!(sigmoid_op(graph.leaf(2.0))?.value(), 1.0 / (1.0 + (-2.0f64).exp()));
        assert_eq!(sigmoid_op(graph.leaf(-1000.0))?.value(), 0.0);
        assert_eq!(sigmoid_op(graph.leaf(1000.0))?.value(), 1.0);
        Ok(())
    }

    #[test]
    fn test_sigmoid_local_derivative_from_output() -> Result<(), AutogradError> {
        let graph = Graph::new();
        for x in [-4.0, -0.25, 0.0, 1.5, 6.0] {
            let a = graph.leaf(x);
            let s = sigmoid_op(a)?;
            s.backward();
            let out = s.value();
            assert_eq!(a.grad(), out * (1.0 - out));
        }
        Ok(())
    }

    #[test]
    fn test_sigmoid_grad_check() {
        let result = check_grad(|_, xs| sigmoid_op(xs[0]), &[0.9], &GradCheckConfig::default());
        assert!(result.is_ok(), "Sigmoid grad check failed: {:?}", result.err());
    }
}
