#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::{check_grad, GradCheckConfig};
    use crate::error::AutogradError;
    use crate::ops::arithmetic::div_op;
    use crate::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_div_forward_backward() -> Result<(), AutogradError> {
        let graph = Graph::new();
        let a = graph.leaf(6.0);
        let b = graph.leaf(2.0);
        let c = div_op(a, b)?;
        assert_relative_eq!(c.value(), 3.0);
        c.backward();
        assert_relative_eq!(a.grad(), 0.5);
        // d/db (a / b) = -a / b^2
        assert_relative_eq!(b.grad(), -1.5);
        Ok(())
    }

    #[test]
    fn test_div_by_zero_is_domain_error() {
        let graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.leaf(0.0);
        let result = div_op(a, b);
        assert_eq!(
            result.err(),
            Some(AutogradError::PowDomain {
                base: 0.0,
                exponent: -1.0
            })
        );
        assert_eq!(graph.len(), 2);
    }

    #[test]
    #[should_panic(expected = "div_op")]
    fn test_div_operator_panics_on_zero() {
        let graph = Graph::new();
        let a = graph.leaf(1.0);
        let _ = a / 0.0;
    }

    #[test]
    fn test_div_reverse_scalar() {
        let graph = Graph::new();
        let x = graph.leaf(4.0);
        let y = 2.0 / x;
        assert_relative_eq!(y.value(), 0.5);
        y.backward();
        // d/dx (2 / x) = -2 / x^2
        assert_relative_eq!(x.grad(), -0.125);
    }

    #[test]
    fn test_div_grad_check() {
        let result = check_grad(
            |_, xs| div_op(xs[0], xs[1]),
            &[1.7, -0.6],
            &GradCheckConfig::default(),
        );
        assert!(result.is_ok(), "Div grad check failed: {:?}", result.err());
    }
}
