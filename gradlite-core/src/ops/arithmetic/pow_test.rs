#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::{check_grad, GradCheckConfig};
    use crate::error::AutogradError;
    use crate::ops::arithmetic::pow_op;
    use crate::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_pow_forward() -> Result<(), AutogradError> {
        let graph = Graph::new();
        let a = graph.leaf(4.0);
        for exponent in [2.0, 3.0, -1.0, -2.0, 0.5, 1.5, 0.0] {
            let out = pow_op(a, exponent)?;
            assert_relative_eq!(out.value(), 4.0f64.powf(exponent));
        }
        Ok(())
    }

    #[test]
    fn test_pow_backward_square() -> Result<(), AutogradError> {
        let graph = Graph::new();
        let x = graph.leaf(3.0);
        let f = pow_op(x, 2.0)?;
        f.backward();
        assert_relative_eq!(f.value(), 9.0);
        assert_relative_eq!(x.grad(), 6.0);
        Ok(())
    }

    #[test]
    fn test_pow_backward_fractional() -> Result<(), AutogradError> {
        let graph = Graph::new();
        let x = graph.leaf(4.0);
        let f = pow_op(x, 0.5)?;
        f.backward();
        assert_relative_eq!(f.value(), 2.0);
        // 0.5 * 4^-0.5
        assert_relative_eq!(x.grad(), 0.25);
        Ok(())
    }

    #[test]
    fn test_pow_negative_base_integer_exponent() -> Result<(), AutogradError> {
        let graph = Graph::new();
        let x = graph.leaf(-2.0);
        let f = pow_op(x, 3.0)?;
        f.backward();
        assert_relative_eq!(f.value(), -8.0);
        assert_relative_eq!(x.grad(), 12.0);
        Ok(())
    }

    #[test]
    fn test_pow_invalid_exponent() {
        let graph = Graph::new();
        let x = graph.leaf(2.0);
        assert!(matches!(
            pow_op(x, f64::NAN),
            Err(AutogradError::InvalidExponent { .. })
        ));
        assert_eq!(
            pow_op(x, f64::INFINITY).err(),
            Some(AutogradError::InvalidExponent {
                exponent: f64::INFINITY
            })
        );
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_pow_domain_errors() {
        let graph = Graph::new();
        let zero = graph.leaf(0.0);
        let negative = graph.leaf(-8.0);
        assert_eq!(
            pow_op(zero, -2.0).err(),
            Some(AutogradError::PowDomain {
                base: 0.0,
                exponent: -2.0
            })
        );
        assert_eq!(
            pow_op(negative, 0.5).err(),
            Some(AutogradError::PowDomain {
                base: -8.0,
                exponent: 0.5
            })
        );
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_pow_grad_check() {
        let config = GradCheckConfig::default();
        for exponent in [2.0, 3.0, -1.0, 0.5, 2.5] {
            let result = check_grad(|_, xs| pow_op(xs[0], exponent), &[1.3], &config);
            assert!(result.is_ok(), "Pow grad check failed for exponent {}: {:?}", exponent, result.err());
        }
    }
}
