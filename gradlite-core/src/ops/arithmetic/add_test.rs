#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::{check_grad, GradCheckConfig};
    use crate::error::AutogradError;
    use crate::ops::arithmetic::add_op;
    use crate::utils::testing::check_value_near;
    use crate::Graph;

    #[test]
    fn test_add_forward() -> Result<(), AutogradError> {
        let graph = Graph::new();
        let a = graph.leaf(2.0);
        let b = graph.leaf(-3.5);
        let c = add_op(a, b)?;
        assert_eq!(c.value(), -1.5);
        assert_eq!(c.parents().len(), 2);
        assert_eq!(graph.len(), 3);
        Ok(())
    }

    #[test]
    fn test_add_backward() -> Result<(), AutogradError> {
        let graph = Graph::new();
        let a = graph.leaf(2.0);
        let b = graph.leaf(3.0);
        let c = add_op(a, b)?;
        c.backward();
        check_value_near(&c, 5.0, 1.0, 0.0);
        check_value_near(&a, 2.0, 1.0, 0.0);
        check_value_near(&b, 3.0, 1.0, 0.0);
        Ok(())
    }

    #[test]
    fn test_add_same_node_twice() -> Result<(), AutogradError> {
        let graph = Graph::new();
        let x = graph.leaf(3.0);
        let y = add_op(x, x)?;
        assert_eq!(y.value(), 6.0);
        assert_eq!(y.parents().len(), 1);
        y.backward();
        assert_eq!(x.grad(), 2.0);
        Ok(())
    }

    #[test]
    fn test_add_graph_mismatch() {
        let g1 = Graph::new();
        let g2 = Graph::new();
        let a = g1.leaf(1.0);
        let b = g2.leaf(2.0);
        let result = add_op(a, b);
        assert!(matches!(result, Err(AutogradError::GraphMismatch { .. })));
        assert_eq!(g1.len(), 1);
        assert_eq!(g2.len(), 1);
    }

    #[test]
    fn test_add_scalar_operands() {
        let graph = Graph::new();
        let x = graph.leaf(1.5);
        let right = x + 2.0;
        let left = 2.0 + x;
        assert_eq!(right.value(), 3.5);
        assert_eq!(left.value(), 3.5);
    }

    #[test]
    fn test_add_grad_check() {
        let result = check_grad(
            |_, xs| add_op(xs[0], xs[1]),
            &[0.3, -1.2],
            &GradCheckConfig::default(),
        );
        assert!(result.is_ok(), "Add grad check failed: {:?}", result.err());
    }
}
