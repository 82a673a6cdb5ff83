//! # Training a Single Neuron Binary Classifier
//!
//! Fits `p = sigmoid(w1 * x1 + w2 * x2 + b)` on a tiny, linearly separable
//! dataset with the negative log loss and plain gradient descent.
//!
//! Each step builds a fresh [`Graph`]: the parameters are plain `f64`s between
//! steps and become leaves only while the loss is evaluated and differentiated.
//!
//! ## Execution
//! `cargo run --example single_neuron`

use gradlite_core::{AutogradError, Graph};

const LEARNING_RATE: f64 = 0.5;
const EPOCHS: usize = 200;

fn main() -> Result<(), AutogradError> {
    // (x1, x2, label)
    let dataset = [
        (2.0, 1.0, 1.0),
        (1.5, 2.0, 1.0),
        (3.0, 0.5, 1.0),
        (-1.0, -2.0, 0.0),
        (-2.0, 0.5, 0.0),
        (-0.5, -1.5, 0.0),
    ];
    let mut params = [0.1, -0.1, 0.0]; // w1, w2, b

    for epoch in 0..EPOCHS {
        let mut grads = [0.0; 3];
        let mut total_loss = 0.0;

        for &(x1, x2, label) in &dataset {
            let graph = Graph::new();
            let w1 = graph.leaf_labeled(params[0], "w1");
            let w2 = graph.leaf_labeled(params[1], "w2");
            let b = graph.leaf_labeled(params[2], "b");

            let p = (w1 * x1 + w2 * x2 + b).sigmoid()?;
            let loss = p.neg_log_loss(label)?;
            loss.backward();

            total_loss += loss.value();
            for (acc, leaf) in grads.iter_mut().zip([w1, w2, b]) {
                *acc += leaf.grad();
            }
        }

        for (param, grad) in params.iter_mut().zip(grads) {
            *param -= LEARNING_RATE * grad / dataset.len() as f64;
        }
        if epoch % 20 == 0 {
            println!("epoch {:>3}: mean loss {:.4}", epoch, total_loss / dataset.len() as f64);
        }
    }

    println!("trained params: w1={:.3} w2={:.3} b={:.3}", params[0], params[1], params[2]);
    let graph = Graph::new();
    for &(x1, x2, label) in &dataset {
        let z = graph.leaf(params[0] * x1 + params[1] * x2 + params[2]);
        let p = z.sigmoid()?;
        println!("x=({:>4}, {:>4}) label={} -> {}", x1, x2, label, p);
    }
    Ok(())
}
