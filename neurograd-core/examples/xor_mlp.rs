use neurograd_core::{
    autograd::to_dot,
    error::NeuroGradError,
    model::mlp,
    nn::{losses::mse_loss, module::Module},
    optim::{adam::AdamOptimizer, optimizer_trait::Optimizer},
    values, Value,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// XOR with targets in {-1, 1}: 2 inputs -> 4 tanh units -> 1 output.
const INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
const TARGETS: [f64; 4] = [-1.0, 1.0, 1.0, -1.0];

fn main() -> Result<(), NeuroGradError> {
    let _ = env_logger::builder().try_init();

    let mut rng = StdRng::seed_from_u64(1337);
    let model = mlp(&[2, 4, 1], &mut rng)?;
    println!("MLP created with {} parameters", model.num_parameters());

    let mut optimizer = AdamOptimizer::new(model.parameters(), 0.05)?;
    let targets = values(&TARGETS);

    let num_epochs = 300;
    for epoch in 0..num_epochs {
        let mut predictions: Vec<Value> = Vec::with_capacity(INPUTS.len());
        for x in INPUTS.iter() {
            predictions.extend(model.forward(&values(x))?);
        }
        let loss = mse_loss(&predictions, &targets)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if epoch % 50 == 0 || epoch + 1 == num_epochs {
            println!("Epoch [{}/{}], Loss: {:.4}", epoch + 1, num_epochs, loss.data());
        }
    }

    println!("\nPredictions:");
    for (x, t) in INPUTS.iter().zip(TARGETS) {
        let out = model.forward(&values(x))?;
        println!("  {:?} -> {:+.3} (target {:+})", x, out[0].data(), t);
    }

    // Graph of one forward pass, for `dot -Tsvg`
    let neuron_out = model.forward(&values(&INPUTS[1]))?;
    neuron_out[0].backward();
    if std::env::var_os("NEUROGRAD_DOT").is_some() {
        println!("\n{}", to_dot(&neuron_out[0]));
    }
    Ok(())
}
