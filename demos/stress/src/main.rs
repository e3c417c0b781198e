#[macro_use]
extern crate log;

use std::time::Instant;

use dialoguer::{theme::ColorfulTheme, Select};
use logreg::{FitOptions, LogisticRegression, Params, NUM_FEATURES};
use nalgebra::{DMatrix, Dim, Matrix};
use nanorand::{Rng, WyRand};

const TRAIN_LEN: usize = 160;
const TEST_LEN: usize = 40;
const SEED: Option<u64> = Some(0);

struct Scenario {
    name: &'static str,
    /// Half-width of the overlap between the two clusters
    spread: f64,
}

pub(crate) fn main() {
    pretty_env_logger::init();

    let scenarios = vec![
        Scenario {
            name: "clean separation",
            spread: 0.0,
        },
        Scenario {
            name: "noisy overlap",
            spread: 0.4,
        },
    ];
    let names: Vec<&str> = scenarios.iter().map(|s| s.name).collect();
    let e = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select dataset scenario")
        .items(&names)
        .default(0)
        .interact()
        .unwrap();
    let scenario = &scenarios[e];

    let mut rng = match SEED {
        Some(seed) => WyRand::new_seed(seed),
        None => WyRand::new(),
    };
    let (x, y) = generate_samples(&mut rng, TRAIN_LEN + TEST_LEN, scenario.spread);
    info!("generated {} samples of {} features each", x.nrows(), x.ncols());

    let train_x = x.rows(0, TRAIN_LEN).into_owned();
    let train_y = y.rows(0, TRAIN_LEN).into_owned();
    let test_x = x.rows(TRAIN_LEN, TEST_LEN).into_owned();
    let test_y = y.rows(TRAIN_LEN, TEST_LEN).into_owned();

    let mut model = LogisticRegression::new(Params {
        seed: SEED,
        ..Default::default()
    });

    let t0 = Instant::now();
    model
        .fit(&train_x, &train_y, FitOptions::default())
        .expect("training matrices have valid shapes");
    info!("training done in: {}ms", t0.elapsed().as_millis());
    debug!("trained weights: {}", model.weights());

    let train_preds = model.predict(&train_x).expect("trained on this matrix");
    let test_preds = model.predict(&test_x).expect("same feature count as training");

    info!(
        "{}: train accuracy: {:.3}, test accuracy: {:.3}",
        scenario.name,
        accuracy(train_preds.as_slice(), &train_y),
        accuracy(test_preds.as_slice(), &test_y)
    );
}

/// Draw interleaved "calm" (label 0, features around -0.5) and "stressed"
/// (label 1, features around +0.5) samples, with the clusters bleeding
/// into each other by `spread`
fn generate_samples(rng: &mut WyRand, rows: usize, spread: f64) -> (DMatrix<f64>, DMatrix<f64>) {
    let mut features = Vec::with_capacity(rows * NUM_FEATURES);
    let mut labels = Vec::with_capacity(rows);
    for i in 0..rows {
        let stressed = i % 2 == 0;
        labels.push(if stressed { 1.0 } else { 0.0 });
        for _ in 0..NUM_FEATURES {
            let u = rng.generate::<f64>();
            let v = if stressed {
                u * (1.0 + spread) - spread
            } else {
                u * (1.0 + spread) - 1.0
            };
            features.push(v);
        }
    }

    let x: DMatrix<f64> = Matrix::from_fn_generic(
        Dim::from_usize(rows),
        Dim::from_usize(NUM_FEATURES),
        |i, j| features[i * NUM_FEATURES + j],
    );
    let y: DMatrix<f64> =
        Matrix::from_vec_generic(Dim::from_usize(rows), Dim::from_usize(1), labels);

    (x, y)
}

/// Fraction of probabilities landing on the labelled side of 0.5
fn accuracy(preds: &[f64], labels: &DMatrix<f64>) -> f64 {
    let hits = preds
        .iter()
        .zip(labels.column(0).iter())
        .filter(|(p, l)| (**p > 0.5) == (**l > 0.5))
        .count();

    hits as f64 / preds.len() as f64
}
