use approx::assert_abs_diff_eq;
use itertools::Itertools;
use matrix_normal::MatrixGaussian;
use nalgebra::DMatrix;
use rand::{distributions::Distribution, rngs::StdRng, SeedableRng};

const NUM_SAMPLES: usize = 50_000;

fn setup() -> (MatrixGaussian, Vec<DMatrix<f64>>) {
    let location = DMatrix::from_row_slice(2, 3, &[1.0, -2.0, 0.5, 0.0, 3.0, -1.0]);
    let u_scale = DMatrix::from_row_slice(2, 2, &[2.0, 0.5, 0.5, 1.0]);
    let v_scale = DMatrix::from_row_slice(3, 3, &[1.0, 0.3, 0.0, 0.3, 2.0, 0.4, 0.0, 0.4, 1.5]);
    let mg = MatrixGaussian::new(location, u_scale, v_scale).unwrap();

    let mut rng = StdRng::seed_from_u64(20231015);
    let draws = (&mg).sample_iter(&mut rng).take(NUM_SAMPLES).collect();
    (mg, draws)
}

#[test]
fn empirical_mean_converges_to_location() {
    let (mg, draws) = setup();
    let (n, p) = mg.shape();
    let mean = draws.iter().fold(DMatrix::zeros(n, p), |acc, x| acc + x) / NUM_SAMPLES as f64;

    for (i, j) in (0..n).cartesian_product(0..p) {
        assert_abs_diff_eq!(mean[(i, j)], mg.location()[(i, j)], epsilon = 0.05);
    }
}

#[test]
fn row_and_column_covariances_converge() {
    let (mg, draws) = setup();
    let (n, p) = mg.shape();

    // E[(X - M)(X - M)^T] = tr(V) U and E[(X - M)^T (X - M)] = tr(U) V
    let mut row_cov = DMatrix::<f64>::zeros(n, n);
    let mut col_cov = DMatrix::<f64>::zeros(p, p);
    for x in &draws {
        let d = x - mg.location();
        row_cov += &d * d.transpose();
        col_cov += d.transpose() * &d;
    }
    row_cov /= NUM_SAMPLES as f64;
    col_cov /= NUM_SAMPLES as f64;

    let expected_row = mg.u_scale() * mg.v_scale().trace();
    let expected_col = mg.v_scale() * mg.u_scale().trace();

    for (i, k) in (0..n).cartesian_product(0..n) {
        assert_abs_diff_eq!(row_cov[(i, k)], expected_row[(i, k)], epsilon = 0.25);
    }
    for (j, l) in (0..p).cartesian_product(0..p) {
        assert_abs_diff_eq!(col_cov[(j, l)], expected_col[(j, l)], epsilon = 0.25);
    }
}

#[test]
fn draws_are_reproducible_for_a_seed() {
    let (mg, draws) = setup();
    let mut rng = StdRng::seed_from_u64(20231015);
    let first = mg.sample(&mut rng);
    assert_eq!(first, draws[0]);
}
