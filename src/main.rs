use clap::Parser;
use log::info;
use matrix_normal::{MatrixGaussian, MatrixGaussianConfig, MatrixGaussianError};
use nalgebra::DMatrix;
use rand::{distributions::Distribution, rngs::StdRng, SeedableRng};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
///
/// Draw from a matrix normal distribution and summarise the draws
///
struct Cli {
    /// JSON file with `location`, `u_scale` and `v_scale` given row by row
    #[arg(short, long)]
    params: Option<Box<str>>,

    /// number of draws
    #[arg(short, long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    samples: u64,

    /// seed of the random number generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// print the parameters as JSON and exit
    #[arg(long, default_value_t = false)]
    dump_params: bool,
}

const N_ROWS: usize = 3;
const N_COLS: usize = 2;

/// Unit diagonal, `0.5` on the first off-diagonals, `0.25` on the second
fn banded(dim: usize) -> DMatrix<f64> {
    let mut m = DMatrix::<f64>::zeros(dim, dim);
    m.fill_with_identity();
    m.fill_upper_triangle(0.5, 1);
    m.fill_upper_triangle(0.25, 2);
    m.fill_upper_triangle(0.0, 3);
    m.fill_lower_triangle(0.5, 1);
    m.fill_lower_triangle(0.25, 2);
    m.fill_lower_triangle(0.0, 3);
    m
}

fn default_distribution() -> Result<MatrixGaussian, MatrixGaussianError> {
    MatrixGaussian::new(
        DMatrix::from_fn(N_ROWS, N_COLS, |i, j| (i + j) as f64),
        banded(N_ROWS),
        banded(N_COLS),
    )
}

fn main() -> Result<(), MatrixGaussianError> {
    env_logger::init();
    let args = Cli::parse();

    let mg = match args.params.as_deref() {
        Some(file) => MatrixGaussianConfig::from_json_file(file)?.build()?,
        None => default_distribution()?,
    };

    if args.dump_params {
        println!("{}", MatrixGaussianConfig::from(&mg).to_json_string()?);
        return Ok(());
    }

    let (n, p) = mg.shape();
    info!("drawing {} samples of {}x{} matrices", args.samples, n, p);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let begin = std::time::Instant::now();
    let (sum, ln_sum) = (&mg)
        .sample_iter(&mut rng)
        .take(args.samples as usize)
        .try_fold((DMatrix::zeros(n, p), 0.0), |(sum, ln_sum), x| {
            let ln_p = mg.ln_density(&x)?;
            Ok::<_, MatrixGaussianError>((sum + x, ln_sum + ln_p))
        })?;
    let elapsed = begin.elapsed();

    let k = args.samples as f64;
    println!("Took {} seconds", elapsed.as_secs_f32());
    println!("location: {}", mg.location());
    println!("empirical mean: {}", sum / k);
    println!("mean log density: {:.3}", ln_sum / k);
    println!("log normalizer: {:.3}", mg.ln_normalizer());
    Ok(())
}
