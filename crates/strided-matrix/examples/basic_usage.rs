use rand::rngs::StdRng;
use rand::SeedableRng;
use strided_matrix::{Matrix, RandomConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]])?;

    println!("a · b =\n{}", a.dot(&b)?);
    println!("a + b =\n{}", &a + &b);
    println!("aᵀ ({}) =\n{}", a.transpose().shape(), a.transpose());

    let mut rng = StdRng::seed_from_u64(42);
    let mut noise = Matrix::new(2, 2)?;
    noise.randn(&mut rng);
    println!("a + noise =\n{}", a.add_elementwise(&noise)?);

    let gaussian = Matrix::random(3, 3, &RandomConfig::seeded(7))?;
    println!("gaussian sum = {:.4}", gaussian.sum());

    Ok(())
}
