//! Random fills. Generators are passed in by the caller so fills are
//! reproducible under a seeded [`rand::rngs::StdRng`].

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use rand_distr::StandardNormal;
use statrs::distribution::Normal;

use crate::config::{FillDistribution, RandomConfig};
use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;

enum Sampler {
    Gaussian(Normal),
    Uniform,
}

impl Sampler {
    fn new(distribution: &FillDistribution) -> Result<Self> {
        match *distribution {
            FillDistribution::Gaussian { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() {
                    log::warn!(
                        "Non-finite Gaussian parameters: mean={}, std_dev={}",
                        mean,
                        std_dev
                    );
                }
                let normal = Normal::new(mean, std_dev)
                    .map_err(|e| MatrixError::InvalidDistribution(e.to_string()))?;
                Ok(Sampler::Gaussian(normal))
            }
            FillDistribution::Uniform => Ok(Sampler::Uniform),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Gaussian(normal) => normal.sample(rng),
            Sampler::Uniform => Standard.sample(rng),
        }
    }
}

impl Matrix {
    /// A `rows x columns` matrix filled according to `config`.
    pub fn random(rows: usize, columns: usize, config: &RandomConfig) -> Result<Matrix> {
        let mut rng = config.rng();
        let mut m = Matrix::new(rows, columns)?;
        m.fill_from(&mut rng, &config.distribution)?;
        Ok(m)
    }

    /// Replaces the buffer with `rows * columns` draws from `distribution`.
    /// Strides revert to contiguous row-major.
    pub fn fill_from<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        distribution: &FillDistribution,
    ) -> Result<&mut Self> {
        let sampler = Sampler::new(distribution)?;
        let len = self.rows() * self.columns();
        log::trace!("filling {} from {:?}", self.shape(), distribution);
        let data: Vec<f64> = (0..len).map(|_| sampler.sample(rng)).collect();
        Ok(self.replace_buffer(data))
    }

    /// Refills with standard Gaussian draws.
    ///
    /// The name is kept for compatibility: despite it, the values come from
    /// `N(0, 1)`. [`Matrix::randn`] is the uniform one.
    pub fn rand_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let len = self.rows() * self.columns();
        let data: Vec<f64> = (0..len).map(|_| StandardNormal.sample(rng)).collect();
        self.replace_buffer(data)
    }

    /// Refills with uniform draws from `[0, 1)`. See [`Matrix::rand_uniform`].
    pub fn randn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let len = self.rows() * self.columns();
        let data: Vec<f64> = (0..len).map(|_| Standard.sample(rng)).collect();
        self.replace_buffer(data)
    }
}
