use ordered_float::OrderedFloat;
use rand::Rng;

use crate::error::{Error, Result};
use crate::percolation::Percolation;

/// z-score of the two-sided 95% confidence interval.
const CONFIDENCE_95: f64 = 1.96;

pub fn mean<F: num::Float>(xs: &[F]) -> F {
    let sum = xs.iter().fold(F::zero(), |acc, &x| acc + x);
    sum / F::from(xs.len()).unwrap_or_else(F::nan)
}

/// Sample standard deviation. NaN for fewer than two samples.
pub fn stddev<F: num::Float>(xs: &[F]) -> F {
    if xs.len() < 2 {
        return F::nan();
    }
    let mu = mean(xs);
    let ss = xs.iter().fold(F::zero(), |acc, &x| acc + (x - mu) * (x - mu));
    (ss / F::from(xs.len() - 1).unwrap_or_else(F::nan)).sqrt()
}

/// Opens uniformly random closed sites of a fresh `n`x`n` grid until it percolates and returns
/// the number of sites that were open at that point.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<usize> {
    let mut grid = Percolation::new(n)?;

    // Draw from the closed sites only, so every step opens one.
    let mut closed: Vec<(usize, usize)> = (1..=n)
        .flat_map(|row| (1..=n).map(move |col| (row, col)))
        .collect();

    while !grid.percolates() {
        let pick = rng.gen_range(0..closed.len());
        let (row, col) = closed.swap_remove(pick);
        grid.open(row, col)?;
    }

    Ok(grid.number_of_open_sites())
}

/// Percolation threshold estimates over independent trials.
#[derive(Clone, Debug)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// O(trials · n² log n)
    pub fn run<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize);
        }
        if trials == 0 {
            return Err(Error::InvalidTrials);
        }

        let cells = (n * n) as f64;
        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let opened = run_trial(n, rng)?;
            let threshold = opened as f64 / cells;
            log::debug!(
                "trial {}/{}: {} of {} sites open, threshold {:.5}",
                trial + 1,
                trials,
                opened,
                n * n,
                threshold,
            );
            thresholds.push(threshold);
        }

        Ok(Self { n, thresholds })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    #[inline]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    pub fn stddev(&self) -> f64 {
        stddev(&self.thresholds)
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    pub fn min(&self) -> f64 {
        self.thresholds
            .iter()
            .copied()
            .map(OrderedFloat)
            .min()
            .map_or(f64::NAN, |x| x.0)
    }

    pub fn max(&self) -> f64 {
        self.thresholds
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .map_or(f64::NAN, |x| x.0)
    }
}
