//! Elapsed-time estimation.
//!
//! Every benchmark funnels through [`try_measure`]: either a fixed number of
//! back-to-back calls, or an auto-calibrated batch whose size walks the
//! 1-2-5 decade sequence until the batch takes at least a minimum duration.

use std::convert::Infallible;
use std::error::Error as StdError;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Minimum total time of the reported batch when auto-calibrating.
pub const DEFAULT_MIN_BATCH_TIME: Duration = Duration::from_millis(200);

/// Multipliers applied within each decade of trial batch sizes.
const CALIBRATION_STEPS: [u64; 3] = [1, 2, 5];

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("repetition count must be positive, got {0}")]
    InvalidRepetitions(u64),
    /// The timed operation failed; the original error is kept as the source.
    #[error("timed operation failed: {0}")]
    Operation(#[source] BoxError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repetitions {
    Fixed(u64),
    Auto,
}

impl Repetitions {
    /// Reject a zero count before anything is run.
    pub fn check(self) -> Result<Self, EstimateError> {
        match self {
            Repetitions::Fixed(0) => Err(EstimateError::InvalidRepetitions(0)),
            reps => Ok(reps),
        }
    }
}

impl From<Option<u64>> for Repetitions {
    fn from(v: Option<u64>) -> Self {
        match v {
            Some(n) => Repetitions::Fixed(n),
            None => Repetitions::Auto,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    Quick,
    Full,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Quick => "quick",
            Profile::Full => "full",
        }
    }
}

#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub profile: Profile,
    pub seed: u64,
}

impl BenchConfig {
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    /// Repetition count used by sized scripts when none is requested.
    pub fn iters(&self) -> u64 {
        match self.profile {
            Profile::Quick => 100,
            Profile::Full => 1_000,
        }
    }

    pub fn min_batch_time(&self) -> Duration {
        match self.profile {
            Profile::Quick => DEFAULT_MIN_BATCH_TIME,
            Profile::Full => Duration::from_secs(1),
        }
    }

    pub fn measure<T>(
        &self,
        reps: Repetitions,
        f: impl FnMut() -> T,
    ) -> Result<Measured, EstimateError> {
        measure(reps, self.min_batch_time(), f)
    }
}

#[derive(Clone, Debug)]
pub struct Measured {
    /// Size of the batch the average was taken over.
    pub iters: u64,
    /// Total invocations, including discarded calibration batches.
    pub calls: u64,
    pub total_ns: u128,
    pub ns_per_iter: f64,
}

impl Measured {
    fn new(iters: u64, calls: u64, elapsed: Duration) -> Self {
        let total_ns = elapsed.as_nanos();
        let denom = iters.max(1) as f64;
        Measured {
            iters,
            calls,
            total_ns,
            ns_per_iter: (total_ns as f64) / denom,
        }
    }

    pub fn secs_per_iter(&self) -> f64 {
        self.ns_per_iter / 1e9
    }
}

fn time_batch<T, E>(
    iters: u64,
    f: &mut impl FnMut() -> Result<T, E>,
) -> Result<Duration, EstimateError>
where
    E: Into<BoxError>,
{
    let start = Instant::now();
    for _ in 0..iters {
        let out = f().map_err(|e| EstimateError::Operation(e.into()))?;
        black_box(out);
    }
    Ok(start.elapsed())
}

/// Time a fallible operation.
///
/// The first `Err` aborts the measurement: no further calls are made and the
/// error is returned unchanged inside [`EstimateError::Operation`].
pub fn try_measure<T, E>(
    reps: Repetitions,
    min_batch_time: Duration,
    mut f: impl FnMut() -> Result<T, E>,
) -> Result<Measured, EstimateError>
where
    E: Into<BoxError>,
{
    let measured = match reps.check()? {
        Repetitions::Fixed(n) => Measured::new(n, n, time_batch(n, &mut f)?),
        Repetitions::Auto => {
            let mut calls: u64 = 0;
            let mut decade: u64 = 1;
            'calibrate: loop {
                for step in CALIBRATION_STEPS {
                    let iters = decade.saturating_mul(step);
                    let elapsed = time_batch(iters, &mut f)?;
                    calls = calls.saturating_add(iters);
                    if elapsed >= min_batch_time || iters == u64::MAX {
                        break 'calibrate Measured::new(iters, calls, elapsed);
                    }
                }
                decade = decade.saturating_mul(10);
            }
        }
    };

    tracing::debug!(
        iters = measured.iters,
        calls = measured.calls,
        ns_per_iter = measured.ns_per_iter,
        "measurement complete"
    );
    Ok(measured)
}

pub fn measure<T>(
    reps: Repetitions,
    min_batch_time: Duration,
    mut f: impl FnMut() -> T,
) -> Result<Measured, EstimateError> {
    try_measure(reps, min_batch_time, || Ok::<T, Infallible>(f()))
}

/// Average seconds per call of `f`.
///
/// With `Some(n)` the operation runs exactly `n` times; with `None` the
/// repetition count is auto-calibrated against [`DEFAULT_MIN_BATCH_TIME`].
pub fn estimate<T>(f: impl FnMut() -> T, repetitions: Option<u64>) -> Result<f64, EstimateError> {
    measure(repetitions.into(), DEFAULT_MIN_BATCH_TIME, f).map(|m| m.secs_per_iter())
}

pub fn try_estimate<T, E>(
    f: impl FnMut() -> Result<T, E>,
    repetitions: Option<u64>,
) -> Result<f64, EstimateError>
where
    E: Into<BoxError>,
{
    try_measure(repetitions.into(), DEFAULT_MIN_BATCH_TIME, f).map(|m| m.secs_per_iter())
}
