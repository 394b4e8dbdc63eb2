
use crate::error::Result;
use crate::harness::{BenchConfig, EstimateError, Measured, Repetitions};
use crate::schema::{ResultRecord, SweepResult, TimeUnit};
use crate::Script;

/// Input sizes visited by a sweep unless overridden.
pub const SWEEP_SIZES: [usize; 6] = [64, 128, 256, 512, 1024, 2048];

/// Sized scripts report seconds per call.
pub const SIZED_UNIT: TimeUnit = TimeUnit::Seconds;

pub fn measure(
    cfg: &BenchConfig,
    script: Script,
    size: usize,
    reps: Repetitions,
) -> std::result::Result<Measured, EstimateError> {
    match script {
        Script::Sum => array::sum(cfg, size, reps),
        Script::Rand => array::rand(cfg, size, reps),
        Script::Randn => array::randn(cfg, size, reps),
        Script::LoopSum => loop_sum::sum(cfg, size, reps),
    }
}

pub fn run(cfg: &BenchConfig, script: Script, size: usize, reps: Repetitions) -> Result<ResultRecord> {
    let m = measure(cfg, script, size, reps)?;
    tracing::info!(
        script = script.name(),
        size,
        iters = m.iters,
        unit = SIZED_UNIT.as_str(),
        "benchmark timed"
    );
    Ok(ResultRecord::new(SIZED_UNIT.scale(m.secs_per_iter()))
        .with_name(script.name())
        .with_size(size)
        .with_framework(script.framework()))
}

/// Time `script` at every size; the first failure aborts the whole sweep.
pub fn sweep(
    cfg: &BenchConfig,
    script: Script,
    sizes: &[usize],
    reps: Repetitions,
) -> Result<SweepResult> {
    let mut out = SweepResult::new();
    for &size in sizes {
        let m = measure(cfg, script, size, reps)?;
        tracing::info!(script = script.name(), size, iters = m.iters, "sweep point timed");
        out.insert(size, ResultRecord::new(SIZED_UNIT.scale(m.secs_per_iter())));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use crate::harness::Profile;

    fn cfg() -> BenchConfig {
        BenchConfig {
            profile: Profile::Quick,
            seed: 42,
        }
    }

    #[test]
    fn sized_record_carries_label_and_size() {
        let rec = run(&cfg(), Script::Sum, 64, Repetitions::Fixed(10)).unwrap();
        assert_eq!(rec.size, Some(64));
        assert_eq!(rec.name.as_deref(), Some("sum"));
        assert_eq!(rec.framework.as_deref(), Some("ndarray"));
        assert!(rec.time >= 0.0);

        let rec = run(&cfg(), Script::LoopSum, 64, Repetitions::Fixed(10)).unwrap();
        assert_eq!(rec.name.as_deref(), Some("sum"));
        assert_eq!(rec.framework.as_deref(), Some("rust"));

        let rec = run(&cfg(), Script::Randn, 32, Repetitions::Fixed(10)).unwrap();
        assert_eq!(rec.name.as_deref(), Some("randn"));
    }

    #[test]
    fn sweep_covers_every_size() {
        let sizes = [64, 128, 256];
        let result = sweep(&cfg(), Script::Rand, &sizes, Repetitions::Fixed(5)).unwrap();
        assert_eq!(result.keys().copied().collect::<Vec<_>>(), sizes.to_vec());
        assert!(result.values().all(|r| r.time >= 0.0 && r.name.is_none() && r.size.is_none()));
    }

    #[test]
    fn sweep_aborts_on_invalid_repetitions() {
        let err = sweep(&cfg(), Script::Sum, &SWEEP_SIZES, Repetitions::Fixed(0)).unwrap_err();
        assert!(matches!(err, BenchError::Estimate(EstimateError::InvalidRepetitions(0))));
    }
}
