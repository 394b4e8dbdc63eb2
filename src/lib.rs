use clap::ValueEnum;

pub mod benches;
pub mod error;
pub mod harness;
pub mod inputs;
pub mod schema;

/// Benchmark scripts that take an input size.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum Script {
    /// Sum of a uniform random ndarray.
    Sum,
    /// Generate a uniform random ndarray.
    Rand,
    /// Generate a standard-normal random ndarray.
    Randn,
    /// Hand-written accumulation loop over a Vec<f64>.
    LoopSum,
}

impl Script {
    /// Label written to the record's `name` field.
    pub fn name(&self) -> &'static str {
        match self {
            Script::Sum | Script::LoopSum => "sum",
            Script::Rand => "rand",
            Script::Randn => "randn",
        }
    }

    /// Library under test, written to the record's `framework` field.
    pub fn framework(&self) -> &'static str {
        match self {
            Script::Sum | Script::Rand | Script::Randn => benches::array::FRAMEWORK,
            Script::LoopSum => benches::loop_sum::FRAMEWORK,
        }
    }
}
