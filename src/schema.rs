use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One benchmark result.
///
/// Optional fields are left out of the JSON entirely when absent, so a bare
/// record serializes as `{"time": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub time: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}

impl ResultRecord {
    pub fn new(time: f64) -> Self {
        ResultRecord {
            time,
            name: None,
            size: None,
            framework: None,
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        ResultRecord {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn with_size(self, size: usize) -> Self {
        ResultRecord {
            size: Some(size),
            ..self
        }
    }

    pub fn with_framework(self, framework: impl Into<String>) -> Self {
        ResultRecord {
            framework: Some(framework.into()),
            ..self
        }
    }
}

/// Records keyed by input size. Serializes as a JSON object with string keys.
pub type SweepResult = BTreeMap<usize, ResultRecord>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
}

impl TimeUnit {
    pub fn scale(self, secs: f64) -> f64 {
        match self {
            TimeUnit::Seconds => secs,
            TimeUnit::Milliseconds => secs * 1e3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
        }
    }
}
