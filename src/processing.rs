use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Sum,
    Mean,
    Max,
    Min,
}

impl Operation {
    pub fn apply(self, values: &[f64]) -> Result<f64, DataError> {
        if values.is_empty() {
            return Err(DataError::EmptyInput);
        }

        let result = match self {
            Operation::Sum => values.iter().sum(),
            Operation::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Operation::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Operation::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        };
        Ok(result)
    }
}

impl FromStr for Operation {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(Operation::Sum),
            "mean" => Ok(Operation::Mean),
            "max" => Ok(Operation::Max),
            "min" => Ok(Operation::Min),
            other => Err(DataError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Sum => "sum",
            Operation::Mean => "mean",
            Operation::Max => "max",
            Operation::Min => "min",
        };
        f.write_str(name)
    }
}

/// Applies the named operation (`sum`, `mean`, `max` or `min`) to `values`.
///
/// Empty input is an error for every operation, including `sum`.
pub fn reduce(values: &[f64], operation: &str) -> Result<f64, DataError> {
    operation.parse::<Operation>()?.apply(values)
}
