//! The JSON record returned by `/calculate`.

use serde::{Deserialize, Serialize};

use crate::workload::Calculation;

/// Result of one calculation, built per request and serialized immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub fib_result: u64,
    pub calculation_time_ms: u64,
    pub message: String,
}

impl From<Calculation> for CalculationResponse {
    fn from(calculation: Calculation) -> Self {
        Self {
            fib_result: calculation.value,
            calculation_time_ms: calculation.elapsed_ms(),
            message: format!("Successfully calculated Fibonacci({})", calculation.input),
        }
    }
}

impl CalculationResponse {
    /// Encode as a JSON body terminated by a newline.
    pub fn to_json_line(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut body = serde_json::to_vec(self)?;
        body.push(b'\n');
        Ok(body)
    }
}
