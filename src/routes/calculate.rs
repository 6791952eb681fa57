//! Compute-and-respond handler.
//!
//! Runs the Fibonacci workload inline on the request task. There is no
//! `spawn_blocking` and no cancellation: once started the computation runs to
//! completion on the single runtime worker, even if the client goes away.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::AppError;
use crate::model::CalculationResponse;
use crate::state::AppState;

#[instrument(name = "calculate::calculate", skip(state))]
pub async fn calculate(State(state): State<AppState>) -> Result<Response, AppError> {
    let calculation = state.workload.run();

    tracing::debug!(
        n = calculation.input,
        fib_result = calculation.value,
        calculation_time_ms = calculation.elapsed_ms(),
        "Calculation finished"
    );

    let body = CalculationResponse::from(calculation).to_json_line()?;

    Ok((
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}
