//! Canonical default configuration values.
//!
//! Responsibilities:
//! - Define the default hyperparameters for every forecasting model section.
//! - Expose them as a process-wide immutable value.
//!
//! Does NOT handle:
//! - Merging overrides onto the defaults (see `merge.rs`).
//! - Persisting configuration to disk (see `store.rs`).
//!
//! Invariants:
//! - The default configuration is built once and never mutated; callers
//!   that need a working copy must clone it.
//! - Every known section (`prophet`, `random_forest`, `xgboost`, `var`,
//!   `sarimax`, `general`) is present.

use std::sync::LazyLock;

use serde_json::json;

use crate::constants::{
    DEFAULT_PROPHET_CHANGEPOINT_PRIOR_SCALE, DEFAULT_PROPHET_CHANGEPOINT_RANGE,
    DEFAULT_PROPHET_HOLIDAYS_PRIOR_SCALE, DEFAULT_PROPHET_SEASONALITY_PRIOR_SCALE,
    DEFAULT_PROPHET_YEARLY_FOURIER_ORDER, DEFAULT_RF_MAX_DEPTH, DEFAULT_RF_N_ESTIMATORS,
    DEFAULT_SARIMAX_ORDER, DEFAULT_SARIMAX_SEASONAL_ORDER, DEFAULT_VAR_LAGS,
    DEFAULT_XGB_LEARNING_RATE, DEFAULT_XGB_MAX_DEPTH, DEFAULT_XGB_N_ESTIMATORS,
};
use crate::merge::Configuration;

static DEFAULT_CONFIGURATION: LazyLock<Configuration> = LazyLock::new(|| {
    let value = json!({
        "prophet": {
            "changepoint_prior_scale": DEFAULT_PROPHET_CHANGEPOINT_PRIOR_SCALE,
            "changepoint_range": DEFAULT_PROPHET_CHANGEPOINT_RANGE,
            "seasonality_prior_scale": DEFAULT_PROPHET_SEASONALITY_PRIOR_SCALE,
            "holidays_prior_scale": DEFAULT_PROPHET_HOLIDAYS_PRIOR_SCALE,
            "yearly_seasonality": true,
            "yearly_fourier_order": DEFAULT_PROPHET_YEARLY_FOURIER_ORDER,
            "weekly_seasonality": false,
            "daily_seasonality": false,
            "use_holidays": true,
            "use_iq_value_scaled": false,
        },
        "random_forest": {
            "n_estimators": DEFAULT_RF_N_ESTIMATORS,
            "max_depth": DEFAULT_RF_MAX_DEPTH,
            "use_holidays": true,
            "use_iq_value_scaled": false,
        },
        "xgboost": {
            "n_estimators": DEFAULT_XGB_N_ESTIMATORS,
            "learning_rate": DEFAULT_XGB_LEARNING_RATE,
            "max_depth": DEFAULT_XGB_MAX_DEPTH,
            "use_holidays": true,
            "use_iq_value_scaled": false,
        },
        "var": {
            "lags": DEFAULT_VAR_LAGS,
            "use_holidays": true,
            "use_iq_value_scaled": false,
        },
        "sarimax": {
            "order": DEFAULT_SARIMAX_ORDER,
            "seasonal_order": DEFAULT_SARIMAX_SEASONAL_ORDER,
            "use_holidays": true,
            "use_iq_value_scaled": false,
        },
        "general": {
            "use_seasonality": true,
        },
    });

    match value {
        serde_json::Value::Object(map) => map,
        // json! with an object literal always yields Value::Object.
        _ => unreachable!("default configuration literal is an object"),
    }
});

/// Returns the canonical default configuration.
///
/// The value is built once per process and shared by reference. It is the
/// merge baseline for every load/save and the target of
/// [`ConfigStore::reset_to_default`](crate::ConfigStore::reset_to_default).
pub fn default_configuration() -> &'static Configuration {
    &DEFAULT_CONFIGURATION
}
