//! Centralized constants for the forecast configuration crate.
//!
//! This module contains the canonical default hyperparameter values used
//! to build the default configuration, to avoid magic number duplication
//! and improve maintainability.

/// Name of the configuration file, relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "forecast_config.json";

// =============================================================================
// Prophet Defaults
// =============================================================================

/// Default flexibility of the trend changepoints.
pub const DEFAULT_PROPHET_CHANGEPOINT_PRIOR_SCALE: f64 = 0.03;

/// Default fraction of history in which changepoints are placed.
pub const DEFAULT_PROPHET_CHANGEPOINT_RANGE: f64 = 0.5;

/// Default strength of the seasonality prior.
pub const DEFAULT_PROPHET_SEASONALITY_PRIOR_SCALE: f64 = 0.15;

/// Default strength of the holiday effect prior.
pub const DEFAULT_PROPHET_HOLIDAYS_PRIOR_SCALE: f64 = 0.1;

/// Default Fourier order for the yearly seasonality component.
pub const DEFAULT_PROPHET_YEARLY_FOURIER_ORDER: u32 = 5;

// =============================================================================
// Tree Ensemble Defaults
// =============================================================================

/// Default number of trees in the random forest.
pub const DEFAULT_RF_N_ESTIMATORS: u32 = 400;

/// Default maximum depth of random forest trees.
pub const DEFAULT_RF_MAX_DEPTH: u32 = 6;

/// Default number of boosting rounds for XGBoost.
pub const DEFAULT_XGB_N_ESTIMATORS: u32 = 500;

/// Default XGBoost learning rate.
pub const DEFAULT_XGB_LEARNING_RATE: f64 = 0.03;

/// Default maximum depth of XGBoost trees.
pub const DEFAULT_XGB_MAX_DEPTH: u32 = 4;

// =============================================================================
// Statistical Model Defaults
// =============================================================================

/// Default number of lagged observations for the VAR model.
pub const DEFAULT_VAR_LAGS: u32 = 2;

/// Default SARIMAX (p, d, q) order.
pub const DEFAULT_SARIMAX_ORDER: [u32; 3] = [1, 1, 1];

/// Default SARIMAX seasonal (P, D, Q, s) order.
pub const DEFAULT_SARIMAX_SEASONAL_ORDER: [u32; 4] = [1, 1, 1, 12];
