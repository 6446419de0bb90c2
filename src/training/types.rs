use serde::Serialize;
use thiserror::Error;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Summary of a finished workout, built once from a training record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary with every value at three decimal places.
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TrainingError {
    #[error("Unknown workout code '{code}'")]
    UnknownWorkout { code: String },

    #[error("{workout} expects {expected} parameters, got {actual}")]
    Arity {
        workout: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{workout} {metric} is not finite ({value})")]
    NonFiniteMetric {
        workout: &'static str,
        metric: &'static str,
        value: f64,
    },

    #[error("Malformed package '{input}', expected CODE:P1,P2,...")]
    InvalidPackage { input: String },

    #[error("{method} is not implemented")]
    NotImplemented { method: String },
}
