use super::{M_IN_KM, Training, TrainingData, TrainingError, distance_km};

/// Stroke length in meters.
const LEN_STEP: f64 = 1.38;
const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Pool swimming.
///
/// Distance is derived from the stroke count while speed is derived from the
/// pool lengths swum, so the two do not agree with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    data: TrainingData,
    /// Pool length in meters.
    pub length_pool: f64,
    /// Number of pool lengths swum.
    pub count_pool: u64,
}

impl Swimming {
    pub fn new(action: u64, duration: f64, weight: f64, length_pool: f64, count_pool: u64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn get_distance(&self) -> f64 {
        distance_km(self.data.action, LEN_STEP)
    }

    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.data.duration
    }

    fn get_spent_calories(&self) -> Result<f64, TrainingError> {
        Ok((self.get_mean_speed() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.data.weight)
    }
}
