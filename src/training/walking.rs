use super::{MIN_IN_H, Training, TrainingData, TrainingError, distance_km};

const LEN_STEP: f64 = 0.65;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Race walking. Carries the athlete's height in centimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    data: TrainingData,
    pub height: f64,
}

impl SportsWalking {
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn get_distance(&self) -> f64 {
        distance_km(self.data.action, LEN_STEP)
    }

    fn get_spent_calories(&self) -> Result<f64, TrainingError> {
        // Floor division: the speed term only counts whole multiples of height.
        let speed_term = (self.get_mean_speed().powi(2) / self.height).floor();
        Ok((CALORIES_WEIGHT_MULTIPLIER * self.data.weight
            + speed_term * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.data.weight)
            * (self.data.duration * MIN_IN_H))
    }
}
