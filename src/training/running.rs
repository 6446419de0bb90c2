use super::{M_IN_KM, MIN_IN_H, Training, TrainingData, TrainingError, distance_km};

const LEN_STEP: f64 = 0.65;
const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn get_distance(&self) -> f64 {
        distance_km(self.data.action, LEN_STEP)
    }

    fn get_spent_calories(&self) -> Result<f64, TrainingError> {
        Ok(
            (CALORIES_SPEED_MULTIPLIER * self.get_mean_speed() - CALORIES_SPEED_SHIFT)
                * self.data.weight
                / M_IN_KM
                * (self.data.duration * MIN_IN_H),
        )
    }
}
