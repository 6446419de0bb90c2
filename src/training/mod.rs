pub mod package;
pub mod running;
pub mod swimming;
pub mod types;
pub mod walking;

pub use package::{Package, WorkoutCode, default_packages, parse_package, read_package};
pub use running::Running;
pub use swimming::Swimming;
pub use types::{InfoMessage, M_IN_KM, MIN_IN_H, TrainingError};
pub use walking::SportsWalking;

/// Common capability set of every workout record.
///
/// Only [`Training::get_distance`] is required. The default
/// [`Training::get_spent_calories`] has no formula and fails with
/// [`TrainingError::NotImplemented`]; each workout kind supplies its own.
pub trait Training {
    /// Raw sensor readings shared by all workout kinds.
    fn data(&self) -> &TrainingData;

    /// Type label shown in the summary.
    fn training_type(&self) -> &'static str;

    /// Distance covered, in kilometers.
    fn get_distance(&self) -> f64;

    /// Mean speed, in kilometers per hour.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.data().duration
    }

    fn get_spent_calories(&self) -> Result<f64, TrainingError> {
        Err(TrainingError::NotImplemented {
            method: format!("{}.get_spent_calories", self.training_type()),
        })
    }

    /// Collect the three metrics into a summary.
    fn show_training_info(&self) -> Result<InfoMessage, TrainingError> {
        Ok(InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.data().duration,
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories()?,
        })
    }
}

/// Readings every workout carries: action count (steps or strokes), duration
/// in hours and body weight in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingData {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
}

impl TrainingData {
    /// Step length in meters.
    pub const LEN_STEP: f64 = 0.65;

    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for TrainingData {
    fn data(&self) -> &TrainingData {
        self
    }

    fn training_type(&self) -> &'static str {
        "Training"
    }

    fn get_distance(&self) -> f64 {
        distance_km(self.action, Self::LEN_STEP)
    }
}

/// Kilometers covered by `action` movements of `len_step` meters each.
pub(crate) fn distance_km(action: u64, len_step: f64) -> f64 {
    action as f64 * len_step / M_IN_KM
}

/// A workout produced by [`read_package`].
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(running) => running,
            Workout::Walking(walking) => walking,
            Workout::Swimming(swimming) => swimming,
        }
    }

    pub fn code(&self) -> WorkoutCode {
        match self {
            Workout::Running(_) => WorkoutCode::Run,
            Workout::Walking(_) => WorkoutCode::Walk,
            Workout::Swimming(_) => WorkoutCode::Swim,
        }
    }
}

impl Training for Workout {
    fn data(&self) -> &TrainingData {
        self.inner().data()
    }

    fn training_type(&self) -> &'static str {
        self.inner().training_type()
    }

    fn get_distance(&self) -> f64 {
        self.inner().get_distance()
    }

    fn get_mean_speed(&self) -> f64 {
        self.inner().get_mean_speed()
    }

    fn get_spent_calories(&self) -> Result<f64, TrainingError> {
        self.inner().get_spent_calories()
    }
}
