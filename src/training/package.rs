//! Sensor package dispatch.
//!
//! A package is a workout code plus a positional parameter list, in the
//! order the tracker reports them:
//!
//! * `RUN`: action, duration, weight
//! * `WLK`: action, duration, weight, height
//! * `SWM`: action, duration, weight, pool length, pool count

use super::{Running, SportsWalking, Swimming, Training, TrainingError, Workout};
use std::fmt;
use std::str::FromStr;

/// Workout codes understood by [`read_package`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Run,
    Walk,
    Swim,
}

impl WorkoutCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Run => "RUN",
            WorkoutCode::Walk => "WLK",
            WorkoutCode::Swim => "SWM",
        }
    }

    /// Name of the workout the code builds.
    pub fn workout_name(&self) -> &'static str {
        match self {
            WorkoutCode::Run => "Running",
            WorkoutCode::Walk => "SportsWalking",
            WorkoutCode::Swim => "Swimming",
        }
    }

    /// Number of positional parameters the workout takes.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutCode::Run => 3,
            WorkoutCode::Walk => 4,
            WorkoutCode::Swim => 5,
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = TrainingError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Walk),
            "SWM" => Ok(WorkoutCode::Swim),
            _ => Err(TrainingError::UnknownWorkout {
                code: code.to_string(),
            }),
        }
    }
}

/// One sensor reading: a workout code and its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub params: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, params: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            params,
        }
    }

    pub fn read(&self) -> Result<Workout, TrainingError> {
        read_package(&self.code, &self.params)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        for (idx, param) in self.params.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

impl FromStr for Package {
    type Err = TrainingError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (code, params) = parse_package(input)?;
        Ok(Package { code, params })
    }
}

/// Packages processed when none are given on the command line.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build the workout matching `code` from its positional `params`.
pub fn read_package(code: &str, params: &[f64]) -> Result<Workout, TrainingError> {
    let code: WorkoutCode = code.parse()?;
    if params.len() != code.arity() {
        return Err(TrainingError::Arity {
            workout: code.workout_name(),
            expected: code.arity(),
            actual: params.len(),
        });
    }
    tracing::debug!(%code, ?params, "reading package");

    let action = whole("action", params[0])?;
    let duration = positive("duration", params[1])?;
    let weight = non_negative("weight", params[2])?;

    let workout = match code {
        WorkoutCode::Run => Workout::Running(Running::new(action, duration, weight)),
        WorkoutCode::Walk => {
            let height = positive("height", params[3])?;
            Workout::Walking(SportsWalking::new(action, duration, weight, height))
        }
        WorkoutCode::Swim => {
            let length_pool = non_negative("length_pool", params[3])?;
            let count_pool = whole("count_pool", params[4])?;
            Workout::Swimming(Swimming::new(
                action,
                duration,
                weight,
                length_pool,
                count_pool,
            ))
        }
    };
    ensure_finite_metrics(&workout)?;
    Ok(workout)
}

/// Reject readings that pass validation but still overflow, e.g. a
/// subnormal duration or an enormous weight.
fn ensure_finite_metrics(workout: &Workout) -> Result<(), TrainingError> {
    let metrics = [
        ("distance", workout.get_distance()),
        ("speed", workout.get_mean_speed()),
        ("calories", workout.get_spent_calories()?),
    ];
    for (metric, value) in metrics {
        if !value.is_finite() {
            return Err(TrainingError::NonFiniteMetric {
                workout: workout.training_type(),
                metric,
                value,
            });
        }
    }
    Ok(())
}

/// Split a `CODE:P1,P2,...` argument into its code and parameters.
///
/// Only the shape is checked here; the code and arity are checked by
/// [`read_package`].
pub fn parse_package(input: &str) -> Result<(String, Vec<f64>), TrainingError> {
    let malformed = || TrainingError::InvalidPackage {
        input: input.to_string(),
    };

    let (code, raw_params) = input.split_once(':').ok_or_else(malformed)?;
    let code = code.trim();
    if code.is_empty() {
        return Err(malformed());
    }

    let params = if raw_params.trim().is_empty() {
        Vec::new()
    } else {
        raw_params
            .split(',')
            .map(|raw| raw.trim().parse::<f64>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok((code.to_string(), params))
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, TrainingError> {
    if !value.is_finite() {
        return Err(TrainingError::InvalidParameter {
            name,
            value,
            reason: "must be a finite number",
        });
    }
    if value < 0.0 {
        return Err(TrainingError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

fn positive(name: &'static str, value: f64) -> Result<f64, TrainingError> {
    let value = non_negative(name, value)?;
    if value == 0.0 {
        return Err(TrainingError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

fn whole(name: &'static str, value: f64) -> Result<u64, TrainingError> {
    let value = non_negative(name, value)?;
    if value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(TrainingError::InvalidParameter {
            name,
            value,
            reason: "must be a whole number",
        });
    }
    Ok(value as u64)
}
