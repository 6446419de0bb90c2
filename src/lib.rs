pub mod report;
pub mod training;

pub use report::{
    OutputFormat, ReportError, RunReport, process_inputs, process_packages, show_training,
};
pub use training::{
    InfoMessage, Package, Training, TrainingError, Workout, default_packages, read_package,
};
