use fittracker::training::{SportsWalking, Swimming, WorkoutCode};
use fittracker::{Training, TrainingError, Workout, read_package};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn running_package_metrics() {
    let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).expect("valid package");

    assert!(matches!(workout, Workout::Running(_)));
    assert_close(workout.get_distance(), 9.75);
    assert_close(workout.get_mean_speed(), 9.75);
    assert_close(workout.get_spent_calories().unwrap(), 699.75);
}

#[test]
fn walking_package_metrics() {
    let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("valid package");

    assert!(matches!(workout, Workout::Walking(_)));
    assert_close(workout.get_distance(), 5.85);
    assert_close(workout.get_mean_speed(), 5.85);
    assert_close(workout.get_spent_calories().unwrap(), 157.5);
}

#[test]
fn swimming_package_metrics() {
    let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("valid package");

    assert!(matches!(workout, Workout::Swimming(_)));
    assert_close(workout.get_distance(), 0.9936);
    assert_close(workout.get_mean_speed(), 1.0);
    assert_close(workout.get_spent_calories().unwrap(), 336.0);
}

#[test]
fn dispatch_builds_the_same_record_as_the_constructor() {
    let dispatched = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(
        dispatched,
        Workout::Walking(SportsWalking::new(9000, 1.0, 75.0, 180.0))
    );

    let dispatched = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(
        dispatched,
        Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40))
    );
}

#[test]
fn metrics_are_stable_across_calls() {
    for (code, params) in [
        ("RUN", vec![12345.0, 1.25, 68.5]),
        ("WLK", vec![4321.0, 0.75, 90.0, 172.0]),
        ("SWM", vec![1500.0, 1.5, 61.0, 50.0, 33.0]),
    ] {
        let workout = read_package(code, &params).unwrap();
        let first = workout.show_training_info().unwrap();
        let second = workout.show_training_info().unwrap();
        assert_eq!(first, second, "{code} summary changed between calls");
    }
}

#[test]
fn every_code_dispatches_to_its_variant() {
    let cases: [(&str, &[f64], WorkoutCode); 3] = [
        ("RUN", &[1.0, 1.0, 1.0], WorkoutCode::Run),
        ("WLK", &[1.0, 1.0, 1.0, 1.0], WorkoutCode::Walk),
        ("SWM", &[1.0, 1.0, 1.0, 1.0, 1.0], WorkoutCode::Swim),
    ];
    for (code, params, expected) in cases {
        assert_eq!(read_package(code, params).unwrap().code(), expected);
    }
}

#[test]
fn unknown_code_fails_deterministically() {
    for code in ["", "BIKE", "run", "RUN ", "SWIM"] {
        let first = read_package(code, &[1.0, 1.0, 1.0]).unwrap_err();
        let second = read_package(code, &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(
            first,
            TrainingError::UnknownWorkout {
                code: code.to_string()
            }
        );
        assert_eq!(first, second);
    }
}

#[test]
fn wrong_parameter_count_is_an_arity_error() {
    let err = read_package("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
    assert_eq!(
        err,
        TrainingError::Arity {
            workout: "Swimming",
            expected: 5,
            actual: 3,
        }
    );
    assert_eq!(err.to_string(), "Swimming expects 5 parameters, got 3");

    assert!(matches!(
        read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]),
        Err(TrainingError::Arity { expected: 3, actual: 4, .. })
    ));
}

#[test]
fn negative_weight_is_rejected() {
    assert!(matches!(
        read_package("RUN", &[15000.0, 1.0, -75.0]),
        Err(TrainingError::InvalidParameter { name: "weight", .. })
    ));
}
