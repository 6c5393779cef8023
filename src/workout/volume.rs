/// Training volume: sets × reps × weight, summed across exercises

use crate::workout::types::{DraftExercise, DraftInput, Exercise};

/// Anything that carries a set/rep/weight prescription
pub trait TrainingLoad {
    fn sets(&self) -> i64;
    fn reps(&self) -> i64;
    fn weight(&self) -> f64;

    /// Volume of this entry alone
    fn volume(&self) -> f64 {
        self.sets() as f64 * self.reps() as f64 * self.weight()
    }
}

/// Total volume of a sequence; 0 when empty
pub fn compute_volume<T: TrainingLoad>(exercises: &[T]) -> f64 {
    exercises.iter().map(TrainingLoad::volume).sum()
}

macro_rules! impl_training_load {
    ($($ty:ty),*) => {
        $(
            impl TrainingLoad for $ty {
                fn sets(&self) -> i64 {
                    self.sets
                }

                fn reps(&self) -> i64 {
                    self.reps
                }

                fn weight(&self) -> f64 {
                    self.weight
                }
            }
        )*
    };
}

impl_training_load!(DraftExercise, Exercise, DraftInput);

#[cfg(test)]
mod tests {
    use super::*;

    struct Prescription {
        sets: i64,
        reps: i64,
        weight: f64,
    }

    impl TrainingLoad for Prescription {
        fn sets(&self) -> i64 {
            self.sets
        }

        fn reps(&self) -> i64 {
            self.reps
        }

        fn weight(&self) -> f64 {
            self.weight
        }
    }

    #[test]
    fn empty_sequence_has_zero_volume() {
        let none: [Prescription; 0] = [];
        assert_eq!(compute_volume(&none), 0.0);
    }

    #[test]
    fn single_entry_volume() {
        let one = [Prescription {
            sets: 3,
            reps: 10,
            weight: 50.0,
        }];
        assert_eq!(compute_volume(&one), 1500.0);
    }

    #[test]
    fn volumes_add_up() {
        let session = [
            Prescription {
                sets: 5,
                reps: 5,
                weight: 100.0,
            },
            Prescription {
                sets: 3,
                reps: 8,
                weight: 60.0,
            },
            Prescription {
                sets: 3,
                reps: 12,
                weight: 0.0,
            },
        ];
        assert_eq!(compute_volume(&session), 3940.0);
    }
}
