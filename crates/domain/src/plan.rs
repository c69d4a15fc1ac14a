use crate::{Exercise, GenerateError, WorkoutQuery};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn generate_workout(&self, query: &WorkoutQuery) -> Result<Workout, GenerateError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn generate_workout(&self, query: &WorkoutQuery) -> Result<Workout, GenerateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub plan: WorkoutPlan,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    pub const MAX_DISPLAYED_EXERCISES: usize = 3;

    #[must_use]
    pub fn displayed_exercises(&self) -> &[Exercise] {
        &self.exercises[..self.exercises.len().min(Self::MAX_DISPLAYED_EXERCISES)]
    }

    #[must_use]
    pub fn has_exercises(&self) -> bool {
        !self.exercises.is_empty()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub workout_focus: Option<String>,
    pub summary: Option<String>,
    pub estimated_time: Option<String>,
    pub difficulty: Option<String>,
    pub exercises: Vec<PlannedExercise>,
    pub warmup_recommendation: Option<String>,
    pub cooldown_recommendation: Option<String>,
}

impl WorkoutPlan {
    pub const DEFAULT_TITLE: &'static str = "Your Workout Plan";
    pub const DEFAULT_ESTIMATED_TIME: &'static str = "45 min";
    pub const DEFAULT_DIFFICULTY: &'static str = "Intermediate";

    #[must_use]
    pub fn title(&self) -> &str {
        non_empty(self.workout_focus.as_deref()).unwrap_or(Self::DEFAULT_TITLE)
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        non_empty(self.summary.as_deref())
    }

    #[must_use]
    pub fn estimated_time(&self) -> &str {
        non_empty(self.estimated_time.as_deref()).unwrap_or(Self::DEFAULT_ESTIMATED_TIME)
    }

    #[must_use]
    pub fn difficulty(&self) -> &str {
        non_empty(self.difficulty.as_deref()).unwrap_or(Self::DEFAULT_DIFFICULTY)
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn warmup(&self) -> Option<&str> {
        non_empty(self.warmup_recommendation.as_deref())
    }

    #[must_use]
    pub fn cooldown(&self) -> Option<&str> {
        non_empty(self.cooldown_recommendation.as_deref())
    }

    #[must_use]
    pub fn has_warmup_or_cooldown(&self) -> bool {
        self.warmup().is_some() || self.cooldown().is_some()
    }
}

/// Exercise selection as returned by the planner, referring to an exercise by its ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExercise {
    pub id: String,
    pub sets: Option<u32>,
    pub reps: Option<String>,
    pub rest_seconds: Option<u32>,
    pub trainer_notes: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(5, 3)]
    fn test_displayed_exercises(#[case] count: usize, #[case] expected: usize) {
        let workout = Workout {
            plan: WorkoutPlan::default(),
            exercises: (0..count).map(exercise).collect(),
        };
        let displayed = workout.displayed_exercises();
        assert_eq!(displayed.len(), expected);
        assert_eq!(displayed, &workout.exercises[..expected]);
        assert_eq!(workout.has_exercises(), count > 0);
    }

    #[test]
    fn test_workout_plan_defaults() {
        let plan = WorkoutPlan {
            workout_focus: Some(String::new()),
            ..WorkoutPlan::default()
        };
        assert_eq!(plan.title(), "Your Workout Plan");
        assert_eq!(plan.summary(), None);
        assert_eq!(plan.estimated_time(), "45 min");
        assert_eq!(plan.difficulty(), "Intermediate");
        assert_eq!(plan.exercise_count(), 0);
        assert!(!plan.has_warmup_or_cooldown());
    }

    #[test]
    fn test_workout_plan_values() {
        let plan = WorkoutPlan {
            workout_focus: Some("Leg Day".to_string()),
            summary: Some("A focused lower body session.".to_string()),
            estimated_time: Some("30 minutes".to_string()),
            difficulty: Some("Beginner".to_string()),
            exercises: vec![planned_exercise("a"), planned_exercise("b")],
            warmup_recommendation: None,
            cooldown_recommendation: Some("Stretch your hamstrings".to_string()),
        };
        assert_eq!(plan.title(), "Leg Day");
        assert_eq!(plan.summary(), Some("A focused lower body session."));
        assert_eq!(plan.estimated_time(), "30 minutes");
        assert_eq!(plan.difficulty(), "Beginner");
        assert_eq!(plan.exercise_count(), 2);
        assert_eq!(plan.warmup(), None);
        assert_eq!(plan.cooldown(), Some("Stretch your hamstrings"));
        assert!(plan.has_warmup_or_cooldown());
    }

    fn planned_exercise(id: &str) -> PlannedExercise {
        PlannedExercise {
            id: id.to_string(),
            sets: Some(3),
            reps: Some("10".to_string()),
            rest_seconds: Some(60),
            trainer_notes: None,
        }
    }

    fn exercise(idx: usize) -> Exercise {
        Exercise {
            id: format!("ex{idx}"),
            name: format!("Exercise {idx}"),
            level: "intermediate".to_string(),
            image_url: None,
            primary_muscles: None,
            secondary_muscles: None,
            equipment: None,
            sets: None,
            reps: None,
            rest_seconds: None,
            trainer_notes: None,
            instructions: vec![],
            youtube_search_url: None,
        }
    }
}
