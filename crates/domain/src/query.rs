use std::slice::Iter;

use derive_more::{AsRef, Display};

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(query: &str) -> Result<Self, QueryError> {
        let trimmed_query = query.trim();

        if trimmed_query.is_empty() {
            return Err(QueryError::Empty);
        }

        Ok(Query(trimmed_query.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum QueryError {
    #[error("Please enter a workout request")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutQuery {
    pub query: Query,
    pub difficulty: Option<Difficulty>,
    pub equipment: Vec<Equipment>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutFilter {
    pub difficulty: Option<Difficulty>,
    pub equipment: Vec<Equipment>,
}

impl WorkoutFilter {
    /// Selecting the active difficulty again clears the selection.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty == Some(difficulty) {
            self.difficulty = None;
        } else {
            self.difficulty = Some(difficulty);
        }
    }

    pub fn toggle_equipment(&mut self, equipment: Equipment) {
        if let Some(idx) = self.equipment.iter().position(|e| *e == equipment) {
            self.equipment.remove(idx);
        } else {
            self.equipment.push(equipment);
        }
    }

    #[must_use]
    pub fn difficulty_list(&self) -> Vec<(Difficulty, bool)> {
        Difficulty::iter()
            .map(|d| (*d, self.difficulty == Some(*d)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn equipment_list(&self) -> Vec<(Equipment, bool)> {
        Equipment::iter()
            .map(|e| (*e, self.equipment.contains(e)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn query(&self, query: Query) -> WorkoutQuery {
        WorkoutQuery {
            query,
            difficulty: self.difficulty,
            equipment: self.equipment.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Expert,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    BodyWeight,
    Dumbbell,
    Barbell,
    Kettlebell,
    Cable,
    Machine,
    Band,
    MedicineBall,
    ExerciseBall,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 9] = [
            Equipment::BodyWeight,
            Equipment::Dumbbell,
            Equipment::Barbell,
            Equipment::Kettlebell,
            Equipment::Cable,
            Equipment::Machine,
            Equipment::Band,
            Equipment::MedicineBall,
            Equipment::ExerciseBall,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::BodyWeight => "Body Weight",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Barbell => "Barbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Cable => "Cable",
            Equipment::Machine => "Machine",
            Equipment::Band => "Band",
            Equipment::MedicineBall => "Medicine Ball",
            Equipment::ExerciseBall => "Exercise Ball",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
