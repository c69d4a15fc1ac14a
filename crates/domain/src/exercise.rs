#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub level: String,
    pub image_url: Option<String>,
    pub primary_muscles: Option<Muscles>,
    pub secondary_muscles: Option<Muscles>,
    pub equipment: Option<String>,
    pub sets: Option<u32>,
    pub reps: Option<String>,
    pub rest_seconds: Option<u32>,
    pub trainer_notes: Option<String>,
    pub instructions: Vec<String>,
    pub youtube_search_url: Option<String>,
}

impl Exercise {
    pub const DEFAULT_SETS: u32 = 3;
    pub const DEFAULT_REPS: &'static str = "10-12";
    pub const DEFAULT_REST_SECONDS: u32 = 60;

    #[must_use]
    pub fn sets(&self) -> u32 {
        match self.sets {
            Some(sets) if sets > 0 => sets,
            _ => Self::DEFAULT_SETS,
        }
    }

    #[must_use]
    pub fn reps(&self) -> &str {
        match self.reps.as_deref().map(str::trim) {
            Some(reps) if !reps.is_empty() => reps,
            _ => Self::DEFAULT_REPS,
        }
    }

    #[must_use]
    pub fn rest_seconds(&self) -> u32 {
        match self.rest_seconds {
            Some(rest_seconds) if rest_seconds > 0 => rest_seconds,
            _ => Self::DEFAULT_REST_SECONDS,
        }
    }

    #[must_use]
    pub fn primary_muscles(&self) -> String {
        format_muscles(self.primary_muscles.as_ref())
    }

    #[must_use]
    pub fn secondary_muscles(&self) -> Option<String> {
        self.secondary_muscles
            .as_ref()
            .filter(|m| !m.is_empty())
            .map(|m| format_muscles(Some(m)))
    }

    #[must_use]
    pub fn level(&self) -> Option<&str> {
        non_empty(Some(self.level.as_str())).map(str::trim)
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        non_empty(self.image_url.as_deref())
    }

    #[must_use]
    pub fn equipment(&self) -> Option<&str> {
        non_empty(self.equipment.as_deref())
    }

    #[must_use]
    pub fn trainer_notes(&self) -> Option<&str> {
        non_empty(self.trainer_notes.as_deref())
    }

    #[must_use]
    pub fn youtube_search_url(&self) -> Option<&str> {
        non_empty(self.youtube_search_url.as_deref())
    }

    #[must_use]
    pub fn has_instructions(&self) -> bool {
        !self.instructions.is_empty()
    }
}

/// Muscle fields arrive either as a list or as a single string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Muscles {
    One(String),
    Many(Vec<String>),
}

impl Muscles {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Muscles::One(muscle) => muscle.is_empty(),
            Muscles::Many(muscles) => muscles.is_empty(),
        }
    }
}

#[must_use]
pub fn format_muscles(muscles: Option<&Muscles>) -> String {
    match muscles {
        Some(muscles) if !muscles.is_empty() => match muscles {
            Muscles::One(muscle) => muscle.clone(),
            Muscles::Many(muscles) => muscles.join(", "),
        },
        _ => "N/A".to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
