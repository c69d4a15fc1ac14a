//! REST
//!
//! Client side of the workout planning API. The backend root answers the health probe, the
//! workout endpoint below the API base turns a query into a plan and the exercises it refers to.

use gloo_net::http::{Request, Response};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use strum::AsRefStr;
use trainer_domain as domain;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Copy)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

/// Base URL of the API, without trailing slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    #[must_use]
    pub fn new(url: &str) -> Self {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            Self(DEFAULT_API_URL.to_string())
        } else {
            Self(url.to_string())
        }
    }

    /// The server root, i.e. the base URL with a trailing `/api` removed.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.0.strip_suffix("/api").unwrap_or(&self.0)
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub url: ApiUrl,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub const fn new(url: ApiUrl) -> Self {
        Self {
            sender: GlooNetSendRequest,
            url,
        }
    }
}

impl<S: SendRequest> domain::HealthRepository for REST<S> {
    async fn read_health(&self) -> Result<domain::BackendInfo, domain::ReadError> {
        let request = Request::get(&format!("{}/", self.url.origin()))
            .build()
            .map_err(|err| domain::ReadError::Other(err.into()))?;
        let response = self
            .sender
            .send_request(request)
            .await
            .map_err(|_| domain::StorageError::NoConnection)?;

        if !response.ok() {
            return Err(domain::ReadError::Other(
                format!("{} {}", response.status(), response.status_text()).into(),
            ));
        }

        // The body is informational only, an ok status is sufficient.
        let health = response.json::<Health>().await.unwrap_or_default();
        Ok(health.into())
    }
}

impl<S: SendRequest> domain::WorkoutRepository for REST<S> {
    async fn generate_workout(
        &self,
        query: &domain::WorkoutQuery,
    ) -> Result<domain::Workout, domain::GenerateError> {
        let body = WorkoutRequest::from(query);
        debug!("requesting workout for \"{}\"", body.query);
        let request = Request::post(&self.url.endpoint("workout"))
            .json(&body)
            .map_err(|err| domain::GenerateError::Other(err.into()))?;
        let response = self
            .sender
            .send_request(request)
            .await
            .map_err(|_| domain::StorageError::NoConnection)?;

        if !response.ok() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(ErrorBody::detail);
            return Err(domain::GenerateError::server(response.status(), detail));
        }

        match response.json::<WorkoutResponse>().await {
            Ok(workout) => Ok(workout.into()),
            Err(err) => Err(domain::GenerateError::Other(
                format!("deserialization failed: {err}").into(),
            )),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutRequest {
    pub query: String,
    pub difficulty: Option<String>,
    pub equipment: Option<Vec<String>>,
}

impl From<&domain::WorkoutQuery> for WorkoutRequest {
    fn from(value: &domain::WorkoutQuery) -> Self {
        WorkoutRequest {
            query: value.query.to_string(),
            difficulty: value
                .difficulty
                .map(|difficulty| Difficulty::from(difficulty).as_ref().to_string()),
            equipment: if value.equipment.is_empty() {
                None
            } else {
                Some(
                    value
                        .equipment
                        .iter()
                        .map(|equipment| Equipment::from(*equipment).as_ref().to_string())
                        .collect(),
                )
            },
        }
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    #[strum(serialize = "beginner")]
    Beginner,
    #[strum(serialize = "intermediate")]
    Intermediate,
    #[strum(serialize = "expert")]
    Expert,
}

impl From<domain::Difficulty> for Difficulty {
    fn from(value: domain::Difficulty) -> Self {
        match value {
            domain::Difficulty::Beginner => Difficulty::Beginner,
            domain::Difficulty::Intermediate => Difficulty::Intermediate,
            domain::Difficulty::Expert => Difficulty::Expert,
        }
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equipment {
    #[strum(serialize = "body weight")]
    BodyWeight,
    #[strum(serialize = "dumbbell")]
    Dumbbell,
    #[strum(serialize = "barbell")]
    Barbell,
    #[strum(serialize = "kettlebell")]
    Kettlebell,
    #[strum(serialize = "cable")]
    Cable,
    #[strum(serialize = "machine")]
    Machine,
    #[strum(serialize = "band")]
    Band,
    #[strum(serialize = "medicine ball")]
    MedicineBall,
    #[strum(serialize = "exercise ball")]
    ExerciseBall,
}

impl From<domain::Equipment> for Equipment {
    fn from(value: domain::Equipment) -> Self {
        match value {
            domain::Equipment::BodyWeight => Equipment::BodyWeight,
            domain::Equipment::Dumbbell => Equipment::Dumbbell,
            domain::Equipment::Barbell => Equipment::Barbell,
            domain::Equipment::Kettlebell => Equipment::Kettlebell,
            domain::Equipment::Cable => Equipment::Cable,
            domain::Equipment::Machine => Equipment::Machine,
            domain::Equipment::Band => Equipment::Band,
            domain::Equipment::MedicineBall => Equipment::MedicineBall,
            domain::Equipment::ExerciseBall => Equipment::ExerciseBall,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Health {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl From<Health> for domain::BackendInfo {
    fn from(value: Health) -> Self {
        domain::BackendInfo {
            status: value.status,
            service: value.service,
            version: value.version,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Only a textual `detail` is shown to the user.
    #[must_use]
    pub fn detail(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(detail)) => Some(detail),
            _ => None,
        }
    }
}

/// Workout payload as produced by the backend.
///
/// Plan and exercise fields are generated by a language model and forwarded unchecked. A field
/// with an unexpected shape is treated as absent instead of failing the whole response.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub plan: Plan,
    #[serde(default, deserialize_with = "lenient_list")]
    pub exercises: Vec<Exercise>,
}

impl From<WorkoutResponse> for domain::Workout {
    fn from(value: WorkoutResponse) -> Self {
        domain::Workout {
            plan: value.plan.into(),
            exercises: value.exercises.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Plan {
    #[serde(deserialize_with = "lenient")]
    pub workout_focus: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub estimated_time: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub difficulty: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub exercises: Vec<PlanExercise>,
    #[serde(deserialize_with = "lenient")]
    pub warmup_recommendation: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub cooldown_recommendation: Option<String>,
}

impl From<Plan> for domain::WorkoutPlan {
    fn from(value: Plan) -> Self {
        domain::WorkoutPlan {
            workout_focus: value.workout_focus,
            summary: value.summary,
            estimated_time: value.estimated_time,
            difficulty: value.difficulty,
            exercises: value.exercises.into_iter().map(Into::into).collect(),
            warmup_recommendation: value.warmup_recommendation,
            cooldown_recommendation: value.cooldown_recommendation,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PlanExercise {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "count")]
    pub sets: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub reps: Option<Reps>,
    #[serde(deserialize_with = "count")]
    pub rest_seconds: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub trainer_notes: Option<String>,
}

impl From<PlanExercise> for domain::PlannedExercise {
    fn from(value: PlanExercise) -> Self {
        domain::PlannedExercise {
            id: value.id,
            sets: value.sets,
            reps: value.reps.map(String::from),
            rest_seconds: value.rest_seconds,
            trainer_notes: value.trainer_notes,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Exercise {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub level: String,
    #[serde(alias = "gifUrl", deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub primary_muscles: Option<Muscles>,
    #[serde(deserialize_with = "lenient")]
    pub secondary_muscles: Option<Muscles>,
    #[serde(deserialize_with = "lenient")]
    pub equipment: Option<String>,
    #[serde(deserialize_with = "count")]
    pub sets: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub reps: Option<Reps>,
    #[serde(deserialize_with = "count")]
    pub rest_seconds: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub trainer_notes: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub instructions: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub youtube_search_url: Option<String>,
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        domain::Exercise {
            id: value.id,
            name: value.name,
            level: value.level,
            image_url: value.image_url,
            primary_muscles: value.primary_muscles.map(Into::into),
            secondary_muscles: value.secondary_muscles.map(Into::into),
            equipment: value.equipment,
            sets: value.sets,
            reps: value.reps.map(String::from),
            rest_seconds: value.rest_seconds,
            trainer_notes: value.trainer_notes,
            instructions: value.instructions,
            youtube_search_url: value.youtube_search_url,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Muscles {
    One(String),
    Many(Vec<String>),
}

impl From<Muscles> for domain::Muscles {
    fn from(value: Muscles) -> Self {
        match value {
            Muscles::One(muscle) => domain::Muscles::One(muscle),
            Muscles::Many(muscles) => domain::Muscles::Many(muscles),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Range(String),
}

impl From<Reps> for String {
    fn from(value: Reps) -> Self {
        match value {
            Reps::Count(count) => count.to_string(),
            Reps::Range(range) => range,
        }
    }
}

/// Falls back to the default if the value is `null` or does not match `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the elements matching `T` and skips the others.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(values) => values
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect(),
        _ => vec![],
    })
}

/// Accepts strings and numbers, anything else becomes empty.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

/// Accepts whole numbers given as number or string. Ranges like `"3-4"` are not a count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|n| n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(n))
                    .map(|n| n as u32)
            }),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("http://localhost:8000/api", "http://localhost:8000/api", "http://localhost:8000")]
    #[case("http://localhost:8000/api/", "http://localhost:8000/api", "http://localhost:8000")]
    #[case("https://trainer.example.org", "https://trainer.example.org", "https://trainer.example.org")]
    #[case("  ", DEFAULT_API_URL, "http://localhost:8000")]
    fn test_api_url(#[case] url: &str, #[case] base: &str, #[case] origin: &str) {
        let url = ApiUrl::new(url);
        assert_eq!(url.as_ref(), base);
        assert_eq!(url.origin(), origin);
    }

    #[test]
    fn test_api_url_endpoint() {
        assert_eq!(
            ApiUrl::default().endpoint("workout"),
            "http://localhost:8000/api/workout"
        );
    }

    #[test]
    fn test_workout_request() {
        let mut filter = domain::WorkoutFilter::default();
        filter.select_difficulty(domain::Difficulty::Beginner);
        filter.toggle_equipment(domain::Equipment::Dumbbell);
        filter.toggle_equipment(domain::Equipment::MedicineBall);
        let query = filter.query(domain::Query::new(" leg day ").unwrap());

        assert_eq!(
            serde_json::to_value(WorkoutRequest::from(&query)).unwrap(),
            json!({
                "query": "leg day",
                "difficulty": "beginner",
                "equipment": ["dumbbell", "medicine ball"]
            })
        );
    }

    #[test]
    fn test_workout_request_without_filter() {
        let query = domain::WorkoutFilter::default().query(domain::Query::new("core").unwrap());

        assert_eq!(
            serde_json::to_value(WorkoutRequest::from(&query)).unwrap(),
            json!({
                "query": "core",
                "difficulty": null,
                "equipment": null
            })
        );
    }

    #[rstest]
    #[case(json!({"detail": "LLM timeout"}), Some("LLM timeout"))]
    #[case(json!({"detail": [{"msg": "field required"}]}), None)]
    #[case(json!({}), None)]
    fn test_error_body_detail(#[case] body: serde_json::Value, #[case] expected: Option<&str>) {
        let body: ErrorBody = serde_json::from_value(body).unwrap();
        assert_eq!(body.detail().as_deref(), expected);
    }

    #[test]
    fn test_health() {
        let health: Health = serde_json::from_value(json!({
            "status": "healthy",
            "service": "Personal Trainer RAG API",
            "version": "2.0 - ExerciseDB"
        }))
        .unwrap();

        assert_eq!(
            domain::BackendInfo::from(health),
            domain::BackendInfo {
                status: Some("healthy".to_string()),
                service: Some("Personal Trainer RAG API".to_string()),
                version: Some("2.0 - ExerciseDB".to_string()),
            }
        );
    }

    #[test]
    fn test_workout_response() {
        let response: WorkoutResponse = serde_json::from_value(workout_response_json()).unwrap();

        assert_eq!(domain::Workout::from(response), workout());
    }

    #[test]
    fn test_workout_response_missing_fields() {
        let response: WorkoutResponse = serde_json::from_value(json!({
            "plan": {},
            "exercises": [{"id": "ex1", "name": "Plank"}]
        }))
        .unwrap();
        let workout = domain::Workout::from(response);

        assert_eq!(workout.plan.title(), "Your Workout Plan");
        assert_eq!(workout.exercises[0].sets(), 3);
        assert_eq!(workout.exercises[0].reps(), "10-12");
        assert_eq!(workout.exercises[0].rest_seconds(), 60);
        assert_eq!(workout.exercises[0].primary_muscles(), "N/A");
        assert!(workout.exercises[0].instructions.is_empty());
    }

    #[test]
    fn test_workout_response_unexpected_field_types() {
        let response: WorkoutResponse = serde_json::from_value(json!({
            "plan": {
                "summary": null,
                "estimated_time": 45,
                "exercises": [
                    {"id": "ex1", "sets": "3-4", "reps": 12.5, "rest_seconds": "60-90"},
                    "not an exercise"
                ]
            },
            "exercises": [
                {
                    "id": null,
                    "name": "Plank",
                    "level": null,
                    "gifUrl": false,
                    "primaryMuscles": {"name": "core"},
                    "sets": 3.0,
                    "reps": null,
                    "restSeconds": "45",
                    "trainerNotes": ["Brace."],
                    "instructions": ["Hold.", 2, "Breathe."]
                }
            ]
        }))
        .unwrap();
        let workout = domain::Workout::from(response);

        assert_eq!(workout.plan.summary(), None);
        assert_eq!(workout.plan.estimated_time(), "N/A");
        assert_eq!(
            workout.plan.exercises,
            vec![domain::PlannedExercise {
                id: "ex1".to_string(),
                sets: None,
                reps: None,
                rest_seconds: None,
                trainer_notes: None,
            }]
        );
        let exercise = &workout.exercises[0];
        assert_eq!(exercise.id, "");
        assert_eq!(exercise.name, "Plank");
        assert_eq!(exercise.level, "");
        assert_eq!(exercise.image_url(), None);
        assert_eq!(exercise.primary_muscles(), "N/A");
        assert_eq!(exercise.sets(), 3);
        assert_eq!(exercise.reps(), "10-12");
        assert_eq!(exercise.rest_seconds(), 45);
        assert_eq!(exercise.trainer_notes(), None);
        assert_eq!(exercise.instructions, vec!["Hold.".to_string(), "Breathe.".to_string()]);
    }

    #[rstest]
    #[case(json!({"plan": null, "exercises": null}))]
    #[case(json!({"plan": [], "exercises": {}}))]
    #[case(json!({}))]
    fn test_workout_response_without_content(#[case] body: serde_json::Value) {
        let response: WorkoutResponse = serde_json::from_value(body).unwrap();
        let workout = domain::Workout::from(response);

        assert_eq!(workout.plan.title(), "Your Workout Plan");
        assert!(!workout.has_exercises());
    }

    #[rstest]
    #[case(json!(4), Some(4))]
    #[case(json!(3.0), Some(3))]
    #[case(json!(" 90 "), Some(90))]
    #[case(json!("3-4"), None)]
    #[case(json!("60-90"), None)]
    #[case(json!(2.5), None)]
    #[case(json!(-1), None)]
    #[case(json!(null), None)]
    #[case(json!(true), None)]
    fn test_plan_exercise_counts(#[case] value: serde_json::Value, #[case] expected: Option<u32>) {
        let exercise: PlanExercise =
            serde_json::from_value(json!({"id": "ex1", "sets": value, "rest_seconds": value}))
                .unwrap();
        assert_eq!(exercise.sets, expected);
        assert_eq!(exercise.rest_seconds, expected);
    }

    #[rstest]
    #[case(json!("0001"), "0001")]
    #[case(json!(17), "17")]
    #[case(json!(null), "")]
    #[case(json!(["a"]), "")]
    fn test_exercise_text_fields(#[case] value: serde_json::Value, #[case] expected: &str) {
        let exercise: Exercise =
            serde_json::from_value(json!({"id": value, "name": value, "level": value})).unwrap();
        assert_eq!(exercise.id, expected);
        assert_eq!(exercise.name, expected);
        assert_eq!(exercise.level, expected);
    }

    #[rstest]
    #[case(json!(12), "12")]
    #[case(json!("8-10"), "8-10")]
    fn test_reps(#[case] value: serde_json::Value, #[case] expected: &str) {
        let reps: Reps = serde_json::from_value(value).unwrap();
        assert_eq!(String::from(reps), expected);
    }

    fn workout_response_json() -> serde_json::Value {
        json!({
            "plan": {
                "summary": "A lower body session.",
                "workout_focus": "Leg Day",
                "estimated_time": "40 min",
                "difficulty": "beginner",
                "exercises": [
                    {
                        "id": "ex1",
                        "sets": 4,
                        "reps": 12,
                        "rest_seconds": 90,
                        "trainer_notes": "Keep your chest up."
                    }
                ],
                "warmup_recommendation": "5 min bike",
                "cooldown_recommendation": "Stretch"
            },
            "exercises": [
                {
                    "id": "ex1",
                    "exerciseId": "ex1",
                    "name": "Goblet Squat",
                    "level": "intermediate",
                    "gifUrl": "https://example.org/squat.gif",
                    "primaryMuscles": ["quads", "glutes"],
                    "secondaryMuscles": "hamstrings",
                    "equipment": "dumbbell",
                    "sets": 4,
                    "reps": "12",
                    "restSeconds": 90,
                    "trainerNotes": "Keep your chest up.",
                    "instructions": ["Hold the dumbbell.", "Squat down."],
                    "youtubeSearchUrl": "https://www.youtube.com/results?search_query=goblet+squat"
                }
            ]
        })
    }

    fn workout() -> domain::Workout {
        domain::Workout {
            plan: domain::WorkoutPlan {
                workout_focus: Some("Leg Day".to_string()),
                summary: Some("A lower body session.".to_string()),
                estimated_time: Some("40 min".to_string()),
                difficulty: Some("beginner".to_string()),
                exercises: vec![domain::PlannedExercise {
                    id: "ex1".to_string(),
                    sets: Some(4),
                    reps: Some("12".to_string()),
                    rest_seconds: Some(90),
                    trainer_notes: Some("Keep your chest up.".to_string()),
                }],
                warmup_recommendation: Some("5 min bike".to_string()),
                cooldown_recommendation: Some("Stretch".to_string()),
            },
            exercises: vec![domain::Exercise {
                id: "ex1".to_string(),
                name: "Goblet Squat".to_string(),
                level: "intermediate".to_string(),
                image_url: Some("https://example.org/squat.gif".to_string()),
                primary_muscles: Some(domain::Muscles::Many(vec![
                    "quads".to_string(),
                    "glutes".to_string(),
                ])),
                secondary_muscles: Some(domain::Muscles::One("hamstrings".to_string())),
                equipment: Some("dumbbell".to_string()),
                sets: Some(4),
                reps: Some("12".to_string()),
                rest_seconds: Some(90),
                trainer_notes: Some("Keep your chest up.".to_string()),
                instructions: vec!["Hold the dumbbell.".to_string(), "Squat down.".to_string()],
                youtube_search_url: Some(
                    "https://www.youtube.com/results?search_query=goblet+squat".to_string(),
                ),
            }],
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use std::cell::RefCell;

        use gloo_net::http::Method;
        use pretty_assertions::assert_eq;
        use serde_json::json;
        use trainer_domain::{HealthRepository, WorkoutRepository};
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::*;

        #[wasm_bindgen_test]
        async fn test_read_health() {
            let rest = rest_with_response(Some(
                gloo_net::http::Response::builder()
                    .status(200)
                    .json(&json!({"status": "healthy", "service": "Personal Trainer RAG API"})),
            ));

            assert_eq!(
                rest.read_health().await.unwrap(),
                domain::BackendInfo {
                    status: Some("healthy".to_string()),
                    service: Some("Personal Trainer RAG API".to_string()),
                    version: None,
                }
            );

            let request = rest.sender.request.borrow_mut().take().unwrap();
            assert_eq!(request.method(), Method::GET);
            assert_eq!(request.url(), "http://localhost:8000/");
        }

        #[wasm_bindgen_test]
        async fn test_read_health_without_body() {
            assert_eq!(
                rest_with_response(Some(
                    gloo_net::http::Response::builder()
                        .status(200)
                        .body::<Option<&str>>(None),
                ))
                .read_health()
                .await
                .unwrap(),
                domain::BackendInfo::default()
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_health_no_connection() {
            assert!(matches!(
                rest_with_response(None).read_health().await,
                Err(domain::ReadError::Storage(
                    domain::StorageError::NoConnection
                ))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_read_health_server_error() {
            assert!(matches!(
                rest_with_response(Some(
                    gloo_net::http::Response::builder()
                        .status(503)
                        .body::<Option<&str>>(None),
                ))
                .read_health()
                .await,
                Err(domain::ReadError::Other(_))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_generate_workout() {
            let rest = rest_with_response(Some(
                gloo_net::http::Response::builder()
                    .status(200)
                    .json(&workout_response_json()),
            ));
            let query = domain::WorkoutFilter::default()
                .query(domain::Query::new("leg day").unwrap());

            assert_eq!(rest.generate_workout(&query).await.unwrap(), workout());

            let request = rest.sender.request.borrow_mut().take().unwrap();
            assert_eq!(request.method(), Method::POST);
            assert_eq!(request.url(), "http://localhost:8000/api/workout");
        }

        #[wasm_bindgen_test]
        async fn test_generate_workout_server_error() {
            let result = rest_with_response(Some(
                gloo_net::http::Response::builder()
                    .status(500)
                    .json(&json!({"detail": "LLM timeout"})),
            ))
            .generate_workout(&query())
            .await;

            assert!(matches!(
                result,
                Err(domain::GenerateError::Server { status: 500, ref message }) if message == "LLM timeout"
            ));
        }

        #[wasm_bindgen_test]
        async fn test_generate_workout_server_error_without_detail() {
            let result = rest_with_response(Some(
                gloo_net::http::Response::builder()
                    .status(502)
                    .body(Some("Bad Gateway")),
            ))
            .generate_workout(&query())
            .await;

            assert_eq!(result.unwrap_err().message(), "Server Error: 502");
        }

        #[wasm_bindgen_test]
        async fn test_generate_workout_malformed_response() {
            assert!(matches!(
                rest_with_response(Some(
                    gloo_net::http::Response::builder()
                        .status(200)
                        .body(Some("<html>")),
                ))
                .generate_workout(&query())
                .await,
                Err(domain::GenerateError::Other(_))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_generate_workout_no_connection() {
            assert!(matches!(
                rest_with_response(None).generate_workout(&query()).await,
                Err(domain::GenerateError::Storage(
                    domain::StorageError::NoConnection
                ))
            ));
        }

        fn query() -> domain::WorkoutQuery {
            domain::WorkoutFilter::default().query(domain::Query::new("leg day").unwrap())
        }

        fn rest_with_response(
            response: Option<Result<gloo_net::http::Response, gloo_net::Error>>,
        ) -> REST<MockSendRequest> {
            REST {
                sender: MockSendRequest {
                    request: RefCell::new(None),
                    response: RefCell::new(response),
                },
                url: ApiUrl::default(),
            }
        }

        struct MockSendRequest {
            request: RefCell<Option<gloo_net::http::Request>>,
            response: RefCell<Option<Result<gloo_net::http::Response, gloo_net::Error>>>,
        }

        impl SendRequest for MockSendRequest {
            async fn send_request(
                &self,
                request: gloo_net::http::Request,
            ) -> Result<gloo_net::http::Response, gloo_net::Error> {
                *self.request.borrow_mut() = Some(request);
                (*self.response.borrow_mut())
                    .take()
                    .unwrap_or(Err(gloo_net::Error::GlooError("no response".to_string())))
            }
        }
    }
}
