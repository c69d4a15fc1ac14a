pub mod element;
pub mod exercise_card;
pub mod form;
pub mod navbar;
pub mod skeleton_card;
pub mod workout_summary;
