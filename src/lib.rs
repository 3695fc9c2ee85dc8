//! Question generation and scoring for the geography quiz: resolve a
//! scope to a country pool, build shuffled multiple-choice questions with
//! geographically plausible distractors, and drive one session at a time.

pub mod catalog;
pub mod distractor;
pub mod error;
pub mod geo;
pub mod question;
pub mod scope;
pub mod session;

pub use catalog::{Catalog, Continent, Coordinates, Country};
pub use error::CatalogError;
pub use question::{generate_questions, QuizMode, QuizQuestion};
pub use scope::QuizScope;
pub use session::{start_quiz, QuizSession};
