use rand::Rng;

use crate::catalog::{Catalog, Country};
use crate::question::{generate_from_pool, QuizMode, QuizQuestion};
use crate::scope::QuizScope;

/// One run through a question sequence. The session owns its resolved pool
/// so a restart reshuffles without touching the catalog; everything here is
/// a synchronous in-memory transition, persistence and rendering are the
/// caller's problem.
#[derive(Debug, Clone)]
pub struct QuizSession {
    mode: QuizMode,
    pool: Vec<Country>,
    questions: Vec<QuizQuestion>,
    current: usize,
    score: u32,
    answered: bool,
    selected_answer: Option<String>,
    is_correct: Option<bool>,
    complete: bool,
}

impl QuizSession {
    pub fn start(
        mode: QuizMode,
        scope: &QuizScope,
        catalog: &Catalog,
        rng: &mut impl Rng,
    ) -> Self {
        let pool = scope.resolve(catalog);
        let questions = generate_from_pool(mode, &pool, rng);
        log::debug!("started {mode:?} session with {} questions", questions.len());

        Self {
            mode,
            pool,
            questions,
            current: 0,
            score: 0,
            answered: false,
            selected_answer: None,
            is_correct: None,
            complete: false,
        }
    }

    /// Records the user's pick for the current question. A second call
    /// before `next_question` is a no-op, so duplicate UI events cannot
    /// double-count the score.
    pub fn answer(&mut self, selected: &str) {
        if self.answered || self.complete {
            return;
        }
        let Some(question) = self.questions.get(self.current) else {
            return;
        };

        let correct = selected == question.correct_answer;
        self.answered = true;
        self.selected_answer = Some(selected.to_owned());
        self.is_correct = Some(correct);
        if correct {
            self.score += 1;
        }
    }

    /// Advances to the next question, clearing the per-question feedback,
    /// or completes the session when already on the last one. The last
    /// question's feedback survives into the terminal state.
    pub fn next_question(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.answered = false;
            self.selected_answer = None;
            self.is_correct = None;
        } else {
            self.complete = true;
        }
    }

    /// Fresh shuffle and distractor picks over the same pool, score and
    /// position reset.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.questions = generate_from_pool(self.mode, &self.pool, rng);
        self.current = 0;
        self.score = 0;
        self.answered = false;
        self.selected_answer = None;
        self.is_correct = None;
        self.complete = false;
    }

    /// `None` only for an empty session.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// One-based, for display.
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Production entry point: like [`QuizSession::start`] with the thread RNG.
pub fn start_quiz(mode: QuizMode, scope: &QuizScope, catalog: &Catalog) -> QuizSession {
    QuizSession::start(mode, scope, catalog, &mut rand::thread_rng())
}
