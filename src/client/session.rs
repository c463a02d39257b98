// src/client/session.rs

use crate::models::{
    leaderboard::ScoreSubmission,
    question::{Difficulty, Question},
};

/// Result of locking in an answer for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub chosen: usize,
    /// Index of the option equal to the answer, if the bank entry has one.
    pub correct: Option<usize>,
    pub is_correct: bool,
}

/// Where the session is after advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Question(usize),
    Finished,
}

/// One play-through, from quiz start to result.
#[derive(Debug, Clone)]
pub struct QuizSession {
    username: String,
    difficulty: Difficulty,
    questions: Vec<Question>,
    index: usize,
    score: u32,
    answered: Option<Selection>,
    submitted: bool,
}

impl QuizSession {
    /// `username` must already be trimmed and non-empty, `questions` non-empty.
    pub fn new(username: String, difficulty: Difficulty, questions: Vec<Question>) -> Self {
        Self {
            username,
            difficulty,
            questions,
            index: 0,
            score: 0,
            answered: None,
            submitted: false,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// The locked-in selection for the current question, if any.
    pub fn answered(&self) -> Option<Selection> {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Locks in `chosen` for the current question.
    ///
    /// Only the first call per question counts; later calls return `None`
    /// and leave the score alone, as does an out-of-range index.
    pub fn select(&mut self, chosen: usize) -> Option<Selection> {
        if self.answered.is_some() {
            return None;
        }
        let question = self.questions.get(self.index)?;
        let option = question.options.get(chosen)?;

        let is_correct = question.is_correct(option);
        let selection = Selection {
            chosen,
            correct: question.answer_index(),
            is_correct,
        };

        if is_correct {
            self.score += 1;
        }
        self.answered = Some(selection);
        Some(selection)
    }

    /// Moves past the current question.
    pub fn advance(&mut self) -> Progress {
        if !self.is_finished() {
            self.index += 1;
            self.answered = None;
        }
        if self.is_finished() {
            Progress::Finished
        } else {
            Progress::Question(self.index)
        }
    }

    /// Hands out the leaderboard payload the first time it is asked for once
    /// the session is finished. Every later call returns `None`.
    pub fn take_submission(&mut self) -> Option<ScoreSubmission> {
        if self.submitted || !self.is_finished() {
            return None;
        }
        self.submitted = true;
        Some(ScoreSubmission {
            username: self.username.clone(),
            score: self.score,
            total: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
            difficulty: self.difficulty.as_str().to_string(),
        })
    }
}
