// src/client/view.rs

use super::controller::Screen;

/// How an answer option is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Selectable, nothing chosen yet.
    Idle,
    /// Revealed as the right answer.
    Correct,
    /// Chosen, and wrong.
    Incorrect,
    /// Neither chosen nor correct.
    Faded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub state: OptionState,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    /// 1-based.
    pub number: usize,
    pub total: usize,
    pub score: u32,
    pub text: String,
    pub options: Vec<OptionView>,
    pub next_visible: bool,
}

/// Outcome of the single leaderboard submission made on reaching the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Pending,
    Saved,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub username: String,
    /// Rendered as `"{score} / {total}"`.
    pub final_score: String,
    pub submission: SubmissionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// 1-based position in the listing.
    pub rank: usize,
    pub username: String,
    /// Rendered as `"{score} / {total}"`.
    pub score: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardStatus {
    Hidden,
    Empty(String),
    Loaded(Vec<LeaderboardRow>),
    Error(String),
}

/// Everything a front end needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub screen: Screen,
    /// Pre-filled with the last username used in this process.
    pub username_input: String,
    pub username_error: Option<String>,
    /// Blocking message the user has to acknowledge.
    pub alert: Option<String>,
    pub quiz: Option<QuizView>,
    pub result: Option<ResultView>,
    pub leaderboard: LeaderboardStatus,
}

impl Default for View {
    fn default() -> Self {
        Self {
            screen: Screen::Start,
            username_input: String::new(),
            username_error: None,
            alert: None,
            quiz: None,
            result: None,
            leaderboard: LeaderboardStatus::Hidden,
        }
    }
}
