// src/client/controller.rs

use std::fmt;

use super::{
    api::QuizApi,
    session::{Progress, QuizSession},
    view::{
        LeaderboardRow, LeaderboardStatus, OptionState, OptionView, QuizView, ResultView,
        SubmissionStatus, View,
    },
};
use crate::models::question::Difficulty;

pub const USERNAME_REQUIRED: &str = "Please enter a username!";
pub const QUESTIONS_UNREACHABLE: &str =
    "Could not connect to the server to get questions. Is the backend running?";
pub const QUESTIONS_EMPTY: &str = "Error: Could not load questions for this difficulty.";
pub const LEADERBOARD_EMPTY: &str = "No scores yet. Be the first!";
pub const LEADERBOARD_UNREACHABLE: &str = "Error loading leaderboard. Is the backend running?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Start,
    Quiz,
    Result,
    Leaderboard,
}

/// A user action, addressed to a control on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    EnterUsername(String),
    DismissAlert,
    StartQuiz(Difficulty),
    SelectOption(usize),
    Next,
    ShowLeaderboard,
    Restart,
}

/// Identity of a control, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    EnterUsername,
    DismissAlert,
    StartQuiz,
    SelectOption,
    Next,
    ShowLeaderboard,
    Restart,
}

impl Control {
    pub fn kind(&self) -> ControlKind {
        match self {
            Control::EnterUsername(_) => ControlKind::EnterUsername,
            Control::DismissAlert => ControlKind::DismissAlert,
            Control::StartQuiz(_) => ControlKind::StartQuiz,
            Control::SelectOption(_) => ControlKind::SelectOption,
            Control::Next => ControlKind::Next,
            Control::ShowLeaderboard => ControlKind::ShowLeaderboard,
            Control::Restart => ControlKind::Restart,
        }
    }
}

/// Controls wired up on each screen. Anything not listed is not on screen.
const DISPATCH_TABLE: &[(Screen, ControlKind)] = &[
    (Screen::Start, ControlKind::EnterUsername),
    (Screen::Start, ControlKind::DismissAlert),
    (Screen::Start, ControlKind::StartQuiz),
    (Screen::Quiz, ControlKind::SelectOption),
    (Screen::Quiz, ControlKind::Next),
    (Screen::Result, ControlKind::ShowLeaderboard),
    (Screen::Result, ControlKind::Restart),
    (Screen::Leaderboard, ControlKind::Restart),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// The control is not present, or not yet shown, on the current screen.
    ControlUnavailable { screen: Screen, control: ControlKind },

    /// The selected option index does not exist on the current question.
    NoSuchOption(usize),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::ControlUnavailable { screen, control } => {
                write!(f, "{:?} is not available on the {:?} screen", control, screen)
            }
            ControllerError::NoSuchOption(index) => write!(f, "no option at index {}", index),
        }
    }
}

impl std::error::Error for ControllerError {}

/// Drives one user through Start, Quiz, Result and Leaderboard.
///
/// All state lives here; transport failures are logged and turned into view
/// messages, never returned.
pub struct QuizController<A> {
    api: A,
    last_username: String,
    session: Option<QuizSession>,
    view: View,
}

impl<A: QuizApi> QuizController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            last_username: String::new(),
            session: None,
            view: View::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.view.screen
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Whether `kind` is wired on the current screen and currently shown.
    ///
    /// While an alert is up, dismissing it is the only thing the user can do.
    pub fn is_available(&self, kind: ControlKind) -> bool {
        if self.view.alert.is_some() {
            return kind == ControlKind::DismissAlert;
        }

        let wired = DISPATCH_TABLE
            .iter()
            .any(|&(screen, control)| screen == self.view.screen && control == kind);

        match kind {
            ControlKind::Next => {
                wired && self.view.quiz.as_ref().is_some_and(|quiz| quiz.next_visible)
            }
            _ => wired,
        }
    }

    /// Routes a user action to its handler.
    pub async fn dispatch(&mut self, control: Control) -> Result<(), ControllerError> {
        let kind = control.kind();
        if !self.is_available(kind) {
            return Err(ControllerError::ControlUnavailable {
                screen: self.view.screen,
                control: kind,
            });
        }

        match control {
            Control::EnterUsername(name) => self.view.username_input = name,
            Control::DismissAlert => self.view.alert = None,
            Control::StartQuiz(difficulty) => self.start_quiz(difficulty).await,
            Control::SelectOption(index) => self.select_answer(index)?,
            Control::Next => self.next_question().await,
            Control::ShowLeaderboard => self.show_leaderboard().await,
            Control::Restart => self.restart(),
        }
        Ok(())
    }

    async fn start_quiz(&mut self, difficulty: Difficulty) {
        let username = self.view.username_input.trim().to_string();
        if username.is_empty() {
            self.view.username_error = Some(USERNAME_REQUIRED.to_string());
            return;
        }
        self.view.username_error = None;
        self.last_username = username.clone();

        let questions = match self.api.fetch_questions(difficulty).await {
            Ok(questions) => questions,
            Err(e) => {
                tracing::error!("Error starting quiz: {}", e);
                self.view.alert = Some(QUESTIONS_UNREACHABLE.to_string());
                return;
            }
        };

        if questions.is_empty() {
            tracing::warn!("Service returned no questions for {}", difficulty);
            self.view.alert = Some(QUESTIONS_EMPTY.to_string());
            return;
        }

        tracing::debug!(%difficulty, count = questions.len(), "Starting quiz for {}", username);
        self.session = Some(QuizSession::new(username, difficulty, questions));
        self.view.screen = Screen::Quiz;
        self.show_question();
    }

    fn show_question(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(question) = session.current() else {
            return;
        };

        self.view.quiz = Some(QuizView {
            number: session.index() + 1,
            total: session.total(),
            score: session.score(),
            text: question.question.clone(),
            options: question
                .options
                .iter()
                .map(|label| OptionView {
                    label: label.clone(),
                    state: OptionState::Idle,
                    enabled: true,
                })
                .collect(),
            next_visible: false,
        });
    }

    fn select_answer(&mut self, index: usize) -> Result<(), ControllerError> {
        let (Some(session), Some(quiz)) = (self.session.as_mut(), self.view.quiz.as_mut()) else {
            return Ok(());
        };

        // Already answered: every option is inert.
        if session.answered().is_some() {
            return Ok(());
        }

        let selection = session.select(index).ok_or(ControllerError::NoSuchOption(index))?;

        for (i, option) in quiz.options.iter_mut().enumerate() {
            option.enabled = false;
            option.state = if Some(i) == selection.correct {
                OptionState::Correct
            } else if i == selection.chosen {
                OptionState::Incorrect
            } else {
                OptionState::Faded
            };
        }
        quiz.score = session.score();
        quiz.next_visible = true;
        Ok(())
    }

    async fn next_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.advance() {
            Progress::Question(_) => self.show_question(),
            Progress::Finished => self.show_result().await,
        }
    }

    async fn show_result(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        self.view.screen = Screen::Result;
        self.view.quiz = None;
        self.view.result = Some(ResultView {
            username: session.username().to_string(),
            final_score: format!("{} / {}", session.score(), session.total()),
            submission: SubmissionStatus::Pending,
        });

        let Some(submission) = session.take_submission() else {
            return;
        };

        let status = match self.api.submit_score(&submission).await {
            Ok(()) => {
                tracing::info!("Score saved to leaderboard");
                SubmissionStatus::Saved
            }
            Err(e) => {
                tracing::error!("Error saving score: {}", e);
                SubmissionStatus::Failed(e.to_string())
            }
        };

        if let Some(result) = self.view.result.as_mut() {
            result.submission = status;
        }
    }

    async fn show_leaderboard(&mut self) {
        self.view.screen = Screen::Leaderboard;
        self.view.leaderboard = match self.api.fetch_leaderboard().await {
            Ok(entries) if entries.is_empty() => {
                LeaderboardStatus::Empty(LEADERBOARD_EMPTY.to_string())
            }
            Ok(entries) => LeaderboardStatus::Loaded(
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, entry)| LeaderboardRow {
                        rank: i + 1,
                        username: entry.username,
                        score: format!("{} / {}", entry.score, entry.total),
                        difficulty: entry.difficulty,
                    })
                    .collect(),
            ),
            Err(e) => {
                tracing::error!("Error fetching leaderboard: {}", e);
                LeaderboardStatus::Error(LEADERBOARD_UNREACHABLE.to_string())
            }
        };
    }

    fn restart(&mut self) {
        self.session = None;
        self.view = View {
            username_input: self.last_username.clone(),
            ..View::default()
        };
    }
}
