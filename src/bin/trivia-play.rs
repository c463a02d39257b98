// src/bin/trivia-play.rs

//! Plays the quiz in a terminal against a running trivia service.

use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;
use trivia::client::{
    Control, HttpQuizApi, QuizController, Screen,
    api::DEFAULT_API_URL,
    view::{LeaderboardStatus, OptionState, SubmissionStatus, View},
};
use trivia::models::question::Difficulty;

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let base_url = std::env::var("TRIVIA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let mut controller = QuizController::new(HttpQuizApi::new(base_url));
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(controls) = next_controls(controller.view(), &mut input).await? else {
            break;
        };
        for control in controls {
            if let Err(e) = controller.dispatch(control).await {
                println!("  ({})", e);
            }
        }
    }

    Ok(())
}

async fn prompt(input: &mut Input, label: &str) -> std::io::Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

/// Renders the view and reads the next actions. `None` ends the program.
async fn next_controls(view: &View, input: &mut Input) -> std::io::Result<Option<Vec<Control>>> {
    if let Some(alert) = &view.alert {
        println!("\n!! {}", alert);
        return Ok(Some(vec![Control::DismissAlert]));
    }

    match view.screen {
        Screen::Start => {
            if let Some(error) = &view.username_error {
                println!("  {}", error);
            }
            let label = if view.username_input.is_empty() {
                "\nUsername: ".to_string()
            } else {
                format!("\nUsername [{}]: ", view.username_input)
            };
            let Some(name) = prompt(input, &label).await? else {
                return Ok(None);
            };
            let mut controls = Vec::new();
            if !name.is_empty() {
                controls.push(Control::EnterUsername(name));
            }

            loop {
                let Some(choice) = prompt(input, "Difficulty (easy/medium/hard, q to quit): ").await? else {
                    return Ok(None);
                };
                if choice == "q" {
                    return Ok(None);
                }
                match choice.parse::<Difficulty>() {
                    Ok(difficulty) => {
                        controls.push(Control::StartQuiz(difficulty));
                        return Ok(Some(controls));
                    }
                    Err(e) => println!("  {}", e),
                }
            }
        }
        Screen::Quiz => {
            let Some(quiz) = &view.quiz else {
                return Ok(None);
            };
            if quiz.next_visible {
                for option in &quiz.options {
                    let mark = match option.state {
                        OptionState::Correct => "correct",
                        OptionState::Incorrect => "wrong",
                        _ => "",
                    };
                    if !mark.is_empty() {
                        println!("  {} <- {}", option.label, mark);
                    }
                }
                println!("  Score: {}", quiz.score);
                return match prompt(input, "Press enter for the next question").await? {
                    Some(_) => Ok(Some(vec![Control::Next])),
                    None => Ok(None),
                };
            }

            println!("\nQuestion {} of {}  (score {})", quiz.number, quiz.total, quiz.score);
            println!("{}", quiz.text);
            for (i, option) in quiz.options.iter().enumerate() {
                println!("  {}) {}", i + 1, option.label);
            }
            loop {
                let Some(answer) = prompt(input, "Your answer: ").await? else {
                    return Ok(None);
                };
                match answer.parse::<usize>() {
                    Ok(n) if n >= 1 => return Ok(Some(vec![Control::SelectOption(n - 1)])),
                    _ => println!("  Enter an option number"),
                }
            }
        }
        Screen::Result => {
            if let Some(result) = &view.result {
                println!("\nWell done, {}! Final score: {}", result.username, result.final_score);
                match &result.submission {
                    SubmissionStatus::Saved => println!("  Score saved to leaderboard"),
                    SubmissionStatus::Failed(e) => println!("  Could not save score: {}", e),
                    SubmissionStatus::Pending => {}
                }
            }
            menu(input, true).await
        }
        Screen::Leaderboard => {
            println!("\nLeaderboard");
            match &view.leaderboard {
                LeaderboardStatus::Loaded(rows) => {
                    for row in rows {
                        println!("  {:>3}. {:<20} {:>7}  {}", row.rank, row.username, row.score, row.difficulty);
                    }
                }
                LeaderboardStatus::Empty(msg) | LeaderboardStatus::Error(msg) => println!("  {}", msg),
                LeaderboardStatus::Hidden => {}
            }
            menu(input, false).await
        }
    }
}

async fn menu(input: &mut Input, with_leaderboard: bool) -> std::io::Result<Option<Vec<Control>>> {
    let label = if with_leaderboard {
        "[l]eaderboard, [r]estart, [q]uit: "
    } else {
        "[r]estart, [q]uit: "
    };
    loop {
        let Some(choice) = prompt(input, label).await? else {
            return Ok(None);
        };
        match choice.as_str() {
            "l" if with_leaderboard => return Ok(Some(vec![Control::ShowLeaderboard])),
            "r" => return Ok(Some(vec![Control::Restart])),
            "q" => return Ok(None),
            _ => {}
        }
    }
}
