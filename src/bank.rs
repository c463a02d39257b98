// src/bank.rs

//! The fixed, difficulty-keyed question bank.

use std::sync::LazyLock;

use crate::models::question::{Difficulty, Question};

fn q(question: &str, options: [&str; 4], answer: &str) -> Question {
    Question {
        question: question.to_string(),
        options: options.iter().map(|opt| opt.to_string()).collect(),
        answer: answer.to_string(),
    }
}

static EASY: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        q(
            "What does 'HTML' stand for?",
            [
                "Hyper Text Markup Language",
                "High Tech Modern Language",
                "Hyperlink and Text Markup Language",
                "Home Tool Markup Language",
            ],
            "Hyper Text Markup Language",
        ),
        q(
            "Which tag is used to create a hyperlink?",
            ["<link>", "<a>", "<href>", "<p>"],
            "<a>",
        ),
        q(
            "What is the correct CSS syntax for changing the color of a paragraph?",
            [
                "p {color: red;}",
                "p.color = 'red';",
                "<p style='color:red;'>",
                "paragraph-color: red;",
            ],
            "p {color: red;}",
        ),
    ]
});

static MEDIUM: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        q(
            "Which of these is a JavaScript framework?",
            ["Laravel", "Django", "React", "Sass"],
            "React",
        ),
        q(
            "What does `JSON.parse()` do?",
            [
                "Converts a JSON string into a JavaScript object",
                "Converts a JavaScript object into a JSON string",
                "Creates a new JSON file",
                "Parses a CSS file",
            ],
            "Converts a JSON string into a JavaScript object",
        ),
        q(
            "Which git command is used to create a new branch?",
            [
                "git branch new-branch",
                "git create branch new-branch",
                "git checkout -b new-branch",
                "git new branch",
            ],
            "git checkout -b new-branch",
        ),
    ]
});

static HARD: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        q(
            "What is a 'closure' in JavaScript?",
            [
                "A function having access to the parent scope, even after the parent function has closed",
                "A way to close a memory leak",
                "A type of CSS class",
                "A method to shut down the server",
            ],
            "A function having access to the parent scope, even after the parent function has closed",
        ),
        q(
            "What is the time complexity of a binary search algorithm?",
            ["O(n)", "O(log n)", "O(n^2)", "O(1)"],
            "O(log n)",
        ),
        q(
            "In object-oriented programming, what is polymorphism?",
            [
                "The ability of an object to take on many forms",
                "A way to hide implementation details",
                "The process of creating a new class from an existing class",
                "A single name for a set of functions",
            ],
            "The ability of an object to take on many forms",
        ),
    ]
});

/// Returns the full, ordered question list for a tier.
pub fn questions_for(difficulty: Difficulty) -> &'static [Question] {
    match difficulty {
        Difficulty::Easy => EASY.as_slice(),
        Difficulty::Medium => MEDIUM.as_slice(),
        Difficulty::Hard => HARD.as_slice(),
    }
}

/// Looks a tier up by its raw key. `None` for anything but the three known keys.
pub fn lookup(key: &str) -> Option<&'static [Question]> {
    key.parse::<Difficulty>().ok().map(questions_for)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_tier_is_well_formed() {
        for d in Difficulty::ALL {
            let questions = questions_for(d);
            assert!(!questions.is_empty(), "{d} has no questions");
            for question in questions {
                assert!(question.options.len() >= 2);
                let unique: HashSet<_> = question.options.iter().collect();
                assert_eq!(unique.len(), question.options.len(), "duplicate option in {:?}", question.question);
                assert!(question.answer_index().is_some(), "answer missing from options: {:?}", question.question);
            }
        }
    }

    #[test]
    fn unknown_key_is_not_found() {
        assert!(lookup("unknown").is_none());
        assert!(lookup("").is_none());
        assert_eq!(lookup("medium").map(<[Question]>::len), Some(3));
    }
}
