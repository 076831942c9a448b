//! Task descriptions sent to the delegate.
//!
//! Each template names the exact JSON shape the reply must have; the
//! parsers in [`crate::solver::parsing`] accept nothing else.

use crate::choice::index::ChoiceIndex;

/// Templates for each delegate call
pub struct TaskTemplate;

impl TaskTemplate {
    /// System prompt shared by every call
    pub fn system() -> &'static str {
        r#"You are a careful exam author and solver.
Reply with a single JSON object and nothing else: no markdown, no code fences, no commentary."#
    }

    /// Blind numeric solve. The answer choices are deliberately withheld so
    /// the computation is not anchored toward any of them.
    pub fn blind_solve(prompt: &str) -> String {
        format!(
            r#"Solve the following problem. Work it out step by step.

Problem:
{prompt}

Reply with JSON of exactly this shape:
{{"finalAnswer": <number>, "solution": "<step-by-step derivation>"}}
"finalAnswer" must be a plain number (use a decimal, not a fraction or units)."#
        )
    }

    /// Choice-aware solve. `selected` is the user's pick for interactive checks.
    pub fn choice_aware_solve(
        prompt: &str,
        choices: &[String],
        passage: Option<&str>,
        selected: Option<ChoiceIndex>,
    ) -> String {
        let mut task = String::new();
        if let Some(passage) = passage.filter(|p| !p.trim().is_empty()) {
            task.push_str(&format!("Passage:\n{passage}\n\n"));
        }
        task.push_str(&format!("Question:\n{prompt}\n\nChoices:\n"));
        for (i, choice) in choices.iter().enumerate() {
            let letter = ChoiceIndex::new(i).map(ChoiceIndex::letter).unwrap_or('?');
            task.push_str(&format!("{letter}) {choice}\n"));
        }
        match selected {
            Some(index) => task.push_str(&format!(
                "\nThe student selected {}. Determine the correct choice and whether the student is right.\n",
                index.letter()
            )),
            None => task.push_str("\nDetermine the correct choice.\n"),
        }
        task.push_str(
            r#"
Reply with JSON of exactly this shape:
{"correctIndex": <0-3, where 0 is A>, "isCorrect": <true|false>, "solution": "<explanation>"}"#,
        );
        task
    }

    /// Question generation for the batch endpoint
    pub fn generate(subject: &str, topic: &str, difficulty: &str, count: usize) -> String {
        format!(
            r#"Write {count} multiple-choice questions.
Subject: {subject}
Topic: {topic}
Difficulty: {difficulty}

Each question has exactly 4 choices. For math, choices are numbers (decimals, fractions or mixed numbers, optionally with units).
For other subjects, include "correctIndex" (0-3) and "solution"; include "passage" when the question refers to one.

Reply with JSON of exactly this shape:
{{"questions": [{{"prompt": "...", "choices": ["...", "...", "...", "..."], "topic": "{topic}", "difficulty": "{difficulty}", "passage": "...", "correctIndex": 0, "solution": "..."}}]}}"#
        )
    }
}
