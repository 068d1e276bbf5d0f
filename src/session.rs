use crate::logger;
use crate::models::{Feedback, FinalReport, Label, Phase, Question};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use rand::seq::SliceRandom;

/// The quiz state machine. The sequence is shuffled once at construction
/// and never mutated afterwards; position and score only ever grow.
#[derive(Debug)]
pub struct QuizSession {
    sequence: Vec<Question>,
    position: usize,
    score: usize,
    phase: Phase,
    results: Vec<Feedback>,
}

impl QuizSession {
    /// Shuffle the question set with the caller's RNG and start at the
    /// first question. An empty set never enters the machine.
    pub fn new<R: Rng>(mut questions: Vec<Question>, rng: &mut R) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        questions.shuffle(rng);
        Some(Self {
            sequence: questions,
            position: 0,
            score: 0,
            phase: Phase::AwaitingAnswer,
            results: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.sequence.len()
    }

    /// The active question; None once the session is finished.
    pub fn current(&self) -> Option<&Question> {
        self.sequence.get(self.position)
    }

    /// Feedback for the question just answered, present only while the
    /// session is showing it.
    pub fn feedback(&self) -> Option<Feedback> {
        match self.phase {
            Phase::ShowingFeedback => self.results.last().copied(),
            _ => None,
        }
    }

    /// The shuffled sequence, for the summary listing.
    pub fn questions(&self) -> &[Question] {
        &self.sequence
    }

    /// Outcomes of every answered question so far, in presentation order.
    pub fn results(&self) -> &[Feedback] {
        &self.results
    }

    pub fn report(&self) -> Option<FinalReport> {
        match self.phase {
            Phase::Finished => Some(FinalReport {
                score: self.score,
                total: self.sequence.len(),
            }),
            _ => None,
        }
    }

    /// Grade `label` against the current question. Honored only while
    /// awaiting an answer; returns false otherwise, so a second submission
    /// for the same question can never count.
    pub fn submit_answer(&mut self, label: Label) -> bool {
        if self.phase != Phase::AwaitingAnswer {
            return false;
        }
        let question = &self.sequence[self.position];
        let correct = question.correct == label;
        if correct {
            self.score += 1;
        }
        self.results.push(Feedback {
            submitted: label,
            correct,
            answer: question.correct,
        });
        self.phase = Phase::ShowingFeedback;
        logger::log(&format!(
            "question {}: submitted {} ({})",
            self.position + 1,
            label,
            if correct { "correct" } else { "wrong" }
        ));
        true
    }

    /// Move past the feedback to the next question, or finish. Honored
    /// only while feedback is showing; the presentation layer decides when
    /// (it owns the delay), the session only guarantees it happens once.
    pub fn advance(&mut self) {
        if self.phase != Phase::ShowingFeedback {
            return;
        }
        self.position += 1;
        if self.position == self.sequence.len() {
            self.phase = Phase::Finished;
            logger::log(&format!(
                "finished: {} / {}",
                self.score,
                self.sequence.len()
            ));
        } else {
            self.phase = Phase::AwaitingAnswer;
        }
    }
}

/// What a key press amounted to, so the event loop knows whether to start
/// the feedback timer or tear the terminal down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    Submitted,
    QuitRequested,
}

/// Translate a key press into a session transition. `a`-`d` submit while a
/// question is active and are inert while feedback is showing, which is
/// what disables the controls between submission and auto-advance.
pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent) -> InputOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => InputOutcome::QuitRequested,
            _ => InputOutcome::Ignored,
        };
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputOutcome::QuitRequested,
        KeyCode::Char(c) => match Label::from_char(c) {
            Some(label) if session.submit_answer(label) => InputOutcome::Submitted,
            _ => InputOutcome::Ignored,
        },
        _ => InputOutcome::Ignored,
    }
}
