use std::fmt;

/// Answer labels, in display order. Every question carries exactly these
/// four options, so option storage is indexed by label instead of keyed
/// by a runtime map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    A,
    B,
    C,
    D,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::A, Label::B, Label::C, Label::D];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_char(c: char) -> Option<Label> {
        match c.to_ascii_uppercase() {
            'A' => Some(Label::A),
            'B' => Some(Label::B),
            'C' => Some(Label::C),
            'D' => Some(Label::D),
            _ => None,
        }
    }

    /// Normalize a raw source field into a label. Accepts a single
    /// letter `A`-`D` in either case, surrounded by any whitespace.
    pub fn parse(raw: &str) -> Option<Label> {
        let mut chars = raw.trim().chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Label::from_char(first)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Label::A => 'A',
            Label::B => 'B',
            Label::C => 'C',
            Label::D => 'D',
        };
        write!(f, "{}", c)
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: String,
    options: [String; 4],
    pub correct: Label,
}

impl Question {
    pub fn new(prompt: String, options: [String; 4], correct: Label) -> Self {
        Self {
            prompt,
            options,
            correct,
        }
    }

    pub fn option(&self, label: Label) -> &str {
        &self.options[label.index()]
    }
}

/// Where the session currently is in the per-question lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer,
    ShowingFeedback,
    Finished,
}

/// What the user just did with the current question, kept around so the
/// option controls can be recolored while the feedback is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub submitted: Label,
    pub correct: bool,
    /// The label that was (or would have been) the right answer.
    pub answer: Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalReport {
    pub score: usize,
    pub total: usize,
}
