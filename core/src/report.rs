use std::fmt;

use netstr_common::step::Step;

/// One printed line of a step's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `Label: value`
    Field { label: &'static str, value: String },
    /// `Label: 'value'`
    Quoted { label: &'static str, value: String },
    /// `Question? answer`
    Check { question: String, answer: bool },
    /// A heading for the lines that follow it.
    Caption(&'static str),
    /// A line reproduced as-is.
    Text(String),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Field { label, value } => write!(f, "{label}: {value}"),
            Line::Quoted { label, value } => write!(f, "{label}: '{value}'"),
            Line::Check { question, answer } => write!(f, "{question} {answer}"),
            Line::Caption(caption) => f.write_str(caption),
            Line::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    pub lines: Vec<Line>,
}

impl StepOutcome {
    pub fn new(step: Step, lines: Vec<Line>) -> Self {
        Self { step, lines }
    }
}

/// The results of one walkthrough run, in the order the steps ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<StepOutcome>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Every output row in print order. `None` stands for a blank separator row.
    ///
    /// Spaced steps get a blank row in front of them unless they open the report.
    pub fn rows(&self) -> impl Iterator<Item = Option<&Line>> + '_ {
        self.outcomes.iter().enumerate().flat_map(|(idx, outcome)| {
            let gap = (idx > 0 && outcome.step.spaced()).then_some(None);
            gap.into_iter().chain(outcome.lines.iter().map(Some))
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            match row {
                Some(line) => writeln!(f, "{line}")?,
                None => writeln!(f)?,
            }
        }
        Ok(())
    }
}
