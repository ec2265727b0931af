use colored::*;
use netstr_core::report::Line;

use crate::terminal::colors;

/// Colorizes a report line without changing its text.
pub fn line(line: &Line) -> String {
    match line {
        Line::Field { label, value } => {
            format!("{}: {}", label.color(colors::PRIMARY), value.color(colors::VALUE))
        }
        Line::Quoted { label, value } => format!(
            "{}: {}{}{}",
            label.color(colors::PRIMARY),
            "'".color(colors::SEPARATOR),
            value.color(colors::VALUE),
            "'".color(colors::SEPARATOR)
        ),
        Line::Check { question, answer } => {
            let color = if *answer { colors::CHECK_PASS } else { colors::CHECK_FAIL };
            format!(
                "{} {}",
                question.color(colors::PRIMARY),
                answer.to_string().color(color).bold()
            )
        }
        Line::Caption(caption) => caption.color(colors::SECONDARY).to_string(),
        Line::Text(text) => text.color(colors::TEXT_DEFAULT).to_string(),
    }
}
