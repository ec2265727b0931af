use anyhow::Context;
use colored::*;

use crate::nprint;
use crate::terminal::{colors, format, print};
use netstr_common::config::Config;
use netstr_common::samples::Samples;
use netstr_core::runner::TextDemoRunner;

pub fn walkthrough(cfg: &Config) -> anyhow::Result<()> {
    let samples = Samples::default();
    let runner = TextDemoRunner::new(&samples);
    let report = runner
        .run(&cfg.selected_steps())
        .context("string walkthrough aborted")?;

    if cfg.decorated() {
        print::header("string methods");
    }

    for row in report.rows() {
        match row {
            Some(line) => print::print(&format::line(line)),
            None => {
                nprint!();
            }
        }
    }

    if cfg.decorated() {
        print::fat_separator();
        let unit = if report.len() == 1 { "step" } else { "steps" };
        print::centerln(&format!(
            "{} {} completed",
            report.len().to_string().color(colors::ACCENT).bold(),
            unit
        ));
    }

    Ok(())
}
