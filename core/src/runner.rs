//! # Walkthrough Runner
//!
//! Executes the selected steps, always in walkthrough order, over a fixed
//! sample set. Each step is independent; the prefix check trims the
//! configuration line itself rather than reusing the strip step's result,
//! so any subset of steps can run on its own.

use netstr_common::error::TextError;
use netstr_common::samples::{self, Samples};
use netstr_common::step::{self, Step};
use netstr_common::text;
use tracing::{debug, trace};

use crate::report::{Line, Report, StepOutcome};

pub struct TextDemoRunner<'a> {
    samples: &'a Samples,
}

impl<'a> TextDemoRunner<'a> {
    pub fn new(samples: &'a Samples) -> Self {
        Self { samples }
    }

    /// Runs every step.
    pub fn run_all(&self) -> Result<Report, TextError> {
        self.run(&Step::ALL)
    }

    /// Runs the given steps in walkthrough order, ignoring repeats.
    ///
    /// The first failing step aborts the run and no partial report is returned.
    pub fn run(&self, steps: &[Step]) -> Result<Report, TextError> {
        let mut report = Report::new();

        for step in step::in_run_order(steps) {
            debug!("running step '{step}'");
            let outcome = self.run_step(step)?;
            trace!("step '{step}' produced {} line(s)", outcome.lines.len());
            report.push(outcome);
        }

        Ok(report)
    }

    pub fn run_step(&self, step: Step) -> Result<StepOutcome, TextError> {
        let lines = match step {
            Step::Declare => self.declare(),
            Step::Split => self.split(),
            Step::Strip => self.strip(),
            Step::Affixes => self.affixes(),
            Step::Replace => self.replace(),
            Step::Mac => self.mac(),
            Step::Slice => self.slice()?,
            Step::Join => self.join(),
        };
        Ok(StepOutcome::new(step, lines))
    }

    fn declare(&self) -> Vec<Line> {
        let s = self.samples;
        vec![
            field("IP Address", s.ip_address),
            field("Hostname", s.hostname),
            field("Interface Name", s.interface_name),
            field("MAC Address", s.mac_address),
            field("Configuration Line", s.config_line),
        ]
    }

    fn split(&self) -> Vec<Line> {
        let pieces = text::split_lines(self.samples.interface_block);

        let mut lines = Vec::with_capacity(pieces.len() + 1);
        lines.push(Line::Caption("Output split into lines:"));
        lines.extend(pieces.into_iter().map(|piece| Line::Text(piece.to_string())));
        lines
    }

    fn strip(&self) -> Vec<Line> {
        vec![Line::Quoted {
            label: "Cleaned config line",
            value: text::strip(self.samples.config_line).to_string(),
        }]
    }

    fn affixes(&self) -> Vec<Line> {
        let cleaned = text::strip(self.samples.config_line);
        vec![
            Line::Check {
                question: format!("Does config_line start with '{}'?", samples::ADDRESS_PREFIX),
                answer: text::has_prefix(cleaned, samples::ADDRESS_PREFIX),
            },
            Line::Check {
                question: format!("Does hostname end with '{}'?", samples::HOSTNAME_SUFFIX),
                answer: text::has_suffix(self.samples.hostname, samples::HOSTNAME_SUFFIX),
            },
        ]
    }

    fn replace(&self) -> Vec<Line> {
        let new_ip = text::replace_literal(
            self.samples.ip_address,
            samples::IP_ADDRESS,
            samples::NEW_IP_ADDRESS,
        );
        vec![field("New IP Address", &new_ip)]
    }

    fn mac(&self) -> Vec<Line> {
        let compact = text::compact_mac(self.samples.mac_address);
        vec![field("MAC Address (uppercase, no colons)", &compact)]
    }

    fn slice(&self) -> Result<Vec<Line>, TextError> {
        let number = text::interface_number(self.samples.interface_name)?;
        Ok(vec![field("Interface Number", number)])
    }

    fn join(&self) -> Vec<Line> {
        let path = text::join_path(self.samples.path_elements);
        vec![field("Config Path", &path)]
    }
}

fn field(label: &'static str, value: &str) -> Line {
    Line::Field {
        label,
        value: value.to_string(),
    }
}
