pub mod list;
pub mod walkthrough;

use clap::Parser;
use netstr_common::step::Step;

#[derive(Parser)]
#[command(name = "netstr", version)]
#[command(about = "String handling walkthrough on network engineering samples.")]
pub struct CommandLine {
    /// Run only the given step; repeat to pick several
    #[arg(short, long = "step", value_name = "STEP")]
    pub steps: Vec<Step>,
    /// Hide the header and the summary
    #[arg(short, long)]
    pub quiet: bool,
    /// No colors or decorations
    #[arg(long)]
    pub plain: bool,
    /// More diagnostics (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// List the available steps and exit
    #[arg(long)]
    pub list: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
