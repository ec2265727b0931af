//! # Walkthrough Steps
//!
//! The eight demonstrations, declared in the order they run. The derived
//! `Ord` follows declaration order, which is what [`in_run_order`] relies on.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Print the five sample values verbatim.
    Declare,
    /// Break the interface block into lines.
    Split,
    /// Trim the indented configuration line.
    Strip,
    /// Prefix check on the trimmed line, suffix check on the hostname.
    Affixes,
    /// Swap the IP address for a new one.
    Replace,
    /// Compact and upper-case the MAC address.
    Mac,
    /// Extract the interface number after the slash.
    Slice,
    /// Build a config path from its elements.
    Join,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::Declare,
        Step::Split,
        Step::Strip,
        Step::Affixes,
        Step::Replace,
        Step::Mac,
        Step::Slice,
        Step::Join,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Step::Declare => "declare",
            Step::Split => "split",
            Step::Strip => "strip",
            Step::Affixes => "affixes",
            Step::Replace => "replace",
            Step::Mac => "mac",
            Step::Slice => "slice",
            Step::Join => "join",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::Declare => "print the sample values",
            Step::Split => "split a config block on newlines",
            Step::Strip => "trim whitespace around a config line",
            Step::Affixes => "check a line prefix and a hostname suffix",
            Step::Replace => "replace an IP address literally",
            Step::Mac => "drop MAC colons and upper-case",
            Step::Slice => "take the interface number after '/'",
            Step::Join => "join path elements with '/'",
        }
    }

    /// Whether the printed output of this step starts with a blank line.
    pub fn spaced(self) -> bool {
        matches!(
            self,
            Step::Split | Step::Strip | Step::Affixes | Step::Replace | Step::Mac | Step::Join
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Step {
    type Err = String;

    /// Parses a step name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Step::ALL
            .into_iter()
            .find(|step| step.name() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = Step::ALL.iter().map(|step| step.name()).collect();
                format!("unknown step '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Sorts a selection into walkthrough order and drops repeats.
pub fn in_run_order(steps: &[Step]) -> Vec<Step> {
    let mut ordered: Vec<Step> = steps.to_vec();
    ordered.sort();
    ordered.dedup();
    ordered
}
