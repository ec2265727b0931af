use crate::step::{self, Step};

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hides the title header and the closing summary.
    pub quiet: bool,
    /// Disables colors and decorations, leaving only the step output.
    pub plain: bool,
    /// Steps requested on the command line. Empty means every step.
    pub steps: Vec<Step>,
}

impl Config {
    /// The steps this run executes, in walkthrough order.
    pub fn selected_steps(&self) -> Vec<Step> {
        if self.steps.is_empty() {
            return Step::ALL.to_vec();
        }
        step::in_run_order(&self.steps)
    }

    pub fn decorated(&self) -> bool {
        !self.quiet && !self.plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_runs_everything() {
        let cfg = Config::default();
        assert_eq!(cfg.selected_steps(), Step::ALL.to_vec());
    }

    #[test]
    fn selection_is_reordered_and_deduplicated() {
        let cfg = Config {
            steps: vec![Step::Join, Step::Mac, Step::Join],
            ..Config::default()
        };
        assert_eq!(cfg.selected_steps(), vec![Step::Mac, Step::Join]);
    }

    #[test]
    fn plain_or_quiet_drops_decorations() {
        let quiet = Config { quiet: true, ..Config::default() };
        let plain = Config { plain: true, ..Config::default() };
        assert!(Config::default().decorated());
        assert!(!quiet.decorated());
        assert!(!plain.decorated());
    }
}
