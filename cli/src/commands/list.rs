use crate::terminal::print;
use netstr_common::config::Config;
use netstr_common::step::Step;

pub fn list(cfg: &Config) {
    if cfg.decorated() {
        print::header("available steps");
    }

    let key_width = Step::ALL.iter().map(|step| step.name().len()).max().unwrap_or(0);
    for step in Step::ALL {
        print::aligned_line(step.name(), key_width, step.description());
    }
}
