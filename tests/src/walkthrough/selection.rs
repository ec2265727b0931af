use netstr_common::config::Config;
use netstr_common::samples::Samples;
use netstr_common::step::Step;
use netstr_core::runner::TextDemoRunner;

#[test]
fn selected_steps_run_in_walkthrough_order() {
    let samples = Samples::default();
    let report = TextDemoRunner::new(&samples)
        .run(&[Step::Join, Step::Slice, Step::Mac])
        .unwrap();

    assert_eq!(
        report.to_string(),
        "MAC Address (uppercase, no colons): 001A2B3C4D5E\n\
         Interface Number: 1\n\
         \n\
         Config Path: home/user/configs/router1.cfg\n"
    );
}

#[test]
fn single_spaced_step_has_no_leading_blank_line() {
    let samples = Samples::default();
    let report = TextDemoRunner::new(&samples).run(&[Step::Replace]).unwrap();
    assert_eq!(report.to_string(), "New IP Address: 192.168.1.10\n");
}

#[test]
fn affix_step_stands_alone_without_strip() {
    let samples = Samples::default();
    let report = TextDemoRunner::new(&samples).run(&[Step::Affixes]).unwrap();
    assert_eq!(
        report.to_string(),
        "Does config_line start with 'ip address'? true\n\
         Does hostname end with '.com'? true\n"
    );
}

#[test]
fn config_selection_feeds_the_runner() {
    let cfg = Config {
        steps: vec![Step::Split, Step::Declare, Step::Split],
        ..Config::default()
    };
    let samples = Samples::default();
    let report = TextDemoRunner::new(&samples).run(&cfg.selected_steps()).unwrap();

    let steps: Vec<Step> = report.outcomes().iter().map(|o| o.step).collect();
    assert_eq!(steps, vec![Step::Declare, Step::Split]);
}

#[test]
fn default_config_runs_everything() {
    let samples = Samples::default();
    let runner = TextDemoRunner::new(&samples);
    assert_eq!(
        runner.run(&Config::default().selected_steps()).unwrap(),
        runner.run_all().unwrap()
    );
}
