use netstr_common::error::TextError;
use netstr_common::samples::Samples;
use netstr_common::step::Step;
use netstr_core::runner::TextDemoRunner;

fn slashless() -> Samples {
    Samples {
        interface_name: "Vlan10",
        ..Samples::default()
    }
}

/// An interface name without a slash aborts the run instead of echoing the name.
#[test]
fn missing_slash_fails_the_whole_run() {
    let samples = slashless();
    let result = TextDemoRunner::new(&samples).run_all();

    assert_eq!(
        result,
        Err(TextError::DelimiterNotFound {
            delimiter: '/',
            input: "Vlan10".to_string(),
        })
    );
}

#[test]
fn missing_slash_error_names_the_input() {
    let samples = slashless();
    let err = TextDemoRunner::new(&samples).run_all().unwrap_err();
    assert_eq!(err.to_string(), "delimiter '/' not found in 'Vlan10'");
}

#[test]
fn steps_that_skip_slicing_still_succeed() {
    let samples = slashless();
    let report = TextDemoRunner::new(&samples)
        .run(&[Step::Declare, Step::Join])
        .unwrap();
    assert!(report.to_string().contains("Interface Name: Vlan10\n"));
}
