use netstr_common::samples::Samples;
use netstr_core::report::{Line, Report};
use netstr_core::runner::TextDemoRunner;

const EXPECTED: &str = "\
IP Address: 192.168.1.1
Hostname: router1.example.com
Interface Name: GigabitEthernet0/1
MAC Address: 00:1A:2B:3C:4D:5E
Configuration Line:   ip address 192.168.1.1 255.255.255.0

Output split into lines:
interface GigabitEthernet0/1
 ip address 192.168.1.1 255.255.255.0
 no shutdown

Cleaned config line: 'ip address 192.168.1.1 255.255.255.0'

Does config_line start with 'ip address'? true
Does hostname end with '.com'? true

New IP Address: 192.168.1.10

MAC Address (uppercase, no colons): 001A2B3C4D5E
Interface Number: 1

Config Path: home/user/configs/router1.cfg
";

fn default_report() -> Report {
    let samples = Samples::default();
    TextDemoRunner::new(&samples)
        .run_all()
        .expect("default samples never fail")
}

/// The full run over the built-in samples prints the exact walkthrough text.
#[test]
fn full_run_matches_expected_text() {
    assert_eq!(default_report().to_string(), EXPECTED);
}

#[test]
fn full_run_is_deterministic() {
    assert_eq!(default_report(), default_report());
}

#[test]
fn full_run_has_one_outcome_per_step() {
    let report: Report = default_report();
    assert_eq!(report.len(), 8);

    let blank_rows = report.rows().filter(Option::is_none).count();
    assert_eq!(blank_rows, 6);
}

#[test]
fn derived_values_are_reported() {
    let report: Report = default_report();
    let lines: Vec<&Line> = report.rows().flatten().collect();

    let value_of = |wanted: &str| -> Option<String> {
        lines.iter().find_map(|line| match line {
            Line::Field { label, value } | Line::Quoted { label, value } if *label == wanted => {
                Some(value.clone())
            }
            _ => None,
        })
    };

    assert_eq!(value_of("New IP Address").as_deref(), Some("192.168.1.10"));
    assert_eq!(
        value_of("MAC Address (uppercase, no colons)").as_deref(),
        Some("001A2B3C4D5E")
    );
    assert_eq!(value_of("Interface Number").as_deref(), Some("1"));
    assert_eq!(
        value_of("Config Path").as_deref(),
        Some("home/user/configs/router1.cfg")
    );
    assert_eq!(
        value_of("Cleaned config line").as_deref(),
        Some("ip address 192.168.1.1 255.255.255.0")
    );
}
