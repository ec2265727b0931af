//! # Sample Values
//!
//! Every literal the walkthrough operates on. Nothing here is read from
//! disk, the network or the environment.

pub const IP_ADDRESS: &str = "192.168.1.1";
pub const HOSTNAME: &str = "router1.example.com";
pub const INTERFACE_NAME: &str = "GigabitEthernet0/1";
pub const MAC_ADDRESS: &str = "00:1A:2B:3C:4D:5E";
pub const CONFIG_LINE: &str = "  ip address 192.168.1.1 255.255.255.0";

/// A `show running-config interface` style block, three lines long.
pub const INTERFACE_BLOCK: &str =
    "interface GigabitEthernet0/1\n ip address 192.168.1.1 255.255.255.0\n no shutdown";

pub const PATH_ELEMENTS: &[&str] = &["home", "user", "configs", "router1.cfg"];

/// Replacement used by the substring-replace step.
pub const NEW_IP_ADDRESS: &str = "192.168.1.10";

/// Prefix that marks an interface address statement.
pub const ADDRESS_PREFIX: &str = "ip address";
pub const HOSTNAME_SUFFIX: &str = ".com";

/// The sample set a walkthrough runs over.
///
/// `Samples::default()` holds the constants above; tests swap individual
/// values to drive edge cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Samples {
    pub ip_address: &'static str,
    pub hostname: &'static str,
    pub interface_name: &'static str,
    pub mac_address: &'static str,
    pub config_line: &'static str,
    pub interface_block: &'static str,
    pub path_elements: &'static [&'static str],
}

impl Default for Samples {
    fn default() -> Self {
        Self {
            ip_address: IP_ADDRESS,
            hostname: HOSTNAME,
            interface_name: INTERFACE_NAME,
            mac_address: MAC_ADDRESS,
            config_line: CONFIG_LINE,
            interface_block: INTERFACE_BLOCK,
            path_elements: PATH_ELEMENTS,
        }
    }
}
