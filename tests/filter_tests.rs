// Interface selection: explicit allow-list and prefix heuristic

mod common;

use common::net_dev_table;
use netrate::filter::InterfaceFilter;
use netrate::netdev_repo::parse_net_dev;

fn names(filter: &InterfaceFilter, rows: &[(&str, u64, u64)]) -> Vec<String> {
    parse_net_dev(&net_dev_table(rows), filter)
        .samples()
        .iter()
        .map(|s| s.name.clone())
        .collect()
}

#[test]
fn explicit_list_keeps_only_named_interfaces() {
    let filter = InterfaceFilter::from_names(vec!["eth0".into()]).unwrap();
    let kept = names(&filter, &[("eth0", 1, 1), ("wlan0", 2, 2), ("lo", 3, 3)]);
    assert_eq!(kept, vec!["eth0"]);
}

#[test]
fn explicit_match_is_exact_and_case_sensitive() {
    let filter = InterfaceFilter::from_names(vec!["eth0".into()]).unwrap();
    assert!(filter.should_include("eth0"));
    assert!(!filter.should_include("ETH0"));
    assert!(!filter.should_include("eth01"));
    assert!(!filter.should_include("eth"));
    assert!(!filter.should_include("eth*"));
}

#[test]
fn explicit_list_can_name_interfaces_the_heuristic_rejects() {
    let filter = InterfaceFilter::from_names(vec!["lo".into(), "docker0".into()]).unwrap();
    assert_eq!(filter.mode(), "explicit");
    let kept = names(&filter, &[("eth0", 1, 1), ("lo", 2, 2), ("docker0", 3, 3)]);
    assert_eq!(kept, vec!["lo", "docker0"]);
}

#[test]
fn empty_list_falls_back_to_auto() {
    let filter = InterfaceFilter::from_names(vec![]).unwrap();
    assert_eq!(filter.mode(), "auto");
    let kept = names(
        &filter,
        &[("eth0", 1, 1), ("wlan0", 2, 2), ("lo", 3, 3), ("docker0", 4, 4)],
    );
    assert_eq!(kept, vec!["eth0", "wlan0"]);
}

#[test]
fn auto_accepts_predictable_names() {
    let filter = InterfaceFilter::auto().unwrap();
    for name in ["eth0", "wlan1", "enp3s0", "wlp2s0", "enp0s31f6"] {
        assert!(filter.should_include(name), "{} should be included", name);
    }
}

#[test]
fn auto_prefix_is_anchored_at_start() {
    let filter = InterfaceFilter::auto().unwrap();
    for name in ["lo", "docker0", "veth1234", "br-eth0", "virbr0", "tun0", "", "Eth0"] {
        assert!(!filter.should_include(name), "{} should be excluded", name);
    }
}
