//! Integration tests for subnet-calculator
//!
//! These tests drive the public API end to end, from text input to the
//! computed record and its rendered forms.

use std::net::Ipv4Addr;
use subnet_calculator::{
    calculate, calculate_with, output, CalcError, CalcOptions, NetworkClass, TargetHost,
};

#[test]
fn test_full_class_c_calculation() {
    let result = calculate("192.168.1.10", 24, None).expect("Failed to calculate");

    assert_eq!(result.cidr, "/24");
    assert_eq!(result.mask, Ipv4Addr::new(255, 255, 255, 0));
    assert_eq!(result.network, Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(result.broadcast, Ipv4Addr::new(192, 168, 1, 255));
    assert_eq!(result.first_host, Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert_eq!(result.last_host, Some(Ipv4Addr::new(192, 168, 1, 254)));
    assert_eq!(result.total_hosts, 254);
    assert_eq!(result.host_number, 10);
    assert_eq!(result.network_class, Some(NetworkClass::C));
}

#[test]
fn test_degenerate_subnets_have_no_hosts() {
    let result = calculate("10.1.1.1", 32, None).expect("Failed to calculate");
    assert_eq!(result.total_hosts, 0);
    assert_eq!(result.first_host, None);
    assert_eq!(result.last_host, None);
    assert_eq!(result.network, result.ip);
    assert_eq!(result.broadcast, result.ip);

    // /31 point-to-point links count no usable hosts either
    let result = calculate("192.168.1.0", 31, None).expect("Failed to calculate");
    assert_eq!(result.total_hosts, 0);
    assert_eq!(result.first_host, None);
    assert_eq!(result.last_host, None);
}

#[test]
fn test_classful_annotation() {
    // prefix equal to the class A major prefix: annotated but not subnetted
    let result = calculate("10.0.0.5", 8, None).expect("Failed to calculate");
    assert_eq!(result.network_class, Some(NetworkClass::A));
    assert_eq!(result.subnet_number, None);

    // second /16 inside the class A major block
    let result = calculate("10.1.0.5", 16, None).expect("Failed to calculate");
    assert_eq!(result.network_class, Some(NetworkClass::A));
    assert_eq!(result.subnet_number, Some(2));
}

#[test]
fn test_classful_fall_through_octets() {
    for text in ["127.0.0.1", "0.1.2.3"] {
        let result = calculate(text, 30, None).expect("Failed to calculate");
        assert_eq!(result.network_class, Some(NetworkClass::Unknown), "{text}");
        assert_eq!(result.subnet_number, None, "{text}");
    }
}

#[test]
fn test_classful_annotation_disabled() {
    let opts = CalcOptions { classify: false };
    let result = calculate_with("10.1.0.5", 16, None, &opts).expect("Failed to calculate");
    assert_eq!(result.network_class, None);
    assert_eq!(result.subnet_number, None);
    assert_eq!(result.broadcast, Ipv4Addr::new(10, 1, 255, 255));
}

#[test]
fn test_target_host_soft_out_of_range() {
    let result = calculate("192.168.1.10", 24, Some(10)).expect("Failed to calculate");
    assert_eq!(
        result.target_host,
        Some(TargetHost::Addr(Ipv4Addr::new(192, 168, 1, 10)))
    );

    // beyond subnet capacity: a marker inside a successful result, no error
    let result = calculate("192.168.1.10", 24, Some(1000)).expect("Failed to calculate");
    assert_eq!(result.target_host, Some(TargetHost::OutOfRange));
    assert_eq!(result.target_host.unwrap().to_string(), "out of range");
}

#[test]
fn test_negative_host_index_is_hard_error() {
    assert_eq!(
        calculate("192.168.1.10", 24, Some(-5)),
        Err(CalcError::InvalidHostIndex)
    );
}

#[test]
fn test_invalid_inputs() {
    for text in ["999.1.1.1", "1.2.3", "abc"] {
        assert_eq!(
            calculate(text, 24, None),
            Err(CalcError::InvalidAddress),
            "{text}"
        );
    }
    assert_eq!(
        calculate("2001:db8::1", 24, None),
        Err(CalcError::UnsupportedAddressFamily)
    );
    assert_eq!(
        calculate("192.168.1.10", -1, None),
        Err(CalcError::InvalidPrefixLength)
    );
    assert_eq!(
        calculate("192.168.1.10", 33, None),
        Err(CalcError::InvalidPrefixLength)
    );
}

#[test]
fn test_network_broadcast_invariants() {
    let samples = ["10.20.30.40", "172.16.5.200", "192.0.2.1", "203.0.113.77"];
    for text in samples {
        for prefix in 0..=32 {
            let result = calculate(text, prefix, None).expect("Failed to calculate");
            let ip = u64::from(u32::from(result.ip));
            let network = u64::from(u32::from(result.network));
            let broadcast = u64::from(u32::from(result.broadcast));
            assert!(network <= ip && ip <= broadcast, "{text}/{prefix}");
            assert_eq!(
                broadcast - network,
                (1u64 << (32 - prefix)) - 1,
                "{text}/{prefix}"
            );
        }
    }
}

#[test]
fn test_formatted_addresses_reparse() {
    let result = calculate("172.16.31.7", 20, Some(1)).expect("Failed to calculate");
    for addr in [
        result.ip,
        result.mask,
        result.network,
        result.broadcast,
        result.first_host.unwrap(),
        result.last_host.unwrap(),
    ] {
        let reparsed: Ipv4Addr = addr.to_string().parse().expect("Failed to reparse");
        assert_eq!(reparsed, addr);
    }
}

#[test]
fn test_determinism() {
    let a = calculate("10.1.0.5", 16, Some(7)).expect("Failed to calculate");
    let b = calculate("10.1.0.5", 16, Some(7)).expect("Failed to calculate");
    assert_eq!(a, b);
}

#[test]
fn test_json_rendering() {
    let result = calculate("10.1.0.5", 16, None).expect("Failed to calculate");
    let json = output::to_json(&result).expect("Failed to render JSON");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");

    assert_eq!(value["ip"], "10.1.0.5");
    assert_eq!(value["cidr"], "/16");
    assert_eq!(value["network"], "10.1.0.0");
    assert_eq!(value["broadcast"], "10.1.255.255");
    assert_eq!(value["network_class"], "A");
    assert_eq!(value["subnet_number"], 2);
}
