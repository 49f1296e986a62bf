//! Terminal output utilities.
//!
//! Renders a [`SubnetResult`] as an aligned label/value panel.

use crate::models::{SubnetResult, TargetHost};
use colored::Colorize;
use std::net::Ipv4Addr;

/// Label column width; values line up one space after it.
const LABEL_WIDTH: usize = 15;

/// Format a label as a left-aligned, colon-terminated field.
///
/// # Arguments
/// * `label` - The label text
/// * `width` - The minimum width of the field
pub fn format_label(label: &str, width: usize) -> String {
    let labelled = format!("{label}:");
    if labelled.len() >= width {
        labelled
    } else {
        format!("{labelled:<width$}")
    }
}

fn host_or_na(host: Option<Ipv4Addr>) -> String {
    match host {
        Some(addr) => addr.to_string(),
        None => "N/A".to_string(),
    }
}

/// Print the full result panel for one calculation.
pub fn print_result(result: &SubnetResult) {
    log::info!("# Printing result for {}{}", result.ip, result.cidr);
    println!("{}", format!("{}{}", result.ip, result.cidr).bold());
    println!("{} {}", format_label("Mask", LABEL_WIDTH), result.mask);
    println!(
        "{} {}",
        format_label("Network", LABEL_WIDTH),
        result.network.to_string().green()
    );
    println!(
        "{} {}",
        format_label("Broadcast", LABEL_WIDTH),
        result.broadcast.to_string().green()
    );
    println!(
        "{} {}",
        format_label("First host", LABEL_WIDTH),
        host_or_na(result.first_host)
    );
    println!(
        "{} {}",
        format_label("Last host", LABEL_WIDTH),
        host_or_na(result.last_host)
    );
    println!(
        "{} {}",
        format_label("Usable hosts", LABEL_WIDTH),
        result.total_hosts
    );
    println!(
        "{} {}",
        format_label("Host number", LABEL_WIDTH),
        result.host_number
    );
    if let Some(class) = result.network_class {
        println!("{} {}", format_label("Class", LABEL_WIDTH), class);
    }
    if let Some(subnet_number) = result.subnet_number {
        println!(
            "{} {}",
            format_label("Subnet number", LABEL_WIDTH),
            subnet_number
        );
    }
    if let (Some(index), Some(target)) = (result.target_host_index, result.target_host) {
        let value = match target {
            TargetHost::Addr(addr) => addr.to_string().normal(),
            TargetHost::OutOfRange => target.to_string().red(),
        };
        println!(
            "{} {}",
            format_label(&format!("Host {index}"), LABEL_WIDTH),
            value
        );
    }
}
