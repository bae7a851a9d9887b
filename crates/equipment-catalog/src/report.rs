//! Console report formatting.
//!
//! The catalog core defines no presentation format; this module renders
//! its outputs for the console: section rules, numbered entries, and
//! aligned detail lines.

use equipment_catalog_core::models::{ManufacturerRecord, ModelRecord};
use equipment_catalog_core::rank::RankedModel;

const RULE_WIDTH: usize = 80;

/// Print a section header between horizontal rules.
pub fn print_header(title: &str) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("  {title}");
    println!("{}\n", "=".repeat(RULE_WIDTH));
}

/// Pretty-print a list of model records.
pub fn print_models(records: &[ModelRecord], label: &str) {
    if records.is_empty() {
        println!("  No {label} found.\n");
        return;
    }

    println!("Found {} {label}:\n", records.len());
    for (i, record) in records.iter().enumerate() {
        println!(
            "{}. {} {} ({})",
            i + 1,
            record.manufacturer,
            record.model_name,
            record.model_year
        );
        if let Some(series) = &record.series {
            println!("   Series: {series}");
        }
        println!("   Power: {} HP", record.rated_power_hp);
        if let Some(category) = &record.category {
            println!("   Category: {category}");
        }
        if let Some(transmission) = &record.transmission_type {
            println!("   Transmission: {transmission}");
        }
        if record.four_wheel_drive {
            println!("   Drivetrain: 4WD");
        }
        if let Some(msrp) = record.msrp_base_usd {
            println!("   MSRP: {}", format_usd(msrp));
        }
        println!("   Id: {}", record.id);
        println!();
    }
}

/// Pretty-print manufacturer entries.
pub fn print_manufacturers(manufacturers: &[ManufacturerRecord]) {
    if manufacturers.is_empty() {
        println!("  No manufacturers found.\n");
        return;
    }

    println!("Found {} manufacturers:\n", manufacturers.len());
    for (i, m) in manufacturers.iter().enumerate() {
        println!("{}. {}", i + 1, m.name);
        println!("   Country: {}", m.country);
        if let Some(year) = m.founded_year {
            println!("   Founded: {year}");
        }
        if let Some(hq) = &m.headquarters {
            println!("   Headquarters: {hq}");
        }
        if let Some(site) = &m.website {
            println!("   Website: {site}");
        }
        println!();
    }
}

/// Pretty-print a similarity ranking against its reference.
pub fn print_ranked(reference: &ModelRecord, ranked: &[RankedModel]) {
    println!(
        "Reference: {} {} ({} HP, {}, Category: {})\n",
        reference.manufacturer,
        reference.model_name,
        reference.rated_power_hp,
        reference.transmission_type.as_deref().unwrap_or("n/a"),
        reference.category.as_deref().unwrap_or("n/a"),
    );

    if ranked.is_empty() {
        println!("  No comparable models found.");
        return;
    }

    for (i, entry) in ranked.iter().enumerate() {
        let record = &entry.record;
        println!(
            "{}. {} {} (similarity: {:.1}%)",
            i + 1,
            record.manufacturer,
            record.model_name,
            entry.score * 100.0
        );
        println!(
            "   {} HP, {}, Category: {}",
            record.rated_power_hp,
            record.transmission_type.as_deref().unwrap_or("n/a"),
            record.category.as_deref().unwrap_or("n/a"),
        );
        println!();
    }
}

/// Format a dollar amount with thousands separators, e.g. `$385,000.00`.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}.{frac:02}")
    } else {
        format!("${grouped}.{frac:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(385_000.0), "$385,000.00");
        assert_eq!(format_usd(1_234_567.89), "$1,234,567.89");
        assert_eq!(format_usd(999.5), "$999.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-55_000.0), "-$55,000.00");
    }
}
