//! Utility to compute a single blend from the command line
//!
//! Usage: blend_calc <total_mass_g> <primary_share> <secondary_share> <fuel_type> [fraction|percent] [initial|current]

use fuelblend::blend::{compute, parse_request};
use fuelblend::models::{ProfileRevision, RawBlendInput, ShareConvention, M5_NAME};

const USAGE: &str = "Usage: blend_calc <total_mass_g> <primary_share> <secondary_share> <fuel_type> [fraction|percent] [initial|current]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        return Err(USAGE.into());
    }

    let convention = match args.get(4) {
        Some(s) => ShareConvention::from_str(s).ok_or_else(|| format!("Unknown convention '{}'\n{}", s, USAGE))?,
        None => ShareConvention::Percent,
    };
    let revision = match args.get(5) {
        Some(s) => ProfileRevision::from_str(s).ok_or_else(|| format!("Unknown revision '{}'\n{}", s, USAGE))?,
        None => ProfileRevision::default(),
    };

    let raw = RawBlendInput {
        total_mass: args[0].clone(),
        primary_share: args[1].clone(),
        secondary_share: args[2].clone(),
        fuel_type: args[3].clone(),
    };

    let request = parse_request(&raw, convention, revision)?;
    let display = compute(&request)?.display();

    println!("Blend: {} + {} ({} convention, {} profiles)", request.fuel_type, M5_NAME, convention, revision);
    println!("  Volume {}: {} ml", request.fuel_type, display.volume_primary);
    println!("  Volume {}: {} ml", M5_NAME, display.volume_secondary);
    println!("  Total Volume: {} ml", display.total_volume);
    println!("  Lube Volume: {} ml", display.lube_volume);
    println!("  AFR Mixture: {}", display.afr_mixture);
    println!("  AFR Rich: {}", display.afr_rich);
    println!("  AFR Lean: {}", display.afr_lean);

    Ok(())
}
