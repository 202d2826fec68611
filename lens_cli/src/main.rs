//! # Lenscalc CLI Application
//!
//! Single-screen terminal calculator for eyeglass lens edge thickness and
//! weight. Collects the six bounded inputs, runs the estimator, and prints
//! either the formatted results or a "no calculation performed" notice.

use std::io::{self, BufRead, Write};

use lens_core::calculations::thickness::{
    estimate, EstimateOutcome, ThicknessInput, LENS_DENSITY_G_PER_CM3,
};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Lenscalc - Lens Edge Thickness Calculator");
    println!("=========================================");
    println!();
    println!("Enter your lens parameters below (press Enter to keep a default).");
    println!();

    let input = ThicknessInput {
        refractive_index: prompt_f64("Refractive index (n), 1.50-2.00 [1.50]: ", 1.50),
        sphere_power: prompt_f64("Sphere power (in D), -2000 to 2000 [500]: ", 500.0),
        cylinder_power: prompt_f64("Cylinder power (in D), -800 to 800 [0]: ", 0.0),
        lens_width_mm: prompt_f64("Lens width (mm), 10-100 [50]: ", 50.0),
        bridge_width_mm: prompt_f64("Bridge width (mm), 10-30 [22]: ", 22.0),
        pupillary_distance_mm: prompt_f64("Pupillary distance, both eyes (mm), 40-80 [64]: ", 64.0),
    };

    println!();

    match estimate(&input) {
        Ok(EstimateOutcome::Estimate(result)) => {
            println!("═══════════════════════════════════════");
            println!("  ESTIMATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Index:    n = {:.2}", input.refractive_index);
            println!(
                "  Power:    sphere {:.2}, cylinder {:.2} ({:.2} D combined)",
                input.sphere_power,
                input.cylinder_power,
                input.combined_power().0
            );
            println!(
                "  Frame:    {:.0} mm lens + {:.0} mm bridge, PD {:.1} mm",
                input.lens_width_mm, input.bridge_width_mm, input.pupillary_distance_mm
            );
            println!();
            println!("Results:");
            println!("  Computed edge thickness:          {:.2} mm (max reference)", result.edge_thickness_mm);
            println!("  Estimated total weight (pair):    {:.2} g", result.total_weight_g);
            if let Some(comparison) = &result.comparison {
                println!("  This is approximately:            {}", comparison);
            }
            println!();
            println!(
                "Weight is estimated using an average density of {:.2} g/cm³ for simplified comparison.",
                LENS_DENSITY_G_PER_CM3
            );
            println!("Actual thickness and weight may vary slightly by design and manufacturer.");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Ok(EstimateOutcome::NoComputation) => {
            println!("No calculation performed: sphere and cylinder powers are both zero.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }

    println!();
    println!("---");
    println!("Disclaimer: This tool provides an approximate estimation based on standard");
    println!("formulas. Actual lens thickness and weight may vary depending on manufacturer");
    println!("and design.");
}
