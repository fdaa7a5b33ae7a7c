// Driver for the reference channel D+ -> K- pi+ pi+: runs the Metropolis
// engine and prints the run summary. Rendering the resulting Dalitz plot is
// left to downstream tooling; the boundary band is tabulated here for it.

use dalitz_mc::{boundary_curves, PhysicalParameters, Sampler, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = PhysicalParameters::d_to_k_pi_pi();

    let mut settings = Settings::new(500_000, 700.0);
    settings.seed = Some(10);

    let sampler = Sampler::new(params, settings)?;

    println!(
        "Generating a Monte Carlo simulation of {} samples",
        sampler.settings.num_samples
    );
    println!("for the decay D+ -> K- pi+ pi+");

    let run = sampler.run()?;

    println!(
        "Generated {} valid points out of {} samples",
        run.accepted(),
        run.trials
    );
    println!("which amounts to {:.2}%", run.acceptance_ratio() * 100.0);

    let band = boundary_curves(sampler.bounds.m12_min, sampler.bounds.m12_max, 5, &params);
    println!("allowed band (m12, m23_min, m23_max):");
    for (m12, lower, upper) in band {
        println!("  {m12:10.2}  {lower:14.2}  {upper:14.2}");
    }

    Ok(())
}
