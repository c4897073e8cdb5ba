use mesophys::prelude::*;

fn main() -> Result<(), MesoError> {
    let sc = Superconductivity::new(1.0, std::f64::consts::FRAC_PI_2);
    println!("delta {}  phi {}", sc.delta(), sc.phi());
    println!("order parameter {:.6}", sc.order_parameter());

    let jj = JosephsonJunction::new(1.0, 0.5, phase_period(1001)).with_eta(1e-9);
    let energy = jj.spectrum_short();
    let wavefunction = jj.wavefunction_short();
    let current = jj.supercurrent_short()?;
    let inductance = jj.josephson_inductance()?;

    println!("phase, energy, wavefunction, supercurrent, inductance");
    for i in (0..jj.phase().len()).step_by(100) {
        println!(
            "{:.4}, {:.6}, {:.6e}, {:.6e}, {:.6e}",
            jj.phase()[i],
            energy[i],
            wavefunction[i],
            current[i],
            inductance[i]
        );
    }
    Ok(())
}
