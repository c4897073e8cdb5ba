use std::f64::consts::PI;

use mesophys::prelude::*;

fn main() -> Result<(), MesoError> {
    let wire = DrudeModelDC::new(1e25, 1e-14).with_frequency(4.0e9);
    println!("complex conductivity {:.6e}", wire.complex_conductivity());
    println!("current density      {:.6e}", wire.current_density(2.0));
    println!(
        "kinetic inductance   {:.6e}",
        wire.kinetic_inductance(2e-6, PI * 40e-9_f64.powi(2))
    );

    let nw1 = HybridNW::from_slices(4e9, &[1e-7], &[0.0], &[1.0])?;
    println!("total impedance NW1  {:.6}", nw1.impedance());
    let nw2 = HybridNW::from_slices(4e9, &[1e-7, 1.5e-7], &[0.0, 1.0], &[1.0, 0.5])?;
    println!("total impedance NW2  {:.6}", nw2.impedance());

    let omegas = angular_freq_linspace(1e9, 8e9, 8);
    println!("omega(rad/s), |Z|(ohm), arg Z(deg)");
    let sweep = sweep_map(omegas.iter().copied(), |w| {
        HybridNW::from_slices(w / (2.0 * PI), &[1e-7, 1.5e-7], &[0.0, 1.0], &[1.0, 0.5])
            .map(|nw| nw.impedance())
    })
    .into_iter()
    .collect::<Result<Vec<_>, _>>()?;
    for ((w, m), p) in omegas.iter().zip(mag(sweep.clone())).zip(phase_deg(sweep)) {
        println!("{w:.6e}, {m:.6e}, {p:.3}");
    }
    Ok(())
}
