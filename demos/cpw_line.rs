use mesophys::prelude::*;

fn main() {
    // Superconducting resonator line on sapphire-like substrate.
    let cpw = CPW::new(5e-6, 20e-6, 7.5, 5e-12);
    println!("k                        {:.6}", cpw.k());
    println!("total capacitance        {:.6e} F/m", cpw.capacitance_total());
    println!("characteristic impedance {:.3} ohm", cpw.impedance_characteristic());
    println!("geometric inductance     {:.6e} H/m", cpw.inductance_geometric());
    println!("kinetic inductance       {:.6e} H/m", cpw.inductance_kinetic());
    println!("inductance fraction      {:.6}", cpw.inductance_fraction());

    let line = TransmissionLine::new(4e9, 1e-7, 0.0, 1e-9, 0.0);
    println!("line impedance           {:.6}", line.impedance_line());
    println!("propagation constant     {:.6}", line.propagation_constant());
    println!("reflection (50 ohm)      {:.6}", line.reflection_coefficient(50.0));
    println!("input impedance (2 mm)   {:.6}", line.input_impedance(2000e-6, 50.0));
}
