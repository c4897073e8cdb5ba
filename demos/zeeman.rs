use mesophys::prelude::*;

fn main() {
    let fields = linspace(0.0, 1.0, 11);
    let full = SolidState::energy_zeeman_sweep(1.0, 0.0, 2.0, 0.5, &fields, 0.0);
    let simple = SolidState::energy_zeeman_simple_sweep(1.0, 2.0, &fields, 0.0);

    println!("B(T), E_full(J), E_simple(J)");
    for ((b, e1), e2) in fields.iter().zip(full.iter()).zip(simple.iter()) {
        println!("{b:.2}, {e1:.6e}, {e2:.6e}");
    }
}
