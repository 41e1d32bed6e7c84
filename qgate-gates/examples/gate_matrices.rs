//! Example printing the matrices of the standard gates
//!
//! Run with `cargo run --example gate_matrices`.

use qgate_core::{Matrix, QubitCount};
use qgate_gates::{qft, single, structural, SymbolicGate};
use qgate_number::mod_exp2;
use std::f64::consts::PI;

fn print_matrix(name: &str, matrix: &Matrix) {
    println!("\n{} ({}x{}):", name, matrix.dimension(), matrix.dimension());
    for row in matrix.rows() {
        print!("  [");
        for (i, val) in row.iter().enumerate() {
            if i > 0 {
                print!(",  ");
            }
            print!("{:>6.3}{:>+6.3}i", val.re, val.im);
        }
        println!("]");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("===========================================");
    println!("qgate: gate matrix construction");
    println!("===========================================");

    println!("\n\n--- SINGLE-QUBIT GATES ---");
    print_matrix("Hadamard (H)", &single::hadamard(QubitCount::ONE));
    print_matrix("Pauli-Y", &single::pauli_y(QubitCount::ONE));
    print_matrix("T Gate", &single::t_gate(QubitCount::ONE));
    print_matrix("U(0, π/2, π/2, 0)", &single::u(0.0, PI / 2.0, PI / 2.0, 0.0));
    print_matrix("H ⊗ H", &single::hadamard(QubitCount::TWO));

    println!("\n\n--- MULTI-QUBIT GATES ---");
    print_matrix("SWAP", &structural::swap(QubitCount::TWO)?);
    print_matrix("Toffoli", &structural::toffoli());

    for name in ["CONTROLLED_Z", "FREDKIN"] {
        let gate: SymbolicGate = name.parse()?;
        print_matrix(&gate.to_string(), &gate.build()?);
    }

    let cnot = SymbolicGate::Cnot {
        qubits: QubitCount::THREE,
        control: 0,
        target: 2,
    };
    print_matrix(&cnot.to_string(), &cnot.build()?);
    print_matrix("QFT", &qft());

    println!("\n\n--- MODULAR EXPONENTIATION (a = 7, N = 15) ---");
    for j in 0..4 {
        println!("  mod_exp2(7, {}, 15) = {}", j, mod_exp2(7, j, 15)?);
    }

    Ok(())
}
