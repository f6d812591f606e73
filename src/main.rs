//! # Equivalence sets

#![warn(clippy::pedantic)]

use equivset::prelude::*;

fn main() {
    // Integers modulo 3: one representative survives per residue class.
    let mut set = EquivSet::from_elements(
        1..=20,
        |a: &u32, b: &u32| a % 3 == b % 3,
        |x: &u32| u64::from(x % 3),
    );

    println!("residues mod 3: {set:?}");

    set.remove(&9);
    println!("without the class of 9: {set:?}");
}
