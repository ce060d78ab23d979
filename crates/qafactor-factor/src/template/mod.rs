//! The 3×3-bit multiplier pattern.
//!
//! The multiplier is a hand-placed Chimera pattern spanning 6 × 5 tiles.
//! The table lists, in coordinates relative to the pattern origin:
//!
//! - the chain of every logical variable (51 variables, 128 qubits)
//! - the non-zero linear biases, keyed by `(variable, coordinate)`
//! - the couplings, keyed by two `(variable, coordinate)` sites
//!
//! Qubits without a listed bias carry bias 0. With the product bits
//! clamped, the ground states of the model are exactly the assignments
//! with `a · b = P`.

mod table;

use qafactor_embed::{ChimeraCoord, EmbedResult, PatternTemplate};

/// A template site: a variable name and one coordinate of its chain.
pub(crate) type Site = (&'static str, [u32; 4]);

/// Product bit variables, most significant first.
pub const PRODUCT_BITS: [&str; 6] = ["p5", "p4", "p3", "p2", "p1", "p0"];

/// Bits of the first multiplicand, least significant first.
pub const A_BITS: [&str; 3] = ["a0", "a1", "a2"];

/// Bits of the second multiplicand, least significant first.
pub const B_BITS: [&str; 3] = ["b0", "b1", "b2"];

/// Largest product the multiplier can represent.
pub const MAX_PRODUCT: u64 = (1 << PRODUCT_BITS.len()) - 1;

/// The multiplier as a placement pattern.
pub fn multiplier_pattern() -> EmbedResult<PatternTemplate> {
    let chains = table::CHAINS
        .iter()
        .map(|&(name, coords)| {
            let coords = coords.iter().copied().map(ChimeraCoord::from).collect();
            (name.to_string(), coords)
        })
        .collect();
    let couplers = couplings()
        .map(|((_, a), (_, b), _)| (a, b))
        .collect();
    PatternTemplate::new(chains, couplers)
}

/// Non-zero linear biases as `(variable, relative coordinate, bias)`.
pub(crate) fn linear_terms() -> impl Iterator<Item = (&'static str, ChimeraCoord, f64)> {
    table::LINEAR
        .iter()
        .map(|&((name, coord), bias)| (name, ChimeraCoord::from(coord), bias))
}

/// Couplings as `((variable, coordinate), (variable, coordinate), strength)`.
#[allow(clippy::type_complexity)]
pub(crate) fn couplings() -> impl Iterator<
    Item = (
        (&'static str, ChimeraCoord),
        (&'static str, ChimeraCoord),
        f64,
    ),
> {
    table::COUPLINGS.iter().map(|&((va, ca), (vb, cb), j)| {
        (
            (va, ChimeraCoord::from(ca)),
            (vb, ChimeraCoord::from(cb)),
            j,
        )
    })
}
