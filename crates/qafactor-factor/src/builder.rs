//! Building the multiplier model over a placement.

use std::sync::Arc;

use tracing::debug;

use qafactor_embed::{ChimeraCoord, Embedding, HardwareTopology, Placement};
use qafactor_ir::{QuadraticModel, QubitId, Spin};

use crate::error::{FactorError, FactorResult};
use crate::template::{self, MAX_PRODUCT, PRODUCT_BITS};

/// Builds the multiplier's quadratic model on the hardware.
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    topology: Arc<HardwareTopology>,
}

impl ProblemBuilder {
    /// Create a builder for one device.
    pub fn new(topology: Arc<HardwareTopology>) -> Self {
        Self { topology }
    }

    /// The multiplier model over the qubits of `placement`.
    ///
    /// Every chain qubit becomes a variable. Template biases and couplings
    /// are translated by the placement origin; each translated site must
    /// be a qubit of its variable's chain and each coupling a hardware
    /// edge.
    pub fn build(&self, placement: &Placement) -> FactorResult<QuadraticModel> {
        let mut model = QuadraticModel::new();
        for q in placement.embedding.used_qubits() {
            model.add_variable(q, 0.0);
        }

        for (variable, coord, bias) in template::linear_terms() {
            let q = self.site(placement, variable, coord)?;
            model.add_variable(q, bias);
        }

        for ((va, ca), (vb, cb), strength) in template::couplings() {
            let a = self.site(placement, va, ca)?;
            let b = self.site(placement, vb, cb)?;
            if !self.topology.is_adjacent(a, b) {
                return Err(FactorError::NonAdjacentCoupling(a, b));
            }
            model.add_interaction(a, b, strength)?;
        }

        debug!(
            origin = %placement.origin,
            variables = model.num_variables(),
            interactions = model.num_interactions(),
            "built multiplier model"
        );
        Ok(model)
    }

    fn site(&self, placement: &Placement, variable: &str, coord: ChimeraCoord) -> FactorResult<QubitId> {
        let coord = placement.origin.apply(coord);
        let mismatch = || FactorError::TemplateMismatch {
            variable: variable.to_string(),
            coord,
        };
        let qubit = self.topology.shape().index(coord).ok_or_else(mismatch)?;
        match placement.embedding.chain(variable) {
            Some(chain) if chain.contains(&qubit) => Ok(qubit),
            _ => Err(mismatch()),
        }
    }
}

/// Reject products the multiplier cannot represent.
pub fn check_product(product: u64) -> FactorResult<()> {
    if product > MAX_PRODUCT {
        return Err(FactorError::ProductOutOfRange {
            product,
            max: MAX_PRODUCT,
        });
    }
    Ok(())
}

/// Clamp the product bits of `model` to the binary digits of `product`.
///
/// Bit `i` of the product (from the most significant) is written to every
/// qubit of the `i`-th product variable, 1 as spin up and 0 as spin down.
/// Returns the reduced model and the embedding without the product
/// variables; the inputs are left untouched.
pub fn fix_product_bits(
    model: &QuadraticModel,
    embedding: &Embedding,
    product: u64,
) -> FactorResult<(QuadraticModel, Embedding)> {
    check_product(product)?;

    let mut fixed = model.clone();
    let width = PRODUCT_BITS.len();
    for (i, &variable) in PRODUCT_BITS.iter().enumerate() {
        let bit = (product >> (width - 1 - i)) & 1 == 1;
        let chain = embedding
            .chain(variable)
            .ok_or_else(|| FactorError::MissingVariable(variable.to_string()))?;
        for &q in chain {
            fixed.fix_variable(q, Spin::from_bit(bit))?;
        }
    }

    Ok((fixed, embedding.without(&PRODUCT_BITS)))
}
