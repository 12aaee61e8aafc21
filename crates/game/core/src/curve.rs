//! Baby Jubjub, the twisted Edwards curve embedded in the BN254 scalar field.
//!
//! `a·x² + y² = 1 + d·x²·y²` with `a = 168700`, `d = 168696`. Coordinates are
//! the circomlib/zk-kit ones, so public keys match what the circuit derives
//! from the same secret with `Base8`. Group arithmetic is ark-ec's twisted
//! Edwards model.

use ark_ec::{
    AffineRepr, CurveConfig, CurveGroup,
    twisted_edwards::{Affine, MontCurveConfig, TECurveConfig},
};
use ark_ff::{Fp256, MontBackend, MontConfig, MontFp, PrimeField};

use crate::field::Field;

/// Scalar field of the prime-order subgroup generated by [`BASE8`].
#[derive(MontConfig)]
#[modulus = "2736030358979909402780800718157159386076813972158567259200215660948447373041"]
#[generator = "31"]
pub struct ScalarConfig;
pub type Scalar = Fp256<MontBackend<ScalarConfig, 4>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BabyJubjubConfig;

/// Affine point on Baby Jubjub.
pub type Point = Affine<BabyJubjubConfig>;

/// Generator of the prime-order subgroup (`Base8` in circomlib).
pub const BASE8: Point = Point::new_unchecked(
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553"),
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203"),
);

impl CurveConfig for BabyJubjubConfig {
    type BaseField = Field;
    type ScalarField = Scalar;

    const COFACTOR: &'static [u64] = &[8];
    const COFACTOR_INV: Scalar = MontFp!(
        "2394026564107420727433200628387514462817212225638746351800188703329891451411"
    );
}

impl TECurveConfig for BabyJubjubConfig {
    const COEFF_A: Field = MontFp!("168700");
    const COEFF_D: Field = MontFp!("168696");
    const GENERATOR: Point = BASE8;

    type MontCurveConfig = BabyJubjubConfig;
}

// Montgomery form `B·y² = x³ + A·x² + x`, birationally equivalent.
impl MontCurveConfig for BabyJubjubConfig {
    const COEFF_A: Field = MontFp!("168698");
    const COEFF_B: Field = MontFp!("1");

    type TECurveConfig = BabyJubjubConfig;
}

/// Derives the public key `secret · Base8`.
///
/// The secret is used as a plain integer (no reduction by the subgroup
/// order), matching circomlib's `mulPointEscalar` and the circuit.
pub fn derive_public_key(secret: &Field) -> Point {
    BASE8.mul_bigint(secret.into_bigint()).into_affine()
}
