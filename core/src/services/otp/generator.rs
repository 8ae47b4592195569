//! Passcode generation

use rand::{rngs::OsRng, Rng};

use super::traits::CodeGenerator;

/// Inclusive lower bound for generated passcodes
const CODE_MIN: u32 = 1000;

/// Exclusive upper bound for generated passcodes; "9999" is never produced
const CODE_MAX: u32 = 9999;

/// Passcode generator backed by the OS CSPRNG
#[derive(Debug, Clone, Default)]
pub struct OsRngCodeGenerator;

impl OsRngCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for OsRngCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = OsRng;
        let code: u32 = rng.gen_range(CODE_MIN..CODE_MAX);
        code.to_string()
    }
}
