use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: RoundConfig) -> MineLayout;
}

/// A prepared layout generates itself, regardless of the requested config.
impl MinefieldGenerator for MineLayout {
    fn generate(self, _config: RoundConfig) -> MineLayout {
        self
    }
}
