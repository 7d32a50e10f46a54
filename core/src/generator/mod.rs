use crate::*;
pub use scan::*;

mod scan;

pub trait MineLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}
