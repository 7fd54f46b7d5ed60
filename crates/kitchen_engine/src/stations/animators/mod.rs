//! One animator per station sub-part

pub mod breakfast;
pub mod cutting_board;
pub mod fridge;
pub mod sink;
pub mod stove;

pub use breakfast::BreakfastAnimator;
pub use cutting_board::{CuttingBoardAnimator, KnifeAnimator};
pub use fridge::FridgeAnimator;
pub use sink::{SinkAnimator, TapAnimator};
pub use stove::StoveAnimator;
