// Draft simulation: player model, pools, roster fitting, the snake-order
// engine, and roster grading.

pub mod bench;
pub mod engine;
pub mod grade;
pub mod needs;
pub mod player;
pub mod pool;
pub mod roster;
pub mod state;
pub mod strategy;
