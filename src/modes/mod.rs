pub mod human;
pub mod sizing;

pub use human::HumanMode;
