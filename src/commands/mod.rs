pub mod actions;
pub mod browse;
pub mod handoff;

pub use actions::Action;
pub use browse::execute_browse;
