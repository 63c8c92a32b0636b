pub mod guide;
pub mod insights;
pub mod recommendations;
pub mod routine;

pub use insights::aggregate;
pub use recommendations::recommend;
pub use routine::plan_routine;
