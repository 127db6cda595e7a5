pub mod plan;
pub mod sprint0;
