pub mod dashboard;

pub use dashboard::AnalisisFinancieroPage;
