pub mod browse;
pub mod show;
