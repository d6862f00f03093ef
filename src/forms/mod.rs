pub mod rules;
pub mod tags;
