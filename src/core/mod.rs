pub mod compare;
pub mod distribution;
pub mod sweep;
pub mod trial;
