pub mod constants;
pub mod conversions;
pub mod radar_eq;
