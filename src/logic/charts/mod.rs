//! Charts Module - chart-ready view data for the frontend
//!
//! No rendering here. These structs are assembled server-side and handed to
//! the page's chart code as-is.

pub mod gauge;
pub mod radar;

pub use gauge::GaugeSpec;
pub use radar::RadarProfile;
