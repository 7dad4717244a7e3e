//! Domain models for the receituario system.

mod clinical;
mod interaction;
mod medication;
mod people;
mod prescription;

pub use clinical::*;
pub use interaction::*;
pub use medication::*;
pub use people::*;
pub use prescription::*;
