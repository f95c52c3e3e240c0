pub mod profile;
pub mod vitals;

pub use profile::{normalize_name, AdoptionForm, PetProfile, MAX_NAME_CHARS};
pub use vitals::{Mood, VitalKind, Vitals, VITAL_MAX};
