pub mod profile;

pub use profile::{GenerateDocxResponse, ProfileRequest, ProfileSections};
