pub mod dates;
pub mod domain;
pub mod latex;
mod profile;
pub mod prose;
mod source;
pub mod strings;
mod writer;

pub use dates::years_between;
pub use domain::{Lang, Profile, ProfileError, RenderError, Resume, Text};
pub use profile::builtin_profile;
pub use prose::{join_sequence, Delimiters};
pub use source::{profile_to_json, ProfileLoader};
pub use writer::{render, DocumentWriter};
