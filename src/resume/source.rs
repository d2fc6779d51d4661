use super::domain::{Profile, ProfileError};
use super::profile::builtin_profile;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

pub struct ProfileLoader;

impl ProfileLoader {
    /// Loads the profile at `path`, or the built-in profile when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Profile, ProfileError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(builtin_profile()),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Profile, ProfileError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| ProfileError::Io {
            path: origin.clone(),
            source,
        })?;
        let profile = Self::from_reader(BufReader::new(file), &origin)?;
        debug!(
            path = %origin,
            positions = profile.positions.len(),
            "loaded profile"
        );
        Ok(profile)
    }

    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Profile, ProfileError> {
        serde_json::from_reader(reader).map_err(|source| ProfileError::Parse {
            path: origin.to_string(),
            source,
        })
    }
}

pub fn profile_to_json(profile: &Profile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::domain::{Lang, MonthInterval};
    use std::io::Cursor;

    const MINIMAL: &str = r#"{
        "applicant": {
            "name": {"en": "Jane Doe"},
            "birthdate": "1990-02-14",
            "contacts": {"email": "jane@example.com"},
            "address": {"country": {"en": "Portugal"}, "city": {"en": "Porto"}},
            "about": {"en": "Data engineer."},
            "experience": [{
                "place": {"en": "Acme"},
                "position": {"en": "Engineer"},
                "interval": {"from": "2021-04"},
                "description": {"en": "Pipelines."}
            }]
        },
        "positions": [{"key": "data-engineer", "title": {"en": "Data Engineer"}}]
    }"#;

    #[test]
    fn reads_minimal_profile() {
        let profile = ProfileLoader::from_reader(Cursor::new(MINIMAL), "inline")
            .expect("minimal profile parses");
        let applicant = &profile.applicant;
        assert_eq!(applicant.name.get(Lang::En), Ok("Jane Doe"));
        assert!(applicant.name.get(Lang::Ru).is_err());
        assert!(applicant.contacts.phone.is_none());
        assert!(applicant.education.is_empty());
        assert_eq!(
            applicant.experience[0].interval,
            MonthInterval::ongoing("2021-04".parse().expect("valid month"))
        );
        assert_eq!(profile.positions[0].key, "data-engineer");
    }

    #[test]
    fn rejects_invalid_month() {
        let broken = MINIMAL.replace("2021-04", "2021-14");
        let err = ProfileLoader::from_reader(Cursor::new(broken), "inline")
            .expect_err("month out of range");
        assert!(matches!(err, ProfileError::Parse { .. }));
        assert!(err.to_string().contains("outside 1..=12"));
    }

    #[test]
    fn exported_builtin_profile_reloads() {
        let profile = builtin_profile();
        let json = profile_to_json(&profile).expect("profile serializes");
        assert!(json.contains("\"python-developer\""));
        let reloaded =
            ProfileLoader::from_reader(Cursor::new(json), "export").expect("export parses");
        assert_eq!(reloaded, profile);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ProfileLoader::from_path("/definitely/not/here.json").expect_err("no file");
        assert!(matches!(err, ProfileError::Io { ref path, .. } if path.contains("not/here.json")));
    }
}
