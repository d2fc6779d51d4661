use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Output languages the string tables know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    En,
    Ru,
}

impl Lang {
    pub const fn ordered() -> [Self; 2] {
        [Self::En, Self::Ru]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code '{0}' (expected one of: en, ru)")]
pub struct UnknownLang(pub String);

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Self::En),
            "ru" | "rus" | "russian" => Ok(Self::Ru),
            other => Err(UnknownLang(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no '{lang}' translation for text (available: {available})")]
    MissingTranslation { lang: Lang, available: String },
}

/// Text localized per language. Lookups for a language without an entry fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Text(BTreeMap<Lang, String>);

impl Text {
    pub fn new(en: impl Into<String>, ru: impl Into<String>) -> Self {
        Self(BTreeMap::from([(Lang::En, en.into()), (Lang::Ru, ru.into())]))
    }

    /// The same string for every language, for proper names and product names.
    pub fn same(value: impl Into<String>) -> Self {
        let value = value.into();
        Self(
            Lang::ordered()
                .into_iter()
                .map(|lang| (lang, value.clone()))
                .collect(),
        )
    }

    pub fn only(lang: Lang, value: impl Into<String>) -> Self {
        Self(BTreeMap::from([(lang, value.into())]))
    }

    pub fn get(&self, lang: Lang) -> Result<&str, RenderError> {
        self.0
            .get(&lang)
            .map(String::as_str)
            .ok_or_else(|| RenderError::MissingTranslation {
                lang,
                available: self.describe_available(),
            })
    }

    fn describe_available(&self) -> String {
        if self.0.is_empty() {
            return "none".to_string();
        }

        self.0
            .iter()
            .map(|(lang, value)| format!("{lang}: \"{value}\""))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub country: Text,
    pub city: Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// Technical and vocational education and training.
    Tvet,
    Bachelor,
    Master,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthParseError {
    #[error("month '{0}' must be formatted as YYYY-MM")]
    Format(String),
    #[error("month number {0} is outside 1..=12")]
    OutOfRange(u32),
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::OutOfRange(month));
        }
        Ok(Self { year, month })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    /// The final month of a year, used to order year-only periods.
    pub const fn december(year: i32) -> Self {
        Self { year, month: 12 }
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let (year, month) = trimmed
            .rsplit_once('-')
            .ok_or_else(|| MonthParseError::Format(trimmed.to_string()))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| MonthParseError::Format(trimmed.to_string()))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| MonthParseError::Format(trimmed.to_string()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for Month {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(value: Month) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Ordering key for "most recent first" listings: ongoing entries win, then
/// the later final month, then the later first month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Recency {
    ongoing: bool,
    last: Month,
    first: Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthInterval {
    pub from: Month,
    /// `None` means the interval is still running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Month>,
}

impl MonthInterval {
    pub const fn closed(from: Month, to: Month) -> Self {
        Self { from, to: Some(to) }
    }

    pub const fn ongoing(from: Month) -> Self {
        Self { from, to: None }
    }

    pub fn recency(&self) -> Recency {
        Recency {
            ongoing: self.to.is_none(),
            last: self.to.unwrap_or(self.from),
            first: self.from,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationPeriod {
    /// Only the graduation year is known.
    Year(i32),
    Months(MonthInterval),
}

impl EducationPeriod {
    pub fn recency(&self) -> Recency {
        match self {
            Self::Year(year) => Recency {
                ongoing: false,
                last: Month::december(*year),
                first: Month::december(*year),
            },
            Self::Months(interval) => interval.recency(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub place: Text,
    pub speciality: Text,
    pub level: EducationLevel,
    pub period: EducationPeriod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub place: Text,
    pub position: Text,
    pub interval: MonthInterval,
    pub description: Text,
    #[serde(default)]
    pub achievements: Vec<Text>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageLevel {
    Beginner,
    Intermediate,
    Advanced,
    Fluent,
    Native,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub name: Text,
    pub level: LanguageLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryPeriod {
    Hour,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub amount: u32,
    /// Currency code such as `RUB` or `USD`.
    pub unit: String,
    pub period: SalaryPeriod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub name: Text,
    pub birthdate: NaiveDate,
    pub contacts: Contacts,
    pub address: Address,
    pub about: Text,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<WorkEntry>,
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub key: String,
    pub title: Text,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,
}

/// One applicant together with every position they apply for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub applicant: Applicant,
    pub positions: Vec<Position>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse profile {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown position '{key}' (available: {available})")]
    UnknownPosition { key: String, available: String },
    #[error("profile does not list any positions")]
    NoPositions,
}

impl Profile {
    pub fn position(&self, key: &str) -> Result<&Position, ProfileError> {
        self.positions
            .iter()
            .find(|position| position.key == key)
            .ok_or_else(|| ProfileError::UnknownPosition {
                key: key.to_string(),
                available: self
                    .positions
                    .iter()
                    .map(|position| position.key.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Pairs the applicant with the requested position, or with the first
    /// listed position when no key is given.
    pub fn resume(&self, key: Option<&str>) -> Result<Resume<'_>, ProfileError> {
        let position = match key {
            Some(key) => self.position(key)?,
            None => self.positions.first().ok_or(ProfileError::NoPositions)?,
        };

        Ok(Resume {
            applicant: &self.applicant,
            position,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resume<'a> {
    pub applicant: &'a Applicant,
    pub position: &'a Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lookup_fails_for_missing_language() {
        let text = Text::only(Lang::En, "Backend developer");
        assert_eq!(text.get(Lang::En), Ok("Backend developer"));

        let err = text.get(Lang::Ru).expect_err("russian entry missing");
        assert_eq!(
            err,
            RenderError::MissingTranslation {
                lang: Lang::Ru,
                available: "en: \"Backend developer\"".to_string(),
            }
        );
    }

    #[test]
    fn same_text_covers_every_language() {
        let text = Text::same("GitHub");
        for lang in Lang::ordered() {
            assert_eq!(text.get(lang), Ok("GitHub"));
        }
    }

    #[test]
    fn month_parses_and_validates() {
        let month: Month = "2019-03".parse().expect("valid month");
        assert_eq!(month.year(), 2019);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2019-03");

        assert_eq!(
            "2019-13".parse::<Month>(),
            Err(MonthParseError::OutOfRange(13))
        );
        assert!(matches!(
            "March 2019".parse::<Month>(),
            Err(MonthParseError::Format(_))
        ));
    }

    #[test]
    fn month_text_form_survives_negative_years() {
        let month = Month::new(-5, 3).expect("valid month");
        assert_eq!(month.to_string(), "-005-03");
        assert_eq!("-005-03".parse::<Month>(), Ok(month));
    }

    #[test]
    fn lang_accepts_codes_and_names() {
        assert_eq!("EN".parse::<Lang>(), Ok(Lang::En));
        assert_eq!(" russian ".parse::<Lang>(), Ok(Lang::Ru));
        assert_eq!("de".parse::<Lang>(), Err(UnknownLang("de".to_string())));
    }

    #[test]
    fn ongoing_intervals_rank_as_most_recent() {
        let old = MonthInterval::closed(
            Month::new(2015, 1).expect("month"),
            Month::new(2018, 6).expect("month"),
        );
        let current = MonthInterval::ongoing(Month::new(2014, 2).expect("month"));
        assert!(current.recency() > old.recency());

        let graduated = EducationPeriod::Year(2018);
        assert!(graduated.recency() > old.recency());
    }

    #[test]
    fn resume_defaults_to_first_position() {
        let profile = crate::resume::builtin_profile();
        let resume = profile.resume(None).expect("builtin profile has positions");
        assert_eq!(resume.position.key, profile.positions[0].key);

        let err = profile
            .resume(Some("astronaut"))
            .expect_err("unknown position");
        assert!(matches!(err, ProfileError::UnknownPosition { ref key, .. } if key == "astronaut"));
    }
}
