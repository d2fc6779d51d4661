use super::domain::{EducationLevel, Lang, LanguageLevel, SalaryPeriod};
use super::prose::Delimiters;

/// Fixed interface strings for one output language.
#[derive(Debug)]
pub struct Strings {
    pub babel_language: &'static str,
    pub about: &'static str,
    pub skills: &'static str,
    pub languages: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub age: &'static str,
    pub location: &'static str,
    pub desired_salary: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub web: &'static str,
    pub keywords: &'static str,
    pub present: &'static str,
    pub graduated: &'static str,
    pub months: [&'static str; 12],
    pub delimiters: Delimiters<'static>,
    language_levels: [&'static str; 5],
    education_levels: [&'static str; 3],
    salary_periods: [&'static str; 3],
}

static ENGLISH: Strings = Strings {
    babel_language: "english",
    about: "About",
    skills: "Skills",
    languages: "Languages",
    experience: "Experience",
    education: "Education",
    age: "Age",
    location: "Location",
    desired_salary: "Desired salary",
    email: "E-mail",
    phone: "Phone",
    web: "Web",
    keywords: "Keywords",
    present: "present",
    graduated: "graduated",
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    delimiters: Delimiters::new(", ", &[" and ", "."]),
    language_levels: ["beginner", "intermediate", "advanced", "fluent", "native"],
    education_levels: [
        "vocational education",
        "bachelor's degree",
        "master's degree",
    ],
    salary_periods: ["per hour", "per month", "per year"],
};

static RUSSIAN: Strings = Strings {
    babel_language: "russian",
    about: "О себе",
    skills: "Навыки",
    languages: "Языки",
    experience: "Опыт работы",
    education: "Образование",
    age: "Возраст",
    location: "Город",
    desired_salary: "Желаемая зарплата",
    email: "Почта",
    phone: "Телефон",
    web: "Сайт",
    keywords: "Ключевые слова",
    present: "настоящее время",
    graduated: "окончание",
    months: [
        "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
    ],
    delimiters: Delimiters::new(", ", &[" и ", "."]),
    language_levels: ["начальный", "средний", "продвинутый", "свободный", "родной"],
    education_levels: [
        "среднее профессиональное",
        "бакалавриат",
        "магистратура",
    ],
    salary_periods: ["в час", "в месяц", "в год"],
};

impl Strings {
    pub fn for_lang(lang: Lang) -> &'static Strings {
        match lang {
            Lang::En => &ENGLISH,
            Lang::Ru => &RUSSIAN,
        }
    }

    pub fn language_level(&self, level: LanguageLevel) -> &'static str {
        let index = match level {
            LanguageLevel::Beginner => 0,
            LanguageLevel::Intermediate => 1,
            LanguageLevel::Advanced => 2,
            LanguageLevel::Fluent => 3,
            LanguageLevel::Native => 4,
        };
        self.language_levels[index]
    }

    pub fn education_level(&self, level: EducationLevel) -> &'static str {
        let index = match level {
            EducationLevel::Tvet => 0,
            EducationLevel::Bachelor => 1,
            EducationLevel::Master => 2,
        };
        self.education_levels[index]
    }

    pub fn salary_period(&self, period: SalaryPeriod) -> &'static str {
        let index = match period {
            SalaryPeriod::Hour => 0,
            SalaryPeriod::Month => 1,
            SalaryPeriod::Year => 2,
        };
        self.salary_periods[index]
    }

    /// Month name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> &'static str {
        let index = month.clamp(1, 12) as usize - 1;
        self.months[index]
    }
}
