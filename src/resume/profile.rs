use super::domain::{
    Address, Applicant, Contacts, EducationEntry, EducationLevel, EducationPeriod, LanguageLevel,
    LanguageSkill, Month, MonthInterval, Position, Profile, Salary, SalaryPeriod, Text, WorkEntry,
};
use chrono::NaiveDate;

/// The profile rendered when no data file is supplied.
pub fn builtin_profile() -> Profile {
    Profile {
        applicant: builtin_applicant(),
        positions: builtin_positions(),
    }
}

// Literal months and dates below are valid by construction.
fn month(year: i32, month: u32) -> Month {
    match Month::new(year, month) {
        Ok(month) => month,
        Err(err) => unreachable!("builtin profile month: {err}"),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => unreachable!("builtin profile date {year}-{month}-{day}"),
    }
}

fn builtin_applicant() -> Applicant {
    Applicant {
        name: Text::new("Alex Morozov", "Алексей Морозов"),
        birthdate: date(1993, 7, 31),
        contacts: Contacts {
            email: "alex.morozov@example.com".to_string(),
            phone: Some("+7 900 000-00-00".to_string()),
            github: Some("amorozov".to_string()),
            gitlab: Some("amorozov".to_string()),
            skype: Some("live:amorozov".to_string()),
            web: Some("amorozov.dev".to_string()),
        },
        address: Address {
            country: Text::new("Russia", "Россия"),
            city: Text::new("Moscow", "Москва"),
        },
        about: Text::new(
            "Backend developer who enjoys turning messy data into reliable services. \
             I care about readable code, tests that catch real bugs and documentation \
             that stays true.",
            "Бэкенд-разработчик, которому нравится превращать разрозненные данные в \
             надёжные сервисы. Ценю читаемый код, тесты, которые ловят настоящие ошибки, \
             и актуальную документацию.",
        ),
        education: vec![
            EducationEntry {
                place: Text::new(
                    "Moscow Power Engineering Institute",
                    "Московский энергетический институт",
                ),
                speciality: Text::new("Applied Mathematics", "Прикладная математика"),
                level: EducationLevel::Master,
                period: EducationPeriod::Months(MonthInterval::closed(
                    month(2015, 9),
                    month(2017, 6),
                )),
            },
            EducationEntry {
                place: Text::new(
                    "Moscow Power Engineering Institute",
                    "Московский энергетический институт",
                ),
                speciality: Text::new("Computer Science", "Информатика и вычислительная техника"),
                level: EducationLevel::Bachelor,
                period: EducationPeriod::Year(2015),
            },
        ],
        experience: vec![
            WorkEntry {
                place: Text::same("Northwind Analytics"),
                position: Text::new("Junior Python Developer", "Младший Python-разработчик"),
                interval: MonthInterval::closed(month(2016, 3), month(2019, 8)),
                description: Text::new(
                    "Maintained the reporting backend for retail customers.",
                    "Поддерживал бэкенд отчётности для розничных клиентов.",
                ),
                achievements: vec![
                    Text::new(
                        "Cut nightly report generation from 4 hours to 25 minutes.",
                        "Сократил ночную генерацию отчётов с 4 часов до 25 минут.",
                    ),
                    Text::new(
                        "Introduced automated tests for the billing export.",
                        "Внедрил автотесты для выгрузки биллинга.",
                    ),
                ],
                keywords: vec![
                    "Python".to_string(),
                    "Pandas".to_string(),
                    "PostgreSQL".to_string(),
                ],
            },
            WorkEntry {
                place: Text::same("Contoso Logistics"),
                position: Text::new("Python Developer", "Python-разработчик"),
                interval: MonthInterval::ongoing(month(2019, 9)),
                description: Text::new(
                    "Building route planning APIs used by 300+ warehouses.",
                    "Разрабатываю API планирования маршрутов для 300+ складов.",
                ),
                achievements: vec![Text::new(
                    "Designed the tariff service that replaced three legacy systems.",
                    "Спроектировал тарифный сервис, заменивший три устаревшие системы.",
                )],
                keywords: vec![
                    "Flask".to_string(),
                    "SQL".to_string(),
                    "Docker".to_string(),
                    "CI/CD".to_string(),
                ],
            },
        ],
        languages: vec![
            LanguageSkill {
                name: Text::new("Russian", "Русский"),
                level: LanguageLevel::Native,
            },
            LanguageSkill {
                name: Text::new("English", "Английский"),
                level: LanguageLevel::Intermediate,
            },
        ],
        skills: vec![
            "Git".to_string(),
            "Linux".to_string(),
            "Docker".to_string(),
        ],
    }
}

fn builtin_positions() -> Vec<Position> {
    vec![
        Position {
            key: "python-developer".to_string(),
            title: Text::new("Python Developer", "Python-разработчик"),
            skills: vec![
                "Python".to_string(),
                "Flask/Bottle".to_string(),
                "Pandas/Numpy".to_string(),
                "SQL".to_string(),
            ],
            salary: Some(Salary {
                amount: 250_000,
                unit: "RUB".to_string(),
                period: SalaryPeriod::Month,
            }),
        },
        Position {
            key: "backend-developer".to_string(),
            title: Text::new("Backend Developer", "Бэкенд-разработчик"),
            skills: vec![
                "Python".to_string(),
                "PostgreSQL".to_string(),
                "REST APIs".to_string(),
            ],
            salary: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::domain::Lang;

    #[test]
    fn builtin_profile_is_fully_translated() {
        let profile = builtin_profile();
        let applicant = &profile.applicant;
        for lang in Lang::ordered() {
            assert!(applicant.name.get(lang).is_ok());
            assert!(applicant.about.get(lang).is_ok());
            for job in &applicant.experience {
                assert!(job.description.get(lang).is_ok());
                assert!(job.achievements.iter().all(|a| a.get(lang).is_ok()));
            }
            for position in &profile.positions {
                assert!(position.title.get(lang).is_ok());
            }
        }
    }

    #[test]
    fn builtin_birthdate_is_set() {
        let profile = builtin_profile();
        assert_eq!(
            profile.applicant.birthdate,
            NaiveDate::from_ymd_opt(1993, 7, 31).expect("valid date")
        );
    }
}
