use super::dates::years_between;
use super::domain::{
    Applicant, Contacts, EducationEntry, EducationPeriod, Lang, LanguageSkill, MonthInterval,
    RenderError, Resume, Salary, WorkEntry,
};
use super::latex::{escape, escape_url};
use super::prose::join_sequence;
use super::strings::Strings;
use chrono::NaiveDate;
use tracing::debug;

/// Renders `resume` as a complete LaTeX document in `lang`.
///
/// `today` anchors the age calculation; nothing here reads the clock, so
/// equal inputs always produce identical output.
pub fn render(resume: Resume<'_>, lang: Lang, today: NaiveDate) -> Result<String, RenderError> {
    let applicant = resume.applicant;
    let mut writer = DocumentWriter::new(lang, today);

    writer.write_preamble();
    writer.write_header(resume)?;
    writer.write_contacts(&applicant.contacts);
    writer.write_about(applicant)?;
    writer.write_skills(resume);
    writer.write_languages(&applicant.languages)?;
    writer.write_experience(&applicant.experience)?;
    writer.write_education(&applicant.education)?;
    writer.write_closing();

    Ok(writer.finish())
}

/// Append-only LaTeX buffer. Each `write_*` call appends one fragment.
#[derive(Debug)]
pub struct DocumentWriter {
    buffer: String,
    lang: Lang,
    strings: &'static Strings,
    today: NaiveDate,
}

impl DocumentWriter {
    pub fn new(lang: Lang, today: NaiveDate) -> Self {
        Self {
            buffer: String::new(),
            lang,
            strings: Strings::for_lang(lang),
            today,
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    fn line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn blank(&mut self) {
        self.buffer.push('\n');
    }

    fn section(&mut self, title: &str) {
        self.blank();
        self.line(&format!("\\section*{{{}}}", escape(title)));
    }

    pub fn write_preamble(&mut self) {
        let babel = match self.lang {
            Lang::En => self.strings.babel_language.to_string(),
            // the main language goes last
            Lang::Ru => format!("english,{}", self.strings.babel_language),
        };

        self.line(r"\documentclass[11pt,a4paper]{article}");
        self.line(r"\usepackage[utf8]{inputenc}");
        self.line(r"\usepackage[T2A]{fontenc}");
        self.line(&format!("\\usepackage[{babel}]{{babel}}"));
        self.line(r"\usepackage[margin=2cm]{geometry}");
        self.line(r"\usepackage{tabularx}");
        self.line(r"\usepackage{hyperref}");
        self.line(r"\pagestyle{empty}");
        self.line(r"\setlength{\parindent}{0pt}");
        self.blank();
        self.line(r"\begin{document}");
    }

    pub fn write_header(&mut self, resume: Resume<'_>) -> Result<(), RenderError> {
        let applicant = resume.applicant;
        let strings = self.strings;
        let name = escape(applicant.name.get(self.lang)?);
        let title = escape(resume.position.title.get(self.lang)?);
        let city = escape(applicant.address.city.get(self.lang)?);
        let country = escape(applicant.address.country.get(self.lang)?);
        let age = years_between(applicant.birthdate, self.today);
        debug!(section = "header", age, "writing section");

        self.blank();
        self.line(&format!("{{\\LARGE\\textbf{{{name}}}}}\\\\[2pt]"));
        self.line(&format!("{{\\large {title}}}"));
        self.blank();
        self.line(r"\medskip");
        self.line(&format!("\\textbf{{{}}}: {age}\\\\", strings.age));
        match &resume.position.salary {
            Some(salary) => {
                self.line(&format!(
                    "\\textbf{{{}}}: {city}, {country}\\\\",
                    strings.location
                ));
                let salary = self.salary(salary);
                self.line(&format!(
                    "\\textbf{{{}}}: {salary}",
                    strings.desired_salary
                ));
            }
            None => {
                self.line(&format!(
                    "\\textbf{{{}}}: {city}, {country}",
                    strings.location
                ));
            }
        }
        Ok(())
    }

    fn salary(&self, salary: &Salary) -> String {
        format!(
            "{} {} {}",
            salary.amount,
            escape(&salary.unit),
            self.strings.salary_period(salary.period)
        )
    }

    pub fn write_contacts(&mut self, contacts: &Contacts) {
        let strings = self.strings;
        let mut rows = vec![(
            strings.email,
            href(&format!("mailto:{}", contacts.email), &contacts.email),
        )];
        if let Some(phone) = &contacts.phone {
            rows.push((strings.phone, escape(phone)));
        }
        if let Some(github) = &contacts.github {
            let shown = format!("github.com/{github}");
            rows.push(("GitHub", href(&format!("https://{shown}"), &shown)));
        }
        if let Some(gitlab) = &contacts.gitlab {
            let shown = format!("gitlab.com/{gitlab}");
            rows.push(("GitLab", href(&format!("https://{shown}"), &shown)));
        }
        if let Some(skype) = &contacts.skype {
            rows.push(("Skype", escape(skype)));
        }
        if let Some(web) = &contacts.web {
            let shown = web
                .strip_prefix("https://")
                .or_else(|| web.strip_prefix("http://"))
                .unwrap_or(web);
            let url = if web.contains("://") {
                web.clone()
            } else {
                format!("https://{web}")
            };
            rows.push((strings.web, href(&url, shown)));
        }
        debug!(section = "contacts", rows = rows.len(), "writing section");

        self.blank();
        self.line(r"\medskip");
        self.line(r"\begin{tabularx}{\textwidth}{@{}lX@{}}");
        for (label, value) in rows {
            self.line(&format!("{} & {value} \\\\", escape(label)));
        }
        self.line(r"\end{tabularx}");
    }

    pub fn write_about(&mut self, applicant: &Applicant) -> Result<(), RenderError> {
        let about = escape(applicant.about.get(self.lang)?);
        debug!(section = "about", "writing section");

        self.section(self.strings.about);
        self.line(&about);
        Ok(())
    }

    /// Position skills first, then the applicant's remaining skills.
    pub fn write_skills(&mut self, resume: Resume<'_>) {
        let mut skills: Vec<&str> = Vec::new();
        for skill in resume
            .position
            .skills
            .iter()
            .chain(resume.applicant.skills.iter())
        {
            if !skills.contains(&skill.as_str()) {
                skills.push(skill);
            }
        }
        debug!(section = "skills", count = skills.len(), "writing section");
        if skills.is_empty() {
            return;
        }

        let escaped: Vec<String> = skills.into_iter().map(escape).collect();
        self.section(self.strings.skills);
        self.line(&join_sequence(&self.strings.delimiters, &escaped));
    }

    pub fn write_languages(&mut self, languages: &[LanguageSkill]) -> Result<(), RenderError> {
        debug!(section = "languages", count = languages.len(), "writing section");
        if languages.is_empty() {
            return Ok(());
        }

        let items = languages
            .iter()
            .map(|language| {
                Ok(format!(
                    "{} ({})",
                    escape(language.name.get(self.lang)?),
                    self.strings.language_level(language.level)
                ))
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        self.section(self.strings.languages);
        self.line(&join_sequence(&self.strings.delimiters, &items));
        Ok(())
    }

    /// Most recent job first.
    pub fn write_experience(&mut self, jobs: &[WorkEntry]) -> Result<(), RenderError> {
        debug!(section = "experience", count = jobs.len(), "writing section");
        if jobs.is_empty() {
            return Ok(());
        }

        let mut ordered: Vec<&WorkEntry> = jobs.iter().collect();
        ordered.sort_by(|a, b| b.interval.recency().cmp(&a.interval.recency()));

        self.section(self.strings.experience);
        for job in ordered {
            self.write_job(job)?;
        }
        Ok(())
    }

    fn write_job(&mut self, job: &WorkEntry) -> Result<(), RenderError> {
        let position = escape(job.position.get(self.lang)?);
        let place = escape(job.place.get(self.lang)?);
        let description = escape(job.description.get(self.lang)?);
        let achievements = job
            .achievements
            .iter()
            .map(|achievement| achievement.get(self.lang).map(escape))
            .collect::<Result<Vec<_>, RenderError>>()?;
        let interval = self.interval(&job.interval);

        self.line(&format!("\\subsection*{{{position} --- {place}}}"));
        self.line(&format!("\\textit{{{interval}}}"));
        self.blank();
        self.line(&description);
        if !achievements.is_empty() {
            self.line(r"\begin{itemize}");
            for achievement in &achievements {
                self.line(&format!("  \\item {achievement}"));
            }
            self.line(r"\end{itemize}");
        }
        if !job.keywords.is_empty() {
            let keywords: Vec<String> = job.keywords.iter().map(|k| escape(k)).collect();
            self.blank();
            self.line(&format!(
                "\\textbf{{{}}}: {}",
                self.strings.keywords,
                join_sequence(&self.strings.delimiters, &keywords)
            ));
        }
        Ok(())
    }

    /// Most recent entry first.
    pub fn write_education(&mut self, entries: &[EducationEntry]) -> Result<(), RenderError> {
        debug!(section = "education", count = entries.len(), "writing section");
        if entries.is_empty() {
            return Ok(());
        }

        let mut ordered: Vec<&EducationEntry> = entries.iter().collect();
        ordered.sort_by(|a, b| b.period.recency().cmp(&a.period.recency()));

        let mut rows = Vec::with_capacity(ordered.len());
        for entry in ordered {
            let period = match &entry.period {
                EducationPeriod::Year(year) => format!("{} {year}", self.strings.graduated),
                EducationPeriod::Months(interval) => self.interval(interval),
            };
            rows.push(format!(
                "{period} & \\textbf{{{}}}\\newline {}, {} \\\\",
                escape(entry.place.get(self.lang)?),
                escape(entry.speciality.get(self.lang)?),
                self.strings.education_level(entry.level)
            ));
        }

        self.section(self.strings.education);
        self.line(r"\begin{tabularx}{\textwidth}{@{}lX@{}}");
        for row in &rows {
            self.line(row);
        }
        self.line(r"\end{tabularx}");
        Ok(())
    }

    pub fn write_closing(&mut self) {
        self.blank();
        self.line(r"\end{document}");
    }

    fn interval(&self, interval: &MonthInterval) -> String {
        let from = format!(
            "{} {}",
            self.strings.month_name(interval.from.month()),
            interval.from.year()
        );
        let to = match interval.to {
            Some(to) => format!("{} {}", self.strings.month_name(to.month()), to.year()),
            None => self.strings.present.to_string(),
        };
        format!("{from} -- {to}")
    }
}

fn href(url: &str, shown: &str) -> String {
    format!("\\href{{{}}}{{{}}}", escape_url(url), escape(shown))
}
