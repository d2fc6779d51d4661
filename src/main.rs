use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use resume_tex::config::AppConfig;
use resume_tex::error::AppError;
use resume_tex::resume::{self, Lang, ProfileLoader};
use resume_tex::telemetry;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "resume-tex",
    about = "Render a résumé profile into a LaTeX document",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Render flags accepted without naming the `render` subcommand
    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the résumé for one position (default command)
    Render(RenderArgs),
    /// List the positions a profile can be rendered for
    Positions(PositionsArgs),
    /// Write the built-in profile as JSON, as a starting point for --data
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// Output language (en or ru)
    #[arg(long, value_parser = parse_lang)]
    lang: Option<Lang>,
    /// Position key to render (defaults to the profile's first position)
    #[arg(long)]
    position: Option<String>,
    /// Date the applicant's age is evaluated at (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Profile JSON file (defaults to the built-in profile)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Write the document to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PositionsArgs {
    /// Profile JSON file (defaults to the built-in profile)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Language for position titles
    #[arg(long, value_parser = parse_lang)]
    lang: Option<Lang>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Write the JSON to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli.command.unwrap_or(Command::Render(cli.render));

    match command {
        Command::Render(args) => run_render(args, config),
        Command::Positions(args) => run_positions(args, config),
        Command::Export(args) => run_export(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_lang(raw: &str) -> Result<Lang, String> {
    raw.parse::<Lang>().map_err(|err| err.to_string())
}

fn run_render(mut args: RenderArgs, config: AppConfig) -> Result<(), AppError> {
    let mut render = config.render;
    if let Some(lang) = args.lang.take() {
        render.lang = lang;
    }
    if let Some(position) = args.position.take() {
        render.position = Some(position);
    }
    if let Some(data) = args.data.take() {
        render.data = Some(data);
    }

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let profile = ProfileLoader::load(render.data.as_deref())?;
    let selected = profile.resume(render.position.as_deref())?;
    info!(
        lang = %render.lang,
        position = %selected.position.key,
        %today,
        "rendering resume"
    );

    let document = resume::render(selected, render.lang, today)?;
    info!(bytes = document.len(), "resume rendered");
    emit(args.output.as_deref(), &document)
}

fn run_positions(args: PositionsArgs, config: AppConfig) -> Result<(), AppError> {
    let data = args.data.or(config.render.data);
    let lang = args.lang.unwrap_or(config.render.lang);
    let profile = ProfileLoader::load(data.as_deref())?;

    let mut listing = String::new();
    for position in &profile.positions {
        listing.push_str(&format!(
            "{}\t{}\n",
            position.key,
            position.title.get(lang)?
        ));
    }
    emit(None, &listing)
}

fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let mut json = resume::profile_to_json(&resume::builtin_profile())?;
    json.push('\n');
    emit(args.output.as_deref(), &json)
}

fn emit(output: Option<&Path>, content: &str) -> Result<(), AppError> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_render() {
        let cli = Cli::try_parse_from(["resume-tex"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn render_flags_work_without_subcommand() {
        let cli = Cli::try_parse_from(["resume-tex", "--lang", "ru", "--today", "2026-10-16"])
            .expect("top-level render flags parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.render.lang, Some(Lang::Ru));
        assert_eq!(cli.render.today, NaiveDate::from_ymd_opt(2026, 10, 16));
    }

    #[test]
    fn top_level_flags_conflict_with_subcommands() {
        let err = Cli::try_parse_from(["resume-tex", "--lang", "ru", "export"]);
        assert!(err.is_err());
    }

    #[test]
    fn render_flags_parse() {
        let cli = Cli::try_parse_from([
            "resume-tex",
            "render",
            "--lang",
            "ru",
            "--position",
            "backend-developer",
            "--today",
            "2026-10-16",
        ])
        .expect("render flags parse");

        match cli.command {
            Some(Command::Render(args)) => {
                assert_eq!(args.lang, Some(Lang::Ru));
                assert_eq!(args.position.as_deref(), Some("backend-developer"));
                assert_eq!(args.today, NaiveDate::from_ymd_opt(2026, 10, 16));
            }
            other => panic!("expected render command, got {other:?}"),
        }
    }

    #[test]
    fn invalid_language_is_rejected() {
        let err = Cli::try_parse_from(["resume-tex", "render", "--lang", "fr"])
            .expect_err("unsupported language");
        assert!(err.to_string().contains("unsupported language code 'fr'"));
    }
}
