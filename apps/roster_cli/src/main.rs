use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster_core::{
    bootstrap::{bootstrap, load_courses},
    config::load_settings,
    BufferedView, Coordinator, CoordinatorCell, Course,
};
use tracing_subscriber::EnvFilter;

/// Look up course rosters from the terminal.
#[derive(Parser, Debug)]
#[command(name = "roster", version, about)]
struct Cli {
    /// TOML file with `[[courses]]` tables; built-in sample courses otherwise
    #[arg(long)]
    seed_file: Option<PathBuf>,
    /// Tracing filter, e.g. `debug` or `roster_core=trace`
    #[arg(long)]
    log_filter: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every course with its roster size
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print the roster of the course named QUERY (case-insensitive)
    Show { query: String },
    /// Read one course name per line and print its roster
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings();

    let log_filter = cli.log_filter.unwrap_or(settings.log_filter);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let seed_file = cli.seed_file.or(settings.seed_file);
    let courses = load_courses(seed_file.as_deref()).context("failed to load courses")?;
    tracing::debug!(courses = courses.len(), "starting roster cli");

    let mut cell = CoordinatorCell::new();
    let coordinator = bootstrap(&mut cell, courses, BufferedView::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::List { json } => list_courses(coordinator, json, &mut out)?,
        Command::Show { query } => {
            if !show_roster(coordinator, &query, &mut out)? {
                anyhow::bail!("no course named '{query}'");
            }
        }
        Command::Repl => run_repl(coordinator, io::stdin().lock(), &mut out)?,
    }
    out.flush()?;

    Ok(())
}

fn list_courses(
    coordinator: &Coordinator<BufferedView>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if json {
        let courses: Vec<&Course> = coordinator
            .accessors()
            .iter()
            .map(|accessor| accessor.course())
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&courses)?)?;
        return Ok(());
    }

    for accessor in coordinator.accessors() {
        writeln!(
            out,
            "{} ({} students)",
            accessor.course_name(),
            accessor.course_students().len()
        )?;
    }
    Ok(())
}

/// Resolves `query` and writes the roster. Returns whether a course matched.
fn show_roster(
    coordinator: &mut Coordinator<BufferedView>,
    query: &str,
    out: &mut impl Write,
) -> Result<bool> {
    coordinator.view_mut().set_query(query);
    let selection = coordinator.resolve_selection();
    coordinator.render_roster(selection);

    for line in coordinator.view_mut().take_lines() {
        out.write_all(line.as_bytes())?;
    }
    Ok(selection.is_some())
}

fn run_repl(
    coordinator: &mut Coordinator<BufferedView>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Enter a course name (:list, :quit)")?;
    for line in input.lines() {
        let line = line.context("failed to read query")?;
        let query = line.trim();
        match query {
            "" => continue,
            ":quit" | ":q" => break,
            ":list" => list_courses(coordinator, false, out)?,
            _ => {
                if !show_roster(coordinator, query, out)? {
                    writeln!(out, "no course named '{query}'")?;
                }
            }
        }
        out.flush()?;
    }
    Ok(())
}
