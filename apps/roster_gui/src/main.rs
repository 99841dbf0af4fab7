mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use roster_core::{
    bootstrap::{bootstrap, load_courses},
    config::load_settings,
    CoordinatorCell,
};
use tracing_subscriber::EnvFilter;

use crate::ui::{FormView, RosterApp};

#[derive(Parser, Debug)]
struct Args {
    /// TOML file with `[[courses]]` tables; built-in sample courses otherwise
    #[arg(long)]
    seed_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed_file = args.seed_file.or(settings.seed_file);
    let courses = load_courses(seed_file.as_deref()).context("failed to load courses")?;

    let mut cell = CoordinatorCell::new();
    let visible = bootstrap(&mut cell, courses, FormView::default())
        .view()
        .is_visible();
    tracing::info!(title = %settings.window_title, "opening roster window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([560.0, 420.0])
            .with_min_inner_size([420.0, 300.0])
            .with_visible(visible),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(RosterApp::new(cell)))),
    )
    .map_err(|err| anyhow::anyhow!("roster window failed: {err}"))
}
