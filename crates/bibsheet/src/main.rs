/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::path::PathBuf;
use std::process::ExitCode;

use bibsheet_core::{FontFamily, InputFormat, PositionMode};
use bibsheet_processor::normalize::synonyms;
use bibsheet_processor::{
    Canvas, ConfigOptions, LayoutPlan, NumberingStyle, ProcessedReferences, Processor, SortOrder,
    StyleId,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML or JSON file with default options; flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a reference file as a bibliography
    Process(ProcessArgs),
    /// List the accepted option ids
    Styles,
}

#[derive(Args)]
struct ProcessArgs {
    /// Reference file (.bib, .ris, .json, .enw)
    file: Option<PathBuf>,

    /// Input format; inferred from the extension when omitted
    #[arg(long)]
    format: Option<String>,

    /// Citation style id
    #[arg(short, long)]
    style: Option<String>,

    /// Marker style for the numbered list
    #[arg(short, long)]
    numbering: Option<String>,

    #[arg(long)]
    sort: Option<String>,

    /// Direction for year sorting: ascending or descending
    #[arg(long)]
    year_order: Option<String>,

    /// Placeholder for entries without authors
    #[arg(long)]
    no_author_text: Option<String>,

    #[arg(long)]
    font_family: Option<String>,

    #[arg(long)]
    font_size: Option<f64>,

    #[arg(long)]
    line_spacing: Option<f64>,

    #[arg(long)]
    max_width: Option<f64>,

    /// Indent continuation lines of each entry
    #[arg(long, overrides_with = "no_hanging_indent")]
    hanging_indent: bool,

    #[arg(long)]
    no_hanging_indent: bool,

    #[arg(long)]
    indent_size: Option<f64>,

    #[arg(long)]
    position: Option<String>,

    /// Horizontal origin for the custom position
    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,

    /// Vertical origin for the custom position
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    #[arg(long, overrides_with = "no_title")]
    show_title: bool,

    #[arg(long)]
    no_title: bool,

    #[arg(long)]
    title: Option<String>,

    /// Draw a box behind the block
    #[arg(long, overrides_with = "no_background_box")]
    background_box: bool,

    #[arg(long)]
    no_background_box: bool,

    #[arg(long)]
    box_padding: Option<f64>,

    /// Replace a block rendered earlier from the same file and style
    #[arg(long)]
    update_existing: bool,

    /// Print the entries as JSON
    #[arg(long, conflicts_with = "layout")]
    json: bool,

    /// Print the layout plan as JSON
    #[arg(long)]
    layout: bool,

    #[arg(long, default_value_t = 1920.0)]
    canvas_width: f64,

    #[arg(long, default_value_t = 1080.0)]
    canvas_height: f64,
}

impl ProcessArgs {
    fn options(&self) -> ConfigOptions {
        ConfigOptions {
            reference_file_path: self.file.as_ref().map(|p| p.display().to_string()),
            input_format: self.format.clone(),
            style: self.style.clone(),
            numbering_style: self.numbering.clone(),
            sort_order: self.sort.clone(),
            year_order: self.year_order.clone(),
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            line_spacing: self.line_spacing,
            max_width: self.max_width,
            hanging_indent: switch(self.hanging_indent, self.no_hanging_indent),
            indent_size: self.indent_size,
            position_mode: self.position.clone(),
            x: self.x,
            y: self.y,
            show_title: switch(self.show_title, self.no_title),
            title_text: self.title.clone(),
            background_box: switch(self.background_box, self.no_background_box),
            box_padding: self.box_padding,
            update_existing: self.update_existing.then_some(true),
            no_author_text: self.no_author_text.clone(),
            ..Default::default()
        }
    }
}

/// A `--flag` / `--no-flag` pair; `None` leaves the configured value alone.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(message) = synonyms::validate_tables() {
        eprintln!("Error: {message}");
        return ExitCode::FAILURE;
    }

    let result = match &cli.command {
        Commands::Process(args) => process(cli.config.as_ref(), args),
        Commands::Styles => {
            print_ids();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn process(config: Option<&PathBuf>, args: &ProcessArgs) -> Result<(), String> {
    let mut options = match config {
        Some(path) => ConfigOptions::load(path).map_err(|e| e.to_string())?,
        None => ConfigOptions::default(),
    };
    options.merge(&args.options());

    let processor = Processor::from_options(options).map_err(|e| e.to_string())?;
    tracing::debug!(
        style = %processor.config.style,
        numbering = %processor.config.numbering_style,
        "configuration resolved"
    );
    let output = processor.process_file().map_err(|e| e.to_string())?;

    if args.layout {
        let canvas = Canvas {
            width: args.canvas_width,
            height: args.canvas_height,
        };
        let plan = LayoutPlan::build(&output, &processor.config, canvas);
        print_json(&plan)
    } else if args.json {
        print_json(&output)
    } else {
        print_entries(&output);
        Ok(())
    }
}

fn print_entries(output: &ProcessedReferences) {
    for entry in &output.entries {
        if entry.marker.is_empty() {
            println!("{}", entry.text);
        } else {
            println!("{} {}", entry.marker, entry.text);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn print_ids() {
    fn list<T: std::fmt::Display>(label: &str, ids: &[T]) {
        let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
        println!("{label}: {}", ids.join(", "));
    }

    list("styles", StyleId::ALL);
    list("numbering", NumberingStyle::ALL);
    list("sort", SortOrder::ALL);
    list("formats", InputFormat::ALL);
    list("fonts", FontFamily::ALL);
    list("positions", PositionMode::ALL);
}
