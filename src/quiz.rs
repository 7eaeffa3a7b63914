mod config_reader;
mod io_common;
mod io_json;
mod io_xlsx;
mod terminal;

use log::{debug, error, info, warn};

use constituency_quiz::builder::Builder;
use constituency_quiz::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::quiz::config_reader::*;
use crate::quiz::io_common::simplify_file_name;

const DEFAULT_TITLE: &str = "Guess the Lok Sabha Constituencies!";

#[derive(Debug, Snafu)]
pub enum QuizError {
    #[snafu(display("Error opening file {path}: {source}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON: {source}"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error opening Excel file {path}: {source}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The Excel file has no worksheet"))]
    EmptyExcel {},
    #[snafu(display("Cannot find worksheet {worksheet_name}"))]
    ExcelMissingWorksheet { worksheet_name: String },
    #[snafu(display("Several worksheets found ({names:?}), choose one with --excel-worksheet-name"))]
    ExcelAmbiguousWorksheet { names: Vec<String> },
    #[snafu(display("Cannot find column {column_name} in the header"))]
    ExcelMissingColumn { column_name: String },
    #[snafu(display("Unexpected cell at line {lineno}: {content}"))]
    ExcelWrongCellType { lineno: u64, content: String },
    #[snafu(display("No list of constituencies: use --data or --config"))]
    MissingDataset {},
    #[snafu(display("Error reading the guesses from {path}: {source}"))]
    ReadingGuesses {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Terminal error: {source}"))]
    Terminal { source: std::io::Error },
    #[snafu(display("Error writing {path}: {source}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type QuizResult<T> = Result<T, QuizError>;

/// The settings of a game, once the configuration file and the command line are merged.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct QuizSettings {
    pub title: String,
    pub total_seats: u32,
    pub data: DataSource,
    pub vernacular_path: Option<String>,
}

fn resolve_settings(args: &Args) -> QuizResult<QuizSettings> {
    let (config, root_p): (QuizConfig, Option<PathBuf>) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            info!("config: {:?}", config);
            let root_p = Path::new(config_path).parent().map(Path::to_path_buf);
            (config, root_p)
        }
        None => (QuizConfig::default(), None),
    };

    // Paths of the configuration file are relative to its directory.
    let resolve = |p: &String| -> String {
        match &root_p {
            Some(root) => root.join(p).display().to_string(),
            None => p.clone(),
        }
    };

    let config_source = config.data_source.clone();
    let file_path = match (&args.data, &config_source) {
        (Some(p), _) => p.clone(),
        (None, Some(cs)) => resolve(&cs.file_path),
        (None, None) => return MissingDatasetSnafu {}.fail(),
    };
    let provider = args
        .input_type
        .clone()
        .or_else(|| config_source.as_ref().map(|cs| cs.provider.clone()))
        .unwrap_or_else(|| infer_provider(&file_path));
    let excel_worksheet_name = args
        .excel_worksheet_name
        .clone()
        .or_else(|| config_source.and_then(|cs| cs.excel_worksheet_name));

    Ok(QuizSettings {
        title: config.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        total_seats: args
            .total_seats
            .or(config.total_seats)
            .unwrap_or(LOK_SABHA_SEATS),
        data: DataSource {
            provider,
            file_path,
            excel_worksheet_name,
        },
        vernacular_path: args
            .vernacular
            .clone()
            .or_else(|| config.vernacular_file_path.as_ref().map(resolve)),
    })
}

fn infer_provider(path: &str) -> String {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("xlsx") => "xlsx".to_string(),
        _ => "json".to_string(),
    }
}

fn read_constituencies(source: &DataSource) -> QuizResult<Vec<Constituency>> {
    info!("Attempting to read constituencies from {:?}", source.file_path);
    match source.provider.as_str() {
        "json" => io_json::read_json_constituencies(&source.file_path),
        "xlsx" => io_xlsx::read_xlsx_constituencies(
            &source.file_path,
            source.excel_worksheet_name.as_deref(),
        ),
        x => whatever!("Provider not implemented {:?}", x),
    }
}

fn try_load_dataset(settings: &QuizSettings) -> QuizResult<Dataset> {
    let constituencies = read_constituencies(&settings.data)?;
    let mut builder = Builder::new();
    let mut skipped = 0;
    for c in constituencies.iter() {
        // Bad records are skipped, the others stay playable.
        if let Err(e) = builder.add_constituency(c) {
            warn!("Skipping record: {}", e);
            skipped += 1;
        }
    }
    if skipped > 0 {
        warn!("{} of {} records skipped", skipped, constituencies.len());
    }

    if let Some(vernacular_p) = &settings.vernacular_path {
        match io_json::read_json_vernaculars(vernacular_p) {
            Ok(labels) => {
                for (region, label) in labels.iter() {
                    builder.add_vernacular(region, label.as_deref());
                }
            }
            Err(e) => {
                warn!("Cannot read the vernacular labels, continuing without them: {}", e);
            }
        }
    }
    Ok(builder.build())
}

/// Loads the dataset. A failure is logged and leaves the game with an empty dataset.
pub fn load_dataset(settings: &QuizSettings) -> Dataset {
    match try_load_dataset(settings) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Error loading the constituencies, nothing can be guessed: {}", e);
            Dataset::empty()
        }
    }
}

fn read_guesses(path: &str) -> QuizResult<Vec<String>> {
    if path == "stdin" {
        let stdin = std::io::stdin();
        let lines: Result<Vec<String>, std::io::Error> = stdin.lock().lines().collect();
        lines.context(ReadingGuessesSnafu { path })
    } else {
        let contents = fs::read_to_string(path).context(ReadingGuessesSnafu { path })?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}

/// Feeds the guesses to the session, one input change per line, or one per character when
/// typing keys. When typing, the field is emptied before each line.
pub fn replay_guesses(session: &mut QuizSession, guesses: &[String], type_keys: bool) {
    for (lineno, line) in guesses.iter().enumerate() {
        let mut outcome = GuessOutcome::default();
        if type_keys {
            session.set_input("");
            for c in line.chars() {
                outcome.new_guesses.extend(session.type_char(c).new_guesses);
            }
        } else {
            outcome = session.set_input(line);
        }
        debug!(
            "replay_guesses: line {}: {:?} -> {:?} (pending {:?})",
            lineno + 1,
            line,
            outcome.new_guesses,
            session.input()
        );
    }
}

fn build_summary_js(settings: &QuizSettings, session: &QuizSession) -> JSValue {
    let regions: Vec<JSValue> = session
        .table()
        .iter()
        .map(|row| {
            json!({
                "region": row.region,
                "vernacular": row.vernacular,
                "guessed": row.guessed_count(),
                "total": row.total,
                "constituencies": row.guessed,
            })
        })
        .collect();
    json!({
        "config": {
            "title": settings.title,
            "dataset": simplify_file_name(&settings.data.file_path),
            "constituencies": session.dataset().len(),
            "totalSeats": settings.total_seats,
        },
        "correct": session.correct_count(),
        "pendingInput": session.input(),
        "regions": regions,
    })
}

fn write_summary(out: &Option<String>, pretty_js: &str) -> QuizResult<()> {
    match out.as_deref() {
        None | Some("") => {}
        Some("stdout") => println!("{}", pretty_js),
        Some(path) => {
            info!("Writing summary to {:?}", path);
            fs::write(path, pretty_js).context(WritingOutputSnafu { path })?;
        }
    }
    Ok(())
}

fn check_reference(reference_path: &str, pretty_js_stats: &str) -> QuizResult<()> {
    let summary_ref = read_summary(reference_path)?;
    debug!("reference summary: {:?}", summary_ref);
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference summary");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_stats, "\n");
        whatever!("Difference detected between the progress and the reference summary")
    }
    Ok(())
}

pub fn run_quiz(args: &Args) -> QuizResult<()> {
    let settings = resolve_settings(args)?;
    info!("settings: {:?}", settings);

    let dataset = load_dataset(&settings);
    let mut session = QuizSession::new(dataset);

    if let Some(guesses_p) = &args.guesses {
        let guesses = read_guesses(guesses_p)?;
        info!("Replaying {} guesses from {:?}", guesses.len(), guesses_p);
        replay_guesses(&mut session, &guesses, args.type_keys);
    } else {
        terminal::play(&mut session, &settings)?;
    }

    info!(
        "Final score: {} / {}",
        session.correct_count(),
        settings.total_seats
    );

    let summary_js = build_summary_js(&settings, &session);
    let pretty_js_stats = serde_json::to_string_pretty(&summary_js).context(ParsingJsonSnafu {})?;
    write_summary(&args.out, &pretty_js_stats)?;

    // The reference summary, if provided for comparison
    if let Some(reference_p) = &args.reference {
        check_reference(reference_p, &pretty_js_stats)?;
    }

    Ok(())
}
