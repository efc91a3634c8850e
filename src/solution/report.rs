//! JSON run report: puzzle metadata, outcome and statistics of one search.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::chess::piece::PieceKind;
use crate::scenario::{Puzzle, SearchConfig, SearchError};
use crate::search::{SearchOutcome, SearchStats};

pub const REPORT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub format_version: u32,
    pub created_unix_secs: u64,
    pub puzzle: String,
    pub piece: PieceKind,
    pub width: usize,
    pub height: usize,
    pub capturable: usize,
    pub dedup: bool,
    pub solved: bool,
    /// Move string, absent when the search was exhausted.
    pub solution: Option<String>,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn new(puzzle: &Puzzle, config: &SearchConfig, outcome: &SearchOutcome) -> Self {
        let created_unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Self {
            format_version: REPORT_FORMAT_VERSION,
            created_unix_secs,
            puzzle: puzzle.name.clone(),
            piece: puzzle.piece,
            width: puzzle.board.width(),
            height: puzzle.board.height(),
            capturable: puzzle.capturable(),
            dedup: config.dedup,
            solved: outcome.is_solved(),
            solution: outcome.solution.as_ref().map(|s| s.to_string()),
            stats: outcome.stats,
        }
    }
}

pub fn write_report(path: &Path, report: &SearchReport) -> Result<(), SearchError> {
    let f = fs::File::create(path).map_err(|e| SearchError::Io {
        stage: "report_create",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, report).map_err(|e| SearchError::Io {
        stage: "report_serialize",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    w.flush().map_err(|e| SearchError::Io {
        stage: "report_flush",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

pub fn read_report(path: &Path) -> Result<SearchReport, SearchError> {
    let f = fs::File::open(path).map_err(|e| SearchError::Io {
        stage: "report_open",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let report: SearchReport =
        serde_json::from_reader(BufReader::new(f)).map_err(|e| SearchError::Io {
            stage: "report_parse",
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

    if report.format_version != REPORT_FORMAT_VERSION {
        return Err(SearchError::InvalidSolution {
            reason: format!(
                "unsupported report format_version {} (expected {REPORT_FORMAT_VERSION})",
                report.format_version
            ),
        });
    }

    Ok(report)
}
