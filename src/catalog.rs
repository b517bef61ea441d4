use crate::error::{CatalogError, RowParseError};
use crate::models::{Holiday, Track};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;
use tracing::{info, warn};

const TITLE_COLUMN: &str = "Song";
const ARTIST_COLUMN: &str = "Artist(s)";
const TEMPO_COLUMN: &str = "BPM";
const HOLIDAY_COLUMN: &str = "Holiday Association";

/// The full set of known tracks, in file order. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

/// Column positions resolved from the header row
struct Columns {
    title: usize,
    artist: usize,
    tempo: usize,
    holiday: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, CatalogError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Ok(Columns {
            title: find(TITLE_COLUMN).ok_or(CatalogError::MissingColumn(TITLE_COLUMN))?,
            artist: find(ARTIST_COLUMN).ok_or(CatalogError::MissingColumn(ARTIST_COLUMN))?,
            tempo: find(TEMPO_COLUMN).ok_or(CatalogError::MissingColumn(TEMPO_COLUMN))?,
            holiday: find(HOLIDAY_COLUMN),
        })
    }

    fn parse_row(&self, record: &StringRecord, line: u64) -> Result<Track, RowParseError> {
        let get = |i: usize| record.get(i).unwrap_or_default();

        let title = get(self.title);
        if title.is_empty() {
            return Err(RowParseError::MissingTitle { line });
        }

        let raw_tempo = get(self.tempo);
        let tempo = raw_tempo
            .parse::<u32>()
            .map_err(|_| RowParseError::InvalidTempo {
                line,
                value: raw_tempo.to_string(),
            })?;

        let holiday = self.holiday.and_then(|i| Holiday::from_tag(get(i)));

        Ok(Track::new(title, get(self.artist), tempo, holiday))
    }
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Catalog { tracks }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Load the catalog from a CSV file with a `Song, Artist(s), BPM, Holiday Association`
    /// header. Headers and values are trimmed. Rows that cannot be parsed are
    /// skipped with a warning.
    pub fn load_from_csv<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.display().to_string()));
        }

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(path)?;

        let columns = Columns::from_headers(reader.headers()?)?;

        let mut tracks = Vec::new();
        let mut skipped = 0;
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping unreadable catalog row: {e}");
                    skipped += 1;
                    continue;
                }
            };

            let line = record.position().map(|p| p.line()).unwrap_or_default();
            match columns.parse_row(&record, line) {
                Ok(track) => tracks.push(track),
                Err(e) => {
                    warn!("Skipping catalog row: {e}");
                    skipped += 1;
                }
            }
        }

        info!(
            "Library loaded from {} ({} tracks, {} skipped)",
            path.display(),
            tracks.len(),
            skipped
        );
        Ok(Catalog::new(tracks))
    }

    /// Load the catalog, falling back to an empty one if the file cannot be read
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Catalog {
        match Self::load_from_csv(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Error loading library: {e}; continuing with an empty catalog");
                Catalog::default()
            }
        }
    }

    /// One display line per track
    pub fn display(&self) -> Vec<String> {
        self.tracks
            .iter()
            .map(|t| format!("{} by {} ({} BPM)", t.title, t.artist, t.tempo))
            .collect()
    }
}
