use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::CandidateDraft;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to open candidate roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse candidate roster: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads a candidate roster with the header `name,address,experience,willing_to_relocate`.
pub struct CandidateCsvImporter;

impl CandidateCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateDraft>, ImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CandidateDraft>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut drafts = Vec::new();
        for row in csv_reader.deserialize::<CandidateRow>() {
            drafts.push(row?.into());
        }
        Ok(drafts)
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    name: String,
    address: String,
    experience: i32,
    willing_to_relocate: String,
}

impl From<CandidateRow> for CandidateDraft {
    fn from(row: CandidateRow) -> Self {
        Self {
            name: row.name,
            address: row.address,
            experience: row.experience,
            willing_to_relocate: row.willing_to_relocate.to_ascii_lowercase(),
        }
    }
}
