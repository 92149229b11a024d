use crate::records::error::LoadError;
use crate::records::extractor::extract_records;
use crate::records::store::RecordStore;
use bon::bon;
use log::{debug, info};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

/// Field separator of the hourly rental export.
pub const DEFAULT_SEPARATOR: u8 = b';';

/// Reads the hourly rental CSV into a [`RecordStore`].
///
/// The file must have a header row; see [`crate::records::extractor::extract_records`]
/// for the columns it needs.
///
/// # Examples
///
/// ```
/// use rentalstat::RecordLoader;
///
/// let csv = "instant;dteday;hr;season;weathersit;casual;registered;cnt\n\
///            2;2011-01-01;1;1;1;8;32;40\n\
///            1;2011-01-01;0;1;1;3;13;16\n";
///
/// let store = RecordLoader::default().load_bytes(csv.as_bytes()).unwrap();
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.records()[0].id, 1);
///
/// let comma = RecordLoader::builder().separator(b',').build();
/// assert!(comma.load_bytes(csv.replace(';', ",").as_bytes()).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RecordLoader {
    separator: u8,
}

#[bon]
impl RecordLoader {
    /// Creates a loader.
    ///
    /// # Arguments
    ///
    /// * `.separator(u8)`: Optional. Field separator, defaults to [`DEFAULT_SEPARATOR`].
    #[builder]
    pub fn new(separator: Option<u8>) -> Self {
        Self {
            separator: separator.unwrap_or(DEFAULT_SEPARATOR),
        }
    }

    /// Loads and validates the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::CsvReadIo`] if the file cannot be read or parsed,
    /// [`LoadError::ColumnNotFound`] if a required column is missing and
    /// [`LoadError::MalformedRecord`] for the first row that fails validation.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<RecordStore, LoadError> {
        let path = path.as_ref();
        info!("Reading rental data from {:?}", path);
        let df = self
            .read_options()
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .and_then(|reader| reader.finish())
            .map_err(|e| LoadError::CsvReadIo(path.to_path_buf(), e))?;
        Self::into_store(df)
    }

    /// Loads and validates CSV data already held in memory.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<RecordStore, LoadError> {
        let df = self
            .read_options()
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
            .map_err(LoadError::CsvReadPolars)?;
        Self::into_store(df)
    }

    fn read_options(&self) -> CsvReadOptions {
        let separator = self.separator;
        CsvReadOptions::default()
            .with_has_header(true)
            .map_parse_options(move |options| options.with_separator(separator))
    }

    fn into_store(df: DataFrame) -> Result<RecordStore, LoadError> {
        debug!("Parsed rental CSV with shape {:?}", df.shape());
        let records = extract_records(&df)?;
        Ok(RecordStore::from_records(records)?)
    }
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::builder().build()
    }
}
