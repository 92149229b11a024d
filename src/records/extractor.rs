use crate::records::error::{LoadError, MalformedRecordError};
use crate::types::rental_record::RentalRecord;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use polars::prelude::*;

// Source columns
const COL_INSTANT: &str = "instant"; // Record id
const COL_DTEDAY: &str = "dteday"; // Date or date-time
const COL_HR: &str = "hr"; // Optional hour of day
const COL_SEASON: &str = "season";
const COL_WEATHERSIT: &str = "weathersit";
const COL_CASUAL: &str = "casual";
const COL_REGISTERED: &str = "registered";
const COL_CNT: &str = "cnt"; // Total count

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Retrieves a column by name from a DataFrame.
fn get_column<'a>(df: &'a DataFrame, col: &str) -> Result<&'a Column, LoadError> {
    df.column(col)
        .map_err(|e| LoadError::ColumnNotFound(col.to_string(), e))
}

/// Reads an integer column without coercion, nulls kept as `None`.
///
/// Integer columns of any width are widened to `i64`. A column the reader
/// inferred as float or text is accepted only if every value is a whole
/// number; the first one that is not is reported with its row.
fn get_int_column(df: &DataFrame, col: &'static str) -> Result<Vec<Option<i64>>, LoadError> {
    let column = get_column(df, col)?;
    let cast_error = |source| LoadError::ColumnCast {
        column: col.to_string(),
        source,
    };
    let dtype = column.dtype();

    if dtype.is_integer() {
        let column = column.strict_cast(&DataType::Int64).map_err(cast_error)?;
        return Ok(column.i64().map_err(cast_error)?.into_iter().collect());
    }
    if dtype.is_float() {
        let column = column.strict_cast(&DataType::Float64).map_err(cast_error)?;
        return column
            .f64()
            .map_err(cast_error)?
            .into_iter()
            .enumerate()
            .map(|(row, value)| value.map(|v| whole_number(v, row, col)).transpose())
            .collect::<Result<Vec<_>, MalformedRecordError>>()
            .map_err(LoadError::from);
    }
    if dtype == &DataType::String {
        return column
            .str()
            .map_err(cast_error)?
            .into_iter()
            .enumerate()
            .map(|(row, value)| {
                value
                    .map(|text| {
                        text.trim()
                            .parse::<i64>()
                            .map_err(|_| MalformedRecordError::NotAnInteger {
                                row,
                                column: col,
                                value: text.to_string(),
                            })
                    })
                    .transpose()
            })
            .collect::<Result<Vec<_>, MalformedRecordError>>()
            .map_err(LoadError::from);
    }
    Err(LoadError::ColumnType {
        column: col.to_string(),
        dtype: dtype.clone(),
        expected: "integers",
    })
}

fn whole_number(
    value: f64,
    row: usize,
    column: &'static str,
) -> Result<i64, MalformedRecordError> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.fract() == 0.0 && in_range {
        Ok(value as i64)
    } else {
        Err(MalformedRecordError::NotAnInteger {
            row,
            column,
            value: value.to_string(),
        })
    }
}

/// Retrieves a column as strings; a column the reader already parsed as a date is formatted back.
fn get_str_column(df: &DataFrame, col: &str) -> Result<StringChunked, LoadError> {
    let cast_error = |source| LoadError::ColumnCast {
        column: col.to_string(),
        source,
    };
    let column = get_column(df, col)?
        .cast(&DataType::String)
        .map_err(cast_error)?;
    Ok(column.str().map_err(cast_error)?.clone())
}

fn get_int(
    values: &[Option<i64>],
    row: usize,
    column: &'static str,
) -> Result<i64, MalformedRecordError> {
    values
        .get(row)
        .copied()
        .flatten()
        .ok_or(MalformedRecordError::MissingValue { row, column })
}

fn get_count(
    values: &[Option<i64>],
    row: usize,
    column: &'static str,
) -> Result<u64, MalformedRecordError> {
    let value = get_int(values, row, column)?;
    u64::try_from(value).map_err(|_| MalformedRecordError::NegativeValue { row, column, value })
}

/// Parses the `dteday` value of a row, combined with `hr` when the file has an hour column.
fn parse_timestamp(
    value: &str,
    hour: Option<i64>,
    row: usize,
) -> Result<NaiveDateTime, MalformedRecordError> {
    let value = value.trim();
    let invalid = || MalformedRecordError::InvalidTimestamp {
        row,
        value: value.to_string(),
    };

    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(invalid)?;

    match hour {
        None => Ok(parsed),
        Some(hour) if (0..24).contains(&hour) => {
            Ok(parsed.date().and_time(NaiveTime::MIN) + TimeDelta::hours(hour))
        }
        Some(hour) => Err(MalformedRecordError::ValueOutOfRange {
            row,
            column: COL_HR,
            value: hour,
        }),
    }
}

/// Converts a rental table into records, in row order.
///
/// Required columns: `instant`, `dteday`, `season`, `weathersit`, `casual`,
/// `registered`, `cnt`. An `hr` column, when present, supplies the hour for a
/// date-only `dteday`. Any other column is ignored.
///
/// Season/weather membership and the `cnt` balance are checked later by
/// [`crate::RecordStore::from_records`]; this step rejects missing, negative, non-integer and
/// unparseable values.
pub fn extract_records(df: &DataFrame) -> Result<Vec<RentalRecord>, LoadError> {
    let ids = get_int_column(df, COL_INSTANT)?;
    let dates = get_str_column(df, COL_DTEDAY)?;
    let hours = match df.column(COL_HR) {
        Ok(_) => Some(get_int_column(df, COL_HR)?),
        Err(_) => None,
    };
    let seasons = get_int_column(df, COL_SEASON)?;
    let weathers = get_int_column(df, COL_WEATHERSIT)?;
    let casuals = get_int_column(df, COL_CASUAL)?;
    let registereds = get_int_column(df, COL_REGISTERED)?;
    let totals = get_int_column(df, COL_CNT)?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let date = dates.get(row).ok_or(MalformedRecordError::MissingValue {
            row,
            column: COL_DTEDAY,
        })?;
        let hour = match &hours {
            Some(hours) => Some(get_int(hours, row, COL_HR)?),
            None => None,
        };

        let season = get_int(&seasons, row, COL_SEASON)?;
        let weather = get_int(&weathers, row, COL_WEATHERSIT)?;

        records.push(RentalRecord {
            id: get_count(&ids, row, COL_INSTANT)?,
            timestamp: parse_timestamp(date, hour, row)?,
            season: u8::try_from(season)
                .map_err(|_| MalformedRecordError::UnknownSeason { row, code: season })?,
            weather: u8::try_from(weather)
                .map_err(|_| MalformedRecordError::UnknownWeather { row, code: weather })?,
            casual_count: get_count(&casuals, row, COL_CASUAL)?,
            registered_count: get_count(&registereds, row, COL_REGISTERED)?,
            total_count: get_count(&totals, row, COL_CNT)?,
        });
    }
    Ok(records)
}
