use chrono::NaiveDate;

use crate::{
    error::{FetchError, Result},
    types::{FeatureRecord, ReleaseDatePrecision, SongRow},
};

/// Track-name fragments that mark live cuts, remixes and bonus filler.
/// Matching is a case-sensitive substring test, so "Livingstone" goes too.
pub const EXCLUDED_NAME_FRAGMENTS: [&str; 3] = ["Live", "Mix", "Track"];

/// Parses a release date at the granularity it was published with.
///
/// `year` dates land on January 1st and `month` dates on the first of the
/// month. A date that does not fit its precision is an error.
pub fn parse_release_date(date: &str, precision: ReleaseDatePrecision) -> Result<NaiveDate> {
    let parsed = match precision {
        ReleaseDatePrecision::Year => date
            .parse::<i32>()
            .ok()
            .filter(|_| date.len() == 4)
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        ReleaseDatePrecision::Month => {
            NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d").ok()
        }
        ReleaseDatePrecision::Day => NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
    };

    parsed.ok_or_else(|| FetchError::InvalidReleaseDate {
        date: date.to_string(),
        precision,
    })
}

pub fn is_excluded_track_name(track_name: &str) -> bool {
    EXCLUDED_NAME_FRAGMENTS
        .iter()
        .any(|fragment| track_name.contains(fragment))
}

pub fn normalize_record(record: FeatureRecord) -> Result<SongRow> {
    let release_date = parse_release_date(&record.release_date, record.release_date_precision)?;
    Ok(SongRow {
        features: record.features,
        track_name: record.track_name,
        album_name: record.album_name,
        release_date,
        release_date_precision: record.release_date_precision,
        duration_ms: record.duration_ms,
        popularity: record.popularity,
    })
}

/// Oldest release first. The sort is stable, so tracks of one album keep
/// their album order.
pub fn sort_songs_by_release_date(rows: &mut [SongRow]) {
    rows.sort_by_key(|row| row.release_date);
}

/// Turns merged records into the final dataset: dates normalized, sorted
/// chronologically, live/remix/filler tracks removed.
pub fn assemble_dataset(records: Vec<FeatureRecord>) -> Result<Vec<SongRow>> {
    let mut rows = records
        .into_iter()
        .map(normalize_record)
        .collect::<Result<Vec<_>>>()?;

    sort_songs_by_release_date(&mut rows);
    rows.retain(|row| !is_excluded_track_name(&row.track_name));
    Ok(rows)
}

pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_precision_rejects_full_dates() {
        assert!(parse_release_date("1975-03-24", ReleaseDatePrecision::Year).is_err());
        assert!(parse_release_date("75", ReleaseDatePrecision::Year).is_err());
    }

    #[test]
    fn month_precision_rejects_bad_month() {
        assert!(parse_release_date("1975-13", ReleaseDatePrecision::Month).is_err());
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(482_000), "8:02");
    }
}
