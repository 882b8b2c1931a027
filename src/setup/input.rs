use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::domain::types::{Coordinate, Stop};
use crate::error::TspError;

// Accepted header names per field, in order of preference.
const LAT_COLUMNS: [&str; 2] = ["lat", "latitude"];
const LNG_COLUMNS: [&str; 4] = ["long", "lng", "lon", "longitude"];
const LABEL_COLUMNS: [&str; 4] = ["label", "direccion", "address", "name"];

/// Column positions of the fields a stop is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StopColumns {
    lat: usize,
    lng: usize,
    label: usize,
}

impl StopColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self, TspError> {
        let find = |field: &'static str, names: &[&str]| {
            names
                .iter()
                .find_map(|name| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
                .ok_or(TspError::MissingColumn(field))
        };

        Ok(Self {
            lat: find("latitude", &LAT_COLUMNS)?,
            lng: find("longitude", &LNG_COLUMNS)?,
            label: find("label", &LABEL_COLUMNS)?,
        })
    }
}

fn parse_number(record: &StringRecord, index: usize, row: usize, column: &'static str) -> Result<(f64, String), TspError> {
    let text = record.get(index).unwrap_or_default();
    let value = text.parse::<f64>().map_err(|_| TspError::InvalidNumber {
        row,
        column,
        value: text.to_string(),
    })?;
    Ok((value, text.to_string()))
}

/// Reads stops from a `,`-delimited file with a header row. `|` is the quote character.
///
/// Columns are located by header name; when several columns match a field the
/// first name in its preference list wins and the rest are ignored.
pub fn read_stops(path: impl AsRef<Path>) -> Result<Vec<Stop>, TspError> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'|')
        .trim(csv::Trim::All)
        .from_path(path)?;

    let columns = StopColumns::from_headers(reader.headers()?)?;
    debug!("Stop columns: {:?}", columns);

    let mut stops = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let record = row?;
        let row = idx + 1;
        let (lat, lat_text) = parse_number(&record, columns.lat, row, "latitude")?;
        let (lng, lng_text) = parse_number(&record, columns.lng, row, "longitude")?;
        let coord = Coordinate { lat, lng };
        if !coord.is_valid() {
            return Err(TspError::InvalidCoordinate { row, lat, lng });
        }

        let label = record.get(columns.label).unwrap_or_default().to_string();
        debug!("Stop {}: {} ({})", idx, label, coord);
        stops.push(Stop {
            label,
            coord,
            location: format!("{},{}", lat_text, lng_text),
        });
    }

    if stops.is_empty() {
        return Err(TspError::NoStops);
    }

    info!("Read {} stops from {}", stops.len(), path.display());
    Ok(stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_input(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_lat_long_direccion_columns() {
        let file = write_input(
            "lat,long,direccion\n-34.6037,-58.3816,Depot\n-34.6158,-58.4333,|Av. Rivadavia 5000, CABA|\n",
        );
        let stops = read_stops(file.path()).unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].label, "Depot");
        assert_eq!(stops[1].label, "Av. Rivadavia 5000, CABA");
        assert_eq!(stops[1].coord.lat, -34.6158);
        assert_eq!(stops[1].coord.lng, -58.4333);
    }

    #[test]
    fn accepts_aliases_and_ignores_extra_columns() {
        let file = write_input("id,latitude,longitude,label\n7, 1.5 , 2.5 ,Warehouse\n");
        let stops = read_stops(file.path()).unwrap();
        assert_eq!(stops[0].label, "Warehouse");
        assert_eq!(stops[0].coord, Coordinate { lat: 1.5, lng: 2.5 });
    }

    #[test]
    fn address_column_wins_over_contact_name() {
        let file = write_input("lat,long,direccion,name\n1,2,Av 1,Juan\n");
        let stops = read_stops(file.path()).unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].label, "Av 1");
    }

    #[test]
    fn duplicate_longitude_columns_use_preferred_name() {
        let file = write_input("lat,lng,long,label\n1,9,2,a\n");
        let stops = read_stops(file.path()).unwrap();
        assert_eq!(stops[0].coord, Coordinate { lat: 1.0, lng: 2.0 });
    }

    #[test]
    fn keeps_coordinate_text_as_written() {
        let file = write_input("lat,long,label\n-34.60,-58.380,Depot\n");
        let stops = read_stops(file.path()).unwrap();
        assert_eq!(stops[0].location, "-34.60,-58.380");
        assert_eq!(stops[0].coord, Coordinate { lat: -34.6, lng: -58.38 });
    }

    #[test]
    fn missing_label_column() {
        let file = write_input("lat,long,city\n1,2,x\n");
        assert!(matches!(read_stops(file.path()), Err(TspError::MissingColumn("label"))));
    }

    #[test]
    fn rejects_out_of_range_coordinate() {
        let file = write_input("lat,long,label\n0,0,a\n95,0,b\n");
        match read_stops(file.path()) {
            Err(TspError::InvalidCoordinate { row, .. }) => assert_eq!(row, 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_header_only_file() {
        let file = write_input("lat,long,label\n");
        assert!(matches!(read_stops(file.path()), Err(TspError::NoStops)));
    }

    #[test]
    fn rejects_non_numeric_coordinate() {
        let file = write_input("lat,long,label\nnorth,0,a\n");
        match read_stops(file.path()) {
            Err(TspError::InvalidNumber { row, column, value }) => {
                assert_eq!((row, column, value.as_str()), (1, "latitude", "north"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
