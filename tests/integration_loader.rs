//! End-to-end tests for the establishment loading pipeline
//!
//! These tests build delimited source files on disk and exercise the full
//! path from raw text to validated records, including the failure modes a
//! caller observes.

use establishment_loader::{
    CsvLoader, Error, Establishment, FieldMap, TabularRecord, load_establishments,
};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str =
    "id,district,county,parish,address,latitude,longitude,inspection_utility,inspection_time,opening_hours";

fn write_source(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_load_preserves_source_row_order() {
    let file = write_source(&[
        "3,Evora,Evora,Se,Rua C,38.57,-7.90,0.5,15,111111111111111111111111",
        "1,Porto,Porto,Ramalde,Rua A,41.16,-8.63,2.5,45,111111111111111111111111",
        "2,Braga,Braga,Se,Rua B,41.55,-8.42,1.0,20,111111111111111111111111",
    ]);

    let establishments = load_establishments(file.path()).unwrap();

    let ids: Vec<i32> = establishments.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_load_mixed_opening_hours_encodings() {
    // Upstream sources may emit either encoding; both must decode to the
    // same 24-slot vector. The bracketed form contains the field delimiter
    // and so arrives quoted.
    let file = write_source(&[
        "1,Porto,Porto,Ramalde,Rua A,41.16,-8.63,2.5,45,000000001111111111110000",
        "2,Braga,Braga,Se,Rua B,41.55,-8.42,1.0,20,\
         \"[0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0]\"",
    ]);

    let establishments = load_establishments(file.path()).unwrap();

    assert_eq!(establishments.len(), 2);
    assert_eq!(
        establishments[0].opening_hours,
        establishments[1].opening_hours
    );
    assert_eq!(establishments[0].opening_hours.open_hour_count(), 12);
}

#[test]
fn test_load_quoted_free_text_fields() {
    let file = write_source(&[
        "9,Lisboa,Lisboa,Estrela,\"Rua das Flores, 12\",38.71,-9.15,1.5,30,111111111111111111111111",
    ]);

    let establishments = load_establishments(file.path()).unwrap();

    assert_eq!(establishments[0].address, "Rua das Flores, 12");
}

#[test]
fn test_duplicate_ids_pass_through() {
    // Identifier uniqueness is not this layer's concern; duplicates load
    // silently.
    let file = write_source(&[
        "1,Porto,Porto,Ramalde,Rua A,41.16,-8.63,2.5,45,111111111111111111111111",
        "1,Braga,Braga,Se,Rua B,41.55,-8.42,1.0,20,111111111111111111111111",
    ]);

    let establishments = load_establishments(file.path()).unwrap();

    assert_eq!(establishments.len(), 2);
    assert_eq!(establishments[0].id, establishments[1].id);
}

#[test]
fn test_empty_source_yields_empty_sequence() {
    let file = write_source(&[]);
    assert!(load_establishments(file.path()).unwrap().is_empty());
}

#[test]
fn test_missing_source_fails_with_path() {
    let result = load_establishments("/no/such/establishments.csv");

    match result.unwrap_err() {
        Error::SourceNotFound { path } => {
            assert!(path.to_str().unwrap().contains("establishments.csv"));
        }
        other => panic!("Expected SourceNotFound error, got {:?}", other),
    }
}

#[test]
fn test_first_invalid_row_aborts_whole_load() {
    // Rows before and after the bad one are valid; the caller still
    // receives nothing.
    let file = write_source(&[
        "1,Porto,Porto,Ramalde,Rua A,41.16,-8.63,2.5,45,111111111111111111111111",
        "2,Braga,Braga,Se,Rua B,41.55,-8.42,not-a-number,20,111111111111111111111111",
        "3,Evora,Evora,Se,Rua C,38.57,-7.90,0.5,15,111111111111111111111111",
    ]);

    let result = load_establishments(file.path());

    match result.unwrap_err() {
        Error::RowParse { line, row, source } => {
            assert_eq!(line, 3);
            assert!(row.contains("not-a-number"));
            assert!(matches!(
                *source,
                Error::FieldFormat { field, .. } if field == "inspection_utility"
            ));
        }
        other => panic!("Expected RowParse error, got {:?}", other),
    }
}

#[test]
fn test_out_of_range_coordinates_fail_validation() {
    let file = write_source(&[
        "1,Porto,Porto,Ramalde,Rua A,-90.5,-8.63,2.5,45,111111111111111111111111",
    ]);

    let result = load_establishments(file.path());

    match result.unwrap_err() {
        Error::RowParse { source, .. } => match *source {
            Error::Validation { message } => assert!(message.contains("latitude")),
            other => panic!("Expected Validation cause, got {:?}", other),
        },
        other => panic!("Expected RowParse error, got {:?}", other),
    }
}

#[test]
fn test_short_opening_hours_fail_format() {
    let file = write_source(&[
        "1,Porto,Porto,Ramalde,Rua A,41.16,-8.63,2.5,45,11111111111111111111111",
    ]);

    let result = load_establishments(file.path());

    match result.unwrap_err() {
        Error::RowParse { source, .. } => {
            assert!(matches!(
                *source,
                Error::FieldFormat { field, .. } if field == "opening_hours"
            ));
        }
        other => panic!("Expected RowParse error, got {:?}", other),
    }
}

#[test]
fn test_loader_is_shape_agnostic() {
    // A different record shape with its own arity loads through the same
    // loader untouched.
    #[derive(Debug, PartialEq)]
    struct Waypoint {
        name: String,
        latitude: f64,
        longitude: f64,
    }

    impl TabularRecord for Waypoint {
        const FIELD_NAMES: &'static [&'static str] = &["name", "latitude", "longitude"];

        fn from_row(fields: &[&str]) -> establishment_loader::Result<Self> {
            let [name, latitude, longitude] = fields else {
                return Err(Error::row_arity(Self::FIELD_NAMES.len(), fields.len()));
            };

            Ok(Waypoint {
                name: name.to_string(),
                latitude: latitude.trim().parse().map_err(|_| {
                    Error::field_format("latitude", *latitude, "a decimal number")
                })?,
                longitude: longitude.trim().parse().map_err(|_| {
                    Error::field_format("longitude", *longitude, "a decimal number")
                })?,
            })
        }
    }

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name,latitude,longitude").unwrap();
    writeln!(file, "depot,41.16,-8.63").unwrap();
    file.flush().unwrap();

    let waypoints: Vec<Waypoint> = CsvLoader::new().load(file.path()).unwrap();

    assert_eq!(
        waypoints,
        vec![Waypoint {
            name: "depot".to_string(),
            latitude: 41.16,
            longitude: -8.63,
        }]
    );
}

#[test]
fn test_rendered_records_round_trip() {
    let file = write_source(&[
        "42,Lisboa,Lisboa,Alvalade,Rua do Campo Grande 25,38.7569,-9.1545,0.75,30,000000001111111111110000",
    ]);

    let establishments = load_establishments(file.path()).unwrap();
    let original = &establishments[0];

    // Re-extract rendered field values and rebuild the record.
    let fields = original.fields();
    let value = |name: &str| {
        fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
            .unwrap()
    };

    let rebuilt = Establishment::from_fields(
        value("id"),
        value("district"),
        value("county"),
        value("parish"),
        value("address"),
        value("latitude"),
        value("longitude"),
        value("inspection_utility"),
        value("inspection_time"),
        value("opening_hours"),
    )
    .unwrap();

    assert_eq!(&rebuilt, original);
}
