use serde_json::json;
use spanacli::Error;
use spanacli::prep::{key_name, prep_data};
use spanacli::table::flatten_pages;

#[test]
fn test_key_name_standard_codes() {
    assert_eq!(key_name(0).unwrap(), "C");
    assert_eq!(key_name(2).unwrap(), "D");
    assert_eq!(key_name(3).unwrap(), "D#");
    assert_eq!(key_name(7).unwrap(), "G");
    assert_eq!(key_name(9).unwrap(), "A");
    assert_eq!(key_name(11).unwrap(), "B");
}

#[test]
fn test_key_name_code_one_maps_to_c_for_compatibility() {
    // legacy lookup table labels 1 as C, not C#
    assert_eq!(key_name(1).unwrap(), "C");
}

#[test]
fn test_key_name_rejects_out_of_range_codes() {
    for code in [12, -1, 100] {
        let err = key_name(code).unwrap_err();
        assert!(
            matches!(err, Error::UnknownKeyCode(c) if c == code),
            "expected UnknownKeyCode for {}",
            code
        );
    }
}

#[test]
fn test_prep_data_extracts_first_artist_name() {
    let mut table = flatten_pages(&[json!([
        {
            "id": "t1",
            "artists": [{ "id": "a1", "name": "Solo Act", "type": "artist" }],
            "key": 7
        },
        {
            "id": "t2",
            "artists": [
                { "id": "a2", "name": "Lead", "type": "artist" },
                { "id": "a3", "name": "Featured", "type": "artist" }
            ],
            "key": 0
        }
    ])])
    .unwrap();

    prep_data(&mut table).unwrap();

    assert_eq!(table.get(0, "artists").unwrap(), "Solo Act");
    // collaborators beyond the first artist are dropped
    assert_eq!(table.get(1, "artists").unwrap(), "Lead");
}

#[test]
fn test_prep_data_remaps_key_codes() {
    let mut table = flatten_pages(&[json!([
        { "id": "t1", "artists": [{ "name": "A" }], "key": 7 },
        { "id": "t2", "artists": [{ "name": "B" }], "key": 1 }
    ])])
    .unwrap();

    prep_data(&mut table).unwrap();

    assert_eq!(table.get(0, "key").unwrap(), "G");
    assert_eq!(table.get(1, "key").unwrap(), "C");
}

#[test]
fn test_prep_data_fails_on_out_of_range_key() {
    let mut table = flatten_pages(&[json!([
        { "id": "t1", "artists": [{ "name": "A" }], "key": 12 }
    ])])
    .unwrap();

    let err = prep_data(&mut table).unwrap_err();
    assert!(matches!(err, Error::UnknownKeyCode(12)));
}

#[test]
fn test_prep_data_fails_on_artists_without_name() {
    let mut table = flatten_pages(&[json!([
        { "id": "t1", "artists": [], "key": 7 }
    ])])
    .unwrap();

    let err = prep_data(&mut table).unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponseShape(_)));
}

#[test]
fn test_prep_data_leaves_rows_without_key_untouched() {
    // tracks the audio-features endpoint had no data for carry no key cell
    let mut table = flatten_pages(&[json!([
        { "id": "t1", "artists": [{ "name": "A" }], "key": 4 },
        { "id": "t2", "artists": [{ "name": "B" }] }
    ])])
    .unwrap();

    prep_data(&mut table).unwrap();

    assert_eq!(table.get(0, "key").unwrap(), "E");
    assert!(table.get(1, "key").is_none());
}
