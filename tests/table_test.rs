use serde_json::{Value, json};
use spanacli::Error;
use spanacli::table::{TrackTable, flatten_pages};

#[test]
fn test_flatten_joins_nested_paths_with_underscore() {
    let pages = vec![json!([
        {
            "id": "t1",
            "name": "Song",
            "album": { "album_type": "single", "name": "Album" }
        }
    ])];

    let table = flatten_pages(&pages).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0, "album_album_type").unwrap(), "single");
    assert_eq!(table.get(0, "album_name").unwrap(), "Album");
    assert_eq!(table.get(0, "id").unwrap(), "t1");
    // the nested path itself is not a column
    assert!(table.get(0, "album").is_none());
}

#[test]
fn test_flatten_keeps_arrays_and_scalars_as_is() {
    let pages = vec![json!([
        { "id": "t1", "artists": [{ "name": "A" }], "popularity": 42 }
    ])];

    let table = flatten_pages(&pages).unwrap();
    assert_eq!(table.get(0, "artists").unwrap(), &json!([{ "name": "A" }]));
    assert_eq!(table.get(0, "popularity").unwrap(), 42);
}

#[test]
fn test_flatten_column_set_is_union_with_missing_cells_null() {
    let pages = vec![
        json!([{ "id": "t1", "energy": 0.5 }]),
        json!([{ "id": "t2", "tempo": 120.0 }]),
    ];

    let table = flatten_pages(&pages).unwrap();
    assert_eq!(table.len(), 2);

    let columns: Vec<String> = table.columns().into_iter().collect();
    assert_eq!(columns, vec!["energy", "id", "tempo"]);

    // a row lacking a column reads as null
    assert!(table.get(0, "tempo").is_none());
    assert!(table.get(1, "energy").is_none());
}

#[test]
fn test_flatten_preserves_page_and_row_order() {
    let pages = vec![
        json!([{ "id": "t1" }, { "id": "t2" }]),
        json!([{ "id": "t3" }]),
    ];

    let table = flatten_pages(&pages).unwrap();
    let ids = table.string_column("id").unwrap();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);
}

#[test]
fn test_flatten_already_flat_input_is_idempotent() {
    let pages = vec![json!([
        { "id": "t1", "name": "Song", "popularity": 10 },
        { "id": "t2", "name": "Other", "popularity": 20 }
    ])];

    let first = flatten_pages(&pages).unwrap();
    let second = flatten_pages(&pages).unwrap();

    // flat input stays flat and repeated runs are identical
    assert_eq!(first, second);
    assert_eq!(first.get(0, "name").unwrap(), "Song");
    assert_eq!(first.columns().len(), 3);
}

#[test]
fn test_flatten_skips_null_entries() {
    // the audio-features endpoint reports unknown ids as literal nulls
    let pages = vec![json!([{ "id": "t1", "key": 7 }, null, { "id": "t3", "key": 2 }])];

    let table = flatten_pages(&pages).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.string_column("id").unwrap(), vec!["t1", "t3"]);
}

#[test]
fn test_flatten_rejects_non_array_pages_and_scalar_entries() {
    let err = flatten_pages(&[json!({ "items": [] })]).unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponseShape(_)));

    let err = flatten_pages(&[json!(["just a string"])]).unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponseShape(_)));
}

#[test]
fn test_string_column_requires_strings_in_every_row() {
    let table = flatten_pages(&[json!([{ "track": { "id": "t1" } }, { "track": { "id": null } }])])
        .unwrap();

    let err = table.string_column("track_id").unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponseShape(_)));
}

#[test]
fn test_left_join_merges_feature_columns() {
    let left = flatten_pages(&[json!([
        { "id": "t1", "name": "Song" },
        { "id": "t2", "name": "Other" }
    ])])
    .unwrap();
    let right = flatten_pages(&[json!([
        { "id": "t1", "key": 7, "danceability": 0.8 },
        { "id": "t2", "key": 2, "danceability": 0.3 }
    ])])
    .unwrap();

    let joined = left.left_join(right, "id").unwrap();
    assert_eq!(joined.len(), 2);
    assert_eq!(joined.get(0, "name").unwrap(), "Song");
    assert_eq!(joined.get(0, "key").unwrap(), 7);
    assert_eq!(joined.get(1, "danceability").unwrap(), 0.3);
}

#[test]
fn test_left_join_keeps_unmatched_left_rows_with_null_features() {
    let left = flatten_pages(&[json!([
        { "id": "t1", "name": "Song" },
        { "id": "t2", "name": "No features" }
    ])])
    .unwrap();
    let right = flatten_pages(&[json!([{ "id": "t1", "key": 7 }])]).unwrap();

    let joined = left.left_join(right, "id").unwrap();

    // every left row survives, unmatched feature cells read as null
    assert_eq!(joined.len(), 2);
    assert_eq!(joined.get(1, "name").unwrap(), "No features");
    assert!(joined.get(1, "key").is_none());
}

#[test]
fn test_left_join_collisions_keep_left_value() {
    let left = flatten_pages(&[json!([{ "id": "t1", "duration_ms": 180000 }])]).unwrap();
    let right = flatten_pages(&[json!([{ "id": "t1", "duration_ms": 999999, "key": 7 }])]).unwrap();

    let joined = left.left_join(right, "id").unwrap();
    assert_eq!(joined.get(0, "duration_ms").unwrap(), 180000);
    assert_eq!(joined.get(0, "key").unwrap(), 7);
}

#[test]
fn test_left_join_duplicate_left_keys_produce_duplicate_rows() {
    let left = flatten_pages(&[json!([{ "id": "t1" }, { "id": "t1" }])]).unwrap();
    let right = flatten_pages(&[json!([{ "id": "t1", "key": 7 }])]).unwrap();

    let joined = left.left_join(right, "id").unwrap();
    assert_eq!(joined.len(), 2);
    assert_eq!(joined.get(0, "key").unwrap(), 7);
    assert_eq!(joined.get(1, "key").unwrap(), 7);
}

#[test]
fn test_left_join_requires_string_key_on_left() {
    let mut left = TrackTable::new();
    left.push_row([("name".to_string(), Value::String("x".into()))].into());
    let right = TrackTable::new();

    let err = left.left_join(right, "id").unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponseShape(_)));
}
