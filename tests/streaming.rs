mod common;

use arrow_array::cast::as_primitive_array;
use arrow_array::types::Int32Type;
use common::{FakeResult, meta, text_row};
use mysql_arrow::{BatchOptions, Error, FieldType, RowSource, to_record_batch};

fn int_rows(values: &[i32]) -> Vec<Vec<Option<Vec<u8>>>> {
    values
        .iter()
        .map(|v| text_row(&[Some(v.to_string().as_str())]))
        .collect()
}

#[test]
fn streaming_sources_drain_to_end_of_data() {
    let fields = vec![meta("n", FieldType::Long)];
    let mut source = FakeResult::new(fields, int_rows(&[1, 2, 3])).streaming();
    let batch = to_record_batch(&mut source, &BatchOptions::default()).unwrap();

    assert_eq!(batch.num_rows(), 3);
    let n = as_primitive_array::<Int32Type>(batch.column(0));
    assert_eq!(n.values().as_ref(), &[1, 2, 3]);
    assert!(source.released);
    assert!(source.streaming_done());
}

#[test]
fn a_drained_streaming_source_cannot_be_converted_again() {
    let fields = vec![meta("n", FieldType::Long)];
    let mut source = FakeResult::new(fields, int_rows(&[1])).streaming();
    to_record_batch(&mut source, &BatchOptions::default()).unwrap();

    // The rows are gone; a second conversion must fail loudly instead of
    // producing an empty batch.
    let err = to_record_batch(&mut source, &BatchOptions::default()).unwrap_err();
    assert!(matches!(err, Error::AlreadyConsumed));
}

#[test]
fn connection_errors_surface_after_a_streaming_drain() {
    let fields = vec![meta("n", FieldType::Long)];
    let mut source = FakeResult::new(fields, int_rows(&[1, 2]))
        .streaming()
        .failing_with("server has gone away");
    let err = to_record_batch(&mut source, &BatchOptions::default()).unwrap_err();
    match err {
        Error::Source(message) => assert_eq!(message, "server has gone away"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn prepared_sources_are_rejected_before_fetching() {
    let fields = vec![meta("n", FieldType::Long)];
    let mut source = FakeResult::new(fields, int_rows(&[1])).prepared();
    let err = to_record_batch(&mut source, &BatchOptions::default()).unwrap_err();
    assert!(matches!(err, Error::NotImplemented(_)));
}

#[test]
fn buffered_mode_tolerates_overreported_row_counts() {
    let fields = vec![meta("n", FieldType::Long)];
    let mut source = FakeResult::new(fields, int_rows(&[1, 2])).reporting(5);
    let batch = to_record_batch(&mut source, &BatchOptions::default()).unwrap();
    // The realized count wins over the source's claim.
    assert_eq!(batch.num_rows(), 2);
}

#[test]
fn buffered_mode_stops_at_the_reported_row_count() {
    let fields = vec![meta("n", FieldType::Long)];
    let mut source = FakeResult::new(fields, int_rows(&[1, 2, 3])).reporting(2);
    let batch = to_record_batch(&mut source, &BatchOptions::default()).unwrap();
    assert_eq!(batch.num_rows(), 2);
}

#[test]
fn empty_result_sets_produce_empty_batches() {
    let fields = vec![meta("n", FieldType::Long)];
    let mut source = FakeResult::new(fields, Vec::new());
    let batch = to_record_batch(&mut source, &BatchOptions::default()).unwrap();
    assert_eq!(batch.num_rows(), 0);
    assert_eq!(batch.num_columns(), 1);
}

#[test]
fn zero_column_result_sets_keep_their_row_count() {
    let rows = vec![Vec::new(), Vec::new(), Vec::new()];
    let mut source = FakeResult::new(Vec::new(), rows);
    let batch = to_record_batch(&mut source, &BatchOptions::default()).unwrap();
    assert_eq!(batch.num_rows(), 3);
    assert_eq!(batch.num_columns(), 0);
}

#[test]
fn compatibility_options_are_accepted_without_effect() {
    let options = BatchOptions {
        cache_rows: true,
        symbolize_keys: true,
        ..BatchOptions::default()
    };
    let fields = vec![meta("n", FieldType::Long)];
    let mut source = FakeResult::new(fields, int_rows(&[7]));
    let batch = to_record_batch(&mut source, &options).unwrap();
    assert_eq!(batch.num_rows(), 1);
}
