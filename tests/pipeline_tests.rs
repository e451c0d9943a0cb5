//! End-to-end properties of merge, feature generation and split over the
//! library API

use rejoin::common::csv_codec::decode_table;
use rejoin::domain::{CalendarFeature, FeatureSet, SourceId, Table};
use rejoin::operations::{MergeInput, Session, generate, merge, split};

fn csv(text: &str) -> Table {
    decode_table(text.as_bytes(), "inline").unwrap()
}

fn id(name: &str) -> SourceId {
    SourceId::new(name).unwrap()
}

fn names(table: &Table) -> Vec<&str> {
    table.column_names().collect()
}

#[test]
fn test_split_of_merge_recovers_both_inputs() {
    let a = csv("id,date,target\n1,2021-01-01,1\n2,2021-01-02,0\n");
    let b = csv("id,date\n3,2021-01-03\n");
    let (a_id, b_id) = (id("train"), id("test"));

    let merged = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), Some("target")).unwrap();
    let result = split(&merged.table);

    assert!(result.group_count.is_none());
    assert_eq!(result.part("train").unwrap(), &a);

    let recovered_b = result.part("test").unwrap();
    assert_eq!(names(recovered_b), vec!["id", "date", "target"]);
    assert_eq!(recovered_b.column("id"), b.column("id"));
    assert_eq!(recovered_b.column("date"), b.column("date"));
    assert!(recovered_b.column("target").unwrap().cells().iter().all(Option::is_none));
}

#[test]
fn test_merge_row_count_and_tags() {
    let a = csv("x\n1\n2\n3\n");
    let b = csv("x\n4\n5\n");
    let (a_id, b_id) = (id("a"), id("b"));

    let merged = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None).unwrap();
    let combined = merged.table;

    assert_eq!(combined.row_count(), a.row_count() + b.row_count());
    let tags: Vec<&str> = combined
        .observed_sources()
        .into_iter()
        .map(SourceId::as_str)
        .collect();
    assert_eq!(tags, vec!["a", "b"]);
    assert_eq!(combined.rows_from("a"), 3);
    assert_eq!(combined.rows_from("b"), 2);
}

#[test]
fn test_schema_advisory_names_both_sides() {
    let a = csv("x,y\n1,2\n");
    let b = csv("x,z\n3,4\n");
    let (a_id, b_id) = (id("a"), id("b"));

    let merged = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None).unwrap();
    let advisory = merged.schema_mismatch.unwrap();
    assert_eq!(advisory.only_in_first, vec!["y"]);
    assert_eq!(advisory.only_in_second, vec!["z"]);
}

#[test]
fn test_label_column_missing_for_second_input() {
    let a = csv("x,label\n1,yes\n2,no\n");
    let b = csv("x\n3\n4\n");
    let (a_id, b_id) = (id("a"), id("b"));

    let merged = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), Some("label")).unwrap();
    assert!(merged.schema_mismatch.is_none());

    let combined = merged.table;
    let label = combined.data().column("label").unwrap();
    for row in 0..combined.row_count() {
        let from_b = combined.source_of(row).map(SourceId::as_str) == Some("b");
        assert_eq!(label.get(row).is_none(), from_b, "row {row}");
    }
}

#[test]
fn test_generation_keeps_prior_columns() {
    let a = csv("when,v\n2021-01-01,1\n");
    let b = csv("when,v\n2022-07-09 10:11:12,2\n");
    let (a_id, b_id) = (id("a"), id("b"));
    let combined = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None)
        .unwrap()
        .table;

    let enriched = generate(&combined, "when", &FeatureSet::all()).unwrap();

    let before = combined.data();
    let after = enriched.data();
    assert_eq!(&after.columns()[..before.column_count()], before.columns());
    assert_eq!(after.column_count(), before.column_count() + CalendarFeature::ALL.len());
    assert_eq!(enriched.tags(), combined.tags());
    assert_eq!(after.column("when_iso_week_of_year").unwrap().get(0), Some("53"));
    assert_eq!(after.column("when_second").unwrap().get(1), Some("12"));
}

#[test]
fn test_three_sources_split_into_three_parts() {
    let combined = rejoin::domain::CombinedTable::from_table(csv(
        "v,source_dataset\n1,a\n2,b\n3,c\n",
    ))
    .unwrap();

    let result = split(&combined);
    assert_eq!(result.parts.len(), 3);
    for part in &result.parts {
        assert!(!part.table.contains_column("source_dataset"));
    }
    let advisory = result.group_count.unwrap();
    assert_eq!(advisory.found, 3);
    assert_eq!(advisory.sources, vec!["a", "b", "c"]);
}

#[test]
fn test_session_runs_the_whole_flow() {
    let a = csv("d,y\n2021-03-01,1\n");
    let b = csv("d\n2021-03-02\n");
    let (a_id, b_id) = (id("train"), id("test"));

    let mut session = Session::new();
    session
        .merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), Some("y"))
        .unwrap();
    assert!(
        session
            .generate_features("d", &FeatureSet::new([CalendarFeature::Month]))
            .unwrap()
    );

    let result = session.split().unwrap();
    assert_eq!(names(result.part("train").unwrap()), vec!["d", "y", "d_month"]);
    assert_eq!(names(result.part("test").unwrap()), vec!["d", "y", "d_month"]);
}
