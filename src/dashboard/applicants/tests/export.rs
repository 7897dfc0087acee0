use super::common::*;
use crate::dashboard::applicants::criteria::{
    FilterCriteria, ScoreBand, SortDirection, SortKey, SortSpec,
};
use crate::dashboard::applicants::export::{export_csv, EXPORT_HEADER};
use crate::dashboard::applicants::pipeline::derive_view;

const HEADER_LINE: &str = "Full Name,College Name,Experience,Current Role,Location,Gender,Profile Score";

#[test]
fn header_has_exactly_seven_columns() {
    assert_eq!(EXPORT_HEADER.len(), 7);
    let document = export_csv(&[], "Backend Engineer", &job_id()).expect("export builds");
    let header = document.content.lines().next().expect("header line");
    assert_eq!(header, HEADER_LINE);
    assert_eq!(header.split(',').count(), 7);
}

#[test]
fn empty_view_exports_the_header_only() {
    let document = export_csv(&[], "Backend Engineer", &job_id()).expect("export builds");
    assert_eq!(document.content, format!("{HEADER_LINE}\n"));
}

#[test]
fn row_count_matches_view_length() {
    let view = pool();
    let document = export_csv(&view, "Backend Engineer", &job_id()).expect("export builds");
    assert_eq!(document.content.lines().count(), view.len() + 1);
}

#[test]
fn rows_follow_the_view_order() {
    let view = derive_view(
        &pool(),
        &FilterCriteria::default().with_sort(SortSpec::by(SortKey::Score, SortDirection::Descending)),
    );
    let document = export_csv(&view, "Backend Engineer", &job_id()).expect("export builds");
    let names: Vec<&str> = document
        .content
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Ana Lee", "Carla Mendes", "Bo Kim", "Dev Patel"]);
}

#[test]
fn comma_free_rows_serialize_like_a_plain_join() {
    let view = vec![ana(), bo()];
    let document = export_csv(&view, "Backend Engineer", &job_id()).expect("export builds");
    let expected = format!(
        "{HEADER_LINE}\n\
         Ana Lee,Hunter College,1.0 years,Data Analyst,NY,Female,92%\n\
         Bo Kim,N/A,0.0 years,Backend Engineer,LA,Male,60%\n"
    );
    assert_eq!(document.content, expected);
}

#[test]
fn fields_containing_commas_are_quoted_instead_of_corrupting_the_row() {
    let view = vec![carla()];
    let document = export_csv(&view, "Backend Engineer", &job_id()).expect("export builds");
    let row = document.content.lines().nth(1).expect("data row");
    assert!(row.contains("\"Des Moines, IA\""));

    let mut reader = csv::Reader::from_reader(document.content.as_bytes());
    let record = reader
        .records()
        .next()
        .expect("one record")
        .expect("valid csv");
    assert_eq!(record.len(), 7);
    assert_eq!(record.get(4), Some("Des Moines, IA"));
}

#[test]
fn missing_fields_render_as_placeholders() {
    let view = vec![dev()];
    let document = export_csv(&view, "Backend Engineer", &job_id()).expect("export builds");
    let row = document.content.lines().nth(1).expect("data row");
    assert_eq!(row, "Dev Patel,N/A,0.0 years,N/A,N/A,N/A,47%");
}

#[test]
fn experience_column_formats_to_one_decimal_with_suffix() {
    let view = vec![carla()];
    let document = export_csv(&view, "Backend Engineer", &job_id()).expect("export builds");
    let row = document.content.lines().nth(1).expect("data row");
    assert!(row.contains("6.8 years"));
}

#[test]
fn score_column_renders_a_percentage() {
    let view = vec![ana()];
    let document = export_csv(&view, "Backend Engineer", &job_id()).expect("export builds");
    assert!(document.content.contains(",92%"));
}

#[test]
fn filename_derives_from_job_title_and_id() {
    let document = export_csv(&[], "Backend Engineer", &job_id()).expect("export builds");
    assert_eq!(document.filename, "applicants-Backend Engineer-job-2048.csv");
}

#[test]
fn export_respects_the_current_filter_state() {
    let view = derive_view(
        &pool(),
        &FilterCriteria::default().with_score(ScoreBand::NinetyPlus),
    );
    let document = export_csv(&view, "Backend Engineer", &job_id()).expect("export builds");
    assert_eq!(document.content.lines().count(), 2);
    assert!(document.content.contains("Ana Lee"));
    assert!(!document.content.contains("Bo Kim"));
}
