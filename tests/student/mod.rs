use sortbench::student::{load_students, LoadError};
use std::io::Cursor;

#[test]
fn loads_csv_and_derives_total() {
    let csv = "id,name,gender,korean,english,math\n\
               1,Kim,M,90,80,70\n\
               2,Lee,F,60,70,80\n";

    let students = load_students(Cursor::new(csv)).unwrap();

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, 1);
    assert_eq!(students[0].total, 240);
    assert_eq!(students[1].name, "Lee");
    assert_eq!(students[1].gender, 'F');
    assert_eq!(students[1].total, 210);
}

#[test]
fn blank_lines_are_skipped() {
    let csv = "id,name,gender,korean,english,math\n\n1,Kim,M,90,80,70\n\n";

    let students = load_students(Cursor::new(csv)).unwrap();
    assert_eq!(students.len(), 1);
}

#[test]
fn header_only_input_is_a_load_failure() {
    let csv = "id,name,gender,korean,english,math\n";

    match load_students(Cursor::new(csv)) {
        Err(LoadError::Empty) => {}
        other => panic!("expected Empty, got {:?}", other),
    }
}

#[test]
fn malformed_row_reports_its_line_number() {
    let csv = "id,name,gender,korean,english,math\n\
               1,Kim,M,90,80,seventy\n";

    match load_students(Cursor::new(csv)) {
        Err(LoadError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected Parse, got {:?}", other),
    }
}

#[test]
fn missing_field_is_rejected() {
    let csv = "id,name,gender,korean,english,math\n1,Kim,M,90,80\n";

    match load_students(Cursor::new(csv)) {
        Err(LoadError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected Parse, got {:?}", other),
    }
}
