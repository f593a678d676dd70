use report_bench::data::generator::{write_report_csv, FixedClock, SystemClock};
use report_bench::reader::{read_report_csv, MalformedPolicy};

fn fixed_clock() -> FixedClock {
    FixedClock::at_rfc3339("2024-03-01T09:30:00+01:00").expect("valid fixed timestamp")
}

#[test]
fn three_row_run_round_trips_reference_values() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("sample.csv");
    write_report_csv(&path, 3, &fixed_clock()).expect("generate");

    let outcome = read_report_csv(&path, MalformedPolicy::Fail).expect("read");
    assert_eq!(outcome.records.len(), 3);
    assert!(outcome.malformed.is_empty());

    assert_eq!(outcome.records[1].amount_paid, 0.5);
    assert_eq!(outcome.records[2].amount_paid, 1.0);
    assert_eq!(outcome.records[0].reminder_sent_yn, "Y");
    assert_eq!(outcome.records[2].booking_id, "ID2");
}

#[test]
fn every_field_round_trips_for_a_sampled_row() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("sample.csv");
    let clock = fixed_clock();
    write_report_csv(&path, 10, &clock).expect("generate");

    let outcome = read_report_csv(&path, MalformedPolicy::Fail).expect("read");
    assert_eq!(outcome.records.len(), 10);

    use report_bench::data::generator::TimeSource;
    let row = &outcome.records[7];
    assert_eq!(row.booking_status, "confirmed");
    assert_eq!(row.booking_date, clock.now());
    assert_eq!(row.delivery_medium, "Medium7");
    assert_eq!(row.duration, 7);
    assert_eq!(row.staff_email, "email7@example.com");
    assert_eq!(row.customer_email, "customer7@example.com");
    assert_eq!(row.booked_by_email, "booked7@example.com");
    assert_eq!(row.amount_paid, 3.5);
    assert_eq!(row.amount_refunded, 7.0 * 0.3);
    assert_eq!(row.currency_type, "Currency");
    assert_eq!(row.capacity_confirmed, 7);
    assert_eq!(row.capacity_waitlist, 7);
    assert_eq!(row.division_company_code, "DivisionCode7");
    assert_eq!(row.shift_id, "Shift7");
    assert_eq!(row.external_attendees_count, 7);
}

#[test]
fn zero_rows_yields_header_only_file_and_empty_read() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("empty.csv");
    write_report_csv(&path, 0, &fixed_clock()).expect("generate");

    let contents = std::fs::read_to_string(&path).expect("read file");
    assert_eq!(contents.lines().count(), 1, "expected header-only file");

    let outcome = read_report_csv(&path, MalformedPolicy::Fail).expect("read");
    assert!(outcome.records.is_empty());
    assert!(outcome.malformed.is_empty());
}

#[test]
fn fixed_clock_output_is_byte_deterministic() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first = temp.path().join("a.csv");
    let second = temp.path().join("b.csv");
    write_report_csv(&first, 50, &fixed_clock()).expect("generate a");
    write_report_csv(&second, 50, &fixed_clock()).expect("generate b");

    let a = std::fs::read(&first).expect("read a");
    let b = std::fs::read(&second).expect("read b");
    assert_eq!(a, b, "fixed-clock runs should produce identical bytes");
}

#[test]
fn system_clock_timestamps_parse_back() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("wallclock.csv");
    write_report_csv(&path, 2, &SystemClock).expect("generate");

    let outcome = read_report_csv(&path, MalformedPolicy::Fail).expect("read");
    assert_eq!(outcome.records.len(), 2);
}
