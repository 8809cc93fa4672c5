use super::*;

#[test]
fn formats_iso_timestamp_day_first() {
    assert_eq!(format_ticket_date("2024-03-05T10:20:30.123456"), "05/03/2024");
}

#[test]
fn formats_plain_date() {
    assert_eq!(format_ticket_date("2023-12-31"), "31/12/2023");
}

#[test]
fn short_input_is_reordered_as_far_as_possible() {
    assert_eq!(format_ticket_date("2024-03"), "03/2024");
    assert_eq!(format_ticket_date(""), "");
}
