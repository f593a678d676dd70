use std::path::Path;

use chrono::{DateTime, FixedOffset, Local};

use crate::data::record::ReportRecord;
use crate::error::BenchResult;
use crate::schema::header_names;

pub trait TimeSource {
    fn now(&self) -> DateTime<FixedOffset>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn at_rfc3339(raw: &str) -> chrono::ParseResult<Self> {
        DateTime::parse_from_rfc3339(raw).map(Self)
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

// Each timestamp column samples the clock independently, matching the
// reference generator's per-field reads.
pub fn synthesize_record(i: u64, clock: &impl TimeSource) -> ReportRecord {
    ReportRecord {
        booking_status: "confirmed".to_string(),
        booking_date: clock.now(),
        start_time: clock.now(),
        delivery_medium: format!("Medium{i}"),
        category: format!("Category{i}"),
        duration: i as i32,
        service_type: format!("Type{i}"),
        service_name: format!("Name{i}"),
        booking_type: format!("Type{i}"),
        channel_name: format!("Channel{i}"),
        staff_first_name: format!("First{i}"),
        staff_last_name: format!("Last{i}"),
        staff_email: format!("email{i}@example.com"),
        staff_role: format!("Role{i}"),
        customer_email: format!("customer{i}@example.com"),
        building_code: format!("Code{i}"),
        room_name: format!("Room{i}"),
        room_code: format!("Code{i}"),
        booking_id: format!("ID{i}"),
        class_id: format!("Class{i}"),
        booked_by_email: format!("booked{i}@example.com"),
        updated_date_time: clock.now(),
        updated_by: format!("UpdatedBy{i}"),
        cost_category: format!("Category{i}"),
        cost_tier: format!("Tier{i}"),
        amount_paid: i as f64 * 0.5,
        amount_refunded: i as f64 * 0.3,
        reminder_sent_yn: "Y".to_string(),
        item_type: format!("Item{i}"),
        currency_type: "Currency".to_string(),
        payment_status: format!("Status{i}"),
        payment_timestamp: clock.now(),
        payment_refund_date: clock.now(),
        payment_reason: format!("Reason{i}"),
        timezone: format!("Timezone{i}"),
        capacity_confirmed: i as i64,
        capacity_waitlist: i as i64,
        user_department: format!("Department{i}"),
        user_business: format!("Business{i}"),
        division_company_code: format!("DivisionCode{i}"),
        local_start_time: format!("StartTime{i}"),
        day_of_week: format!("Day{i}"),
        location_code: format!("Code{i}"),
        shift_id: format!("Shift{i}"),
        external_attendees_count: i as i64,
    }
}

pub fn write_report_csv(path: &Path, rows: u64, clock: &impl TimeSource) -> BenchResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header_names())?;
    for i in 0..rows {
        writer.write_record(synthesize_record(i, clock).to_fields())?;
    }
    writer.flush()?;
    Ok(())
}
