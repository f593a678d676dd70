use chrono::{DateTime, FixedOffset, SecondsFormat};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};
use crate::schema::{COLUMNS, COLUMN_COUNT};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub booking_status: String,
    pub booking_date: DateTime<FixedOffset>,
    pub start_time: DateTime<FixedOffset>,
    pub delivery_medium: String,
    pub category: String,
    pub duration: i32,
    pub service_type: String,
    pub service_name: String,
    pub booking_type: String,
    pub channel_name: String,
    pub staff_first_name: String,
    pub staff_last_name: String,
    pub staff_email: String,
    pub staff_role: String,
    pub customer_email: String,
    pub building_code: String,
    pub room_name: String,
    pub room_code: String,
    pub booking_id: String,
    pub class_id: String,
    pub booked_by_email: String,
    pub updated_date_time: DateTime<FixedOffset>,
    pub updated_by: String,
    pub cost_category: String,
    pub cost_tier: String,
    pub amount_paid: f64,
    pub amount_refunded: f64,
    pub reminder_sent_yn: String,
    pub item_type: String,
    pub currency_type: String,
    pub payment_status: String,
    pub payment_timestamp: DateTime<FixedOffset>,
    pub payment_refund_date: DateTime<FixedOffset>,
    pub payment_reason: String,
    pub timezone: String,
    pub capacity_confirmed: i64,
    pub capacity_waitlist: i64,
    pub user_department: String,
    pub user_business: String,
    pub division_company_code: String,
    pub local_start_time: String,
    pub day_of_week: String,
    pub location_code: String,
    pub shift_id: String,
    pub external_attendees_count: i64,
}

fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn text(rec: &StringRecord, idx: usize) -> String {
    rec.get(idx).unwrap_or_default().to_string()
}

fn timestamp(rec: &StringRecord, idx: usize, line: u64) -> BenchResult<DateTime<FixedOffset>> {
    let raw = rec.get(idx).unwrap_or_default();
    DateTime::parse_from_rfc3339(raw).map_err(|e| BenchError::FieldParse {
        line,
        column: COLUMNS[idx].name,
        reason: format!("invalid timestamp '{raw}': {e}"),
    })
}

fn int(rec: &StringRecord, idx: usize, line: u64) -> BenchResult<i32> {
    let raw = rec.get(idx).unwrap_or_default();
    raw.parse().map_err(|e| BenchError::FieldParse {
        line,
        column: COLUMNS[idx].name,
        reason: format!("invalid integer '{raw}': {e}"),
    })
}

fn wide(rec: &StringRecord, idx: usize, line: u64) -> BenchResult<i64> {
    let raw = rec.get(idx).unwrap_or_default();
    raw.parse().map_err(|e| BenchError::FieldParse {
        line,
        column: COLUMNS[idx].name,
        reason: format!("invalid integer '{raw}': {e}"),
    })
}

fn float(rec: &StringRecord, idx: usize, line: u64) -> BenchResult<f64> {
    let raw = rec.get(idx).unwrap_or_default();
    raw.parse().map_err(|e| BenchError::FieldParse {
        line,
        column: COLUMNS[idx].name,
        reason: format!("invalid float '{raw}': {e}"),
    })
}

impl ReportRecord {
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.booking_status.clone(),
            format_timestamp(&self.booking_date),
            format_timestamp(&self.start_time),
            self.delivery_medium.clone(),
            self.category.clone(),
            self.duration.to_string(),
            self.service_type.clone(),
            self.service_name.clone(),
            self.booking_type.clone(),
            self.channel_name.clone(),
            self.staff_first_name.clone(),
            self.staff_last_name.clone(),
            self.staff_email.clone(),
            self.staff_role.clone(),
            self.customer_email.clone(),
            self.building_code.clone(),
            self.room_name.clone(),
            self.room_code.clone(),
            self.booking_id.clone(),
            self.class_id.clone(),
            self.booked_by_email.clone(),
            format_timestamp(&self.updated_date_time),
            self.updated_by.clone(),
            self.cost_category.clone(),
            self.cost_tier.clone(),
            self.amount_paid.to_string(),
            self.amount_refunded.to_string(),
            self.reminder_sent_yn.clone(),
            self.item_type.clone(),
            self.currency_type.clone(),
            self.payment_status.clone(),
            format_timestamp(&self.payment_timestamp),
            format_timestamp(&self.payment_refund_date),
            self.payment_reason.clone(),
            self.timezone.clone(),
            self.capacity_confirmed.to_string(),
            self.capacity_waitlist.to_string(),
            self.user_department.clone(),
            self.user_business.clone(),
            self.division_company_code.clone(),
            self.local_start_time.clone(),
            self.day_of_week.clone(),
            self.location_code.clone(),
            self.shift_id.clone(),
            self.external_attendees_count.to_string(),
        ]
    }

    pub fn parse_fields(rec: &StringRecord, line: u64) -> BenchResult<ReportRecord> {
        if rec.len() != COLUMN_COUNT {
            return Err(BenchError::FieldCount {
                line,
                expected: COLUMN_COUNT,
                found: rec.len(),
            });
        }
        Ok(ReportRecord {
            booking_status: text(rec, 0),
            booking_date: timestamp(rec, 1, line)?,
            start_time: timestamp(rec, 2, line)?,
            delivery_medium: text(rec, 3),
            category: text(rec, 4),
            duration: int(rec, 5, line)?,
            service_type: text(rec, 6),
            service_name: text(rec, 7),
            booking_type: text(rec, 8),
            channel_name: text(rec, 9),
            staff_first_name: text(rec, 10),
            staff_last_name: text(rec, 11),
            staff_email: text(rec, 12),
            staff_role: text(rec, 13),
            customer_email: text(rec, 14),
            building_code: text(rec, 15),
            room_name: text(rec, 16),
            room_code: text(rec, 17),
            booking_id: text(rec, 18),
            class_id: text(rec, 19),
            booked_by_email: text(rec, 20),
            updated_date_time: timestamp(rec, 21, line)?,
            updated_by: text(rec, 22),
            cost_category: text(rec, 23),
            cost_tier: text(rec, 24),
            amount_paid: float(rec, 25, line)?,
            amount_refunded: float(rec, 26, line)?,
            reminder_sent_yn: text(rec, 27),
            item_type: text(rec, 28),
            currency_type: text(rec, 29),
            payment_status: text(rec, 30),
            payment_timestamp: timestamp(rec, 31, line)?,
            payment_refund_date: timestamp(rec, 32, line)?,
            payment_reason: text(rec, 33),
            timezone: text(rec, 34),
            capacity_confirmed: wide(rec, 35, line)?,
            capacity_waitlist: wide(rec, 36, line)?,
            user_department: text(rec, 37),
            user_business: text(rec, 38),
            division_company_code: text(rec, 39),
            local_start_time: text(rec, 40),
            day_of_week: text(rec, 41),
            location_code: text(rec, 42),
            shift_id: text(rec, 43),
            external_attendees_count: wide(rec, 44, line)?,
        })
    }
}
