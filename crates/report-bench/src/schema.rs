use csv::StringRecord;

use crate::error::{BenchError, BenchResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Text,
    Timestamp,
    Int,
    Wide,
    Float,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Column {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn col(name: &'static str, kind: FieldKind) -> Column {
    Column { name, kind }
}

// "DivisionConpanyCode" is the wire spelling; changing it would break
// files produced by earlier versions of this format.
pub const COLUMNS: [Column; 45] = [
    col("BookingStatus", FieldKind::Text),
    col("BookingDate", FieldKind::Timestamp),
    col("StartTime", FieldKind::Timestamp),
    col("DeliveryMedium", FieldKind::Text),
    col("Category", FieldKind::Text),
    col("Duration", FieldKind::Int),
    col("ServiceType", FieldKind::Text),
    col("ServiceName", FieldKind::Text),
    col("BookingType", FieldKind::Text),
    col("ChannelName", FieldKind::Text),
    col("StaffFirstName", FieldKind::Text),
    col("StaffLastName", FieldKind::Text),
    col("StaffEmail", FieldKind::Text),
    col("StaffRole", FieldKind::Text),
    col("CustomerEmail", FieldKind::Text),
    col("BuildingCode", FieldKind::Text),
    col("RoomName", FieldKind::Text),
    col("RoomCode", FieldKind::Text),
    col("BookingId", FieldKind::Text),
    col("ClassId", FieldKind::Text),
    col("BookedByEmail", FieldKind::Text),
    col("UpdatedDateTime", FieldKind::Timestamp),
    col("UpdatedBy", FieldKind::Text),
    col("CostCategory", FieldKind::Text),
    col("CostTier", FieldKind::Text),
    col("AmountPaid", FieldKind::Float),
    col("AmountRefunded", FieldKind::Float),
    col("ReminderSentYN", FieldKind::Text),
    col("ItemType", FieldKind::Text),
    col("CurrencyType", FieldKind::Text),
    col("PaymentStatus", FieldKind::Text),
    col("PaymentTimestamp", FieldKind::Timestamp),
    col("PaymentRefundDate", FieldKind::Timestamp),
    col("PaymentReason", FieldKind::Text),
    col("Timezone", FieldKind::Text),
    col("CapacityConfirmed", FieldKind::Wide),
    col("CapacityWaitlist", FieldKind::Wide),
    col("UserDepartment", FieldKind::Text),
    col("UserBusiness", FieldKind::Text),
    col("DivisionConpanyCode", FieldKind::Text),
    col("LocalStartTime", FieldKind::Text),
    col("DayOfWeek", FieldKind::Text),
    col("LocationCode", FieldKind::Text),
    col("ShiftId", FieldKind::Text),
    col("ExternalAttendeesCount", FieldKind::Wide),
];

pub const COLUMN_COUNT: usize = COLUMNS.len();

pub fn header_names() -> Vec<&'static str> {
    COLUMNS.iter().map(|c| c.name).collect()
}

pub fn validate_header(header: &StringRecord) -> BenchResult<()> {
    for (idx, expected) in COLUMNS.iter().enumerate() {
        let found = header.get(idx).unwrap_or("");
        if found != expected.name {
            return Err(BenchError::HeaderMismatch {
                column: idx,
                expected: expected.name.to_string(),
                found: found.to_string(),
            });
        }
    }
    if header.len() != COLUMN_COUNT {
        return Err(BenchError::HeaderMismatch {
            column: COLUMN_COUNT,
            expected: "<end of header>".to_string(),
            found: header
                .get(COLUMN_COUNT)
                .unwrap_or_default()
                .to_string(),
        });
    }
    Ok(())
}
