use chrono::NaiveDateTime;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Report {
    pub posting_id: String,
    pub reporter: String,
    pub created_at: NaiveDateTime,
}
