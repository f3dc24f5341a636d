use chrono::NaiveDateTime;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Liked {
    pub posting_id: String,
    pub user_id: String,
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
}
