use chrono::NaiveDateTime;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
