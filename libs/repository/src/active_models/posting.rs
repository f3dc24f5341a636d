use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posting")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub writer: String,
    pub title: String,
    pub created_at: DateTime,
    pub start_date: Date,
    pub end_date: Date,
    pub days: i32,
    pub period: i16,
    pub season: i16,
    pub headcount: Option<i16>,
    pub budget: Option<i16>,
    pub location: Option<i16>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub theme: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub with_who: Option<Json>,
    pub vehicle: Option<i16>,
    pub thumbnail: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::Writer",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::liked::Entity")]
    Liked,
    #[sea_orm(has_many = "super::report::Entity")]
    Report,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::liked::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Liked.def()
    }
}

impl Related<super::report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
