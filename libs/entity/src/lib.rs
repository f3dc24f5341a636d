pub mod category;
pub mod label;
pub mod liked;
pub mod posting;
pub mod report;
pub mod user;

pub mod prelude {
    pub use crate::label::Label;
    pub use crate::liked::Liked as LikedEntity;
    pub use crate::posting::Posting as PostingEntity;
    pub use crate::posting::PostingDetail as PostingDetailEntity;
    pub use crate::report::Report as ReportEntity;
    pub use crate::user::User as UserEntity;
}
