use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    category::{
        Budget, Headcount, Location, Period, Season, Sorting, Theme, Vehicle,
        WithWho,
    },
    label::{resolve_all, Label},
    user::User,
};

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Posting {
    pub id: String,
    pub writer: String,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i32,
    pub period: Period,
    pub season: Season,
    pub headcount: Option<Headcount>,
    pub budget: Option<Budget>,
    pub location: Option<Location>,
    pub theme: Option<Vec<Theme>>,
    pub with_who: Option<Vec<WithWho>>,
    pub vehicle: Option<Vehicle>,
    pub thumbnail: Option<String>,
}

/// Raw values of a new posting, categories still as labels.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct PostingInput {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub headcount: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub theme: Option<Vec<String>>,
    pub with_who: Option<Vec<String>>,
    pub vehicle: Option<String>,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct PostingPatch {
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub headcount: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub theme: Option<Vec<String>>,
    pub with_who: Option<Vec<String>>,
    pub vehicle: Option<String>,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct PostingFilter {
    pub keyword: String,
    pub sorting: Sorting,
    pub offset: u64,
    pub limit: u64,
    pub budget: Option<Budget>,
    pub headcount: Option<Headcount>,
    pub locations: Vec<Location>,
    pub period: Option<Period>,
    pub seasons: Vec<Season>,
    pub vehicle: Option<Vehicle>,
    pub themes: Vec<Theme>,
    pub with_whos: Vec<WithWho>,
}

impl PostingFilter {
    /// Rows to skip for the 1-based page in `offset`.
    pub fn skip(&self) -> u64 {
        self.offset.saturating_sub(1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct PostingDetail {
    pub posting: Posting,
    pub writer: Option<User>,
    pub liked_count: u64,
}

/// Inclusive number of days between `start` and `end`.
pub fn count_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

fn resolve<T: Label>(label: Option<&str>) -> Option<T> {
    label.and_then(T::from_label)
}

impl Posting {
    pub fn new(
        id: String,
        writer: String,
        created_at: NaiveDateTime,
        input: PostingInput,
    ) -> Self {
        let mut posting = Self {
            id,
            writer,
            title: input.title,
            created_at,
            start_date: input.start_date,
            end_date: input.end_date,
            headcount: resolve(input.headcount.as_deref()),
            budget: resolve(input.budget.as_deref()),
            location: resolve(input.location.as_deref()),
            theme: input.theme.as_deref().map(resolve_all),
            with_who: input.with_who.as_deref().map(resolve_all),
            vehicle: resolve(input.vehicle.as_deref()),
            ..Default::default()
        };
        posting.derive();
        posting
    }

    /// Replaces every field the patch carries, then recomputes the derived
    /// fields.
    pub fn apply(&mut self, patch: PostingPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(headcount) = patch.headcount {
            self.headcount = resolve(Some(&headcount));
        }
        if let Some(budget) = patch.budget {
            self.budget = resolve(Some(&budget));
        }
        if let Some(location) = patch.location {
            self.location = resolve(Some(&location));
        }
        if let Some(theme) = patch.theme {
            self.theme = Some(resolve_all(&theme));
        }
        if let Some(with_who) = patch.with_who {
            self.with_who = Some(resolve_all(&with_who));
        }
        if let Some(vehicle) = patch.vehicle {
            self.vehicle = resolve(Some(&vehicle));
        }
        self.derive();
    }

    fn derive(&mut self) {
        let days = count_days(self.start_date, self.end_date);
        self.days = days as i32;
        self.period = Period::from_days(days);
        self.season = Season::from_date(self.start_date);
    }

    pub fn has_valid_range(&self) -> bool {
        self.end_date >= self.start_date
    }

    pub fn is_written_by(&self, user_id: &str) -> bool {
        self.writer == user_id
    }
}
