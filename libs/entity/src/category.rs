//! Categorical attributes of a posting. Each variant's `serialize` string is
//! the label the app sends; the declaration order is the stored index.

use chrono::{Datelike, NaiveDate};
use strum::{EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Headcount {
    #[strum(serialize = "1명")]
    One,
    #[strum(serialize = "2명")]
    Two,
    #[strum(serialize = "3명")]
    Three,
    #[strum(serialize = "4명")]
    Four,
    #[strum(serialize = "5인 이상")]
    FiveOrMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Budget {
    #[strum(serialize = "10만원 미만")]
    Under100K,
    #[strum(serialize = "10~50만원")]
    Under500K,
    #[strum(serialize = "50~100만원")]
    Under1M,
    #[strum(serialize = "100~300만원")]
    Under3M,
    #[strum(serialize = "300~500만원")]
    Under5M,
    #[strum(serialize = "500만원 이상")]
    Over5M,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Location {
    #[strum(serialize = "서울")]
    Seoul,
    #[strum(serialize = "부산")]
    Busan,
    #[strum(serialize = "대구")]
    Daegu,
    #[strum(serialize = "인천")]
    Incheon,
    #[strum(serialize = "광주")]
    Gwangju,
    #[strum(serialize = "대전")]
    Daejeon,
    #[strum(serialize = "울산")]
    Ulsan,
    #[strum(serialize = "세종")]
    Sejong,
    #[strum(serialize = "경기")]
    Gyeonggi,
    #[strum(serialize = "강원")]
    Gangwon,
    #[strum(serialize = "충북")]
    Chungbuk,
    #[strum(serialize = "충남")]
    Chungnam,
    #[strum(serialize = "전북")]
    Jeonbuk,
    #[strum(serialize = "전남")]
    Jeonnam,
    #[strum(serialize = "경북")]
    Gyeongbuk,
    #[strum(serialize = "경남")]
    Gyeongnam,
    #[strum(serialize = "제주")]
    Jeju,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Theme {
    #[strum(serialize = "힐링")]
    Healing,
    #[strum(serialize = "맛집")]
    Food,
    #[strum(serialize = "액티비티")]
    Activity,
    #[strum(serialize = "문화/예술")]
    Culture,
    #[strum(serialize = "자연")]
    Nature,
    #[strum(serialize = "쇼핑")]
    Shopping,
    #[strum(serialize = "캠핑")]
    Camping,
    #[strum(serialize = "스포츠")]
    Sports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum WithWho {
    #[strum(serialize = "혼자")]
    Alone,
    #[strum(serialize = "친구")]
    Friends,
    #[strum(serialize = "연인")]
    Partner,
    #[strum(serialize = "가족")]
    Family,
    #[strum(serialize = "아이")]
    Kids,
    #[strum(serialize = "반려동물")]
    Pets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Vehicle {
    #[strum(serialize = "자동차")]
    Car,
    #[strum(serialize = "대중교통")]
    PublicTransport,
    #[strum(serialize = "자전거")]
    Bicycle,
    #[strum(serialize = "도보")]
    Walk,
    #[strum(serialize = "기타")]
    Other,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
pub enum Period {
    #[default]
    #[strum(serialize = "당일치기")]
    DayTrip,
    #[strum(serialize = "1박 2일")]
    TwoDays,
    #[strum(serialize = "2박 3일")]
    ThreeDays,
    #[strum(serialize = "일주일 이하")]
    UnderWeek,
    #[strum(serialize = "한 달 이하")]
    UnderMonth,
    #[strum(serialize = "한 달 이상")]
    OverMonth,
}

impl Period {
    pub fn from_days(days: i64) -> Self {
        match days {
            1 => Period::DayTrip,
            2 => Period::TwoDays,
            3 => Period::ThreeDays,
            d if d < 7 => Period::UnderWeek,
            d if d < 30 => Period::UnderMonth,
            _ => Period::OverMonth,
        }
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
pub enum Season {
    #[default]
    #[strum(serialize = "봄")]
    Spring,
    #[strum(serialize = "여름")]
    Summer,
    #[strum(serialize = "가을")]
    Autumn,
    #[strum(serialize = "겨울")]
    Winter,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=9 => Season::Summer,
            10..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
pub enum Sorting {
    #[default]
    #[strum(serialize = "최신순")]
    Newest,
    #[strum(serialize = "좋아요순")]
    MostLiked,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_period_from_days() {
        let cases = [
            (1, Period::DayTrip),
            (2, Period::TwoDays),
            (3, Period::ThreeDays),
            (4, Period::UnderWeek),
            (6, Period::UnderWeek),
            (7, Period::UnderMonth),
            (29, Period::UnderMonth),
            (30, Period::OverMonth),
            (365, Period::OverMonth),
        ];

        for (days, expected) in cases {
            assert_eq!(Period::from_days(days), expected, "days: {days}");
        }
    }

    #[test]
    fn test_period_from_non_positive_days() {
        assert_eq!(Period::from_days(0), Period::UnderWeek);
        assert_eq!(Period::from_days(-3), Period::UnderWeek);
    }

    #[test]
    fn test_season_from_month() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Autumn,
            Season::Autumn,
            Season::Winter,
        ];

        for (i, season) in expected.into_iter().enumerate() {
            let month = i as u32 + 1;
            assert_eq!(Season::from_month(month), season, "month: {month}");
        }
    }
}
