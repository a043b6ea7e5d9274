//! # 날짜 유틸리티
//!
//! ISO-8601 형식에 가까운 입력을 UTC 타임스탬프로 해석합니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// 오프셋이 없는 날짜-시간 형식 (UTC로 간주)
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// 문자열을 UTC 타임스탬프로 파싱합니다.
///
/// 다음 형식을 순서대로 시도합니다.
///
/// | 입력 예 | 해석 |
/// |---------|------|
/// | `1990-05-17T10:00:00.000+02:00` | RFC 3339 |
/// | `1990-05-17T10:00:00+0200` | 콜론 없는 오프셋 |
/// | `1990-05-17T10:00:00` | 오프셋 없음, UTC |
/// | `1990-05-17` | UTC 자정 |
///
/// 존재하지 않는 날짜(`2023-02-30`)는 `None`입니다.
///
/// ```rust,ignore
/// assert!(parse_timestamp("1990-05-17").is_some());
/// assert!(parse_timestamp("not-a-date").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
