use time::OffsetDateTime;

pub fn current_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

pub fn current_seconds() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
