use chrono::{NaiveDate, NaiveDateTime, Utc};
use contracts::shared::pipeline::PipelineContext;

/// Browser local time
pub fn local_now() -> NaiveDateTime {
    let d = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(d.get_full_year() as i32, d.get_month() + 1, d.get_date())
        .and_then(|date| date.and_hms_opt(d.get_hours(), d.get_minutes(), d.get_seconds()))
        .unwrap_or_else(|| Utc::now().naive_utc())
}

/// Reference instant for every derivation of a page render
pub fn pipeline_context() -> PipelineContext {
    PipelineContext::new(local_now())
}

/// Date stamped into export file names (UTC calendar day)
pub fn export_date() -> NaiveDate {
    Utc::now().date_naive()
}
