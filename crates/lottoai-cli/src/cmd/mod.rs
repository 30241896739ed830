pub mod completions;
pub mod generate;
pub mod history;
pub mod profile;

/// The reference date the user gave, or today's local date.
///
/// This is the only place a clock is read; the core only ever sees the
/// explicit date.
pub fn reference_date_or_today(date: Option<&str>) -> String {
    date.map_or_else(
        || lottoai_core::model::format_iso_date(chrono::Local::now().date_naive()),
        str::to_string,
    )
}
