use crate::models::{platform_color, PostStatus, ScheduledPost};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Events shown per day cell before collapsing into a "+N more" counter.
pub const MAX_EVENTS_PER_CELL: usize = 3;

const PREVIEW_CHARS: usize = 60;
const FALLBACK_COLOR: &str = "#64748b";

#[derive(Debug, Serialize)]
pub struct CalendarEvent {
    pub post_id: String,
    pub platform_id: String,
    pub color: &'static str,
    pub content_preview: String,
    pub time: String,
    pub status: PostStatus,
}

#[derive(Debug, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day: u32,
    pub in_month: bool,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
    pub more_events: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Serialize)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub prev: MonthRef,
    pub next: MonthRef,
    pub cells: Vec<CalendarCell>,
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Sunday-aligned grid covering the whole month. Returns `None` when the
/// year/month pair does not name a real month.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    posts: &[ScheduledPost],
) -> Option<CalendarGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_mon) = next_month(year, month);
    let last = NaiveDate::from_ymd_opt(next_year, next_mon, 1)? - Duration::days(1);

    let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
    let end = last + Duration::days(6 - last.weekday().num_days_from_sunday() as i64);

    let mut cells = Vec::new();
    let mut date = start;
    while date <= end {
        let mut day_posts: Vec<&ScheduledPost> = posts
            .iter()
            .filter(|post| post.scheduled_at.date_naive() == date)
            .collect();
        day_posts.sort_by_key(|post| post.scheduled_at);

        let total = day_posts.len();
        let events = day_posts
            .into_iter()
            .take(MAX_EVENTS_PER_CELL)
            .map(to_event)
            .collect();

        cells.push(CalendarCell {
            date,
            day: date.day(),
            in_month: date.month() == month && date.year() == year,
            is_today: date == today,
            events,
            more_events: total.saturating_sub(MAX_EVENTS_PER_CELL),
        });

        date += Duration::days(1);
    }

    let (prev_year, prev_mon) = prev_month(year, month);
    Some(CalendarGrid {
        year,
        month,
        label: first.format("%B %Y").to_string(),
        prev: MonthRef {
            year: prev_year,
            month: prev_mon,
        },
        next: MonthRef {
            year: next_year,
            month: next_mon,
        },
        cells,
    })
}

fn to_event(post: &ScheduledPost) -> CalendarEvent {
    let mut preview: String = post.content.chars().take(PREVIEW_CHARS).collect();
    if post.content.chars().count() > PREVIEW_CHARS {
        preview.push('\u{2026}');
    }

    CalendarEvent {
        post_id: post.id.clone(),
        platform_id: post.platform_id.clone(),
        color: platform_color(&post.platform_id).unwrap_or(FALLBACK_COLOR),
        content_preview: preview,
        time: post.scheduled_at.format("%H:%M").to_string(),
        status: post.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, Weekday};

    fn post_on(id: &str, when: &str) -> ScheduledPost {
        ScheduledPost {
            id: id.to_string(),
            platform_id: "instagram".to_string(),
            username_or_link: "@studio".to_string(),
            content: "hello world".to_string(),
            scheduled_at: NaiveDateTime::parse_from_str(when, "%Y-%m-%d %H:%M")
                .unwrap()
                .and_utc(),
            status: PostStatus::Scheduled,
            media_url: None,
            ai_assisted: false,
        }
    }

    #[test]
    fn grid_covers_whole_weeks() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let grid = month_grid(2026, 8, today, &[]).unwrap();

        assert_eq!(grid.cells.len() % 7, 0);
        assert_eq!(grid.cells.first().unwrap().date.weekday(), Weekday::Sun);
        assert_eq!(grid.cells.last().unwrap().date.weekday(), Weekday::Sat);

        let days: Vec<u32> = grid
            .cells
            .iter()
            .filter(|cell| cell.in_month)
            .map(|cell| cell.day)
            .collect();
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&31));
    }

    #[test]
    fn leading_and_trailing_cells_belong_to_neighbors() {
        // May 2026 starts on a Friday and ends on a Sunday.
        let today = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
        let grid = month_grid(2026, 5, today, &[]).unwrap();

        assert!(!grid.cells.first().unwrap().in_month);
        assert!(!grid.cells.last().unwrap().in_month);
        assert_eq!(grid.cells.iter().filter(|cell| cell.in_month).count(), 31);
        assert_eq!(grid.cells.iter().filter(|cell| cell.is_today).count(), 1);
    }

    #[test]
    fn events_land_on_their_day_and_overflow_collapses() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let posts = vec![
            post_on("a", "2026-08-14 09:00"),
            post_on("b", "2026-08-14 08:00"),
            post_on("c", "2026-08-14 12:00"),
            post_on("d", "2026-08-14 15:00"),
            post_on("e", "2026-08-14 07:30"),
        ];

        let grid = month_grid(2026, 8, today, &posts).unwrap();
        let cell = grid
            .cells
            .iter()
            .find(|cell| cell.in_month && cell.day == 14)
            .unwrap();

        assert_eq!(cell.events.len(), MAX_EVENTS_PER_CELL);
        assert_eq!(cell.more_events, 2);
        assert_eq!(cell.events[0].post_id, "e");
        assert_eq!(cell.events[0].time, "07:30");

        let empty = grid
            .cells
            .iter()
            .find(|cell| cell.in_month && cell.day == 15)
            .unwrap();
        assert!(empty.events.is_empty());
        assert_eq!(empty.more_events, 0);
    }

    #[test]
    fn invalid_month_is_rejected() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert!(month_grid(2026, 0, today, &[]).is_none());
        assert!(month_grid(2026, 13, today, &[]).is_none());
    }

    #[test]
    fn february_in_a_leap_year_has_29_days() {
        let today = NaiveDate::from_ymd_opt(2028, 2, 1).unwrap();
        let grid = month_grid(2028, 2, today, &[]).unwrap();
        assert_eq!(grid.cells.iter().filter(|cell| cell.in_month).count(), 29);
        assert_eq!(grid.label, "February 2028");
        assert_eq!(grid.next.month, 3);
        assert_eq!(grid.prev.month, 1);
    }

    #[test]
    fn year_boundaries_wrap() {
        assert_eq!(next_month(2026, 12), (2027, 1));
        assert_eq!(prev_month(2026, 1), (2025, 12));
    }
}
