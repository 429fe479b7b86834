use crate::models::{
    ExpenseItem, FinanceSummary, MonetizationEntry, OverviewResponse, PlannerSummary, PostStatus,
    ScheduledPost, TrackedAccount, TrackerSummary,
};
use crate::storage::Store;
use chrono::{DateTime, Utc};

pub fn build_overview(store: &Store) -> OverviewResponse {
    build_overview_at(Utc::now(), store)
}

pub fn build_overview_at(now: DateTime<Utc>, store: &Store) -> OverviewResponse {
    OverviewResponse {
        planner: planner_summary(now, &store.posts),
        tracker: tracker_summary(&store.accounts),
        finances: finance_summary(&store.earnings, &store.expenses),
    }
}

/// Only posts still in the scheduled state count; posted and failed ones
/// are history, not workload.
pub fn planner_summary(now: DateTime<Utc>, posts: &[ScheduledPost]) -> PlannerSummary {
    let mut upcoming = 0;
    let mut past_due = 0;
    for post in posts {
        if post.status != PostStatus::Scheduled {
            continue;
        }
        if post.scheduled_at >= now {
            upcoming += 1;
        } else {
            past_due += 1;
        }
    }

    PlannerSummary {
        upcoming_posts: upcoming,
        past_due_posts: past_due,
    }
}

pub fn tracker_summary(accounts: &[TrackedAccount]) -> TrackerSummary {
    TrackerSummary {
        tracked_accounts: accounts.len(),
        total_tracked_posts: accounts.iter().map(|account| account.posts.len()).sum(),
    }
}

pub fn finance_summary(earnings: &[MonetizationEntry], expenses: &[ExpenseItem]) -> FinanceSummary {
    let total_earnings: f64 = earnings.iter().map(|entry| entry.amount).sum();
    let total_expenses: f64 = expenses.iter().map(|item| item.amount).sum();
    let average_earning = if earnings.is_empty() {
        0.0
    } else {
        total_earnings / earnings.len() as f64
    };

    FinanceSummary {
        total_earnings,
        total_expenses,
        net_profit: total_earnings - total_expenses,
        earning_count: earnings.len(),
        expense_count: expenses.len(),
        average_earning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::new_entity_id;
    use chrono::{Duration, NaiveDate};

    fn post_at(when: DateTime<Utc>, status: PostStatus) -> ScheduledPost {
        ScheduledPost {
            id: new_entity_id(),
            platform_id: "youtube".to_string(),
            username_or_link: "@studio".to_string(),
            content: "clip".to_string(),
            scheduled_at: when,
            status,
            media_url: None,
            ai_assisted: false,
        }
    }

    fn earning(amount: f64) -> MonetizationEntry {
        MonetizationEntry {
            id: new_entity_id(),
            source: "Sponsor".to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            platform_id: None,
            post_id: None,
            notes: None,
        }
    }

    fn expense(amount: f64) -> ExpenseItem {
        ExpenseItem {
            id: new_entity_id(),
            description: "Editing app".to_string(),
            category: "Software".to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2026, 8, 2).unwrap(),
        }
    }

    #[test]
    fn planner_splits_upcoming_from_past_due() {
        let now = Utc::now();
        let posts = vec![
            post_at(now + Duration::hours(2), PostStatus::Scheduled),
            post_at(now + Duration::days(3), PostStatus::Scheduled),
            post_at(now - Duration::hours(1), PostStatus::Scheduled),
            post_at(now - Duration::days(2), PostStatus::Posted),
            post_at(now - Duration::days(1), PostStatus::Failed),
        ];

        let summary = planner_summary(now, &posts);
        assert_eq!(summary.upcoming_posts, 2);
        assert_eq!(summary.past_due_posts, 1);
    }

    #[test]
    fn tracker_counts_accounts_and_nested_posts() {
        let accounts = vec![
            TrackedAccount {
                id: new_entity_id(),
                platform_id: "tiktok".to_string(),
                profile_link: "https://tiktok.com/@a".to_string(),
                posts: vec![],
                goal: None,
            },
            TrackedAccount {
                id: new_entity_id(),
                platform_id: "instagram".to_string(),
                profile_link: "https://instagram.com/b".to_string(),
                posts: vec![],
                goal: None,
            },
        ];

        let summary = tracker_summary(&accounts);
        assert_eq!(summary.tracked_accounts, 2);
        assert_eq!(summary.total_tracked_posts, 0);
    }

    #[test]
    fn finances_net_out() {
        let earnings = vec![earning(50.0)];
        let expenses = vec![expense(10.0), expense(15.0)];

        let summary = finance_summary(&earnings, &expenses);
        assert_eq!(summary.total_earnings, 50.0);
        assert_eq!(summary.total_expenses, 25.0);
        assert_eq!(summary.net_profit, 25.0);
        assert_eq!(summary.earning_count, 1);
        assert_eq!(summary.expense_count, 2);
        assert_eq!(summary.average_earning, 50.0);
    }

    #[test]
    fn empty_ledger_averages_to_zero() {
        let summary = finance_summary(&[], &[]);
        assert_eq!(summary.total_earnings, 0.0);
        assert_eq!(summary.net_profit, 0.0);
        assert_eq!(summary.average_earning, 0.0);
    }

    #[test]
    fn overview_combines_all_three_panels() {
        let now = Utc::now();
        let store = Store {
            posts: vec![post_at(now + Duration::hours(1), PostStatus::Scheduled)],
            accounts: vec![],
            earnings: vec![earning(120.0), earning(80.0)],
            expenses: vec![expense(40.0)],
            preferences: Default::default(),
        };

        let overview = build_overview_at(now, &store);
        assert_eq!(overview.planner.upcoming_posts, 1);
        assert_eq!(overview.finances.net_profit, 160.0);
        assert_eq!(overview.finances.average_earning, 100.0);
    }
}
