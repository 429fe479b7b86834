use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct PostResponse {
    id: String,
    platform_id: String,
    username_or_link: String,
    content: String,
    scheduled_at: String,
    status: String,
    ai_assisted: bool,
}

#[derive(Debug, Deserialize)]
struct MetricsResponse {
    likes: u64,
    comments: u64,
    shares: u64,
    views: u64,
    last_updated: String,
}

#[derive(Debug, Deserialize)]
struct TrackedPostResponse {
    id: String,
    platform_id: String,
    post_link: String,
    metrics: MetricsResponse,
}

#[derive(Debug, Deserialize)]
struct GoalResponse {
    description: String,
    target_value: u64,
    current_value: Option<u64>,
    metric_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    id: String,
    platform_id: String,
    profile_link: String,
    goal: Option<GoalResponse>,
    posts: Vec<TrackedPostResponse>,
}

#[derive(Debug, Deserialize)]
struct EarningResponse {
    id: String,
    source: String,
    amount: f64,
    date: String,
}

#[derive(Debug, Deserialize)]
struct FinancesResponse {
    total_earnings: f64,
    total_expenses: f64,
    net_profit: f64,
    earning_count: usize,
    average_earning: f64,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    finances: FinancesResponse,
}

#[derive(Debug, Deserialize)]
struct AssistStatusResponse {
    available: bool,
    model: String,
}

#[derive(Debug, Deserialize)]
struct MonthRefResponse {
    year: i32,
    month: u32,
}

#[derive(Debug, Deserialize)]
struct CalendarCellResponse {
    day: u32,
    in_month: bool,
}

#[derive(Debug, Deserialize)]
struct CalendarResponse {
    year: i32,
    month: u32,
    label: String,
    prev: MonthRefResponse,
    next: MonthRefResponse,
    cells: Vec<CalendarCellResponse>,
}

#[derive(Debug, Deserialize)]
struct PreferencesResponse {
    dark_mode: bool,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("creator_suite_http_{}_{}", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/summary")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_dir = unique_data_dir();
    let child = Command::new(env!("CARGO_BIN_EXE_creator_suite"))
        .env("PORT", port.to_string())
        .env("APP_DATA_DIR", data_dir)
        .env("RUST_LOG", "info")
        .env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_API_URL")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_post_roundtrip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let later: PostResponse = client
        .post(format!("{}/api/posts", server.base_url))
        .json(&serde_json::json!({
            "platform_id": "instagram",
            "username_or_link": "@roundtrip",
            "content": "second in line",
            "scheduled_at": "2031-06-15T18:00:00Z"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(later.status, "scheduled");
    assert!(!later.ai_assisted);

    let earlier: PostResponse = client
        .post(format!("{}/api/posts", server.base_url))
        .json(&serde_json::json!({
            "platform_id": "tiktok",
            "username_or_link": "@roundtrip",
            "content": "first in line",
            "scheduled_at": "2031-06-15T09:00:00Z",
            "ai_assisted": true
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(earlier.ai_assisted);

    let posts: Vec<PostResponse> = client
        .get(format!("{}/api/posts", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let earlier_index = posts.iter().position(|p| p.id == earlier.id).unwrap();
    let later_index = posts.iter().position(|p| p.id == later.id).unwrap();
    assert!(earlier_index < later_index, "posts should be listed soonest first");

    let updated: PostResponse = client
        .put(format!("{}/api/posts/{}", server.base_url, later.id))
        .json(&serde_json::json!({
            "platform_id": later.platform_id,
            "username_or_link": later.username_or_link,
            "content": "second in line, now live",
            "scheduled_at": later.scheduled_at,
            "status": "posted",
            "ai_assisted": later.ai_assisted
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.id, later.id);
    assert_eq!(updated.status, "posted");
    assert_eq!(updated.content, "second in line, now live");

    let deleted = client
        .delete(format!("{}/api/posts/{}", server.base_url, earlier.id))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), reqwest::StatusCode::NO_CONTENT);

    let gone = client
        .delete(format!("{}/api/posts/{}", server.base_url, earlier.id))
        .send()
        .await
        .unwrap();
    assert_eq!(gone.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_post_validation_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/posts", server.base_url))
        .json(&serde_json::json!({
            "platform_id": "youtube",
            "username_or_link": "  ",
            "content": "has a handle but no one to post as",
            "scheduled_at": "2031-01-01T00:00:00Z"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("required fields"));
}

#[tokio::test]
async fn http_tracker_account_goal_and_posts() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let account: AccountResponse = client
        .post(format!("{}/api/accounts", server.base_url))
        .json(&serde_json::json!({
            "platform_id": "youtube",
            "profile_link": "@trackertest"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(account.platform_id, "youtube");
    assert_eq!(account.profile_link, "@trackertest");
    assert!(account.goal.is_none());
    assert!(account.posts.is_empty());

    // Tracked posts take the platform from their account.
    let with_post: AccountResponse = client
        .post(format!("{}/api/accounts/{}/posts", server.base_url, account.id))
        .json(&serde_json::json!({
            "post_link": "https://youtu.be/tracked-one",
            "caption_summary": "launch teaser",
            "metrics": { "likes": 10, "comments": 2 }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(with_post.posts.len(), 1);
    assert_eq!(with_post.posts[0].platform_id, "youtube");
    assert_eq!(with_post.posts[0].post_link, "https://youtu.be/tracked-one");
    assert_eq!(with_post.posts[0].metrics.likes, 10);
    assert_eq!(with_post.posts[0].metrics.views, 0);
    let tracked_id = with_post.posts[0].id.clone();
    let first_stamp: DateTime<Utc> = with_post.posts[0].metrics.last_updated.parse().unwrap();

    let rejected_goal = client
        .put(format!("{}/api/accounts/{}/goal", server.base_url, account.id))
        .json(&serde_json::json!({ "description": "   ", "target_value": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected_goal.status(), reqwest::StatusCode::BAD_REQUEST);

    // A zero target is fine, the UI just skips the progress bar.
    let with_goal: AccountResponse = client
        .put(format!("{}/api/accounts/{}/goal", server.base_url, account.id))
        .json(&serde_json::json!({
            "description": "Reach 10k subscribers",
            "target_value": 0,
            "metric_name": "Subscribers"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let goal = with_goal.goal.unwrap();
    assert_eq!(goal.description, "Reach 10k subscribers");
    assert_eq!(goal.target_value, 0);
    assert_eq!(goal.metric_name.as_deref(), Some("Subscribers"));
    assert!(goal.current_value.is_none());

    sleep(Duration::from_millis(5)).await;
    let edited: AccountResponse = client
        .put(format!(
            "{}/api/accounts/{}/posts/{}",
            server.base_url, account.id, tracked_id
        ))
        .json(&serde_json::json!({
            "post_link": "https://youtu.be/tracked-one",
            "caption_summary": "launch teaser",
            "metrics": { "likes": 25, "comments": 4, "shares": 1, "views": 900 }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(edited.posts[0].metrics.likes, 25);
    assert_eq!(edited.posts[0].metrics.comments, 4);
    assert_eq!(edited.posts[0].metrics.shares, 1);
    assert_eq!(edited.posts[0].metrics.views, 900);
    let second_stamp: DateTime<Utc> = edited.posts[0].metrics.last_updated.parse().unwrap();
    assert!(second_stamp > first_stamp);
    // Editing metrics must not disturb the goal.
    assert!(edited.goal.is_some());

    let missing = client
        .put(format!("{}/api/accounts/{}/goal", server.base_url, "no-such-account"))
        .json(&serde_json::json!({ "description": "whatever", "target_value": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    let removed_post = client
        .delete(format!(
            "{}/api/accounts/{}/posts/{}",
            server.base_url, account.id, tracked_id
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(removed_post.status(), reqwest::StatusCode::NO_CONTENT);

    let removed = client
        .delete(format!("{}/api/accounts/{}", server.base_url, account.id))
        .send()
        .await
        .unwrap();
    assert_eq!(removed.status(), reqwest::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn http_finance_totals_flow_into_summary() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let earning: EarningResponse = client
        .post(format!("{}/api/earnings", server.base_url))
        .json(&serde_json::json!({
            "source": "Brand deal",
            "amount": 50.0,
            "date": "2026-02-10",
            "platform_id": "instagram"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(earning.source, "Brand deal");
    assert_eq!(earning.amount, 50.0);

    for (description, amount) in [("Editing software", 10.0), ("Ring light", 15.0)] {
        let response = client
            .post(format!("{}/api/expenses", server.base_url))
            .json(&serde_json::json!({
                "description": description,
                "category": "Equipment",
                "amount": amount,
                "date": "2026-02-11"
            }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let summary: SummaryResponse = client
        .get(format!("{}/api/summary", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary.finances.total_earnings, 50.0);
    assert_eq!(summary.finances.total_expenses, 25.0);
    assert_eq!(summary.finances.net_profit, 25.0);
    assert_eq!(summary.finances.earning_count, 1);
    assert_eq!(summary.finances.average_earning, 50.0);

    // Ledgers come back newest date first.
    let older: EarningResponse = client
        .post(format!("{}/api/earnings", server.base_url))
        .json(&serde_json::json!({
            "source": "Ad revenue",
            "amount": 5.0,
            "date": "2026-01-01"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let earnings: Vec<EarningResponse> = client
        .get(format!("{}/api/earnings", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let newest_index = earnings.iter().position(|e| e.id == earning.id).unwrap();
    let oldest_index = earnings.iter().position(|e| e.id == older.id).unwrap();
    assert!(newest_index < oldest_index);
    assert_eq!(earnings[oldest_index].date, "2026-01-01");

    // Put the shared store back so other assertions stay honest.
    for id in [earning.id, older.id] {
        client
            .delete(format!("{}/api/earnings/{}", server.base_url, id))
            .send()
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn http_csv_exports_have_headers_and_crlf() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created: PostResponse = client
        .post(format!("{}/api/posts", server.base_url))
        .json(&serde_json::json!({
            "platform_id": "pinterest",
            "username_or_link": "@csvtest",
            "content": "pin with a \"quoted\" word",
            "scheduled_at": "2031-03-03T12:30:00Z"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = client
        .get(format!("{}/api/posts/export", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/csv"));
    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("scheduled_posts_"));
    assert!(disposition.ends_with(".csv\""));

    let body = response.text().await.unwrap();
    assert!(body.starts_with("\"ID\",\"Platform\",\"UsernameOrLink\",\"Content\""));
    assert!(body.contains("\"Pinterest\""));
    assert!(body.contains("\"pin with a \"\"quoted\"\" word\""));
    assert!(body.contains("2031-03-03 12:30"));
    assert!(body.ends_with("\r\n"));

    let earnings_export = client
        .get(format!("{}/api/earnings/export", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(earnings_export.status().is_success());
    let earnings_body = earnings_export.text().await.unwrap();
    assert!(earnings_body.starts_with("\"ID\",\"Source\",\"Amount\""));

    client
        .delete(format!("{}/api/posts/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn http_calendar_grid_shape() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let grid: CalendarResponse = client
        .get(format!("{}/api/calendar?year=2025&month=3", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(grid.year, 2025);
    assert_eq!(grid.month, 3);
    assert_eq!(grid.label, "March 2025");
    assert_eq!(grid.prev.year, 2025);
    assert_eq!(grid.prev.month, 2);
    assert_eq!(grid.next.year, 2025);
    assert_eq!(grid.next.month, 4);
    assert_eq!(grid.cells.len() % 7, 0);
    assert!(grid.cells.iter().filter(|cell| cell.in_month).count() == 31);
    // March 2025 starts on a Saturday, so the week opens with February days.
    assert!(!grid.cells[0].in_month);
    assert_eq!(grid.cells[6].day, 1);

    let defaulted: CalendarResponse = client
        .get(format!("{}/api/calendar", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(defaulted.cells.len() % 7 == 0);

    let invalid = client
        .get(format!("{}/api/calendar?year=2025&month=13", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_assist_disabled_without_key() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let status: AssistStatusResponse = client
        .get(format!("{}/api/assist/status", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!status.available);
    assert!(!status.model.is_empty());

    let idea = client
        .post(format!("{}/api/assist/idea", server.base_url))
        .json(&serde_json::json!({ "platform_id": "tiktok", "topic": "meal prep" }))
        .send()
        .await
        .unwrap();
    assert_eq!(idea.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);

    let blank_topic = client
        .post(format!("{}/api/assist/idea", server.base_url))
        .json(&serde_json::json!({ "platform_id": "tiktok", "topic": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(blank_topic.status(), reqwest::StatusCode::BAD_REQUEST);

    let trends = client
        .post(format!("{}/api/assist/trends", server.base_url))
        .json(&serde_json::json!({ "niche": "vintage synths" }))
        .send()
        .await
        .unwrap();
    assert_eq!(trends.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn http_preferences_theme_roundtrip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let initial: PreferencesResponse = client
        .get(format!("{}/api/preferences", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!initial.dark_mode);

    let updated: PreferencesResponse = client
        .put(format!("{}/api/preferences", server.base_url))
        .json(&serde_json::json!({ "dark_mode": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(updated.dark_mode);

    let page = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("<body class=\"dark\">"));
    assert!(page.contains("Welcome to your Social Media Suite!"));

    client
        .put(format!("{}/api/preferences", server.base_url))
        .json(&serde_json::json!({ "dark_mode": false }))
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn http_unknown_ids_return_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let post = client
        .put(format!("{}/api/posts/does-not-exist", server.base_url))
        .json(&serde_json::json!({
            "platform_id": "facebook",
            "username_or_link": "@nobody",
            "content": "ghost update",
            "scheduled_at": "2031-01-01T00:00:00Z"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(post.status(), reqwest::StatusCode::NOT_FOUND);

    let earning = client
        .delete(format!("{}/api/earnings/does-not-exist", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(earning.status(), reqwest::StatusCode::NOT_FOUND);

    let expense = client
        .delete(format!("{}/api/expenses/does-not-exist", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(expense.status(), reqwest::StatusCode::NOT_FOUND);
}
