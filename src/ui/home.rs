pub fn page(dark_mode: bool) -> String {
    super::render("home", MAIN, SCRIPT, dark_mode)
}

const MAIN: &str = r#"    <h1>Welcome to your Social Media Suite!</h1>

    <section class="cards">
      <article class="card">
        <h3>Planner Overview</h3>
        <p class="metric">Upcoming Posts: <span class="value" id="upcoming-posts">0</span></p>
        <p class="metric warn hidden" id="past-due-line">Past Due: <span class="value" id="past-due-posts">0</span></p>
        <a class="card-link" href="/planner">Go to Planner &rarr;</a>
      </article>
      <article class="card">
        <h3>Tracker Snapshot</h3>
        <p class="metric">Tracked Accounts: <span class="value" id="tracked-accounts">0</span></p>
        <p class="metric">Total Tracked Posts: <span class="value" id="tracked-posts">0</span></p>
        <a class="card-link" href="/tracker">Go to Tracker &rarr;</a>
      </article>
      <article class="card">
        <h3>Financials</h3>
        <p class="metric">Net Profit: <span class="value" id="net-profit">$0.00</span></p>
        <p class="metric">Total Earnings: <span class="value good" id="total-earnings">$0.00</span></p>
        <p class="metric">Total Expenses: <span class="value bad" id="total-expenses">$0.00</span></p>
        <a class="card-link" href="/monetization">Go to Monetization &rarr;</a>
      </article>
    </section>

    <section>
      <h2>Quick Actions</h2>
      <div class="cards">
        <a class="card action" href="/planner">
          <h3>Schedule a Post</h3>
          <p>Go directly to the content planner to schedule new posts.</p>
        </a>
        <a class="card action" href="/tracker">
          <h3>Track New Account</h3>
          <p>Start tracking performance for a new social media account or specific posts.</p>
        </a>
        <a class="card action" href="/monetization">
          <h3>Add Earning/Expense</h3>
          <p>Log your latest income or business expenses to keep finances up to date.</p>
        </a>
      </div>
    </section>

    <section class="panel hidden" id="insights-panel">
      <h2>AI-Powered Insights</h2>
      <label for="niche-input">Your Content Niche:</label>
      <div class="row">
        <input type="text" id="niche-input" placeholder="e.g., Sustainable Living, Indie Gaming" />
        <button class="btn teal" id="trends-btn" type="button">Get Trends</button>
      </div>
      <p class="form-error" id="trends-error"></p>
      <div class="hidden" id="trends-result">
        <h3>Trending Topics Suggested by AI:</h3>
        <ul class="notes" id="trends-list"></ul>
      </div>
    </section>

    <section class="panel">
      <h2>Getting Started</h2>
      <ul class="notes">
        <li>Use the <strong>Planner</strong> to schedule your upcoming social media posts and visualize them on a calendar.</li>
        <li>Head to the <strong>Tracker</strong> to monitor the performance of your accounts and posts. Set goals and get AI insights!</li>
        <li>Manage your income and expenses in the <strong>Monetization</strong> hub. Leverage AI for monetization tips and new revenue ideas.</li>
        <li>Remember to manually input performance data in the Tracker, as direct API integration is not yet available.</li>
        <li>Explore AI features by ensuring your Gemini API key is set up in your environment variables.</li>
      </ul>
    </section>
"#;

const SCRIPT: &str = r#"    const upcomingEl = document.getElementById('upcoming-posts');
    const pastDueLine = document.getElementById('past-due-line');
    const pastDueEl = document.getElementById('past-due-posts');
    const trackedAccountsEl = document.getElementById('tracked-accounts');
    const trackedPostsEl = document.getElementById('tracked-posts');
    const netProfitEl = document.getElementById('net-profit');
    const totalEarningsEl = document.getElementById('total-earnings');
    const totalExpensesEl = document.getElementById('total-expenses');
    const insightsPanel = document.getElementById('insights-panel');
    const nicheInput = document.getElementById('niche-input');
    const trendsBtn = document.getElementById('trends-btn');
    const trendsError = document.getElementById('trends-error');
    const trendsResult = document.getElementById('trends-result');
    const trendsList = document.getElementById('trends-list');

    const loadSummary = async () => {
      const summary = await api('/api/summary');
      upcomingEl.textContent = summary.planner.upcoming_posts;
      pastDueEl.textContent = summary.planner.past_due_posts;
      pastDueLine.classList.toggle('hidden', summary.planner.past_due_posts === 0);
      trackedAccountsEl.textContent = summary.tracker.tracked_accounts;
      trackedPostsEl.textContent = summary.tracker.total_tracked_posts;
      netProfitEl.textContent = money(summary.finances.net_profit);
      netProfitEl.classList.toggle('bad', summary.finances.net_profit < 0);
      totalEarningsEl.textContent = money(summary.finances.total_earnings);
      totalExpensesEl.textContent = money(summary.finances.total_expenses);
    };

    const fetchTrends = async () => {
      const niche = nicheInput.value.trim();
      trendsError.textContent = '';
      if (!niche) {
        trendsError.textContent = 'Please enter your niche to get trends.';
        return;
      }
      trendsBtn.disabled = true;
      setStatus('Fetching trends...', '');
      try {
        const data = await sendJson('/api/assist/trends', 'POST', { niche });
        trendsList.innerHTML = data.trends
          .map((trend) => '<li><strong>' + escapeHtml(trend.trendName) + ':</strong> ' + escapeHtml(trend.description.substring(0, 100)) + '...</li>')
          .join('');
        trendsResult.classList.remove('hidden');
        setStatus('', '');
      } catch (err) {
        trendsError.textContent = err.message;
        setStatus('', '');
      } finally {
        trendsBtn.disabled = false;
      }
    };

    trendsBtn.addEventListener('click', () => {
      fetchTrends();
    });

    const init = async () => {
      await Promise.all([loadSummary(), loadAssist()]);
      insightsPanel.classList.toggle('hidden', !assist.available);
    };

    init().catch((err) => setStatus(err.message, 'error'));
"#;
