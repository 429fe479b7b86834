pub fn page(dark_mode: bool) -> String {
    super::render("tracker", MAIN, SCRIPT, dark_mode)
}

const MAIN: &str = r#"    <div class="page-head">
      <h2>Performance Tracker</h2>
      <div class="toolbar">
        <button class="btn" id="new-item-btn" type="button">Track New Account/Post</button>
      </div>
    </div>

    <div class="empty hidden" id="tracker-empty">
      <p class="empty-title">No accounts or posts being tracked.</p>
      <p>Click "Track New Account/Post" to add one.</p>
    </div>

    <div class="stack" id="account-list"></div>

    <p class="muted center" style="margin-top: 28px;">
      Note: Social media data (likes, views, etc.) is not fetched automatically.
      Please input these metrics manually for each post. This tool helps organize
      and analyze the data you provide.
    </p>

    <div class="overlay" id="item-modal">
      <div class="dialog">
        <div class="dialog-head">
          <h3 id="item-modal-title">Add Account/Post to Track</h3>
          <button class="btn ghost small" id="item-modal-close" type="button">&times;</button>
        </div>
        <form id="item-form">
          <label for="item-platform">Platform</label>
          <select id="item-platform" required></select>

          <label for="item-profile">Account Username / Profile Link</label>
          <input type="text" id="item-profile" placeholder="e.g., @yourhandle or profile URL" required />

          <div id="mode-row">
            <label>What do you want to track?</label>
            <div class="row" style="align-items: center;">
              <label style="margin: 0; display: flex; align-items: center; gap: 6px;">
                <input type="radio" name="track-mode" id="mode-account" style="width: auto;" checked />
                A Social Media Account
              </label>
              <label style="margin: 0; display: flex; align-items: center; gap: 6px;">
                <input type="radio" name="track-mode" id="mode-post" style="width: auto;" />
                A Specific Post
              </label>
            </div>
          </div>

          <div class="hidden" id="post-section">
            <h3 style="margin-top: 16px;">Post Details</h3>

            <label for="item-link">Post Link / Identifier</label>
            <input type="text" id="item-link" placeholder="e.g., URL to post or unique video ID" />

            <label for="item-caption">Caption Summary (for AI Analysis)</label>
            <textarea id="item-caption" rows="2" placeholder="Brief summary of the post content."></textarea>

            <label for="item-notes">Notes (Optional)</label>
            <textarea id="item-notes" rows="2" placeholder="Optional notes about this post..."></textarea>

            <div class="metrics-grid">
              <span>
                <label for="item-likes">Likes</label>
                <input type="number" id="item-likes" min="0" value="0" />
              </span>
              <span>
                <label for="item-comments">Comments</label>
                <input type="number" id="item-comments" min="0" value="0" />
              </span>
              <span>
                <label for="item-shares">Shares</label>
                <input type="number" id="item-shares" min="0" value="0" />
              </span>
              <span>
                <label for="item-views">Views (Optional)</label>
                <input type="number" id="item-views" min="0" />
              </span>
            </div>

            <div class="assist-box hidden" id="analyze-box">
              <button class="btn small teal" id="analyze-btn" type="button">Analyze Performance with AI</button>
              <p class="form-hint hidden" id="analyze-busy">Analyzing...</p>
              <p class="form-error" id="analyze-error"></p>
              <div class="assist-result hidden" id="analyze-result">
                <p class="assist-result-title">AI Analysis:</p>
                <p class="prewrap" id="analyze-text"></p>
              </div>
            </div>
          </div>

          <div class="dialog-actions">
            <button class="btn ghost" id="item-cancel" type="button">Cancel</button>
            <button class="btn" id="item-save" type="submit">Start Tracking</button>
          </div>
        </form>
      </div>
    </div>

    <div class="overlay" id="goal-modal">
      <div class="dialog">
        <div class="dialog-head">
          <h3 id="goal-modal-title">Set Goal</h3>
          <button class="btn ghost small" id="goal-modal-close" type="button">&times;</button>
        </div>
        <form id="goal-form">
          <label for="goal-desc">Goal Description</label>
          <input type="text" id="goal-desc" placeholder="e.g., Reach 10k Followers" required />

          <label for="goal-metric">Metric Name</label>
          <input type="text" id="goal-metric" placeholder="e.g., Followers, Subscribers" />

          <label for="goal-target">Target Value</label>
          <input type="number" id="goal-target" min="0" required />

          <label for="goal-current">Current Value (Optional)</label>
          <input type="number" id="goal-current" min="0" />

          <div class="dialog-actions">
            <button class="btn ghost" id="goal-cancel" type="button">Cancel</button>
            <button class="btn green" type="submit">Set Goal</button>
          </div>
        </form>
      </div>
    </div>
"#;

const SCRIPT: &str = r#"    const newItemBtn = document.getElementById('new-item-btn');
    const trackerEmpty = document.getElementById('tracker-empty');
    const accountList = document.getElementById('account-list');
    const itemTitle = document.getElementById('item-modal-title');
    const itemForm = document.getElementById('item-form');
    const itemPlatform = document.getElementById('item-platform');
    const itemProfile = document.getElementById('item-profile');
    const modeRow = document.getElementById('mode-row');
    const modeAccount = document.getElementById('mode-account');
    const modePost = document.getElementById('mode-post');
    const postSection = document.getElementById('post-section');
    const itemLink = document.getElementById('item-link');
    const itemCaption = document.getElementById('item-caption');
    const itemNotes = document.getElementById('item-notes');
    const itemLikes = document.getElementById('item-likes');
    const itemComments = document.getElementById('item-comments');
    const itemShares = document.getElementById('item-shares');
    const itemViews = document.getElementById('item-views');
    const analyzeBox = document.getElementById('analyze-box');
    const analyzeBtn = document.getElementById('analyze-btn');
    const analyzeBusy = document.getElementById('analyze-busy');
    const analyzeError = document.getElementById('analyze-error');
    const analyzeResult = document.getElementById('analyze-result');
    const analyzeText = document.getElementById('analyze-text');
    const itemSave = document.getElementById('item-save');
    const goalTitle = document.getElementById('goal-modal-title');
    const goalForm = document.getElementById('goal-form');
    const goalDesc = document.getElementById('goal-desc');
    const goalMetric = document.getElementById('goal-metric');
    const goalTarget = document.getElementById('goal-target');
    const goalCurrent = document.getElementById('goal-current');

    let accounts = [];
    let itemMode = 'new';
    let itemAccount = null;
    let itemPost = null;
    let goalAccount = null;

    const metricValue = (input) => {
      const parsed = parseInt(input.value, 10);
      return Number.isNaN(parsed) || parsed < 0 ? 0 : parsed;
    };

    const truncate = (value, max) => {
      return value.length > max ? value.substring(0, max - 3) + '...' : value;
    };

    const loadAccounts = async () => {
      accounts = await api('/api/accounts');
      renderAccounts();
    };

    const renderGoal = (goal) => {
      const metric = goal.metric_name ? ' (' + escapeHtml(goal.metric_name) + ')' : '';
      const hasCurrent = goal.current_value !== null && goal.current_value !== undefined;
      const counts = hasCurrent
        ? '<span class="muted">' + goal.current_value.toLocaleString() + ' / ' + goal.target_value.toLocaleString() + '</span>'
        : '';
      let bar = '';
      if (goal.target_value > 0 && hasCurrent) {
        const progress = Math.min((goal.current_value / goal.target_value) * 100, 100);
        bar = `<div class="goal-bar"><div class="goal-fill" style="width:${progress}%"></div></div>`;
      }
      return `
        <div class="goal-strip">
          <div class="card-row">
            <p class="goal-label">Goal: ${escapeHtml(goal.description)}${metric}</p>
            ${counts}
          </div>
          ${bar}
        </div>`;
    };

    const renderPost = (post) => {
      const caption = post.caption_summary
        ? '<p class="muted"><em>"' + escapeHtml(post.caption_summary) + '"</em></p>'
        : '';
      const notes = post.notes
        ? '<p class="muted">Notes: <em>' + escapeHtml(post.notes) + '</em></p>'
        : '';
      const views = post.metrics.views > 0
        ? '<span><span class="label">Views:</span>' + post.metrics.views.toLocaleString() + '</span>'
        : '';
      const insights = assist.available && post.caption_summary
        ? '<button class="btn ghost small" data-action="insights" type="button">Get AI Insights</button>'
        : '';
      return `
        <div class="tracked-post" data-post="${post.id}">
          <div class="card-row">
            <p class="card-title" title="${escapeHtml(post.post_link)}">${escapeHtml(truncate(post.post_link, 25))}</p>
            <div class="card-actions">
              ${insights}
              <button class="btn ghost small" data-action="edit-post" type="button">Edit</button>
              <button class="btn ghost small danger" data-action="delete-post" type="button">Delete</button>
            </div>
          </div>
          ${caption}
          ${notes}
          <div class="metrics-grid">
            <span><span class="label">Likes:</span>${post.metrics.likes.toLocaleString()}</span>
            <span><span class="label">Comments:</span>${post.metrics.comments.toLocaleString()}</span>
            <span><span class="label">Shares:</span>${post.metrics.shares.toLocaleString()}</span>
            ${views}
          </div>
          <p class="muted">Last Updated: ${new Date(post.metrics.last_updated).toLocaleDateString()}</p>
          <div class="insight hidden" data-insight="${post.id}"></div>
        </div>`;
    };

    const renderAccounts = () => {
      trackerEmpty.classList.toggle('hidden', accounts.length !== 0);
      accountList.innerHTML = accounts.map((account) => {
        const goal = account.goal ? renderGoal(account.goal) : '';
        const postsHtml = account.posts.length === 0
          ? '<p class="muted center">No posts tracked for this account yet.</p>'
          : account.posts.map((post) => renderPost(post)).join('');
        return `
          <article class="account-card" data-account="${account.id}">
            <div class="account-head">
              <div>
                <p class="card-title">${escapeHtml(account.profile_link)}</p>
                <p class="muted">${escapeHtml(platformName(account.platform_id))}</p>
              </div>
              <div class="card-actions">
                <button class="btn ghost small green" data-action="goal" type="button">Goal</button>
                <button class="btn ghost small" data-action="add-post" type="button">Add Post</button>
                <button class="btn ghost small" data-action="edit-account" type="button">Edit</button>
                <button class="btn ghost small danger" data-action="delete-account" type="button">Delete</button>
              </div>
            </div>
            ${goal}
            <div class="account-posts">${postsHtml}</div>
          </article>`;
      }).join('');
    };

    const clearPostFields = () => {
      itemLink.value = '';
      itemCaption.value = '';
      itemNotes.value = '';
      itemLikes.value = 0;
      itemComments.value = 0;
      itemShares.value = 0;
      itemViews.value = '';
    };

    const syncAnalyzeBox = () => {
      const postVisible = !postSection.classList.contains('hidden');
      analyzeBox.classList.toggle('hidden', !assist.available || !postVisible);
    };

    const openItemEditor = (mode, account, post) => {
      itemMode = mode;
      itemAccount = account;
      itemPost = post;
      analyzeError.textContent = '';
      analyzeResult.classList.add('hidden');
      modeRow.classList.toggle('hidden', mode !== 'new');
      modeAccount.checked = true;
      modePost.checked = false;
      if (mode === 'new') {
        itemTitle.textContent = 'Add Account/Post to Track';
        itemSave.textContent = 'Start Tracking';
        itemPlatform.disabled = false;
        itemPlatform.value = platforms[0] ? platforms[0].id : '';
        itemProfile.disabled = false;
        itemProfile.value = '';
        postSection.classList.add('hidden');
        clearPostFields();
      } else if (mode === 'edit-account') {
        itemTitle.textContent = 'Edit Tracked Account';
        itemSave.textContent = 'Save Changes';
        itemPlatform.disabled = false;
        itemPlatform.value = account.platform_id;
        itemProfile.disabled = false;
        itemProfile.value = account.profile_link;
        postSection.classList.add('hidden');
      } else if (mode === 'new-post') {
        itemTitle.textContent = 'Add New Post to Track';
        itemSave.textContent = 'Add Post';
        itemPlatform.disabled = true;
        itemPlatform.value = account.platform_id;
        itemProfile.disabled = true;
        itemProfile.value = account.profile_link;
        postSection.classList.remove('hidden');
        clearPostFields();
      } else {
        itemTitle.textContent = 'Edit Tracked Post';
        itemSave.textContent = 'Save Changes';
        itemPlatform.disabled = true;
        itemPlatform.value = post.platform_id;
        itemProfile.disabled = true;
        itemProfile.value = account.profile_link;
        postSection.classList.remove('hidden');
        itemLink.value = post.post_link;
        itemCaption.value = post.caption_summary || '';
        itemNotes.value = post.notes || '';
        itemLikes.value = post.metrics.likes;
        itemComments.value = post.metrics.comments;
        itemShares.value = post.metrics.shares;
        itemViews.value = post.metrics.views > 0 ? post.metrics.views : '';
      }
      syncAnalyzeBox();
      openModal('item-modal');
    };

    const collectPostPayload = () => {
      const link = itemLink.value.trim();
      if (!link) {
        window.alert('Platform and Post Link/Identifier are required for tracking a post.');
        return null;
      }
      const caption = itemCaption.value.trim();
      const notes = itemNotes.value.trim();
      return {
        post_link: link,
        caption_summary: caption === '' ? null : caption,
        notes: notes === '' ? null : notes,
        metrics: {
          likes: metricValue(itemLikes),
          comments: metricValue(itemComments),
          shares: metricValue(itemShares),
          views: metricValue(itemViews)
        }
      };
    };

    itemForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const platformId = itemPlatform.value;
      const profileLink = itemProfile.value.trim();
      if ((itemMode === 'new' || itemMode === 'edit-account') && (!platformId || !profileLink)) {
        window.alert('Platform and Username/Profile Link are required for tracking an account.');
        return;
      }
      const wantsPost = itemMode === 'new-post' || itemMode === 'edit-post'
        || (itemMode === 'new' && modePost.checked);
      let postPayload = null;
      if (wantsPost) {
        postPayload = collectPostPayload();
        if (!postPayload) {
          return;
        }
      }
      try {
        if (itemMode === 'edit-account') {
          await sendJson(`/api/accounts/${itemAccount.id}`, 'PUT', {
            platform_id: platformId,
            profile_link: profileLink
          });
        } else if (itemMode === 'new') {
          const account = await sendJson('/api/accounts', 'POST', {
            platform_id: platformId,
            profile_link: profileLink
          });
          if (postPayload) {
            await sendJson(`/api/accounts/${account.id}/posts`, 'POST', postPayload);
          }
        } else if (itemMode === 'new-post') {
          await sendJson(`/api/accounts/${itemAccount.id}/posts`, 'POST', postPayload);
        } else {
          await sendJson(`/api/accounts/${itemAccount.id}/posts/${itemPost.id}`, 'PUT', postPayload);
        }
        closeModal('item-modal');
        await loadAccounts();
      } catch (err) {
        window.alert(err.message);
      }
    });

    analyzeBtn.addEventListener('click', async () => {
      analyzeError.textContent = '';
      const caption = itemCaption.value.trim();
      if (!itemPlatform.value || !caption) {
        analyzeError.textContent = 'Platform and caption summary are needed for analysis.';
        return;
      }
      analyzeBusy.classList.remove('hidden');
      analyzeBtn.disabled = true;
      analyzeResult.classList.add('hidden');
      try {
        const result = await sendJson('/api/assist/analysis', 'POST', {
          platform_id: itemPlatform.value,
          caption_summary: caption,
          metrics: {
            likes: metricValue(itemLikes),
            comments: metricValue(itemComments),
            shares: metricValue(itemShares),
            views: metricValue(itemViews)
          }
        });
        analyzeText.textContent = result.analysis;
        analyzeResult.classList.remove('hidden');
      } catch (err) {
        analyzeError.textContent = err.message;
      } finally {
        analyzeBusy.classList.add('hidden');
        analyzeBtn.disabled = false;
      }
    });

    const fetchInsights = async (post) => {
      const box = accountList.querySelector(`[data-insight="${post.id}"]`);
      box.classList.remove('hidden', 'error');
      box.textContent = 'Analyzing...';
      try {
        const result = await sendJson('/api/assist/analysis', 'POST', {
          platform_id: post.platform_id,
          caption_summary: post.caption_summary,
          metrics: {
            likes: post.metrics.likes,
            comments: post.metrics.comments,
            shares: post.metrics.shares,
            views: post.metrics.views
          }
        });
        box.innerHTML = '<strong>AI:</strong> ' + escapeHtml(result.analysis);
      } catch (err) {
        box.classList.add('error');
        box.textContent = err.message;
      }
    };

    const removeAccount = async (account) => {
      if (!window.confirm('Are you sure you want to delete this tracked account and all its posts?')) {
        return;
      }
      try {
        await api(`/api/accounts/${account.id}`, { method: 'DELETE' });
        await loadAccounts();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const removeTrackedPost = async (account, post) => {
      if (!window.confirm('Are you sure you want to delete this tracked post?')) {
        return;
      }
      try {
        await api(`/api/accounts/${account.id}/posts/${post.id}`, { method: 'DELETE' });
        await loadAccounts();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const openGoal = (account) => {
      goalAccount = account;
      goalTitle.textContent = `Set Goal for ${account.profile_link}`;
      const goal = account.goal;
      goalDesc.value = goal ? goal.description : '';
      goalMetric.value = goal && goal.metric_name ? goal.metric_name : 'Followers';
      goalTarget.value = goal ? goal.target_value : '';
      goalCurrent.value = goal && goal.current_value !== null && goal.current_value !== undefined
        ? goal.current_value
        : '';
      openModal('goal-modal');
    };

    goalForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const description = goalDesc.value.trim();
      if (!description) {
        window.alert('Please provide a goal description.');
        return;
      }
      const target = parseInt(goalTarget.value, 10);
      const current = parseInt(goalCurrent.value, 10);
      const metric = goalMetric.value.trim();
      try {
        await sendJson(`/api/accounts/${goalAccount.id}/goal`, 'PUT', {
          description,
          target_value: Number.isNaN(target) || target < 0 ? 0 : target,
          current_value: Number.isNaN(current) ? null : current,
          metric_name: metric === '' ? null : metric
        });
        closeModal('goal-modal');
        await loadAccounts();
      } catch (err) {
        window.alert(err.message);
      }
    });

    accountList.addEventListener('click', (event) => {
      const button = event.target.closest('button[data-action]');
      if (!button) {
        return;
      }
      const accountEl = button.closest('[data-account]');
      const account = accounts.find((candidate) => candidate.id === accountEl.dataset.account);
      if (!account) {
        return;
      }
      const postEl = button.closest('[data-post]');
      const post = postEl ? account.posts.find((candidate) => candidate.id === postEl.dataset.post) : null;
      if (button.dataset.action === 'goal') {
        openGoal(account);
      } else if (button.dataset.action === 'add-post') {
        openItemEditor('new-post', account, null);
      } else if (button.dataset.action === 'edit-account') {
        openItemEditor('edit-account', account, null);
      } else if (button.dataset.action === 'delete-account') {
        removeAccount(account);
      } else if (post && button.dataset.action === 'insights') {
        fetchInsights(post);
      } else if (post && button.dataset.action === 'edit-post') {
        openItemEditor('edit-post', account, post);
      } else if (post && button.dataset.action === 'delete-post') {
        removeTrackedPost(account, post);
      }
    });

    modeAccount.addEventListener('change', () => {
      if (itemMode === 'new') {
        postSection.classList.add('hidden');
        syncAnalyzeBox();
      }
    });

    modePost.addEventListener('change', () => {
      if (itemMode === 'new') {
        postSection.classList.remove('hidden');
        syncAnalyzeBox();
      }
    });

    newItemBtn.addEventListener('click', () => {
      openItemEditor('new', null, null);
    });

    document.getElementById('item-cancel').addEventListener('click', () => {
      closeModal('item-modal');
    });

    document.getElementById('item-modal-close').addEventListener('click', () => {
      closeModal('item-modal');
    });

    document.getElementById('goal-cancel').addEventListener('click', () => {
      closeModal('goal-modal');
    });

    document.getElementById('goal-modal-close').addEventListener('click', () => {
      closeModal('goal-modal');
    });

    const fillPlatformSelect = () => {
      itemPlatform.innerHTML = platforms
        .map((platform) => '<option value="' + platform.id + '">' + escapeHtml(platform.name) + '</option>')
        .join('');
    };

    const init = async () => {
      await Promise.all([loadPlatforms(), loadAssist()]);
      fillPlatformSelect();
      await loadAccounts();
    };

    init().catch((err) => setStatus(err.message, 'error'));
"#;
