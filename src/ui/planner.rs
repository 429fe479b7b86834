pub fn page(dark_mode: bool) -> String {
    super::render("planner", MAIN, SCRIPT, dark_mode)
}

const MAIN: &str = r#"    <div class="page-head">
      <h2>Content Planner</h2>
      <div class="toolbar">
        <button class="btn ghost" id="view-toggle" type="button">Calendar View</button>
        <button class="btn ghost" id="export-btn" type="button">Export CSV</button>
        <button class="btn" id="new-post-btn" type="button">Schedule Post</button>
      </div>
    </div>

    <section id="list-view">
      <div class="empty hidden" id="posts-empty">
        <p class="empty-title">No posts scheduled yet.</p>
        <p>Click "Schedule Post" to get started or switch to Calendar View!</p>
      </div>
      <div class="stack" id="post-list"></div>
    </section>

    <section class="hidden" id="calendar-view">
      <div class="calendar-head">
        <button class="btn ghost" id="cal-prev" type="button">&lt; Prev</button>
        <div class="calendar-title">
          <h3 id="cal-label"></h3>
          <button class="btn ghost small" id="cal-today" type="button">Today</button>
        </div>
        <button class="btn ghost" id="cal-next" type="button">Next &gt;</button>
      </div>
      <div class="calendar-grid" id="cal-headers"></div>
      <div class="calendar-grid" id="cal-cells" style="margin-top: 4px;"></div>
    </section>

    <div class="overlay" id="post-modal">
      <div class="dialog">
        <div class="dialog-head">
          <h3 id="post-modal-title">Schedule New Post</h3>
          <button class="btn ghost small" id="post-modal-close" type="button">&times;</button>
        </div>
        <form id="post-form">
          <label for="post-platform">Platform</label>
          <select id="post-platform" required></select>

          <label for="post-username">Username / Link</label>
          <input type="text" id="post-username" placeholder="e.g., @yourhandle or profile URL" required />

          <div class="assist-box hidden" id="idea-box">
            <h4>AI Content Assistant</h4>
            <label for="idea-topic">Topic for AI</label>
            <div class="row">
              <input type="text" id="idea-topic" placeholder="e.g., 'healthy breakfast ideas'" />
              <button class="btn small teal" id="idea-btn" type="button">Suggest</button>
            </div>
            <p class="form-hint hidden" id="idea-busy">Generating content...</p>
            <p class="form-error" id="idea-error"></p>
          </div>

          <label for="post-content">Content</label>
          <textarea id="post-content" rows="5" placeholder="Write your post content here..." required></textarea>
          <p class="form-hint hidden" id="ai-note">Content assisted by AI &#10024;</p>

          <div class="assist-box hidden" id="repurpose-box">
            <h4>AI Content Repurposing</h4>
            <label for="repurpose-target">Repurpose for</label>
            <div class="row">
              <select id="repurpose-target"></select>
              <button class="btn small purple" id="repurpose-btn" type="button">Repurpose</button>
            </div>
            <p class="form-hint hidden" id="repurpose-busy">AI is thinking...</p>
            <p class="form-error" id="repurpose-error"></p>
            <div class="assist-result hidden" id="repurpose-result">
              <p class="assist-result-title" id="repurpose-title"></p>
              <p class="prewrap" id="repurpose-content"></p>
              <p class="form-hint hidden" id="repurpose-notes"></p>
              <button class="btn small purple" id="repurpose-apply" type="button">Use this content &amp; switch platform</button>
            </div>
          </div>

          <label for="post-time">Scheduled Time</label>
          <input type="datetime-local" id="post-time" required />

          <label for="post-media">Media URL (Optional)</label>
          <input type="text" id="post-media" placeholder="https://example.com/image.jpg" />

          <div class="dialog-actions">
            <button class="btn ghost" id="post-cancel" type="button">Cancel</button>
            <button class="btn" id="post-save" type="submit">Schedule Post</button>
          </div>
        </form>
      </div>
    </div>
"#;

const SCRIPT: &str = r#"    const viewToggle = document.getElementById('view-toggle');
    const exportBtn = document.getElementById('export-btn');
    const newPostBtn = document.getElementById('new-post-btn');
    const listView = document.getElementById('list-view');
    const postsEmpty = document.getElementById('posts-empty');
    const postList = document.getElementById('post-list');
    const calendarView = document.getElementById('calendar-view');
    const calLabel = document.getElementById('cal-label');
    const calHeaders = document.getElementById('cal-headers');
    const calCells = document.getElementById('cal-cells');
    const modalTitle = document.getElementById('post-modal-title');
    const postForm = document.getElementById('post-form');
    const platformSelect = document.getElementById('post-platform');
    const usernameInput = document.getElementById('post-username');
    const ideaBox = document.getElementById('idea-box');
    const topicInput = document.getElementById('idea-topic');
    const ideaBtn = document.getElementById('idea-btn');
    const ideaBusy = document.getElementById('idea-busy');
    const ideaError = document.getElementById('idea-error');
    const contentInput = document.getElementById('post-content');
    const aiNote = document.getElementById('ai-note');
    const repurposeBox = document.getElementById('repurpose-box');
    const repurposeTarget = document.getElementById('repurpose-target');
    const repurposeBtn = document.getElementById('repurpose-btn');
    const repurposeBusy = document.getElementById('repurpose-busy');
    const repurposeError = document.getElementById('repurpose-error');
    const repurposeResult = document.getElementById('repurpose-result');
    const repurposeTitle = document.getElementById('repurpose-title');
    const repurposeContent = document.getElementById('repurpose-content');
    const repurposeNotes = document.getElementById('repurpose-notes');
    const repurposeApply = document.getElementById('repurpose-apply');
    const timeInput = document.getElementById('post-time');
    const mediaInput = document.getElementById('post-media');
    const saveBtn = document.getElementById('post-save');

    const STATUS_BADGES = { scheduled: 'badge blue', posted: 'badge green', failed: 'badge red' };
    const DAY_NAMES = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];

    let posts = [];
    let editing = null;
    let aiAssisted = false;
    let pendingRepurpose = null;
    let calendarOpen = false;
    let calYear = null;
    let calMonth = null;
    let prevRef = null;
    let nextRef = null;

    const loadPosts = async () => {
      posts = await api('/api/posts');
      renderList();
    };

    const renderList = () => {
      postsEmpty.classList.toggle('hidden', posts.length !== 0);
      postList.innerHTML = posts.map((post) => {
        const when = new Date(post.scheduled_at);
        const pastDue = post.status === 'scheduled' && when.getTime() < Date.now();
        const badge = STATUS_BADGES[post.status] || 'badge';
        const aiMark = post.ai_assisted ? ' <span class="ai-mark" title="AI-assisted content">&#10024;</span>' : '';
        const dueTag = pastDue ? ' <span class="warn-tag">(Past due)</span>' : '';
        const media = post.media_url
          ? '<img class="media-preview" src="' + escapeHtml(post.media_url) + '" alt="Post media" />'
          : '';
        const marks = post.status === 'scheduled'
          ? '<span class="mini-actions"><button class="btn ghost small" data-action="mark-posted" type="button">Mark Posted</button><button class="btn ghost small" data-action="mark-failed" type="button">Mark Failed</button></span>'
          : '';
        return `
          <article class="card post-card${pastDue ? ' past-due' : ''}" data-id="${post.id}">
            <div class="card-row">
              <div>
                <p class="card-title">${escapeHtml(platformName(post.platform_id))}${aiMark}</p>
                <p class="muted">To: ${escapeHtml(post.username_or_link)}</p>
                <p class="muted">Scheduled: ${when.toLocaleString()}${dueTag}</p>
              </div>
              <div class="card-actions">
                <button class="btn ghost small" data-action="edit" type="button">Edit</button>
                <button class="btn ghost small danger" data-action="delete" type="button">Delete</button>
              </div>
            </div>
            <p class="prewrap">${escapeHtml(post.content)}</p>
            ${media}
            <div class="card-row">
              <span class="${badge}">Status: ${post.status}</span>
              ${marks}
            </div>
          </article>`;
      }).join('');
    };

    const fillPlatformSelect = () => {
      platformSelect.innerHTML = platforms
        .map((platform) => '<option value="' + platform.id + '">' + escapeHtml(platform.name) + '</option>')
        .join('');
    };

    const fillRepurposeTargets = () => {
      repurposeTarget.innerHTML = platforms
        .filter((platform) => platform.id !== platformSelect.value)
        .map((platform) => '<option value="' + platform.id + '">' + escapeHtml(platform.name) + '</option>')
        .join('');
    };

    const syncAssistBoxes = () => {
      ideaBox.classList.toggle('hidden', !assist.available);
      repurposeBox.classList.toggle('hidden', !assist.available || contentInput.value.trim() === '');
    };

    const openEditor = (post) => {
      editing = post;
      pendingRepurpose = null;
      aiAssisted = post ? post.ai_assisted : false;
      modalTitle.textContent = post ? 'Edit Scheduled Post' : 'Schedule New Post';
      saveBtn.textContent = post ? 'Save Changes' : 'Schedule Post';
      platformSelect.value = post ? post.platform_id : platforms[0] ? platforms[0].id : '';
      usernameInput.value = post ? post.username_or_link : '';
      contentInput.value = post ? post.content : '';
      timeInput.value = post
        ? new Date(post.scheduled_at).toISOString().substring(0, 16)
        : new Date(Date.now() + 3600000).toISOString().substring(0, 16);
      mediaInput.value = post && post.media_url ? post.media_url : '';
      topicInput.value = '';
      ideaError.textContent = '';
      repurposeError.textContent = '';
      repurposeResult.classList.add('hidden');
      aiNote.classList.toggle('hidden', !aiAssisted);
      fillRepurposeTargets();
      syncAssistBoxes();
      openModal('post-modal');
    };

    const removePost = async (post) => {
      if (!window.confirm('Are you sure you want to delete this scheduled post?')) {
        return;
      }
      try {
        await api(`/api/posts/${post.id}`, { method: 'DELETE' });
        await loadPosts();
        if (calendarOpen) {
          await loadCalendar();
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const setPostStatus = async (post, status) => {
      try {
        await sendJson(`/api/posts/${post.id}`, 'PUT', {
          platform_id: post.platform_id,
          username_or_link: post.username_or_link,
          content: post.content,
          scheduled_at: post.scheduled_at,
          status,
          media_url: post.media_url,
          ai_assisted: post.ai_assisted
        });
        await loadPosts();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    postList.addEventListener('click', (event) => {
      const button = event.target.closest('button[data-action]');
      if (!button) {
        return;
      }
      const card = button.closest('[data-id]');
      const post = posts.find((candidate) => candidate.id === card.dataset.id);
      if (!post) {
        return;
      }
      if (button.dataset.action === 'edit') {
        openEditor(post);
      } else if (button.dataset.action === 'delete') {
        removePost(post);
      } else if (button.dataset.action === 'mark-posted') {
        setPostStatus(post, 'posted');
      } else if (button.dataset.action === 'mark-failed') {
        setPostStatus(post, 'failed');
      }
    });

    postForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      if (!platformSelect.value || !usernameInput.value.trim() || !contentInput.value.trim() || !timeInput.value) {
        window.alert('Please fill in all required fields: Platform, Username/Link, Content, and Scheduled Time.');
        return;
      }
      const payload = {
        platform_id: platformSelect.value,
        username_or_link: usernameInput.value.trim(),
        content: contentInput.value,
        scheduled_at: new Date(timeInput.value).toISOString(),
        status: editing ? editing.status : 'scheduled',
        media_url: mediaInput.value.trim() === '' ? null : mediaInput.value.trim(),
        ai_assisted: aiAssisted
      };
      try {
        if (editing) {
          await sendJson(`/api/posts/${editing.id}`, 'PUT', payload);
        } else {
          await sendJson('/api/posts', 'POST', payload);
        }
        closeModal('post-modal');
        await loadPosts();
        if (calendarOpen) {
          await loadCalendar();
        }
      } catch (err) {
        window.alert(err.message);
      }
    });

    ideaBtn.addEventListener('click', async () => {
      const topic = topicInput.value.trim();
      ideaError.textContent = '';
      if (!topic || !platformSelect.value) {
        ideaError.textContent = 'Please enter a topic and select a platform.';
        return;
      }
      ideaBusy.classList.remove('hidden');
      ideaBtn.disabled = true;
      try {
        const suggestion = await sendJson('/api/assist/idea', 'POST', {
          platform_id: platformSelect.value,
          topic
        });
        contentInput.value = suggestion.caption + '\n\n' + suggestion.hashtags.join(' ');
        aiAssisted = true;
        aiNote.classList.remove('hidden');
        syncAssistBoxes();
      } catch (err) {
        ideaError.textContent = err.message;
      } finally {
        ideaBusy.classList.add('hidden');
        ideaBtn.disabled = false;
      }
    });

    contentInput.addEventListener('input', () => {
      syncAssistBoxes();
    });

    platformSelect.addEventListener('change', () => {
      fillRepurposeTargets();
    });

    repurposeBtn.addEventListener('click', async () => {
      repurposeError.textContent = '';
      const target = repurposeTarget.value;
      if (!contentInput.value.trim() || !platformSelect.value || !target) {
        repurposeError.textContent = 'Current content, original platform, and target platform for repurposing are required.';
        return;
      }
      repurposeBusy.classList.remove('hidden');
      repurposeBtn.disabled = true;
      repurposeResult.classList.add('hidden');
      try {
        const suggestion = await sendJson('/api/assist/repurpose', 'POST', {
          platform_id: platformSelect.value,
          target_platform_id: target,
          content: contentInput.value
        });
        repurposeTitle.textContent = `AI Suggestion for ${suggestion.platformName}:`;
        repurposeContent.textContent = suggestion.repurposedContent;
        if (suggestion.notes) {
          repurposeNotes.textContent = `Notes: ${suggestion.notes}`;
          repurposeNotes.classList.remove('hidden');
        } else {
          repurposeNotes.classList.add('hidden');
        }
        pendingRepurpose = { content: suggestion.repurposedContent, target };
        repurposeResult.classList.remove('hidden');
      } catch (err) {
        repurposeError.textContent = err.message;
      } finally {
        repurposeBusy.classList.add('hidden');
        repurposeBtn.disabled = false;
      }
    });

    repurposeApply.addEventListener('click', () => {
      if (!pendingRepurpose) {
        return;
      }
      contentInput.value = pendingRepurpose.content;
      platformSelect.value = pendingRepurpose.target;
      aiAssisted = true;
      aiNote.classList.remove('hidden');
      pendingRepurpose = null;
      repurposeResult.classList.add('hidden');
      fillRepurposeTargets();
    });

    const loadCalendar = async () => {
      const query = calYear === null ? '' : `?year=${calYear}&month=${calMonth}`;
      const grid = await api(`/api/calendar${query}`);
      calYear = grid.year;
      calMonth = grid.month;
      prevRef = grid.prev;
      nextRef = grid.next;
      calLabel.textContent = grid.label;
      calCells.innerHTML = grid.cells.map((cell) => {
        const events = cell.events.map((entry) => {
          return '<button class="cal-event" type="button" data-post="' + entry.post_id + '"'
            + ' style="background:' + entry.color + '" title="' + escapeHtml(entry.content_preview) + '">'
            + entry.time + ' ' + escapeHtml(entry.content_preview) + '</button>';
        }).join('');
        const more = cell.more_events > 0 ? `<div class="cal-more">+${cell.more_events} more</div>` : '';
        const classes = `cal-cell${cell.in_month ? '' : ' out'}${cell.is_today ? ' today' : ''}`;
        return `<div class="${classes}"><div class="cal-day">${cell.day}</div>${events}${more}</div>`;
      }).join('');
    };

    calCells.addEventListener('click', (event) => {
      const pill = event.target.closest('button[data-post]');
      if (!pill) {
        return;
      }
      const post = posts.find((candidate) => candidate.id === pill.dataset.post);
      if (post) {
        openEditor(post);
      }
    });

    document.getElementById('cal-prev').addEventListener('click', () => {
      if (prevRef) {
        calYear = prevRef.year;
        calMonth = prevRef.month;
        loadCalendar().catch((err) => setStatus(err.message, 'error'));
      }
    });

    document.getElementById('cal-next').addEventListener('click', () => {
      if (nextRef) {
        calYear = nextRef.year;
        calMonth = nextRef.month;
        loadCalendar().catch((err) => setStatus(err.message, 'error'));
      }
    });

    document.getElementById('cal-today').addEventListener('click', () => {
      calYear = null;
      calMonth = null;
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
    });

    viewToggle.addEventListener('click', () => {
      calendarOpen = !calendarOpen;
      viewToggle.textContent = calendarOpen ? 'List View' : 'Calendar View';
      listView.classList.toggle('hidden', calendarOpen);
      calendarView.classList.toggle('hidden', !calendarOpen);
      if (calendarOpen) {
        loadCalendar().catch((err) => setStatus(err.message, 'error'));
      }
    });

    exportBtn.addEventListener('click', () => {
      downloadCsv('/api/posts/export', 'scheduled_posts.csv')
        .catch((err) => setStatus(err.message, 'error'));
    });

    newPostBtn.addEventListener('click', () => {
      openEditor(null);
    });

    document.getElementById('post-cancel').addEventListener('click', () => {
      closeModal('post-modal');
    });

    document.getElementById('post-modal-close').addEventListener('click', () => {
      closeModal('post-modal');
    });

    const init = async () => {
      await Promise.all([loadPlatforms(), loadAssist()]);
      fillPlatformSelect();
      calHeaders.innerHTML = DAY_NAMES
        .map((name) => '<div class="cal-head-cell">' + name + '</div>')
        .join('');
      await loadPosts();
    };

    init().catch((err) => setStatus(err.message, 'error'));
"#;
