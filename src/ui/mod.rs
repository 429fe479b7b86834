pub mod home;
pub mod monetization;
pub mod planner;
pub mod tracker;

fn nav_class(active: bool) -> &'static str {
    if active {
        " active"
    } else {
        ""
    }
}

/// Every page is the shared shell with its own main block and script spliced
/// in. Dark mode is decided server side so the first paint is already themed.
fn render(active: &str, main: &str, script: &str, dark_mode: bool) -> String {
    SHELL
        .replace("{{THEME}}", if dark_mode { "dark" } else { "" })
        .replace("{{NAV_HOME}}", nav_class(active == "home"))
        .replace("{{NAV_PLANNER}}", nav_class(active == "planner"))
        .replace("{{NAV_TRACKER}}", nav_class(active == "tracker"))
        .replace("{{NAV_MONETIZATION}}", nav_class(active == "monetization"))
        .replace("{{MAIN}}", main)
        .replace("{{SCRIPT}}", script)
}

const SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Social Media Suite</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg: #f3f4f6;
      --panel: #ffffff;
      --panel-2: #f9fafb;
      --ink: #1f2937;
      --muted: #6b7280;
      --line: #e5e7eb;
      --accent: #4f46e5;
      --accent-soft: #eef2ff;
      --good: #16a34a;
      --warn: #ca8a04;
      --bad: #dc2626;
      --teal: #0d9488;
      --purple: #9333ea;
      --orange: #ea580c;
      --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
    }

    body.dark {
      --bg: #0f172a;
      --panel: #1e293b;
      --panel-2: #334155;
      --ink: #f1f5f9;
      --muted: #94a3b8;
      --line: #334155;
      --accent: #818cf8;
      --accent-soft: rgba(129, 140, 248, 0.14);
      --good: #4ade80;
      --warn: #facc15;
      --bad: #f87171;
      --teal: #2dd4bf;
      --purple: #c084fc;
      --orange: #fb923c;
      --shadow: 0 10px 30px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      transition: background 200ms ease, color 200ms ease;
    }

    .topbar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 14px;
      padding: 14px 24px;
      background: var(--panel);
      box-shadow: var(--shadow);
      position: sticky;
      top: 0;
      z-index: 20;
    }

    .brand {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: 1.3rem;
      color: var(--accent);
      margin-right: 10px;
    }

    .topbar nav {
      display: flex;
      flex-wrap: wrap;
      gap: 4px;
      flex: 1;
    }

    .nav-link {
      text-decoration: none;
      color: var(--muted);
      padding: 8px 14px;
      border-radius: 999px;
      font-weight: 500;
      transition: background 150ms ease, color 150ms ease;
    }

    .nav-link:hover {
      background: var(--accent-soft);
      color: var(--accent);
    }

    .nav-link.active {
      background: var(--accent);
      color: white;
    }

    .page {
      width: min(1100px, 100%);
      margin: 0 auto;
      padding: 26px 18px 60px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.7rem, 3.5vw, 2.3rem);
      margin: 0 0 22px;
    }

    h2 {
      font-size: 1.35rem;
      margin: 0 0 14px;
    }

    h3 {
      font-size: 1.05rem;
      margin: 0 0 10px;
    }

    .page-head {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
      margin-bottom: 22px;
    }

    .page-head h2 {
      margin: 0;
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
      gap: 16px;
      margin-bottom: 28px;
    }

    .card {
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 18px;
      box-shadow: var(--shadow);
    }

    a.card.action {
      text-decoration: none;
      color: inherit;
      transition: transform 150ms ease;
    }

    a.card.action:hover {
      transform: translateY(-2px);
    }

    a.card.action h3 {
      color: var(--accent);
    }

    a.card.action p {
      color: var(--muted);
      font-size: 0.9rem;
      margin: 0;
    }

    .panel {
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 18px;
      box-shadow: var(--shadow);
      margin-bottom: 24px;
    }

    .metric {
      margin: 4px 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .metric .value {
      font-weight: 600;
      font-size: 1.15rem;
      color: var(--ink);
    }

    .value.good { color: var(--good); }
    .value.bad { color: var(--bad); }
    .metric.warn, .metric.warn .value, .warn-tag { color: var(--warn); }

    .card-link {
      display: inline-block;
      margin-top: 10px;
      color: var(--accent);
      text-decoration: none;
      font-size: 0.9rem;
    }

    .card-link:hover {
      text-decoration: underline;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 10px 16px;
      font-size: 0.92rem;
      font-family: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: filter 150ms ease, transform 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 6px;
    }

    .btn:hover { filter: brightness(1.08); }
    .btn:active { transform: scale(0.98); }
    .btn:disabled { opacity: 0.55; cursor: not-allowed; }

    .btn.ghost {
      background: transparent;
      color: var(--muted);
      border: 1px solid var(--line);
    }

    .btn.ghost:hover {
      color: var(--accent);
      border-color: var(--accent);
    }

    .btn.ghost.danger:hover {
      color: var(--bad);
      border-color: var(--bad);
    }

    .btn.small {
      padding: 6px 10px;
      font-size: 0.8rem;
      border-radius: 8px;
    }

    .btn.teal { background: var(--teal); }
    .btn.purple { background: var(--purple); }
    .btn.orange { background: var(--orange); }
    .btn.green { background: var(--good); }

    .row {
      display: flex;
      gap: 8px;
      align-items: flex-end;
    }

    .row > input, .row > select {
      flex: 1;
    }

    .stack {
      display: grid;
      gap: 14px;
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 20px;
    }

    label {
      display: block;
      font-size: 0.85rem;
      font-weight: 500;
      color: var(--muted);
      margin: 12px 0 4px;
    }

    input, select, textarea {
      width: 100%;
      background: var(--panel-2);
      color: var(--ink);
      border: 1px solid var(--line);
      border-radius: 8px;
      padding: 9px 10px;
      font-family: inherit;
      font-size: 0.92rem;
    }

    input:focus, select:focus, textarea:focus {
      outline: 2px solid var(--accent);
      outline-offset: 0;
      border-color: var(--accent);
    }

    .card-row {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: flex-start;
      gap: 10px;
    }

    .card-title {
      font-weight: 600;
      margin: 0 0 4px;
    }

    .card-actions {
      display: flex;
      gap: 6px;
      flex-wrap: wrap;
    }

    .muted {
      color: var(--muted);
      font-size: 0.9rem;
      margin: 3px 0;
    }

    .center { text-align: center; }

    .prewrap {
      white-space: pre-wrap;
      font-size: 0.93rem;
      margin: 10px 0 6px;
      border-top: 1px solid var(--line);
      padding-top: 10px;
    }

    .badge {
      display: inline-block;
      padding: 3px 10px;
      border-radius: 999px;
      font-size: 0.75rem;
      font-weight: 600;
      background: var(--accent-soft);
      color: var(--accent);
    }

    .badge.blue { background: rgba(59, 130, 246, 0.15); color: #3b82f6; }
    .badge.green { background: rgba(34, 197, 94, 0.15); color: var(--good); }
    .badge.red { background: rgba(239, 68, 68, 0.15); color: var(--bad); }

    .mini-actions { display: inline-flex; gap: 6px; margin-left: 10px; }

    .post-card.past-due { border-left: 4px solid var(--warn); }

    .ai-mark { font-size: 0.85rem; }

    .media-preview {
      max-height: 160px;
      border-radius: 8px;
      margin-top: 8px;
      object-fit: cover;
    }

    .empty {
      text-align: center;
      padding: 44px 10px;
      color: var(--muted);
    }

    .empty-title {
      font-size: 1.2rem;
      margin-bottom: 6px;
    }

    .form-error {
      color: var(--bad);
      font-size: 0.82rem;
      min-height: 1em;
      margin: 6px 0 0;
    }

    .form-hint {
      color: var(--muted);
      font-size: 0.8rem;
      margin: 6px 0 0;
    }

    .assist-box {
      background: var(--panel-2);
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 12px;
      margin-top: 14px;
    }

    .assist-box h4 {
      margin: 0 0 4px;
      font-size: 0.9rem;
      color: var(--accent);
    }

    .assist-box label { margin-top: 8px; }

    .assist-result {
      margin-top: 10px;
      background: var(--accent-soft);
      border-radius: 8px;
      padding: 10px;
      font-size: 0.85rem;
    }

    .assist-result-title {
      font-weight: 600;
      color: var(--purple);
      margin: 0 0 6px;
    }

    .insight {
      margin-top: 8px;
      border-radius: 8px;
      padding: 8px 10px;
      font-size: 0.85rem;
      background: rgba(34, 197, 94, 0.12);
    }

    .insight.error { background: rgba(239, 68, 68, 0.12); color: var(--bad); }

    .goal-strip {
      border-top: 1px solid var(--line);
      border-bottom: 1px solid var(--line);
      background: var(--panel-2);
      padding: 8px 14px;
      font-size: 0.85rem;
    }

    .goal-label {
      color: var(--good);
      font-weight: 600;
      margin: 0;
    }

    .goal-bar {
      width: 100%;
      height: 6px;
      background: var(--line);
      border-radius: 999px;
      margin-top: 6px;
    }

    .goal-fill {
      height: 6px;
      background: var(--good);
      border-radius: 999px;
    }

    .metrics-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(110px, 1fr));
      gap: 6px;
      font-size: 0.85rem;
      margin: 8px 0;
    }

    .metrics-grid .label { color: var(--muted); margin-right: 4px; }

    .tracked-post, .ledger-row {
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 12px;
      background: var(--panel);
    }

    .account-posts {
      display: grid;
      gap: 10px;
      padding: 14px;
    }

    .account-head {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 10px;
      padding: 14px;
      border-bottom: 1px solid var(--line);
      background: var(--panel-2);
      border-radius: 14px 14px 0 0;
    }

    .account-card {
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 14px;
      box-shadow: var(--shadow);
    }

    .calendar-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 10px;
      margin-bottom: 12px;
    }

    .calendar-title {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .calendar-title h3 { margin: 0; }

    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .cal-head-cell {
      text-align: center;
      font-size: 0.8rem;
      font-weight: 600;
      color: var(--muted);
      padding: 6px 0;
    }

    .cal-cell {
      min-height: 96px;
      border: 1px solid var(--line);
      border-radius: 8px;
      background: var(--panel);
      padding: 4px;
      overflow: hidden;
    }

    .cal-cell.out {
      opacity: 0.45;
    }

    .cal-cell.today {
      border-color: var(--accent);
      box-shadow: inset 0 0 0 1px var(--accent);
    }

    .cal-day {
      font-size: 0.8rem;
      font-weight: 600;
      margin-bottom: 4px;
    }

    .cal-cell.today .cal-day { color: var(--accent); }

    .cal-event {
      display: block;
      width: 100%;
      border: none;
      border-radius: 5px;
      color: white;
      font-size: 0.68rem;
      font-family: inherit;
      text-align: left;
      padding: 2px 5px;
      margin-bottom: 3px;
      cursor: pointer;
      white-space: nowrap;
      overflow: hidden;
      text-overflow: ellipsis;
    }

    .cal-more {
      text-align: center;
      font-size: 0.65rem;
      color: var(--muted);
    }

    .notes {
      margin: 0;
      padding-left: 20px;
      font-size: 0.92rem;
      color: var(--muted);
      display: grid;
      gap: 8px;
    }

    .notes strong { color: var(--accent); }

    .overlay {
      position: fixed;
      inset: 0;
      background: rgba(15, 23, 42, 0.55);
      display: none;
      place-items: center;
      z-index: 30;
      padding: 18px;
    }

    .overlay.open { display: grid; }

    .dialog {
      width: min(560px, 100%);
      max-height: 88vh;
      overflow-y: auto;
      background: var(--panel);
      border-radius: 16px;
      padding: 20px 22px;
      box-shadow: var(--shadow);
    }

    .dialog-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-bottom: 8px;
    }

    .dialog-head h3 { margin: 0; }

    .dialog-actions {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
      margin-top: 18px;
    }

    .status {
      position: fixed;
      right: 18px;
      bottom: 14px;
      font-size: 0.9rem;
      color: var(--muted);
      background: var(--panel);
      border-radius: 10px;
      padding: 6px 12px;
      box-shadow: var(--shadow);
      min-height: 1.2em;
      z-index: 40;
    }

    .status:empty { display: none; }
    .status[data-type="error"] { color: var(--bad); }
    .status[data-type="ok"] { color: var(--good); }

    .hidden { display: none !important; }

    @media (max-width: 640px) {
      .topbar { padding: 12px 14px; }
      .cal-cell { min-height: 72px; }
    }
  </style>
</head>
<body class="{{THEME}}">
  <header class="topbar">
    <div class="brand">Social Media Suite</div>
    <nav>
      <a class="nav-link{{NAV_HOME}}" href="/">Home</a>
      <a class="nav-link{{NAV_PLANNER}}" href="/planner">Planner</a>
      <a class="nav-link{{NAV_TRACKER}}" href="/tracker">Tracker</a>
      <a class="nav-link{{NAV_MONETIZATION}}" href="/monetization">Monetization</a>
    </nav>
    <button class="btn ghost small" id="theme-toggle" type="button">Dark mode</button>
  </header>

  <main class="page">
{{MAIN}}
  </main>

  <div class="status" id="status"></div>

  <script>
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (value) => String(value === null || value === undefined ? '' : value)
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;')
      .replace(/"/g, '&quot;');

    const money = (value) => '$' + value.toFixed(2);

    const api = async (path, options) => {
      const res = await fetch(path, options || {});
      if (!res.ok) {
        const message = await res.text();
        throw new Error(message || 'Request failed');
      }
      if (res.status === 204) {
        return null;
      }
      return res.json();
    };

    const sendJson = (path, method, body) => api(path, {
      method,
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    let platforms = [];
    const loadPlatforms = async () => {
      platforms = await api('/api/platforms');
    };
    const platformName = (id) => {
      const found = platforms.find((platform) => platform.id === id);
      return found ? found.name : 'Unknown Platform';
    };

    let assist = { available: false, model: '' };
    const loadAssist = async () => {
      try {
        assist = await api('/api/assist/status');
      } catch (err) {
        assist = { available: false, model: '' };
      }
    };

    const openModal = (id) => document.getElementById(id).classList.add('open');
    const closeModal = (id) => document.getElementById(id).classList.remove('open');

    const downloadCsv = async (path, fallbackName) => {
      const res = await fetch(path);
      if (!res.ok) {
        throw new Error(await res.text() || 'Export failed');
      }
      const blob = await res.blob();
      const disposition = res.headers.get('content-disposition') || '';
      const match = disposition.match(/filename="([^"]+)"/);
      const link = document.createElement('a');
      link.href = URL.createObjectURL(blob);
      link.download = match ? match[1] : fallbackName;
      document.body.appendChild(link);
      link.click();
      link.remove();
      URL.revokeObjectURL(link.href);
    };

    const themeButton = document.getElementById('theme-toggle');
    const applyTheme = (dark) => {
      document.body.classList.toggle('dark', dark);
      themeButton.textContent = dark ? 'Light mode' : 'Dark mode';
    };
    themeButton.addEventListener('click', () => {
      const dark = !document.body.classList.contains('dark');
      sendJson('/api/preferences', 'PUT', { dark_mode: dark })
        .then((prefs) => applyTheme(prefs.dark_mode))
        .catch((err) => setStatus(err.message, 'error'));
    });
    applyTheme(document.body.classList.contains('dark'));

{{SCRIPT}}
  </script>
</body>
</html>
"#;
