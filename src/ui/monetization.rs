pub fn page(dark_mode: bool) -> String {
    super::render("monetization", MAIN, SCRIPT, dark_mode)
}

const MAIN: &str = r#"    <div class="page-head">
      <h2>Monetization Hub</h2>
      <div class="toolbar">
        <button class="btn teal hidden" id="tips-btn" type="button">Monetization Tips</button>
        <button class="btn purple hidden" id="revenue-btn" type="button">Revenue Ideas (AI)</button>
        <button class="btn ghost" id="export-earnings-btn" type="button">Export Earnings</button>
        <button class="btn ghost" id="export-expenses-btn" type="button">Export Expenses</button>
        <button class="btn green" id="add-earning-btn" type="button">Add Earning</button>
        <button class="btn orange" id="add-expense-btn" type="button">Add Expense</button>
      </div>
    </div>

    <section class="cards">
      <article class="card">
        <p class="metric">Total Earnings</p>
        <p class="metric"><span class="value good" id="total-earnings">$0.00</span></p>
        <p class="muted" id="earning-count">0 entries</p>
      </article>
      <article class="card">
        <p class="metric">Total Expenses</p>
        <p class="metric"><span class="value bad" id="total-expenses">$0.00</span></p>
        <p class="muted" id="expense-count">0 entries</p>
      </article>
      <article class="card">
        <p class="metric">Net Profit</p>
        <p class="metric"><span class="value" id="net-profit">$0.00</span></p>
      </article>
      <article class="card">
        <p class="metric">Avg. Earning / Entry</p>
        <p class="metric"><span class="value" id="avg-earning">$0.00</span></p>
      </article>
    </section>

    <div class="columns">
      <section>
        <h3>Earnings</h3>
        <p class="muted center hidden" id="earnings-empty">No earnings recorded yet.</p>
        <div class="stack" id="earning-list"></div>
      </section>
      <section>
        <h3>Expenses</h3>
        <p class="muted center hidden" id="expenses-empty">No expenses recorded yet.</p>
        <div class="stack" id="expense-list"></div>
      </section>
    </div>

    <div class="overlay" id="earning-modal">
      <div class="dialog">
        <div class="dialog-head">
          <h3 id="earning-modal-title">Add Earning</h3>
          <button class="btn ghost small" id="earning-modal-close" type="button">&times;</button>
        </div>
        <form id="earning-form">
          <label for="earning-source">Source of Income</label>
          <input type="text" id="earning-source" placeholder="e.g., Brand Deal, Ad Revenue" required />

          <label for="earning-amount">Amount ($)</label>
          <input type="number" id="earning-amount" min="0.01" step="0.01" required />

          <label for="earning-date">Date</label>
          <input type="date" id="earning-date" required />

          <label for="earning-platform">Platform (Optional)</label>
          <select id="earning-platform"></select>

          <label for="earning-post">Link to Tracked Post (Optional)</label>
          <select id="earning-post"></select>

          <label for="earning-notes">Notes (Optional)</label>
          <textarea id="earning-notes" rows="2" placeholder="Any additional details..."></textarea>

          <div class="dialog-actions">
            <button class="btn ghost" id="earning-cancel" type="button">Cancel</button>
            <button class="btn green" id="earning-save" type="submit">Add Earning</button>
          </div>
        </form>
      </div>
    </div>

    <div class="overlay" id="expense-modal">
      <div class="dialog">
        <div class="dialog-head">
          <h3 id="expense-modal-title">Add Expense</h3>
          <button class="btn ghost small" id="expense-modal-close" type="button">&times;</button>
        </div>
        <form id="expense-form">
          <label for="expense-description">Description</label>
          <input type="text" id="expense-description" placeholder="e.g., Video editing software subscription" required />

          <label for="expense-amount">Amount ($)</label>
          <input type="number" id="expense-amount" min="0.01" step="0.01" required />

          <label for="expense-date">Date</label>
          <input type="date" id="expense-date" required />

          <label for="expense-category">Category</label>
          <select id="expense-category"></select>

          <div class="dialog-actions">
            <button class="btn ghost" id="expense-cancel" type="button">Cancel</button>
            <button class="btn orange" id="expense-save" type="submit">Add Expense</button>
          </div>
        </form>
      </div>
    </div>

    <div class="overlay" id="tips-modal">
      <div class="dialog">
        <div class="dialog-head">
          <h3>AI Monetization Tips</h3>
          <button class="btn ghost small" id="tips-modal-close" type="button">&times;</button>
        </div>
        <label for="tips-platform">Select Platform:</label>
        <div class="row">
          <select id="tips-platform"></select>
          <button class="btn teal" id="tips-fetch-btn" type="button">Get Tips</button>
        </div>
        <p class="form-hint hidden" id="tips-busy">Fetching tips...</p>
        <p class="form-error" id="tips-error"></p>
        <ul class="notes hidden" id="tips-list" style="margin-top: 14px;"></ul>
      </div>
    </div>

    <div class="overlay" id="revenue-modal">
      <div class="dialog">
        <div class="dialog-head">
          <h3>AI Revenue Stream Ideas</h3>
          <button class="btn ghost small" id="revenue-modal-close" type="button">&times;</button>
        </div>
        <label for="revenue-niche">Your Content Niche:</label>
        <div class="row">
          <input type="text" id="revenue-niche" placeholder="e.g., Gaming, Cooking, Tech Reviews" />
          <button class="btn purple" id="revenue-fetch-btn" type="button">Get Ideas</button>
        </div>
        <p class="form-hint hidden" id="revenue-busy">Generating ideas...</p>
        <p class="form-error" id="revenue-error"></p>
        <div class="stack hidden" id="revenue-list" style="margin-top: 14px;"></div>
      </div>
    </div>
"#;

const SCRIPT: &str = r#"    const tipsBtn = document.getElementById('tips-btn');
    const revenueBtn = document.getElementById('revenue-btn');
    const totalEarningsEl = document.getElementById('total-earnings');
    const earningCountEl = document.getElementById('earning-count');
    const totalExpensesEl = document.getElementById('total-expenses');
    const expenseCountEl = document.getElementById('expense-count');
    const netProfitEl = document.getElementById('net-profit');
    const avgEarningEl = document.getElementById('avg-earning');
    const earningsEmpty = document.getElementById('earnings-empty');
    const earningList = document.getElementById('earning-list');
    const expensesEmpty = document.getElementById('expenses-empty');
    const expenseList = document.getElementById('expense-list');
    const earningTitle = document.getElementById('earning-modal-title');
    const earningForm = document.getElementById('earning-form');
    const earningSource = document.getElementById('earning-source');
    const earningAmount = document.getElementById('earning-amount');
    const earningDate = document.getElementById('earning-date');
    const earningPlatform = document.getElementById('earning-platform');
    const earningPost = document.getElementById('earning-post');
    const earningNotes = document.getElementById('earning-notes');
    const earningSave = document.getElementById('earning-save');
    const expenseTitle = document.getElementById('expense-modal-title');
    const expenseForm = document.getElementById('expense-form');
    const expenseDescription = document.getElementById('expense-description');
    const expenseAmount = document.getElementById('expense-amount');
    const expenseDate = document.getElementById('expense-date');
    const expenseCategory = document.getElementById('expense-category');
    const expenseSave = document.getElementById('expense-save');
    const tipsPlatform = document.getElementById('tips-platform');
    const tipsFetchBtn = document.getElementById('tips-fetch-btn');
    const tipsBusy = document.getElementById('tips-busy');
    const tipsError = document.getElementById('tips-error');
    const tipsList = document.getElementById('tips-list');
    const revenueNiche = document.getElementById('revenue-niche');
    const revenueFetchBtn = document.getElementById('revenue-fetch-btn');
    const revenueBusy = document.getElementById('revenue-busy');
    const revenueError = document.getElementById('revenue-error');
    const revenueList = document.getElementById('revenue-list');

    const EXPENSE_CATEGORIES = ['Software', 'Equipment', 'Advertising', 'Services', 'Travel', 'Office Supplies', 'Education', 'Other'];

    let earnings = [];
    let expenses = [];
    let accounts = [];
    let editingEarning = null;
    let editingExpense = null;

    const truncate = (value, max) => {
      return value.length > max ? value.substring(0, max - 3) + '...' : value;
    };

    const todayInput = () => new Date().toISOString().substring(0, 10);

    const renderSummary = () => {
      const totalEarnings = earnings.reduce((sum, entry) => sum + entry.amount, 0);
      const totalExpenses = expenses.reduce((sum, item) => sum + item.amount, 0);
      const net = totalEarnings - totalExpenses;
      const avg = earnings.length > 0 ? totalEarnings / earnings.length : 0;
      totalEarningsEl.textContent = money(totalEarnings);
      earningCountEl.textContent = `${earnings.length} entries`;
      totalExpensesEl.textContent = money(totalExpenses);
      expenseCountEl.textContent = `${expenses.length} entries`;
      netProfitEl.textContent = money(net);
      netProfitEl.classList.toggle('good', net >= 0);
      netProfitEl.classList.toggle('bad', net < 0);
      avgEarningEl.textContent = money(avg);
    };

    const renderEarnings = () => {
      earningsEmpty.classList.toggle('hidden', earnings.length !== 0);
      earningList.innerHTML = earnings.map((entry) => {
        const platform = entry.platform_id
          ? '<p class="muted">Platform: ' + escapeHtml(platformName(entry.platform_id)) + '</p>'
          : '';
        const notes = entry.notes
          ? '<p class="muted"><em>Notes: ' + escapeHtml(entry.notes) + '</em></p>'
          : '';
        return `
          <div class="ledger-row" data-id="${entry.id}">
            <div class="card-row">
              <div>
                <p class="card-title">${escapeHtml(entry.source)}</p>
                <p class="muted">Amount: <span class="value good">${money(entry.amount)}</span></p>
                <p class="muted">Date: ${entry.date}</p>
                ${platform}
                ${notes}
              </div>
              <div class="card-actions">
                <button class="btn ghost small" data-action="edit" type="button">Edit</button>
                <button class="btn ghost small danger" data-action="delete" type="button">Delete</button>
              </div>
            </div>
          </div>`;
      }).join('');
    };

    const renderExpenses = () => {
      expensesEmpty.classList.toggle('hidden', expenses.length !== 0);
      expenseList.innerHTML = expenses.map((item) => {
        return `
          <div class="ledger-row" data-id="${item.id}">
            <div class="card-row">
              <div>
                <p class="card-title">${escapeHtml(item.description)}</p>
                <p class="muted">Amount: <span class="value bad">${money(item.amount)}</span></p>
                <p class="muted">Date: ${item.date}</p>
                <p class="muted">Category: ${escapeHtml(item.category)}</p>
              </div>
              <div class="card-actions">
                <button class="btn ghost small" data-action="edit" type="button">Edit</button>
                <button class="btn ghost small danger" data-action="delete" type="button">Delete</button>
              </div>
            </div>
          </div>`;
      }).join('');
    };

    const renderAll = () => {
      renderSummary();
      renderEarnings();
      renderExpenses();
    };

    const loadLedgers = async () => {
      const [earningData, expenseData] = await Promise.all([
        api('/api/earnings'),
        api('/api/expenses')
      ]);
      earnings = earningData;
      expenses = expenseData;
      renderAll();
    };

    const fillEarningPlatforms = () => {
      earningPlatform.innerHTML = '<option value="">Select Platform</option>' + platforms
        .map((platform) => '<option value="' + platform.id + '">' + escapeHtml(platform.name) + '</option>')
        .join('');
    };

    const fillTrackedPosts = (selected) => {
      const options = ['<option value="">None</option>'];
      accounts.forEach((account) => {
        account.posts.forEach((post) => {
          const label = account.profile_link + ': ' + truncate(post.post_link, 30);
          const marker = selected === post.id ? ' selected' : '';
          options.push('<option value="' + post.id + '"' + marker + '>' + escapeHtml(label) + '</option>');
        });
      });
      earningPost.innerHTML = options.join('');
    };

    const fillTipsPlatforms = () => {
      tipsPlatform.innerHTML = platforms
        .map((platform) => '<option value="' + platform.id + '">' + escapeHtml(platform.name) + '</option>')
        .join('') + '<option value="general">General Social Media</option>';
    };

    const fillExpenseCategories = () => {
      expenseCategory.innerHTML = EXPENSE_CATEGORIES
        .map((category) => '<option value="' + category + '">' + category + '</option>')
        .join('');
    };

    const openEarningEditor = (entry) => {
      editingEarning = entry;
      earningTitle.textContent = entry ? 'Edit Earning' : 'Add Earning';
      earningSave.textContent = entry ? 'Save Changes' : 'Add Earning';
      earningSource.value = entry ? entry.source : '';
      earningAmount.value = entry ? entry.amount : '';
      earningDate.value = entry ? entry.date : todayInput();
      earningPlatform.value = entry && entry.platform_id ? entry.platform_id : '';
      fillTrackedPosts(entry ? entry.post_id : null);
      earningNotes.value = entry && entry.notes ? entry.notes : '';
      openModal('earning-modal');
    };

    const openExpenseEditor = (item) => {
      editingExpense = item;
      expenseTitle.textContent = item ? 'Edit Expense' : 'Add Expense';
      expenseSave.textContent = item ? 'Save Changes' : 'Add Expense';
      expenseDescription.value = item ? item.description : '';
      expenseAmount.value = item ? item.amount : '';
      expenseDate.value = item ? item.date : todayInput();
      expenseCategory.value = item ? item.category : EXPENSE_CATEGORIES[0];
      openModal('expense-modal');
    };

    earningForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const amount = parseFloat(earningAmount.value);
      const source = earningSource.value.trim();
      if (!source || Number.isNaN(amount) || amount <= 0 || !earningDate.value) {
        window.alert('Please fill in Source, Amount (greater than 0), and Date.');
        return;
      }
      const notes = earningNotes.value.trim();
      const payload = {
        source,
        amount,
        date: earningDate.value,
        platform_id: earningPlatform.value === '' ? null : earningPlatform.value,
        post_id: earningPost.value === '' ? null : earningPost.value,
        notes: notes === '' ? null : notes
      };
      try {
        if (editingEarning) {
          await sendJson(`/api/earnings/${editingEarning.id}`, 'PUT', payload);
        } else {
          await sendJson('/api/earnings', 'POST', payload);
        }
        closeModal('earning-modal');
        await loadLedgers();
      } catch (err) {
        window.alert(err.message);
      }
    });

    expenseForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const amount = parseFloat(expenseAmount.value);
      const description = expenseDescription.value.trim();
      if (!description || Number.isNaN(amount) || amount <= 0 || !expenseDate.value) {
        window.alert('Please fill in Description, Amount (greater than 0), Date, and Category.');
        return;
      }
      const payload = {
        description,
        category: expenseCategory.value,
        amount,
        date: expenseDate.value
      };
      try {
        if (editingExpense) {
          await sendJson(`/api/expenses/${editingExpense.id}`, 'PUT', payload);
        } else {
          await sendJson('/api/expenses', 'POST', payload);
        }
        closeModal('expense-modal');
        await loadLedgers();
      } catch (err) {
        window.alert(err.message);
      }
    });

    earningList.addEventListener('click', async (event) => {
      const button = event.target.closest('button[data-action]');
      if (!button) {
        return;
      }
      const row = button.closest('[data-id]');
      const entry = earnings.find((candidate) => candidate.id === row.dataset.id);
      if (!entry) {
        return;
      }
      if (button.dataset.action === 'edit') {
        openEarningEditor(entry);
      } else if (button.dataset.action === 'delete') {
        if (!window.confirm('Are you sure you want to delete this earning entry?')) {
          return;
        }
        try {
          await api(`/api/earnings/${entry.id}`, { method: 'DELETE' });
          await loadLedgers();
        } catch (err) {
          setStatus(err.message, 'error');
        }
      }
    });

    expenseList.addEventListener('click', async (event) => {
      const button = event.target.closest('button[data-action]');
      if (!button) {
        return;
      }
      const row = button.closest('[data-id]');
      const item = expenses.find((candidate) => candidate.id === row.dataset.id);
      if (!item) {
        return;
      }
      if (button.dataset.action === 'edit') {
        openExpenseEditor(item);
      } else if (button.dataset.action === 'delete') {
        if (!window.confirm('Are you sure you want to delete this expense entry?')) {
          return;
        }
        try {
          await api(`/api/expenses/${item.id}`, { method: 'DELETE' });
          await loadLedgers();
        } catch (err) {
          setStatus(err.message, 'error');
        }
      }
    });

    tipsFetchBtn.addEventListener('click', async () => {
      tipsError.textContent = '';
      tipsBusy.classList.remove('hidden');
      tipsFetchBtn.disabled = true;
      tipsList.classList.add('hidden');
      try {
        const data = await sendJson('/api/assist/tips', 'POST', { platform_id: tipsPlatform.value });
        tipsList.innerHTML = data.tips.map((tip) => '<li>' + escapeHtml(tip) + '</li>').join('');
        tipsList.classList.remove('hidden');
      } catch (err) {
        tipsError.textContent = err.message;
      } finally {
        tipsBusy.classList.add('hidden');
        tipsFetchBtn.disabled = false;
      }
    });

    revenueFetchBtn.addEventListener('click', async () => {
      revenueError.textContent = '';
      const niche = revenueNiche.value.trim();
      if (!niche) {
        revenueError.textContent = 'Please enter your content niche.';
        return;
      }
      revenueBusy.classList.remove('hidden');
      revenueFetchBtn.disabled = true;
      revenueList.classList.add('hidden');
      try {
        const data = await sendJson('/api/assist/revenue-ideas', 'POST', { niche });
        revenueList.innerHTML = data.ideas.map((idea) => {
          const potential = idea.potential
            ? '<span class="badge green">Potential: ' + escapeHtml(idea.potential) + '</span>'
            : '';
          return '<div class="ledger-row"><div class="card-row"><p class="card-title">'
            + escapeHtml(idea.idea) + '</p>' + potential + '</div><p class="muted">'
            + escapeHtml(idea.description) + '</p></div>';
        }).join('');
        revenueList.classList.remove('hidden');
      } catch (err) {
        revenueError.textContent = err.message;
      } finally {
        revenueBusy.classList.add('hidden');
        revenueFetchBtn.disabled = false;
      }
    });

    document.getElementById('add-earning-btn').addEventListener('click', () => {
      openEarningEditor(null);
    });

    document.getElementById('add-expense-btn').addEventListener('click', () => {
      openExpenseEditor(null);
    });

    document.getElementById('export-earnings-btn').addEventListener('click', () => {
      downloadCsv('/api/earnings/export', 'monetization_entries.csv')
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('export-expenses-btn').addEventListener('click', () => {
      downloadCsv('/api/expenses/export', 'expenses.csv')
        .catch((err) => setStatus(err.message, 'error'));
    });

    tipsBtn.addEventListener('click', () => {
      tipsError.textContent = '';
      openModal('tips-modal');
    });

    revenueBtn.addEventListener('click', () => {
      revenueError.textContent = '';
      openModal('revenue-modal');
    });

    document.getElementById('earning-cancel').addEventListener('click', () => {
      closeModal('earning-modal');
    });

    document.getElementById('earning-modal-close').addEventListener('click', () => {
      closeModal('earning-modal');
    });

    document.getElementById('expense-cancel').addEventListener('click', () => {
      closeModal('expense-modal');
    });

    document.getElementById('expense-modal-close').addEventListener('click', () => {
      closeModal('expense-modal');
    });

    document.getElementById('tips-modal-close').addEventListener('click', () => {
      closeModal('tips-modal');
    });

    document.getElementById('revenue-modal-close').addEventListener('click', () => {
      closeModal('revenue-modal');
    });

    const init = async () => {
      await Promise.all([loadPlatforms(), loadAssist()]);
      accounts = await api('/api/accounts');
      fillEarningPlatforms();
      fillTipsPlatforms();
      fillExpenseCategories();
      tipsBtn.classList.toggle('hidden', !assist.available);
      revenueBtn.classList.toggle('hidden', !assist.available);
      await loadLedgers();
    };

    init().catch((err) => setStatus(err.message, 'error'));
"#;
