pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Day Planner</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1020px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .date-row {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 12px;
    }

    input[type="date"] {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 8px 12px;
      font: inherit;
      background: white;
    }

    .saved-dates {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .saved-dates a {
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      padding: 4px 12px;
      font-size: 0.85rem;
      color: var(--accent-2);
      text-decoration: none;
    }

    .saved-dates a:hover {
      background: rgba(47, 72, 88, 0.16);
    }

    section.card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .board-wrap {
      display: grid;
      gap: 12px;
      justify-items: start;
    }

    #board {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      background: white;
      touch-action: none;
      cursor: crosshair;
    }

    .board-actions {
      display: flex;
      gap: 12px;
      align-items: center;
    }

    .categories {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .category {
      display: grid;
      gap: 10px;
      align-content: start;
    }

    .category .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .slider-row {
      display: grid;
      grid-template-columns: 3.4em 1fr 3.4em;
      align-items: center;
      gap: 10px;
      font-size: 0.9rem;
    }

    input[type="range"] {
      width: 100%;
      accent-color: var(--accent);
    }

    select[multiple] {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 6px;
      font: inherit;
      min-height: 9.5em;
      background: white;
    }

    .tasks {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 14px 20px;
    }

    .task-row {
      display: grid;
      grid-template-columns: 7.5em 1fr;
      align-items: center;
      gap: 10px;
    }

    .task-row label {
      font-size: 0.82rem;
      color: #6b645d;
      white-space: nowrap;
    }

    .task-row input {
      border: 1px solid rgba(47, 72, 88, 0.15);
      border-radius: 10px;
      padding: 7px 10px;
      font: inherit;
      width: 100%;
    }

    textarea {
      width: 100%;
      min-height: 160px;
      border: 1px solid rgba(47, 72, 88, 0.15);
      border-radius: 12px;
      padding: 12px;
      font: inherit;
      resize: vertical;
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-save {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-tomorrow {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .btn-small {
      padding: 8px 14px;
      font-size: 0.85rem;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      box-shadow: none;
    }

    #download {
      font-size: 0.9rem;
      color: var(--accent-2);
    }

    #download[hidden] {
      display: none;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Day Planner</h1>
        <p class="subtitle">Hourly plan, notes and a whiteboard, one page per day.</p>
      </div>
      <div class="date-row">
        <input type="date" id="date" value="{{DATE}}" />
      </div>
    </header>

    <div class="saved-dates" id="saved-dates"></div>

    <section class="card">
      <h2>Whiteboard</h2>
      <div class="board-wrap">
        <canvas id="board" width="600" height="400"></canvas>
        <div class="board-actions">
          <button type="button" class="btn-small" id="clear-board">Clear</button>
          <a id="download" href="/" download hidden>Download whiteboard image</a>
        </div>
      </div>
    </section>

    <section class="card">
      <h2>Categories</h2>
      <div class="categories">
        <div class="category">
          <span class="label">Sleep hours</span>
          <div class="slider-row">
            <span>Start</span>
            <input type="range" id="sleep-start" min="0" max="23" value="22" />
            <span id="sleep-start-value">22</span>
          </div>
          <div class="slider-row">
            <span>End</span>
            <input type="range" id="sleep-end" min="0" max="23" value="6" />
            <span id="sleep-end-value">6</span>
          </div>
        </div>
        <div class="category">
          <span class="label">Fun hours</span>
          <select multiple id="fun"></select>
        </div>
        <div class="category">
          <span class="label">Work hours</span>
          <select multiple id="work"></select>
        </div>
      </div>
    </section>

    <section class="card">
      <h2>Tasks</h2>
      <div class="tasks" id="tasks"></div>
    </section>

    <section class="card">
      <h2>Notes</h2>
      <textarea id="notes" placeholder="Anything else about the day"></textarea>
    </section>

    <section class="actions">
      <button type="button" class="btn-save" id="save">Save</button>
      <button type="button" class="btn-tomorrow" id="plan-tomorrow">Plan tomorrow</button>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Saving stores the day on the server and writes the whiteboard as a PNG. Sleep, Fun and Work fill the matching hour slots; sleep may wrap past midnight.</p>
  </main>

  <script>
    const dateEl = document.getElementById('date');
    const savedDatesEl = document.getElementById('saved-dates');
    const tasksEl = document.getElementById('tasks');
    const notesEl = document.getElementById('notes');
    const funEl = document.getElementById('fun');
    const workEl = document.getElementById('work');
    const sleepStartEl = document.getElementById('sleep-start');
    const sleepEndEl = document.getElementById('sleep-end');
    const sleepStartValueEl = document.getElementById('sleep-start-value');
    const sleepEndValueEl = document.getElementById('sleep-end-value');
    const statusEl = document.getElementById('status');
    const boardEl = document.getElementById('board');
    const downloadEl = document.getElementById('download');
    const ctx = boardEl.getContext('2d');

    let currentDate = '{{DATE}}';
    let hasInk = false;

    const pad = (n) => String(n).padStart(2, '0');
    const SLOTS = Array.from({ length: 24 }, (_, hour) => `${pad(hour)}:00 - ${pad(hour + 1)}:00`);

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const taskInputs = {};
    const buildTasks = () => {
      const columns = [[], [], []];
      SLOTS.forEach((slot, hour) => columns[hour % 3].push(slot));
      columns.forEach((column) => {
        const holder = document.createElement('div');
        column.forEach((slot) => {
          const row = document.createElement('div');
          row.className = 'task-row';
          const label = document.createElement('label');
          label.textContent = slot;
          const input = document.createElement('input');
          input.type = 'text';
          taskInputs[slot] = input;
          row.append(label, input);
          holder.append(row);
        });
        tasksEl.append(holder);
      });
    };

    const buildHourSelect = (select) => {
      SLOTS.forEach((slot) => {
        const option = document.createElement('option');
        option.value = slot;
        option.textContent = slot;
        select.append(option);
      });
    };

    const selectedSlots = (select) => Array.from(select.selectedOptions).map((o) => o.value);

    const blankBoard = () => {
      ctx.fillStyle = '#ffffff';
      ctx.fillRect(0, 0, boardEl.width, boardEl.height);
      hasInk = false;
    };

    let drawing = false;
    boardEl.addEventListener('pointerdown', (event) => {
      drawing = true;
      hasInk = true;
      boardEl.setPointerCapture(event.pointerId);
      const rect = boardEl.getBoundingClientRect();
      ctx.strokeStyle = '#000000';
      ctx.lineWidth = 2;
      ctx.lineCap = 'round';
      ctx.beginPath();
      ctx.moveTo(event.clientX - rect.left, event.clientY - rect.top);
    });
    boardEl.addEventListener('pointermove', (event) => {
      if (!drawing) {
        return;
      }
      const rect = boardEl.getBoundingClientRect();
      ctx.lineTo(event.clientX - rect.left, event.clientY - rect.top);
      ctx.stroke();
    });
    const stopDrawing = () => {
      drawing = false;
    };
    boardEl.addEventListener('pointerup', stopDrawing);
    boardEl.addEventListener('pointercancel', stopDrawing);

    const setDownload = (present) => {
      downloadEl.hidden = !present;
      downloadEl.href = `/api/whiteboard/${currentDate}/download`;
    };

    const applyDay = (day) => {
      SLOTS.forEach((slot) => {
        taskInputs[slot].value = day.tasks[slot] || '';
      });
      notesEl.value = day.notes;
      setDownload(day.whiteboard_present);
    };

    const loadWhiteboard = async () => {
      blankBoard();
      const res = await fetch(`/api/whiteboard/${currentDate}`);
      if (res.status === 204) {
        return;
      }
      if (!res.ok) {
        throw new Error('Unable to load whiteboard');
      }
      const bitmap = await createImageBitmap(await res.blob());
      ctx.drawImage(bitmap, 0, 0);
      hasInk = true;
    };

    const loadDates = async () => {
      const res = await fetch('/api/dates');
      if (!res.ok) {
        throw new Error('Unable to load saved dates');
      }
      const body = await res.json();
      savedDatesEl.innerHTML = '';
      body.dates.forEach((date) => {
        const link = document.createElement('a');
        link.href = `/?date=${date}`;
        link.textContent = date;
        savedDatesEl.append(link);
      });
    };

    const loadDay = async () => {
      const res = await fetch(`/api/day/${currentDate}`);
      if (!res.ok) {
        throw new Error('Unable to load day');
      }
      applyDay(await res.json());
      await loadWhiteboard();
    };

    const boardBlob = () =>
      new Promise((resolve, reject) => {
        boardEl.toBlob((blob) => (blob ? resolve(blob) : reject(new Error('Unable to encode whiteboard'))), 'image/png');
      });

    const save = async () => {
      setStatus('Saving...', 'info');
      const payload = {
        tasks: Object.fromEntries(SLOTS.map((slot) => [slot, taskInputs[slot].value])),
        notes: notesEl.value,
        sleep: { start: Number(sleepStartEl.value), end: Number(sleepEndEl.value) },
        fun: selectedSlots(funEl),
        work: selectedSlots(workEl)
      };

      const res = await fetch(`/api/day/${currentDate}`, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Save failed');
      }
      applyDay(await res.json());

      if (hasInk) {
        const board = await fetch(`/api/whiteboard/${currentDate}`, {
          method: 'PUT',
          headers: { 'content-type': 'image/png' },
          body: await boardBlob()
        });
        if (!board.ok) {
          throw new Error((await board.text()) || 'Whiteboard save failed');
        }
        setDownload(true);
      }

      await loadDates();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const planTomorrow = () => {
      const next = new Date(`${currentDate}T00:00:00`);
      next.setDate(next.getDate() + 1);
      const key = `${next.getFullYear()}-${pad(next.getMonth() + 1)}-${pad(next.getDate())}`;
      window.location.href = `/?date=${key}`;
    };

    sleepStartEl.addEventListener('input', () => {
      sleepStartValueEl.textContent = sleepStartEl.value;
    });
    sleepEndEl.addEventListener('input', () => {
      sleepEndValueEl.textContent = sleepEndEl.value;
    });
    dateEl.addEventListener('change', () => {
      if (dateEl.value) {
        window.location.href = `/?date=${dateEl.value}`;
      }
    });
    document.getElementById('clear-board').addEventListener('click', blankBoard);
    document.getElementById('save').addEventListener('click', () => {
      save().catch((err) => setStatus(err.message, 'error'));
    });
    document.getElementById('plan-tomorrow').addEventListener('click', planTomorrow);

    buildTasks();
    buildHourSelect(funEl);
    buildHourSelect(workEl);
    blankBoard();
    Promise.all([loadDay(), loadDates()]).catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
