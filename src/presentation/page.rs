use crate::application::presenter::TopNRange;
use crate::domain::sale::Region;
use std::ops::RangeInclusive;

pub fn render_index(years: &RangeInclusive<i32>, top: TopNRange) -> String {
    let regions: String = Region::ALL
        .iter()
        .map(|r| format!(r#"<option value="{0}">{0}</option>"#, r.name()))
        .collect();

    INDEX_HTML
        .replace("{{REGIONS}}", &regions)
        .replace("{{FIRST_YEAR}}", &years.start().to_string())
        .replace("{{LAST_YEAR}}", &years.end().to_string())
        .replace("{{TOP_MIN}}", &top.min.to_string())
        .replace("{{TOP_MAX}}", &top.max.to_string())
        .replace("{{TOP_DEFAULT}}", &top.default.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sales Dashboard</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    :root {
      --ink: #1f2a37;
      --muted: #6b7280;
      --panel: #f3f4f6;
      --accent: #2563eb;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      color: var(--ink);
      display: grid;
      grid-template-columns: 260px 1fr;
      min-height: 100vh;
    }

    aside {
      background: var(--panel);
      padding: 24px 18px;
      display: grid;
      align-content: start;
      gap: 18px;
    }

    aside label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
    }

    aside select[multiple] {
      min-height: 180px;
    }

    main {
      padding: 24px 32px;
      display: grid;
      align-content: start;
      gap: 18px;
    }

    .tabs button {
      border: none;
      background: none;
      padding: 8px 14px;
      font-size: 1rem;
      cursor: pointer;
      border-bottom: 2px solid transparent;
    }

    .tabs button.active {
      border-color: var(--accent);
      color: var(--accent);
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(2, 1fr);
      gap: 12px;
    }

    .metric span {
      display: block;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .metric strong {
      font-size: 1.8rem;
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(2, minmax(0, 1fr));
      gap: 12px;
    }

    .chart {
      min-height: 380px;
    }

    .empty {
      display: grid;
      place-items: center;
      min-height: 380px;
      color: var(--muted);
      border: 1px dashed #d1d5db;
    }

    .error {
      color: #b91c1c;
    }
  </style>
</head>
<body>
  <aside>
    <h2>Filters</h2>
    <label>Region
      <select id="region">{{REGIONS}}</select>
    </label>
    <label><span><input type="checkbox" id="all-time" checked /> Whole period</span></label>
    <label>Year <output id="year-label">{{FIRST_YEAR}}</output>
      <input type="range" id="year" min="{{FIRST_YEAR}}" max="{{LAST_YEAR}}" value="{{FIRST_YEAR}}" disabled />
    </label>
    <label>Salespeople
      <select id="salespeople" multiple></select>
    </label>
  </aside>
  <main>
    <h1 id="title">Sales dashboard</h1>
    <p id="error" class="error" hidden></p>
    <nav class="tabs" id="tabs"></nav>
    <label id="top-control" hidden>Number of salespeople
      <input type="number" id="top" min="{{TOP_MIN}}" max="{{TOP_MAX}}" value="{{TOP_DEFAULT}}" />
    </label>
    <section class="metrics" id="metrics"></section>
    <section class="charts" id="charts"></section>
  </main>

  <script>
    const controls = {
      region: document.getElementById('region'),
      allTime: document.getElementById('all-time'),
      year: document.getElementById('year'),
      yearLabel: document.getElementById('year-label'),
      salespeople: document.getElementById('salespeople'),
      top: document.getElementById('top'),
    };
    let dashboard = null;
    let activeTab = 'revenue';

    function query() {
      const params = new URLSearchParams();
      params.set('region', controls.region.value);
      if (!controls.allTime.checked) {
        params.set('year', controls.year.value);
      }
      const selected = Array.from(controls.salespeople.selectedOptions).map((o) => o.value);
      if (selected.length) {
        params.set('salespeople', selected.join(','));
      }
      params.set('top', controls.top.value);
      return params.toString();
    }

    async function refresh() {
      const errorBox = document.getElementById('error');
      try {
        const response = await fetch(`/api/dashboard?${query()}`);
        const body = await response.json();
        if (!response.ok) {
          throw new Error(body.error || response.statusText);
        }
        errorBox.hidden = true;
        dashboard = body;
        syncSalespeople(body.salespeople, body.filters.salespeople);
        render();
      } catch (err) {
        errorBox.textContent = `Could not load sales data: ${err.message}`;
        errorBox.hidden = false;
      }
    }

    function syncSalespeople(options, selected) {
      const chosen = new Set(selected);
      controls.salespeople.replaceChildren(
        ...options.map((name) => new Option(name, name, false, chosen.has(name)))
      );
    }

    function render() {
      document.getElementById('title').textContent = dashboard.title;
      const nav = document.getElementById('tabs');
      nav.replaceChildren(
        ...dashboard.tabs.map((tab) => {
          const button = document.createElement('button');
          button.textContent = tab.title;
          button.className = tab.id === activeTab ? 'active' : '';
          button.onclick = () => {
            activeTab = tab.id;
            render();
          };
          return button;
        })
      );

      const tab = dashboard.tabs.find((t) => t.id === activeTab) || dashboard.tabs[0];
      document.getElementById('top-control').hidden = tab.id !== 'salespeople';
      document.getElementById('metrics').replaceChildren(
        ...tab.metrics.map((m) => {
          const card = document.createElement('div');
          card.className = 'metric';
          card.innerHTML = `<span></span><strong></strong>`;
          card.querySelector('span').textContent = m.label;
          card.querySelector('strong').textContent = m.value;
          return card;
        })
      );

      const charts = document.getElementById('charts');
      charts.replaceChildren();
      for (const spec of tab.charts) {
        const el = document.createElement('div');
        charts.appendChild(el);
        drawChart(el, spec);
      }
    }

    function drawChart(el, spec) {
      const rows = spec.data.rows;
      if (!rows.length) {
        el.className = 'empty';
        el.textContent = `${spec.title}: no data`;
        return;
      }
      el.className = 'chart';
      const pick = (field) => rows.map((r) => r[field]);
      const layout = { title: spec.title, margin: { t: 48 } };
      if (spec.y_axis_title) {
        layout.yaxis = { title: spec.y_axis_title };
      }
      if (spec.y_range) {
        layout.yaxis = { ...(layout.yaxis || {}), range: spec.y_range };
      }

      let traces;
      switch (spec.kind) {
        case 'scatter_geo': {
          const sizes = pick(spec.size);
          const peak = Math.max(...sizes) || 1;
          traces = [{
            type: 'scattergeo',
            lat: pick(spec.y),
            lon: pick(spec.x),
            text: pick(spec.hover),
            hoverinfo: 'text',
            marker: { size: sizes.map((s) => 8 + 40 * (s / peak)) },
          }];
          layout.geo = { scope: spec.scope, fitbounds: 'locations' };
          break;
        }
        case 'line': {
          const groups = new Map();
          for (const row of rows) {
            const key = row[spec.color];
            if (!groups.has(key)) groups.set(key, []);
            groups.get(key).push(row);
          }
          const dashes = ['solid', 'dash', 'dot', 'dashdot', 'longdash'];
          traces = Array.from(groups, ([key, group], i) => ({
            type: 'scatter',
            mode: 'lines+markers',
            name: String(key),
            x: group.map((r) => r[spec.x]),
            y: group.map((r) => r[spec.y]),
            line: { dash: dashes[i % dashes.length] },
          }));
          break;
        }
        case 'horizontal_bar':
          traces = [{ type: 'bar', orientation: 'h', x: pick(spec.x), y: pick(spec.y), text: pick(spec.x), textposition: 'auto' }];
          layout.yaxis = { autorange: 'reversed' };
          break;
        default:
          traces = [{ type: 'bar', x: pick(spec.x), y: pick(spec.y), text: pick(spec.y), textposition: 'auto' }];
      }
      Plotly.newPlot(el, traces, layout, { responsive: true });
    }

    controls.allTime.addEventListener('change', () => {
      controls.year.disabled = controls.allTime.checked;
      refresh();
    });
    controls.year.addEventListener('input', () => {
      controls.yearLabel.textContent = controls.year.value;
    });
    for (const el of [controls.region, controls.year, controls.salespeople, controls.top]) {
      el.addEventListener('change', refresh);
    }
    refresh();
  </script>
</body>
</html>
"#;
