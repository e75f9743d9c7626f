//! HTML dashboard output.
//!
//! Produces a single self-contained page: summary cards, the critical
//! open services, the top open services, and the full record table
//! with client-side filtering by state, exact IP, and free-text
//! search. All styling and scripting is inline; the page fetches no
//! external resources.

use crate::error::Result;
use crate::record::ReportSet;
use crate::reporter::Reporter;

pub struct HtmlReporter;

impl HtmlReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for HtmlReporter {
    fn render(&self, report: &ReportSet) -> Result<Vec<u8>> {
        Ok(self.render_page(report).into_bytes())
    }
}

impl HtmlReporter {
    fn render_page(&self, report: &ReportSet) -> String {
        let summary = report.summary();

        let rows_html: String = report
            .records()
            .iter()
            .map(|r| {
                format!(
                    r#"
                <tr data-state="{state_attr}" data-ip="{ip_attr}">
                    <td>{ip}</td>
                    <td>{hostname}</td>
                    <td>{port}</td>
                    <td>{protocol}</td>
                    <td><span class="state state-{state_class}">{state}</span></td>
                    <td>{service}</td>
                    <td>{details}</td>
                    <td>{source}</td>
                </tr>"#,
                    state_attr = html_escape(&r.state),
                    ip_attr = html_escape(&r.ip),
                    ip = html_escape(&r.ip),
                    hostname = html_escape(&r.hostname),
                    port = html_escape(&r.port_number),
                    // Uppercasing here is presentation only; the
                    // tabular outputs keep the scanner's casing.
                    protocol = html_escape(&r.protocol.to_uppercase()),
                    state_class = css_class(&r.state),
                    state = html_escape(&r.state.to_uppercase()),
                    service = html_escape(&r.service),
                    details = html_escape(&r.details),
                    source = html_escape(&r.source_file),
                )
            })
            .collect();

        let critical = report.critical_open();
        let critical_html: String = if critical.is_empty() {
            "<div class=\"empty-note\">No critical services found open.</div>".to_string()
        } else {
            let items: String = critical
                .iter()
                .map(|r| {
                    format!(
                        "\n                <li><code>{}:{}</code> <span class=\"service-name\">{}</span></li>",
                        html_escape(&r.ip),
                        html_escape(&r.port_number),
                        html_escape(&r.service),
                    )
                })
                .collect();
            format!("<ul class=\"service-list\">{}\n            </ul>", items)
        };

        let top = report.top_services(5);
        let top_html: String = if top.is_empty() {
            "<div class=\"empty-note\">No open ports in this report.</div>".to_string()
        } else {
            let items: String = top
                .iter()
                .map(|(name, count)| {
                    format!(
                        "\n                <li><span class=\"service-name\">{}</span> <span class=\"service-count\">{}</span></li>",
                        html_escape(name),
                        count,
                    )
                })
                .collect();
            format!("<ol class=\"service-list\">{}\n            </ol>", items)
        };

        let state_options: String = distinct_states(report)
            .iter()
            .map(|state| {
                format!(
                    "\n                <option value=\"{0}\">{1}</option>",
                    html_escape(state),
                    html_escape(&state.to_uppercase()),
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Nmap Scan Report</title>
    <style>
        :root {{
            --open: #16a34a;
            --closed: #dc2626;
            --filtered: #ca8a04;
            --other: #6b7280;
        }}

        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            background: #f3f4f6;
            padding: 2rem;
        }}

        .container {{
            max-width: 1200px;
            margin: 0 auto;
        }}

        .header {{
            background: white;
            border-radius: 12px;
            padding: 2rem;
            margin-bottom: 2rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .header h1 {{
            font-size: 1.75rem;
            margin-bottom: 0.5rem;
        }}

        .header-meta {{
            color: #6b7280;
            font-size: 0.9rem;
        }}

        .summary {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
            gap: 1rem;
            margin-bottom: 2rem;
        }}

        .summary-card {{
            background: white;
            border-radius: 12px;
            padding: 1.5rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .summary-card h3 {{
            font-size: 0.875rem;
            color: #6b7280;
            text-transform: uppercase;
            margin-bottom: 0.5rem;
        }}

        .summary-value {{
            font-size: 2rem;
            font-weight: 700;
        }}

        .summary-value.open {{ color: var(--open); }}
        .summary-value.closed {{ color: var(--closed); }}
        .summary-value.filtered {{ color: var(--filtered); }}

        .panel {{
            background: white;
            border-radius: 12px;
            padding: 1.5rem;
            margin-bottom: 2rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .panel h2 {{
            margin-bottom: 1rem;
        }}

        .panel-row {{
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1rem;
        }}

        .panel-row .panel {{
            margin-bottom: 0;
        }}

        .service-list {{
            list-style-position: inside;
        }}

        .service-list li {{
            padding: 0.25rem 0;
            border-bottom: 1px solid #f3f4f6;
        }}

        .service-name {{
            font-weight: 600;
        }}

        .service-count {{
            color: #6b7280;
            font-size: 0.875rem;
        }}

        .empty-note {{
            color: #6b7280;
            padding: 0.5rem 0;
        }}

        .controls {{
            display: flex;
            flex-wrap: wrap;
            gap: 0.75rem;
            align-items: center;
            margin-bottom: 1rem;
        }}

        .controls select,
        .controls input {{
            padding: 0.5rem 0.75rem;
            border: 1px solid #d1d5db;
            border-radius: 8px;
            font-size: 0.9rem;
            background: white;
        }}

        .controls input {{
            min-width: 220px;
        }}

        #visible-count {{
            margin-left: auto;
            color: #6b7280;
            font-size: 0.875rem;
        }}

        table {{
            width: 100%;
            border-collapse: collapse;
            font-size: 0.9rem;
        }}

        th {{
            text-align: left;
            padding: 0.5rem 0.75rem;
            background: #f9fafb;
            border-bottom: 2px solid #e5e7eb;
            text-transform: uppercase;
            font-size: 0.75rem;
            color: #6b7280;
        }}

        td {{
            padding: 0.5rem 0.75rem;
            border-bottom: 1px solid #f3f4f6;
        }}

        .state {{
            padding: 0.125rem 0.5rem;
            border-radius: 4px;
            font-size: 0.75rem;
            font-weight: 600;
        }}

        .state-open {{ background: #dcfce7; color: var(--open); }}
        .state-closed {{ background: #fee2e2; color: var(--closed); }}
        .state-filtered {{ background: #fef3c7; color: var(--filtered); }}
        .state-other {{ background: #f3f4f6; color: var(--other); }}

        .footer {{
            text-align: center;
            margin-top: 2rem;
            color: #9ca3af;
            font-size: 0.875rem;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Nmap Scan Report</h1>
            <div class="header-meta">
                <div>Generated: {generated}</div>
            </div>
        </div>

        <div class="summary">
            <div class="summary-card">
                <h3>Records</h3>
                <div class="summary-value">{total}</div>
            </div>
            <div class="summary-card">
                <h3>Hosts</h3>
                <div class="summary-value">{hosts}</div>
            </div>
            <div class="summary-card">
                <h3>Open</h3>
                <div class="summary-value open">{open}</div>
            </div>
            <div class="summary-card">
                <h3>Closed</h3>
                <div class="summary-value closed">{closed}</div>
            </div>
            <div class="summary-card">
                <h3>Filtered</h3>
                <div class="summary-value filtered">{filtered}</div>
            </div>
        </div>

        <div class="panel-row">
            <div class="panel">
                <h2>Critical Open Services</h2>
                {critical}
            </div>
            <div class="panel">
                <h2>Top Open Services</h2>
                {top}
            </div>
        </div>

        <div class="panel">
            <h2>Scan Results</h2>
            <div class="controls">
                <select id="state-filter">
                    <option value="">All states</option>{state_options}
                </select>
                <input id="ip-filter" type="text" placeholder="Exact IP">
                <input id="search" type="text" placeholder="Search all columns">
                <span id="visible-count"></span>
            </div>
            <table id="results">
                <thead>
                    <tr>
                        <th>IP</th>
                        <th>Hostname</th>
                        <th>Port Number</th>
                        <th>Protocol</th>
                        <th>State</th>
                        <th>Service</th>
                        <th>Details</th>
                        <th>Source File</th>
                    </tr>
                </thead>
                <tbody>{rows}
                </tbody>
            </table>
        </div>

        <div class="footer">
            Generated by nmap-report
        </div>
    </div>

    <script>
        const stateFilter = document.getElementById('state-filter');
        const ipFilter = document.getElementById('ip-filter');
        const search = document.getElementById('search');
        const visibleCount = document.getElementById('visible-count');
        const rows = Array.from(document.querySelectorAll('#results tbody tr'));

        function applyFilters() {{
            const state = stateFilter.value;
            const ip = ipFilter.value.trim();
            const needle = search.value.trim().toLowerCase();
            let visible = 0;

            for (const row of rows) {{
                let show = true;
                if (state && row.dataset.state !== state) {{
                    show = false;
                }}
                if (show && ip && row.dataset.ip !== ip) {{
                    show = false;
                }}
                if (show && needle && !row.textContent.toLowerCase().includes(needle)) {{
                    show = false;
                }}
                row.style.display = show ? '' : 'none';
                if (show) {{
                    visible += 1;
                }}
            }}

            visibleCount.textContent = visible + ' of ' + rows.length + ' rows';
        }}

        stateFilter.addEventListener('change', applyFilters);
        ipFilter.addEventListener('input', applyFilters);
        search.addEventListener('input', applyFilters);
        applyFilters();
    </script>
</body>
</html>"#,
            generated = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            total = summary.total,
            hosts = summary.hosts,
            open = summary.open,
            closed = summary.closed,
            filtered = summary.filtered,
            critical = critical_html,
            top = top_html,
            state_options = state_options,
            rows = rows_html,
        )
    }
}

/// Distinct state strings in first-encountered order, for the filter
/// dropdown.
fn distinct_states(report: &ReportSet) -> Vec<String> {
    let mut states: Vec<String> = Vec::new();
    for record in report.records() {
        if !states.contains(&record.state) {
            states.push(record.state.clone());
        }
    }
    states
}

fn css_class(state: &str) -> &'static str {
    match state {
        "open" => "open",
        "closed" => "closed",
        "filtered" => "filtered",
        _ => "other",
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
