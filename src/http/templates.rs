//! Embedded HTML template for the search page.

/// Single-page search UI.
///
/// Submitting a blank query does nothing. Results with a non-positive
/// score are never rendered.
pub const SEARCH_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>BM25 Search Engine</title>
    <style>
        body { font-family: system-ui, -apple-system, "Segoe UI", sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; color: #1f2328; }
        h1 { font-size: 1.6rem; margin-bottom: 1.5rem; }
        label { display: block; font-size: 0.9rem; margin-bottom: 0.4rem; color: #57606a; }
        input[type="text"] { width: 100%; padding: 0.6rem; font-size: 1rem; box-sizing: border-box; border: 1px solid #d0d7de; border-radius: 6px; }
        button { margin-top: 0.6rem; padding: 0.5rem 1.2rem; font-size: 1rem; cursor: pointer; border: 1px solid #d0d7de; border-radius: 6px; background: #f6f8fa; }
        #results { margin-top: 1.5rem; }
        #results ol { padding-left: 1.5rem; }
        #results li { margin-bottom: 1rem; }
        .title { font-weight: 600; }
        .link a { color: #0969da; word-break: break-all; }
        .score { font-size: 0.85rem; color: #57606a; font-family: ui-monospace, monospace; }
        .state { color: #57606a; }
    </style>
</head>
<body>
    <h1>BM25 Search Engine</h1>
    <form id="search-form" autocomplete="off">
        <label for="query">Enter your search query:</label>
        <input type="text" id="query" name="query" autofocus>
        <button type="submit">Search</button>
    </form>
    <div id="results"></div>
    <script>
        const form = document.getElementById('search-form');
        const input = document.getElementById('query');
        const results = document.getElementById('results');

        function esc(s) {
            return String(s).replace(/[&<>"']/g, c => ({'&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'}[c]));
        }

        function safeHref(link) {
            return /^https?:\/\//i.test(link) ? esc(link) : '#';
        }

        function render(hits) {
            const positive = hits.filter(h => h.score > 0);
            if (positive.length === 0) {
                results.innerHTML = '<p class="state">No matching documents.</p>';
                return;
            }
            const items = positive.map(h =>
                `<li><div class="title">${esc(h.title)}</div>` +
                `<div class="link"><a href="${safeHref(h.link)}" target="_blank" rel="noopener">${esc(h.link)}</a></div>` +
                `<div class="score">Score: ${Number(h.score).toFixed(4)}</div></li>`
            ).join('');
            results.innerHTML = `<p><strong>Top Results:</strong></p><ol>${items}</ol>`;
        }

        form.addEventListener('submit', async (e) => {
            e.preventDefault();
            const query = input.value;
            if (!query) { return; }
            try {
                const r = await fetch('/api/v1/search', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ query })
                });
                const body = await r.json();
                if (!r.ok) {
                    results.innerHTML = `<p class="state">${esc(body.error || 'Search failed')}</p>`;
                    return;
                }
                render(body.results);
            } catch (err) {
                results.innerHTML = `<p class="state">${esc(err)}</p>`;
            }
        });
    </script>
</body>
</html>
"#;
