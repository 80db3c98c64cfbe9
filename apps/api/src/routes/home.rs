use axum::response::Html;

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Lead Filter Link Generator</title></head>
<body>
<h1>Lead Filter Link Generator</h1>
<p>Use <code>POST /api/generate-link</code> with a JSON body containing <code>query</code> to generate a filtered people-search link.</p>
<h2>Quick Test</h2>
<form id="testForm" style="margin-bottom: 20px;">
    <input type="text" id="queryInput" placeholder="Enter your search query" style="width: 300px; padding: 8px;">
    <button type="submit" style="padding: 8px;">Generate Link</button>
</form>
<div id="result" style="padding: 10px; background-color: #f5f5f5; display: none;"></div>
<script>
    document.getElementById('testForm').addEventListener('submit', function (e) {
        e.preventDefault();
        const query = document.getElementById('queryInput').value;
        if (!query) return;
        const resultDiv = document.getElementById('result');

        fetch('/api/generate-link', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ query: query })
        })
        .then(response => response.json())
        .then(data => {
            resultDiv.textContent = '';
            if (data.status === 'success') {
                const link = document.createElement('a');
                link.href = data.apollo_url;
                link.target = '_blank';
                link.textContent = data.apollo_url;
                resultDiv.append('Generated Link: ', link);
            } else {
                resultDiv.textContent = 'Error: ' + data.error.message;
            }
            resultDiv.style.display = 'block';
        })
        .catch(error => {
            resultDiv.textContent = 'Error: ' + error;
            resultDiv.style.display = 'block';
        });
    });
</script>
</body>
</html>
"#;

/// GET /
/// Static page describing the API, with a small form for manual testing.
pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}
