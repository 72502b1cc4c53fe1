//! Embedded landing page for the catalog gateway root route.

pub(crate) fn render_landing_page() -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Reel Movie Catalog</title>
  <style>
    :root {{
      color-scheme: light;
      font-family: "IBM Plex Sans", "Segoe UI", sans-serif;
    }}
    body {{
      margin: 0;
      background: linear-gradient(160deg, #f4f6f8 0%, #eef2f7 100%);
      color: #13232f;
    }}
    .container {{
      max-width: 760px;
      margin: 0 auto;
      padding: 1.5rem;
    }}
    h1 {{
      margin: 0 0 0.5rem 0;
      font-size: 1.5rem;
    }}
    p {{
      margin: 0.25rem 0 1rem 0;
      color: #3a4f5f;
    }}
    table {{
      width: 100%;
      border-collapse: collapse;
      background: #ffffff;
      border: 1px solid #d2dde6;
      border-radius: 12px;
    }}
    th, td {{
      text-align: left;
      padding: 0.55rem 0.7rem;
      border-bottom: 1px solid #e3ebf2;
      font-size: 0.92rem;
    }}
    code {{
      font-family: "IBM Plex Mono", monospace;
      background: #f1f5f9;
      border-radius: 4px;
      padding: 0.1rem 0.3rem;
    }}
  </style>
</head>
<body>
  <div class="container">
    <h1>Reel Movie Catalog</h1>
    <p>In-memory movie catalog. Ids are positions: deleting a record shifts every later id down by one.</p>
    <table>
      <tr><th>Method</th><th>Path</th><th>Purpose</th></tr>
      <tr><td>GET</td><td><code>/api/movies</code></td><td>List all movies</td></tr>
      <tr><td>GET</td><td><code>/api/movies/filter?genre=Sci-Fi</code></td><td>Filter by genre (case-insensitive)</td></tr>
      <tr><td>GET</td><td><code>/api/movies/0</code></td><td>Fetch one movie by position</td></tr>
      <tr><td>POST</td><td><code>/api/movies</code></td><td>Append a movie (title, genre, year, director)</td></tr>
      <tr><td>PUT</td><td><code>/api/movies/0</code></td><td>Replace the movie at a position</td></tr>
      <tr><td>DELETE</td><td><code>/api/movies/0</code></td><td>Remove the movie at a position</td></tr>
    </table>
  </div>
</body>
</html>
"#
    )
}
