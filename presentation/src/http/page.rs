/// Question form served at `/`. Posts to `/solve` and shows the answer.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Math Tutor</title>
  <style>
    body { font-family: sans-serif; max-width: 36rem; margin: 3rem auto; }
    input { width: 75%; padding: 0.4rem; font-size: 1rem; }
    button { padding: 0.4rem 1rem; font-size: 1rem; }
    #answer { margin-top: 1.5rem; font-size: 1.2rem; white-space: pre-line; }
  </style>
</head>
<body>
  <h1>Math Tutor</h1>
  <form id="ask">
    <input id="question" placeholder="What is the LCM of 4 and 6?" autofocus>
    <button type="submit">Ask</button>
  </form>
  <div id="answer"></div>
  <script>
    document.getElementById("ask").addEventListener("submit", async (event) => {
      event.preventDefault();
      const question = document.getElementById("question").value;
      const response = await fetch("/solve", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ question }),
      });
      const data = await response.json();
      document.getElementById("answer").textContent = data.answer;
    });
  </script>
</body>
</html>
"#;
