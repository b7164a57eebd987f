//! HTML rendering for the todo page.
//!
//! The page is assembled from const template pieces plus one `format!` per
//! item. Keeping the blob here avoids a runtime template dependency. Task
//! text is escaped on render, so markup submitted as a task shows up as
//! literal text instead of being interpreted.

use crate::db::Todo;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Todo App</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: -apple-system, 'Segoe UI', sans-serif; background: linear-gradient(135deg, #667eea, #764ba2); min-height: 100vh; display: flex; justify-content: center; align-items: center; padding: 20px; }
    .container { background: white; border-radius: 12px; padding: 30px; box-shadow: 0 20px 60px rgba(0,0,0,0.3); max-width: 500px; width: 100%; }
    h1 { color: #333; margin-bottom: 20px; text-align: center; }
    form { display: flex; gap: 10px; margin-bottom: 30px; }
    input[type="text"] { flex: 1; padding: 12px; border: 2px solid #e0e0e0; border-radius: 6px; font-size: 16px; }
    input[type="text"]:focus { outline: none; border-color: #667eea; }
    button { padding: 12px 24px; background: #667eea; color: white; border: none; border-radius: 6px; font-size: 16px; font-weight: 600; cursor: pointer; }
    button:hover { background: #5568d3; }
    .todos { list-style: none; }
    .todo-item { background: #f8f9fa; padding: 15px; margin-bottom: 10px; border-radius: 6px; border-left: 4px solid #667eea; }
    .todo-text { color: #333; font-size: 16px; }
    .todo-date { color: #999; font-size: 12px; margin-top: 5px; }
    .empty { text-align: center; color: #999; padding: 40px; font-style: italic; }
  </style>
</head>
<body>
  <div class="container">
    <h1>&#128221; My Todos</h1>
    <form action="/add" method="POST">
      <input type="text" name="task" placeholder="What needs to be done?" required>
      <button type="submit">Add</button>
    </form>
    <ul class="todos">
"#;

const PAGE_TAIL: &str = r#"    </ul>
  </div>
</body>
</html>
"#;

const EMPTY_ITEM: &str = "      <li class=\"empty\">No todos yet. Add one above!</li>\n";

/// Render the full page for the given todos, in the order received.
pub fn render_index(todos: &[Todo]) -> String {
    let items: String = if todos.is_empty() {
        EMPTY_ITEM.to_string()
    } else {
        todos.iter().map(render_item).collect()
    };
    format!("{PAGE_HEAD}{items}{PAGE_TAIL}")
}

fn render_item(todo: &Todo) -> String {
    format!(
        "      <li class=\"todo-item\">\n        <div class=\"todo-text\">{}</div>\n        <div class=\"todo-date\">{}</div>\n      </li>\n",
        escape_html(&todo.task),
        todo.created_at.format("%b %e, %Y %H:%M"),
    )
}

/// Minimal HTML entity escape for text interpolated into the page.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
