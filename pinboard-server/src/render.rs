//! Page rendering with minijinja.
//!
//! The index template is embedded at compile time. The `.html` name keeps
//! minijinja's default autoescaping active, so submitted markup renders
//! inert.

use minijinja::{context, Environment};
use pinboard_core::Message;

const INDEX_TEMPLATE: &str = include_str!("templates/index.html");

/// Build the template environment. Called once at state construction.
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_template("index.html", INDEX_TEMPLATE)
        .expect("embedded index template parses");
    env
}

/// Render the board page for the given rows, newest first as fetched.
pub fn render_index(
    env: &Environment<'static>,
    messages: &[Message],
) -> Result<String, minijinja::Error> {
    env.get_template("index.html")?.render(context! { messages })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: i64, content: &str) -> Message {
        Message {
            id,
            content: content.to_string(),
        }
    }

    #[test]
    fn renders_messages_in_given_order() {
        let env = environment();
        let page = render_index(&env, &[msg(2, "second"), msg(1, "first")]).unwrap();

        let second = page.find("second").unwrap();
        let first = page.find("first").unwrap();
        assert!(second < first);
    }

    #[test]
    fn escapes_submitted_markup() {
        let env = environment();
        let page = render_index(&env, &[msg(1, "<script>alert(1)</script>")]).unwrap();

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_board_renders_placeholder() {
        let env = environment();
        let page = render_index(&env, &[]).unwrap();
        assert!(page.contains("No messages yet."));
    }

    #[test]
    fn page_contains_submission_form() {
        let env = environment();
        let page = render_index(&env, &[]).unwrap();
        assert!(page.contains(r#"action="/add""#));
        assert!(page.contains(r#"name="message""#));
    }
}
