use api::Comment;
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::format::format_date;

/// The comments under a post, oldest first as the API serves them.
#[component]
pub fn CommentList(comments: Vec<Comment>) -> Element {
    rsx! {
        div {
            class: "comment-list",
            if comments.is_empty() {
                p {
                    class: "comments-empty",
                    "No comments yet."
                }
            }
            for comment in &comments {
                div {
                    key: "{comment.id}",
                    class: "comment",
                    p {
                        class: "comment-meta",
                        span { "{comment.author.display_name()}" }
                        span { " · {format_date(&comment.created_at)}" }
                    }
                    p {
                        class: "comment-content",
                        "{comment.content}"
                    }
                }
            }
        }
    }
}

/// Add-a-comment form for authenticated users.
#[component]
pub fn CommentForm(post_id: i64, on_added: EventHandler<Comment>) -> Element {
    let api = use_api();
    let mut content = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let body = content().trim().to_string();
            if body.is_empty() {
                error.set(Some("Comment cannot be empty".to_string()));
                return;
            }

            loading.set(true);
            match api.add_comment(post_id, &body).await {
                Ok(comment) => {
                    content.set(String::new());
                    loading.set(false);
                    on_added.call(comment);
                }
                Err(e) => {
                    tracing::error!("failed to add comment: {e}");
                    loading.set(false);
                    error.set(Some(format!("Could not add comment: {e}")));
                }
            }
        });
    };

    rsx! {
        form {
            class: "comment-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div {
                    class: "form-error",
                    "{err}"
                }
            }

            textarea {
                rows: "3",
                placeholder: "Write a comment...",
                required: true,
                value: content(),
                oninput: move |evt| content.set(evt.value()),
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Posting..." } else { "Add comment" }
            }
        }
    }
}
