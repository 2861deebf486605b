use api::Post;
use dioxus::prelude::*;

use crate::format::{format_date, preview};
use crate::icons::FaComment;
use crate::Icon;

/// Characters of content shown on a card before truncation.
const PREVIEW_CHARS: usize = 150;

/// One post in the feed: title, meta line, truncated content, status badge.
#[component]
pub fn PostCard(post: Post, on_open: EventHandler<i64>) -> Element {
    let status = post.status.as_str();

    rsx! {
        article {
            class: "post-card",
            h3 {
                class: "post-title",
                onclick: move |_| on_open.call(post.id),
                "{post.title}"
            }
            p {
                class: "post-meta",
                span { "{post.author.display_name()}" }
                span { " · {format_date(&post.created_at)}" }
                span { " · {post.category_name()}" }
                span {
                    class: "post-comments",
                    " · "
                    Icon { icon: FaComment, width: 12, height: 12 }
                    " {post.comments_count}"
                }
            }
            p {
                class: "post-content",
                "{preview(&post.content, PREVIEW_CHARS)}"
            }
            div {
                class: "post-status",
                span {
                    class: "status status-{status}",
                    "{status}"
                }
            }
        }
    }
}
