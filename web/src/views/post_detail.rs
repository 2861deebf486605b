//! Single-post page: full content, image, comments.

use api::{Comment, Post};
use dioxus::prelude::*;
use ui::{format, use_api, use_auth, CommentForm, CommentList, Navbar};

use crate::Route;

#[component]
pub fn PostDetail(id: i64) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut post = use_signal(|| Option::<Post>::None);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Load the post (with its comments) whenever the route id changes
    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            error.set(None);
            match api.post(id).await {
                Ok(loaded) => {
                    comments.set(loaded.comments.clone());
                    post.set(Some(loaded));
                }
                Err(e) => {
                    tracing::error!("failed to fetch post {id}: {e}");
                    post.set(None);
                    error.set(Some(format!("Could not load post: {e}")));
                }
            }
        }
    });

    let handle_comment_added = move |comment: Comment| {
        comments.write().push(comment);
    };

    let body = if let Some(err) = error() {
        rsx! {
            div {
                class: "form-error",
                "{err}"
            }
        }
    } else if let Some(post) = post() {
        rsx! {
            article {
                class: "post-full",
                h1 { "{post.title}" }
                p {
                    class: "post-meta",
                    span { "{post.author.display_name()}" }
                    span { " · {format::format_date(&post.created_at)}" }
                    span { " · {post.category_name()}" }
                    span { " · {post.status}" }
                }
                if let Some(ref url) = post.image_url {
                    img {
                        class: "post-image",
                        src: "{url}",
                        alt: "{post.title}",
                    }
                }
                div {
                    class: "post-body",
                    "{post.content}"
                }
            }

            section {
                class: "post-comments-section",
                h2 { "Comments" }
                CommentList { comments: comments() }
                if auth().is_authenticated() {
                    CommentForm {
                        post_id: id,
                        on_added: handle_comment_added,
                    }
                } else {
                    p {
                        class: "comments-login-hint",
                        Link { to: Route::Login {}, "Log in" }
                        " to join the discussion."
                    }
                }
            }
        }
    } else {
        rsx! {
            div {
                class: "loading",
                "Loading..."
            }
        }
    };

    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Home" }
        }

        main {
            class: "page post-page",
            {body}
        }
    }
}
