use api::{Category, Post, PostQuery};
use dioxus::prelude::*;

use ui::icons::{FaFire, FaMagnifyingGlass};
use ui::{use_api, use_auth, CategorySelect, Icon, ModalOverlay, Navbar, PostCard, PostForm};

use crate::Route;

/// The feed: filter bar over the post list, plus the create-post modal.
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let mut posts = use_signal(Vec::<Post>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);
    let mut selected_category = use_signal(|| Option::<i64>::None);
    let mut show_create = use_signal(|| false);

    // Load posts and categories on mount
    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            loading.set(true);
            match api.posts(&PostQuery::default()).await {
                Ok(list) => posts.set(list),
                Err(e) => tracing::error!("failed to fetch posts: {e}"),
            }
            match api.categories().await {
                Ok(list) => categories.set(list),
                Err(e) => tracing::error!("failed to fetch categories: {e}"),
            }
            loading.set(false);
        }
    });

    let run_fetch = {
        let api = api.clone();
        move |query: PostQuery| {
            let api = api.clone();
            spawn(async move {
                loading.set(true);
                match api.posts(&query).await {
                    Ok(list) => posts.set(list),
                    Err(e) => tracing::error!("failed to fetch posts: {e}"),
                }
                loading.set(false);
            });
        }
    };

    let handle_search = {
        let run_fetch = run_fetch.clone();
        move |_| {
            let term = search_term().trim().to_string();
            let query = PostQuery {
                search: (!term.is_empty()).then_some(term),
                category: selected_category(),
                ..Default::default()
            };
            run_fetch(query);
        }
    };

    let handle_all = {
        let run_fetch = run_fetch.clone();
        move |_| {
            search_term.set(String::new());
            selected_category.set(None);
            run_fetch(PostQuery::default());
        }
    };

    let handle_popular = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                loading.set(true);
                match api.popular_posts().await {
                    Ok(list) => posts.set(list),
                    Err(e) => tracing::error!("failed to fetch popular posts: {e}"),
                }
                loading.set(false);
            });
        }
    };

    let handle_my_posts = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                loading.set(true);
                match api.my_posts().await {
                    Ok(list) => posts.set(list),
                    Err(e) => tracing::error!("failed to fetch my posts: {e}"),
                }
                loading.set(false);
            });
        }
    };

    let handle_created = {
        let run_fetch = run_fetch.clone();
        move |_post: Post| {
            show_create.set(false);
            run_fetch(PostQuery::default());
        }
    };

    let on_open_post = move |id: i64| {
        nav.push(Route::PostDetail { id });
    };

    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Home" }
            if !auth().is_authenticated() {
                Link { to: Route::Register {}, "Register" }
            }
        }

        main {
            class: "page",

            div {
                class: "filters",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search posts...",
                    value: search_term(),
                    oninput: move |evt| search_term.set(evt.value()),
                }
                CategorySelect {
                    categories: categories(),
                    value: selected_category(),
                    onchange: move |id| selected_category.set(id),
                }
                button {
                    class: "btn btn-primary",
                    onclick: handle_search,
                    Icon { icon: FaMagnifyingGlass, width: 12, height: 12 }
                    " Search"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: handle_all,
                    "All"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: handle_popular,
                    Icon { icon: FaFire, width: 12, height: 12 }
                    " Popular"
                }
                if auth().is_authenticated() {
                    button {
                        class: "btn btn-secondary",
                        onclick: handle_my_posts,
                        "My posts"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create.set(true),
                        "New post"
                    }
                }
            }

            if loading() {
                div {
                    class: "loading",
                    "Loading..."
                }
            } else if posts().is_empty() {
                div {
                    class: "no-posts",
                    "No posts yet."
                }
            } else {
                div {
                    class: "posts-grid",
                    for post in posts() {
                        PostCard {
                            key: "{post.id}",
                            post: post.clone(),
                            on_open: on_open_post,
                        }
                    }
                }
            }
        }

        if show_create() {
            ModalOverlay {
                on_close: move |_| show_create.set(false),
                PostForm {
                    on_created: handle_created,
                    on_cancel: move |_| show_create.set(false),
                }
            }
        }
    }
}
