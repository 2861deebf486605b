use api::{ImageUpload, Post, PostDraft, PostStatus};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::category_select::CategorySelect;

/// Post-creation form: title, content, category, status, optional image.
///
/// Categories are fetched on mount. Submission goes multipart when an
/// image is attached and plain JSON otherwise; on success the fields are
/// cleared and the created post handed to `on_created`.
#[component]
pub fn PostForm(on_created: EventHandler<Post>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut status = use_signal(|| PostStatus::Draft);
    let mut category_id = use_signal(|| Option::<i64>::None);
    let mut image = use_signal(|| Option::<ImageUpload>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut categories = use_signal(Vec::<api::Category>::new);

    let fetch_api = api.clone();
    let _loader = use_resource(move || {
        let api = fetch_api.clone();
        async move {
            match api.categories().await {
                Ok(list) => categories.set(list),
                Err(e) => tracing::error!("failed to fetch categories: {e}"),
            }
        }
    });

    let handle_image = move |evt: FormEvent| {
        let Some(engine) = evt.files() else {
            return;
        };
        spawn(async move {
            let Some(name) = engine.files().first().cloned() else {
                return;
            };
            if let Some(bytes) = engine.read_file(&name).await {
                image.set(Some(ImageUpload::from_file(base_name(&name), bytes)));
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let draft = PostDraft {
                title: title().trim().to_string(),
                content: content().trim().to_string(),
                status: status(),
                category_id: category_id(),
            };
            if let Err(msg) = draft.validate() {
                error.set(Some(msg.to_string()));
                return;
            }

            loading.set(true);
            let result = match image() {
                Some(upload) => api.create_post_with_image(&draft, Some(&upload)).await,
                None => api.create_post(&draft).await,
            };
            loading.set(false);

            match result {
                Ok(post) => {
                    title.set(String::new());
                    content.set(String::new());
                    status.set(PostStatus::Draft);
                    category_id.set(None);
                    image.set(None);
                    on_created.call(post);
                }
                Err(e) => {
                    tracing::error!("failed to create post: {e}");
                    error.set(Some(format!("Could not create post: {e}")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "post-form",
            h2 { "New Post" }

            form {
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div {
                        class: "form-error",
                        "{err}"
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "post-title", "Title" }
                    input {
                        id: "post-title",
                        r#type: "text",
                        placeholder: "Post title",
                        required: true,
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "post-content", "Content" }
                    textarea {
                        id: "post-content",
                        rows: "6",
                        placeholder: "Write your post...",
                        required: true,
                        value: content(),
                        oninput: move |evt| content.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "post-image", "Image" }
                    input {
                        id: "post-image",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_image,
                    }
                    if let Some(upload) = image() {
                        p {
                            class: "form-hint",
                            "{selected_label(&upload)}"
                        }
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "Category" }
                        CategorySelect {
                            categories: categories(),
                            value: category_id(),
                            placeholder: "Select category",
                            onchange: move |id| category_id.set(id),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "post-status", "Status" }
                        select {
                            id: "post-status",
                            value: "{status()}",
                            onchange: move |evt: FormEvent| {
                                if let Ok(parsed) = evt.value().parse() {
                                    status.set(parsed);
                                }
                            },
                            option { value: "draft", "Draft" }
                            option { value: "published", "Published" }
                        }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating..." } else { "Create post" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// Last path segment of a picked file, for platforms that hand back a
/// full path instead of a bare name.
fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn selected_label(upload: &ImageUpload) -> String {
    format!(
        "Selected: {} ({} KB)",
        upload.file_name,
        upload.bytes.len().div_ceil(1024)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_directories() {
        assert_eq!(base_name("photo.png"), "photo.png");
        assert_eq!(base_name("/tmp/upload/photo.png"), "photo.png");
        assert_eq!(base_name(r"C:\Users\me\photo.png"), "photo.png");
    }

    #[test]
    fn test_selected_label_rounds_up() {
        let upload = ImageUpload::from_file("pic.png", vec![0; 1500]);
        assert_eq!(selected_label(&upload), "Selected: pic.png (2 KB)");
    }
}
