use dioxus::prelude::*;
use tracing::debug;

use crate::{
    collection::{COLLECTION_SEARCH_KEY, grid::CollectionGrid},
    common::{alert, storage::*, style},
};
use api::{
    collection::{COLLECTION_URL_PREFIX, get_collection},
    session::QuerySession,
};

// CollectionSearch elements
//
// the search bar takes a collection slug (or a pasted collection URL, which
// gets normalized down to its slug), queries the provider proxy, and shows
// the results in a CollectionGrid; "Get Next Page" continues from the
// cursor until the provider stops returning one
//
// the begin_*/finish guards on the session keep a second request from
// starting while one is in flight, so the disabled buttons are cosmetic
#[derive(Clone, PartialEq, Props)]
struct CollectionSearchBarProps {
    session: Signal<QuerySession>,
    search_signal: Signal<String>,
    status: String,
}

#[component]
fn CollectionSearchBar(props: CollectionSearchBarProps) -> Element {
    let mut session = props.session;
    let mut search_signal = props.search_signal;
    let status = props.status;

    let in_flight = session.read().in_flight();

    rsx! {
        div {
            style { "{style::SUBNAV}" }
            div { class: "subnav",
                span { class: "prefix-hint", "{COLLECTION_URL_PREFIX}" }
                form {
                    // Enter in the input lands here too, and the
                    // begin_submit guard covers both activation paths
                    onsubmit: move |event| async move {
                        let raw = match event.values().get("collection_slug") {
                            Some(val) => val.as_value(),
                            None => String::from(""),
                        };

                        search_signal.set(raw.clone());
                        set_local_storage(COLLECTION_SEARCH_KEY, raw.clone());

                        session.write().set_identifier(&raw);

                        let Some(req) = session.write().begin_submit() else {
                            return;
                        };

                        debug!("fetching collection {}", req.identifier);

                        let result = get_collection(&req).await;

                        if let Err(err) = session.write().finish(result) {
                            alert(&err.to_string());
                        }
                    },
                    input {
                        name: "collection_slug",
                        r#type: "text",
                        placeholder: "s16nftofficial",
                        value: "{search_signal}",
                    }
                    input { r#type: "submit", disabled: in_flight, value: "Search" }
                }
                span { class: "status", "{status}" }
            }
        }
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn CollectionSearch() -> Element {
    let mut session = use_signal(QuerySession::default);

    // restored on load to pre-fill the input; no fetch until the user submits
    let search_signal = use_signal::<String>(|| try_local_storage(COLLECTION_SEARCH_KEY));

    let status = {
        let session = session.read();

        if session.in_flight() {
            String::from("Loading...")
        } else if session.items().is_empty() {
            String::new()
        } else {
            format!("Showing {} items", session.items().len())
        }
    };

    rsx! {
        div { class: "container",
            CollectionSearchBar { session, search_signal, status }

            if !session.read().items().is_empty() {
                div { class: "panel",
                    CollectionGrid { items: session.read().items().to_vec() }
                }
            }

            if session.read().has_more() {
                div { class: "panel load-more",
                    button {
                        disabled: session.read().in_flight(),
                        onclick: move |_| async move {
                            let Some(req) = session.write().begin_load_more() else {
                                return;
                            };

                            debug!("fetching next page of {}", req.identifier);

                            let result = get_collection(&req).await;

                            if let Err(err) = session.write().finish(result) {
                                alert(&err.to_string());
                            }
                        },
                        "Get Next Page"
                    }
                }
            }
        }
    }
}
