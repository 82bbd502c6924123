use dioxus::prelude::*;

use crate::common::style;
use api::collection::{CollectionItem, asset_link};

#[derive(Clone, PartialEq, Props)]
struct CollectionTileProps {
    item: CollectionItem,
}

#[component]
fn CollectionTile(props: CollectionTileProps) -> Element {
    let item = props.item;

    rsx! {
        div {
            class: "collection-tile",
            a {
                target: "_blank",
                href: asset_link(&item.contract_address, &item.token_id),
                img { src: "{item.image_url}" }
                p { class: "item-name", "{item.name}" }
                p { class: "item-price", "{item.eth_price}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CollectionGridProps {
    items: Vec<CollectionItem>,
}

#[component]
pub fn CollectionGrid(props: CollectionGridProps) -> Element {
    rsx! {
        div {
            style { "{style::COLLECTION_GRID}" }
            div {
                class: "collection-grid",
                // provider order, duplicates and all
                for item in props.items.iter() {
                    CollectionTile { item: item.clone() }
                }
            }
        }
    }
}
