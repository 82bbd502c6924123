use constcat::concat;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

// marketplace compatibility contracts
//
// the prefix is what users paste into the search box when they copy a
// collection page URL instead of the bare slug; the asset link format is
// what the marketplace expects for per-item detail pages
pub const MARKETPLACE_BASE: &str = "https://opensea.io";
pub const COLLECTION_URL_PREFIX: &str = concat!(MARKETPLACE_BASE, "/collection/");

pub const URL_GET_COLLECTION: &str = "/api/getCollection";

// structs and types

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub token_id: String,
    pub contract_address: String,
    pub image_url: String,
    pub name: String,
    pub eth_price: String,
}

// one page request against the provider proxy
//
// cursor is None for a fresh query and Some(token) when continuing from a
// previous response's nextPageCursor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetCollectionReq {
    pub identifier: String,
    pub cursor: Option<String>,
}

// response envelope from the provider proxy
//
// a missing nextPageCursor means the collection is exhausted, and a non-null
// error means the request failed regardless of the HTTP status
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCollectionResp {
    pub collection_items: Vec<CollectionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// reduce pasted collection URLs to the slug the provider expects
//
// stripping repeats so the result can never start with the prefix, even for
// pathological inputs with a stacked prefix
pub fn normalize_identifier(raw: &str) -> String {
    let mut slug = raw;

    while let Some(rest) = slug.strip_prefix(COLLECTION_URL_PREFIX) {
        slug = rest;
    }

    slug.to_string()
}

fn request_url(req: &GetCollectionReq) -> String {
    let mut url = format!("{URL_GET_COLLECTION}?identifier={}", req.identifier);

    if let Some(cursor) = &req.cursor {
        url.push_str(&format!("&cursor={cursor}"));
    }

    url
}

pub async fn get_collection(req: &GetCollectionReq) -> anyhow::Result<GetCollectionResp> {
    let resp = Request::get(request_url(req).as_str()).send().await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

pub fn asset_link(contract_address: &str, token_id: &str) -> String {
    format!("{MARKETPLACE_BASE}/assets/ethereum/{contract_address}/{token_id}")
}
