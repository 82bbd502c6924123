use thiserror::Error;

use crate::collection::{
    CollectionItem, GetCollectionReq, GetCollectionResp, normalize_identifier,
};

#[derive(Debug, Error)]
pub enum FetchError {
    // shown to the user verbatim, so no decoration
    #[error("{0}")]
    Provider(String),
    #[error("request failed: {0}")]
    Transport(anyhow::Error),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Pending {
    Fresh,
    NextPage,
}

// the interactive state behind the search page: the normalized identifier,
// the accumulated items, and the pagination cursor
//
// the begin_*/finish pairs enforce the one-request-at-a-time discipline
// directly, so the invariant holds even when nothing disables the buttons
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuerySession {
    identifier: String,
    items: Vec<CollectionItem>,
    cursor: String,
    has_more: bool,
    pending: Option<Pending>,
}

impl QuerySession {
    pub fn set_identifier(&mut self, raw: &str) {
        self.identifier = normalize_identifier(raw);
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn items(&self) -> &[CollectionItem] {
        &self.items
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    // start a fresh query, dropping any previous pagination progress
    //
    // returns the request to issue, or None while another fetch is pending
    pub fn begin_submit(&mut self) -> Option<GetCollectionReq> {
        if self.pending.is_some() {
            return None;
        }

        self.has_more = false;
        self.cursor.clear();
        self.pending = Some(Pending::Fresh);

        Some(GetCollectionReq {
            identifier: self.identifier.clone(),
            cursor: None,
        })
    }

    // continue from the stored cursor; None while pending or exhausted
    pub fn begin_load_more(&mut self) -> Option<GetCollectionReq> {
        if self.pending.is_some() || !self.has_more {
            return None;
        }

        self.pending = Some(Pending::NextPage);

        Some(GetCollectionReq {
            identifier: self.identifier.clone(),
            cursor: Some(self.cursor.clone()),
        })
    }

    // apply the outcome of the request returned by the matching begin_* call
    //
    // the pending marker clears on every path so the session stays
    // interactive after a failure; a failed fetch contributes zero items
    pub fn finish(
        &mut self,
        result: anyhow::Result<GetCollectionResp>,
    ) -> Result<(), FetchError> {
        // finish without a matching begin is a no-op
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };

        let resp = result.map_err(FetchError::Transport)?;

        if let Some(message) = resp.error {
            return Err(FetchError::Provider(message));
        }

        match pending {
            Pending::Fresh => self.items = resp.collection_items,
            Pending::NextPage => self.items.extend(resp.collection_items),
        }

        self.has_more = resp.next_page_cursor.is_some();
        self.cursor = resp.next_page_cursor.unwrap_or_default();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn item(token_id: &str) -> CollectionItem {
        CollectionItem {
            token_id: String::from(token_id),
            contract_address: String::from("0xabc"),
            image_url: format!("https://img.example/{token_id}.png"),
            name: format!("Item {token_id}"),
            eth_price: String::from("0.5 ETH"),
        }
    }

    fn page(token_ids: &[&str], next_page_cursor: Option<&str>) -> GetCollectionResp {
        GetCollectionResp {
            collection_items: token_ids.iter().map(|t| item(t)).collect(),
            next_page_cursor: next_page_cursor.map(String::from),
            error: None,
        }
    }

    fn tokens(session: &QuerySession) -> Vec<&str> {
        session.items().iter().map(|i| i.token_id.as_str()).collect()
    }

    #[test]
    fn set_identifier_applies_normalization() {
        let mut session = QuerySession::default();

        session.set_identifier("https://opensea.io/collection/cool-cats");

        assert_eq!(session.identifier(), "cool-cats");
    }

    #[test]
    fn submit_request_carries_no_cursor() {
        let mut session = QuerySession::default();
        session.set_identifier("cool-cats");

        let req = session.begin_submit().unwrap();

        assert_eq!(req.identifier, "cool-cats");
        assert_eq!(req.cursor, None);
        assert!(session.in_flight());
    }

    #[test]
    fn submit_replaces_accumulated_items() {
        let mut session = QuerySession::default();
        session.set_identifier("cool-cats");

        let _ = session.begin_submit().unwrap();
        session.finish(Ok(page(&["1", "2"], Some("abc")))).unwrap();

        // a second fresh query drops the first one's results entirely
        let _ = session.begin_submit().unwrap();
        session.finish(Ok(page(&["3", "4"], None))).unwrap();

        assert_eq!(tokens(&session), vec!["3", "4"]);
    }

    #[test]
    fn load_more_appends_in_provider_order() {
        let mut session = QuerySession::default();
        session.set_identifier("cool-cats");

        let _ = session.begin_submit().unwrap();
        session.finish(Ok(page(&["1", "2"], Some("abc")))).unwrap();

        let req = session.begin_load_more().unwrap();
        assert_eq!(req.cursor.as_deref(), Some("abc"));

        session.finish(Ok(page(&["3", "4"], Some("def")))).unwrap();

        assert_eq!(tokens(&session), vec!["1", "2", "3", "4"]);
        assert!(session.has_more());
    }

    #[test]
    fn load_more_does_not_deduplicate() {
        let mut session = QuerySession::default();

        let _ = session.begin_submit().unwrap();
        session.finish(Ok(page(&["1"], Some("abc")))).unwrap();

        let _ = session.begin_load_more().unwrap();
        session.finish(Ok(page(&["1"], None))).unwrap();

        assert_eq!(tokens(&session), vec!["1", "1"]);
    }

    #[test]
    fn begin_is_rejected_while_in_flight() {
        let mut session = QuerySession::default();

        let _ = session.begin_submit().unwrap();

        assert_eq!(session.begin_submit(), None);
        assert_eq!(session.begin_load_more(), None);
    }

    #[test]
    fn provider_error_leaves_items_untouched() {
        let mut session = QuerySession::default();

        let _ = session.begin_submit().unwrap();
        session.finish(Ok(page(&["1", "2"], Some("abc")))).unwrap();

        let _ = session.begin_load_more().unwrap();
        let err = session
            .finish(Ok(GetCollectionResp {
                collection_items: vec![item("3")],
                next_page_cursor: None,
                error: Some(String::from("collection not found")),
            }))
            .unwrap_err();

        match err {
            FetchError::Provider(message) => assert_eq!(message, "collection not found"),
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(tokens(&session), vec!["1", "2"]);
        assert!(!session.in_flight());
    }

    #[test]
    fn transport_error_leaves_items_untouched() {
        let mut session = QuerySession::default();

        let _ = session.begin_submit().unwrap();
        session.finish(Ok(page(&["1"], None))).unwrap();

        let _ = session.begin_submit().unwrap();
        let err = session
            .finish(Err(anyhow::Error::msg("connection reset")))
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
        assert_eq!(tokens(&session), vec!["1"]);
        assert!(!session.in_flight());
    }

    #[test]
    fn missing_cursor_terminates_pagination() {
        let mut session = QuerySession::default();

        let _ = session.begin_submit().unwrap();
        session.finish(Ok(page(&["1"], None))).unwrap();

        assert!(!session.has_more());
        assert_eq!(session.begin_load_more(), None);
    }

    #[test]
    fn fresh_submit_resets_pagination_state() {
        let mut session = QuerySession::default();

        let _ = session.begin_submit().unwrap();
        session.finish(Ok(page(&["1"], Some("abc")))).unwrap();
        assert!(session.has_more());

        let req = session.begin_submit().unwrap();

        assert_eq!(req.cursor, None);
        assert!(!session.has_more());
    }

    // the worked example from the provider contract
    #[test]
    fn two_page_scenario() {
        let mut session = QuerySession::default();
        session.set_identifier("cool-cats");

        let _ = session.begin_submit().unwrap();
        session.finish(Ok(page(&["1"], Some("abc")))).unwrap();

        assert_eq!(tokens(&session), vec!["1"]);
        assert!(session.has_more());

        let req = session.begin_load_more().unwrap();
        assert_eq!(req.cursor.as_deref(), Some("abc"));

        session.finish(Ok(page(&["2"], None))).unwrap();

        assert_eq!(tokens(&session), vec!["1", "2"]);
        assert!(!session.has_more());
        assert_eq!(session.begin_load_more(), None);
    }
}
