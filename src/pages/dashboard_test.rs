use futures::executor::block_on;

use super::*;
use crate::state::gate::{GateState, RouteGate, check_access};
use crate::util::token_store::{MemoryTokens, TokenStore};

#[test]
fn every_section_has_a_nested_page_under_its_root() {
    for role in Role::ALL {
        let links = section_links(role);
        assert_eq!(links[0].1, role.dashboard_path());
        assert!(links.len() > 1, "{role:?} section has no page to navigate to");
        for (_, path) in &links[1..] {
            assert!(path.starts_with(&format!("{}/", role.dashboard_path())), "{path} escapes its section");
        }
    }
}

#[test]
fn moving_within_section_rechecks_token() {
    for role in Role::ALL {
        let tokens = MemoryTokens::with_token(role, "token");
        let mut gate = RouteGate::new(role);
        let (_, nested) = section_links(role)[1];

        gate.begin(role.dashboard_path());
        assert_eq!(block_on(check_access(&mut gate, &tokens, |_| {})), GateState::Authorized);

        block_on(tokens.remove(role));
        gate.begin(nested);
        let mut redirects = Vec::new();
        let state = block_on(check_access(&mut gate, &tokens, |to| redirects.push(to.to_owned())));
        assert_eq!(state, GateState::Unauthorized);
        assert_eq!(redirects, vec![role.unauthorized_redirect().to_owned()]);
    }
}
