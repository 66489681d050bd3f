use futures::executor::block_on;

use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokens::new();
    for role in Role::ALL {
        assert_eq!(block_on(store.read(role)), None);
    }
}

#[test]
fn memory_store_slots_are_independent_per_role() {
    let store = MemoryTokens::new();
    block_on(store.write(Role::Employer, "emp"));
    assert_eq!(block_on(store.read(Role::Employer)).as_deref(), Some("emp"));
    assert_eq!(block_on(store.read(Role::JobSeeker)), None);
    assert_eq!(block_on(store.read(Role::Admin)), None);
}

#[test]
fn memory_store_last_write_wins() {
    let store = MemoryTokens::with_token(Role::Admin, "first");
    block_on(store.write(Role::Admin, "second"));
    assert_eq!(store.get(Role::Admin).as_deref(), Some("second"));
}

#[test]
fn memory_store_remove_clears_only_that_role() {
    let store = MemoryTokens::with_token(Role::JobSeeker, "js");
    block_on(store.write(Role::Employer, "emp"));
    block_on(store.remove(Role::JobSeeker));
    assert_eq!(store.get(Role::JobSeeker), None);
    assert_eq!(store.get(Role::Employer).as_deref(), Some("emp"));
}

#[test]
fn blank_stored_token_reads_as_missing() {
    let store = MemoryTokens::with_token(Role::JobSeeker, "   ");
    assert_eq!(block_on(store.read(Role::JobSeeker)), None);
}

#[test]
fn normalize_token_trims_whitespace() {
    assert_eq!(normalize_token("  abc \n").as_deref(), Some("abc"));
    assert_eq!(normalize_token(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_outside_hydrate() {
    let store = BrowserTokens;
    block_on(store.write(Role::JobSeeker, "js"));
    assert_eq!(block_on(store.read(Role::JobSeeker)), None);
    block_on(store.remove(Role::JobSeeker));
}
