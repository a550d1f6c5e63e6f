use super::*;
use crossbeam_channel::TryRecvError;

fn loaded_app() -> TestHarness {
    let mut harness = make_app();
    harness.app.apply_event(CoreEvent::SnippetList {
        items: vec![
            test_snippet(1, "http client", "rust", "net, async", false),
            test_snippet(2, "flask route", "python", "net, web", true),
            test_snippet(3, "css grid", "css", "web", false),
        ],
    });
    harness
}

#[test]
fn language_filter_narrows_visible_rows() {
    let TestHarness { mut app, cmd_rx: _cmd_rx } = loaded_app();
    app.criteria.language_filter = "python".to_string();
    app.refresh_derived_state();

    assert_eq!(app.visible.len(), 1);
    assert_eq!(app.visible[0].title, "flask route");
}

#[test]
fn tag_filter_requires_all_tokens() {
    let TestHarness { mut app, cmd_rx: _cmd_rx } = loaded_app();
    app.criteria.tag_filter = "net, web".to_string();
    app.refresh_derived_state();

    assert_eq!(app.visible.len(), 1);
    assert_eq!(app.visible[0].title, "flask route");
}

#[test]
fn favorites_only_hides_unstarred_rows() {
    let TestHarness { mut app, cmd_rx: _cmd_rx } = loaded_app();
    app.criteria.show_favorites_only = true;
    app.refresh_derived_state();

    assert_eq!(app.visible.len(), 1);
    assert!(app.visible[0].is_favorite);
}

#[test]
fn append_tag_filter_skips_tokens_already_required() {
    let TestHarness { mut app, cmd_rx: _cmd_rx } = loaded_app();
    app.append_tag_filter("web");
    assert_eq!(app.criteria.tag_filter, "web");

    app.append_tag_filter("web");
    assert_eq!(app.criteria.tag_filter, "web");

    app.append_tag_filter("net");
    assert_eq!(app.criteria.tag_filter, "web, net");
}

#[test]
fn set_search_query_filters_locally_and_arms_debounce() {
    let TestHarness { mut app, cmd_rx } = loaded_app();
    app.set_search_query("flask".to_string());

    assert_eq!(app.visible.len(), 1);
    assert_eq!(app.visible[0].title, "flask route");
    assert!(app.search_last_input_at.is_some());
    // Nothing is sent until the debounce window passes.
    assert!(matches!(cmd_rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn debounced_search_dispatches_once() {
    let TestHarness { mut app, cmd_rx } = loaded_app();
    app.set_search_query("grid".to_string());
    app.search_last_input_at = Some(Instant::now() - SEARCH_DEBOUNCE);

    app.maybe_dispatch_search();
    match recv_cmd(&cmd_rx) {
        CoreCmd::SearchSnippets { query } => assert_eq!(query, "grid"),
        other => panic!("unexpected command: {:?}", other),
    }

    // A second pass with no new input sends nothing.
    app.maybe_dispatch_search();
    assert!(matches!(cmd_rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn emptied_query_dispatches_full_list_reload() {
    let TestHarness { mut app, cmd_rx } = loaded_app();
    app.search_last_sent = "grid".to_string();
    app.set_search_query(String::new());
    app.search_last_input_at = Some(Instant::now() - SEARCH_DEBOUNCE);

    app.maybe_dispatch_search();
    assert!(matches!(recv_cmd(&cmd_rx), CoreCmd::GetSnippets));
}

#[test]
fn stale_search_results_are_dropped() {
    let TestHarness { mut app, cmd_rx: _cmd_rx } = loaded_app();
    app.criteria.search_query = "grid".to_string();

    app.apply_event(CoreEvent::SearchResults {
        query: "flask".to_string(),
        items: vec![test_snippet(2, "flask route", "python", "net, web", true)],
    });

    // The old response does not overwrite the loaded list.
    assert_eq!(app.all_snippets.len(), 3);
}

#[test]
fn matching_search_results_replace_the_list() {
    let TestHarness { mut app, cmd_rx: _cmd_rx } = loaded_app();
    app.criteria.search_query = "flask".to_string();

    app.apply_event(CoreEvent::SearchResults {
        query: "flask".to_string(),
        items: vec![test_snippet(2, "flask route", "python", "net, web", true)],
    });

    assert_eq!(app.all_snippets.len(), 1);
    assert_eq!(app.visible.len(), 1);
}

#[test]
fn selection_is_dropped_when_row_disappears() {
    let TestHarness { mut app, cmd_rx: _cmd_rx } = loaded_app();
    app.select_snippet(3);

    app.apply_event(CoreEvent::SnippetList {
        items: vec![test_snippet(1, "http client", "rust", "net, async", false)],
    });

    assert_eq!(app.selected_id, None);
}
