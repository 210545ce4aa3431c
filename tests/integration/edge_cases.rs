//! Edge case integration tests
//!
//! Unrecognized documents, layout changes and unsupported pages.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use v2ex_topics::{parse_topic_list, Error, Node, Page, Tab};

const TAB_PAGE: &str = include_str!("../fixtures/tab_page.html");

fn all_tab() -> Page {
    Page::Tab(Tab::all_topics())
}

#[test]
fn test_empty_input() {
    let result = parse_topic_list("", &all_tab());
    assert!(matches!(result, Err(Error::StructureNotFound(_))));
}

#[test]
fn test_page_without_content_box() {
    let html = r#"<html><body><div id="Wrapper"><div class="content"><div id="Main"><p>登录</p></div></div></div></body></html>"#;
    let result = parse_topic_list(html, &Page::Node(Node::new("python", "Python")));

    assert_eq!(
        result,
        Err(Error::StructureNotFound("content box: no .box element".to_string()))
    );
}

#[test]
fn test_favorite_nodes_page_is_rejected() {
    let result = parse_topic_list(TAB_PAGE, &Page::FavoriteNodes);
    assert_eq!(
        result,
        Err(Error::UnsupportedPageKind("favorite-nodes".to_string()))
    );
}

#[test]
fn test_missing_title_anchor_aborts_whole_parse() {
    let html = TAB_PAGE.replace(
        r#"<span class="item_title"><a href="/t/867999#reply7" class="topic-link">深圳租房求推荐</a></span>"#,
        r#"<span class="item_title">深圳租房求推荐</span>"#,
    );
    let result = parse_topic_list(&html, &all_tab());

    assert!(matches!(result, Err(Error::UnexpectedStructure(_))));
}

#[test]
fn test_reply_time_without_bullet() {
    let html = TAB_PAGE.replace("&nbsp;•&nbsp; 3 小时前 &nbsp;•&nbsp; 最后回复来自", "3 小时前 最后回复来自");
    let result = parse_topic_list(&html, &all_tab());

    assert!(matches!(result, Err(Error::TimeFormatError(_))));
}

#[test]
fn test_non_numeric_reply_count() {
    let html = TAB_PAGE.replace(r#"class="count_livid">42<"#, r#"class="count_livid">很多<"#);
    let result = parse_topic_list(&html, &all_tab());

    assert!(matches!(result, Err(Error::UnexpectedStructure(_))));
}

#[test]
fn test_topic_link_without_id() {
    let html = TAB_PAGE.replace(
        r#"<a href="/t/868190" class="topic-link">"#,
        r#"<a href="/go/programmer" class="topic-link">"#,
    );
    let result = parse_topic_list(&html, &all_tab());

    assert!(matches!(result, Err(Error::UnexpectedStructure(_))));
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = parse_topic_list("<html><body></body></html>", &all_tab()).expect_err("no box");
    assert!(err.to_string().contains("#Wrapper"), "unexpected message: {err}");
}
