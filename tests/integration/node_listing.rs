//! Node listings: page count, favorite state and rows without a node link.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use v2ex_topics::{parse_topic_list, parse_topic_list_with_options, Error, Node, Options, Page};

const NODE_PAGE: &str = include_str!("../fixtures/node_page.html");

fn python() -> Node {
    Node::new("python", "Python")
}

fn signed_in() -> Options {
    Options {
        authenticated: true,
        ..Options::default()
    }
}

#[test]
fn test_node_page_anonymous() {
    let list = parse_topic_list(NODE_PAGE, &Page::Node(python())).expect("node page parses");

    assert_eq!(list.len(), 2);
    assert_eq!(list.max_page(), 17);
    assert!(!list.favorited());
    assert_eq!(list.once_token(), None);
}

#[test]
fn test_node_page_signed_in() {
    let list = parse_topic_list_with_options(NODE_PAGE, &Page::Node(python()), &signed_in())
        .expect("node page parses");

    assert_eq!(list.max_page(), 17);
    assert!(list.favorited());
    assert_eq!(list.once_token(), Some("48213"));
}

#[test]
fn test_rows_share_the_page_node() {
    let page_node = python();
    let list = parse_topic_list(NODE_PAGE, &Page::Node(page_node.clone())).expect("node page parses");

    assert!(list.iter().all(|topic| topic.node == page_node));
}

#[test]
fn test_node_row_fields() {
    let list = parse_topic_list(NODE_PAGE, &Page::Node(python())).expect("node page parses");
    let first = &list[0];

    assert_eq!(first.id, 1_000_001);
    assert_eq!(first.title, "asyncio 里的 TaskGroup 怎么取消");
    assert_eq!(first.member.username, "guido");
    assert_eq!(first.member.avatar.url, "/avatar/g/guido_normal.png");
    assert_eq!(first.reply_time, "17 分钟前");
    assert_eq!(first.reply_count, 15);

    let second = &list[1];
    assert_eq!(second.id, 1_000_002);
    assert_eq!(second.reply_time, "");
    assert_eq!(second.reply_count, 0);
}

#[test]
fn test_not_favorited_link() {
    let html = NODE_PAGE.replace(
        r#"<a href="/unfavorite/node/90?once=48213" class="node_header_link">取消收藏</a>"#,
        r#"<a href="/favorite/node/90?once=77001" class="node_header_link">加入收藏</a>"#,
    );
    let list = parse_topic_list_with_options(&html, &Page::Node(python()), &signed_in())
        .expect("node page parses");

    assert!(!list.favorited());
    assert_eq!(list.once_token(), Some("77001"));
}

#[test]
fn test_missing_favorite_link_only_fails_when_signed_in() {
    let html = NODE_PAGE.replace(
        r#"<a href="/unfavorite/node/90?once=48213" class="node_header_link">取消收藏</a>"#,
        "",
    );

    let anonymous = parse_topic_list(&html, &Page::Node(python())).expect("anonymous parse");
    assert!(!anonymous.favorited());

    let signed = parse_topic_list_with_options(&html, &Page::Node(python()), &signed_in());
    assert!(matches!(signed, Err(Error::UnexpectedStructure(_))));
}

#[test]
fn test_single_page_listing() {
    let start = NODE_PAGE.find(r#"<input type="number""#).expect("page input");
    let end = start + NODE_PAGE[start..].find('>').expect("input end") + 1;
    let html = format!("{}{}", &NODE_PAGE[..start], &NODE_PAGE[end..]);

    let list = parse_topic_list(&html, &Page::Node(python())).expect("node page parses");
    assert_eq!(list.max_page(), 1);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_invalid_page_count() {
    let html = NODE_PAGE.replace(r#"max="17""#, r#"max="abc""#);
    let result = parse_topic_list(&html, &Page::Node(python()));

    assert!(matches!(result, Err(Error::UnexpectedStructure(_))));
}

#[test]
fn test_node_page_with_no_topics() {
    let start = NODE_PAGE.find(r#"<div id="TopicsNode">"#).expect("topics");
    let html = format!(
        "{}<div id=\"TopicsNode\"></div></div></div></div></div></body></html>",
        &NODE_PAGE[..start]
    );

    let list = parse_topic_list(&html, &Page::Node(python())).expect("node page parses");
    assert!(list.is_empty());
    assert_eq!(list.max_page(), 17);
}
