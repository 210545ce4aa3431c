//! Tab and favorite-topics listings.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use v2ex_topics::{parse_topic_list, parse_topic_list_with_options, Node, Options, Page, Tab};

const TAB_PAGE: &str = include_str!("../fixtures/tab_page.html");

fn all_tab() -> Page {
    Page::Tab(Tab::all_topics())
}

#[test]
fn test_tab_page_lists_every_row() {
    let list = parse_topic_list(TAB_PAGE, &all_tab()).expect("tab page parses");

    assert_eq!(list.len(), 3);
    assert_eq!(list.max_page(), 1);
    assert!(!list.favorited());
    assert_eq!(list.once_token(), None);

    let ids: Vec<u64> = list.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![868_201, 868_190, 867_999]);
}

#[test]
fn test_tab_row_fields() {
    let list = parse_topic_list(TAB_PAGE, &all_tab()).expect("tab page parses");
    let first = &list[0];

    assert_eq!(first.title, "V2EX 站点状态 &amp; 维护公告");
    assert_eq!(first.member.username, "Livid");
    assert_eq!(
        first.member.avatar.url,
        "//cdn.v2ex.com/avatar/c4ca/4238/1_normal.png?m=1657258945"
    );
    assert_eq!(first.node, Node::new("v2ex", "V2EX"));
    assert_eq!(first.reply_time, "3 小时前");
    assert_eq!(first.reply_count, 42);
}

#[test]
fn test_title_keeps_inline_markup() {
    let list = parse_topic_list(TAB_PAGE, &all_tab()).expect("tab page parses");
    assert_eq!(list[1].title, "有没有推荐的 <code>Rust</code> 入门书");
}

#[test]
fn test_row_without_replies() {
    let list = parse_topic_list(TAB_PAGE, &all_tab()).expect("tab page parses");
    let quiet = &list[1];

    assert_eq!(quiet.node, Node::new("programmer", "程序员"));
    assert_eq!(quiet.reply_time, "");
    assert_eq!(quiet.reply_count, 0);
}

#[test]
fn test_each_row_carries_its_own_node() {
    let list = parse_topic_list(TAB_PAGE, &all_tab()).expect("tab page parses");
    let nodes: Vec<&str> = list.iter().map(|t| t.node.name.as_str()).collect();

    assert_eq!(nodes, vec!["v2ex", "programmer", "shenzhen"]);
    assert_eq!(list[2].reply_time, "2 天前");
    assert_eq!(list[2].reply_count, 7);
}

#[test]
fn test_favorite_topics_use_tab_layout() {
    let options = Options {
        authenticated: true,
        ..Options::default()
    };
    let list = parse_topic_list_with_options(TAB_PAGE, &Page::FavoriteTopics, &options)
        .expect("favorite topics parse");

    assert_eq!(list.len(), 3);
    assert_eq!(list.max_page(), 1);
    assert!(!list.favorited());
    assert_eq!(list.once_token(), None);
}

#[test]
fn test_tab_choice_does_not_change_result() {
    let tech = Tab::from_key("tech").expect("tech tab");
    let all = parse_topic_list(TAB_PAGE, &all_tab()).expect("all tab");
    let other = parse_topic_list(TAB_PAGE, &Page::Tab(tech)).expect("tech tab");

    assert_eq!(all, other);
}

#[test]
fn test_absolute_avatar_urls() {
    let options = Options {
        absolute_avatar_urls: true,
        ..Options::default()
    };
    let list = parse_topic_list_with_options(TAB_PAGE, &all_tab(), &options).expect("tab page parses");

    assert_eq!(
        list[0].member.avatar.url,
        "https://cdn.v2ex.com/avatar/c4ca/4238/1_normal.png?m=1657258945"
    );
    assert_eq!(
        list[1].member.avatar.url,
        "https://www.v2ex.com/static/img/avatar_normal.png"
    );
    assert_eq!(
        list[2].member.avatar.url,
        "https://cdn.v2ex.com/avatar/b/o/bob_normal.png"
    );
}

#[test]
fn test_parse_is_repeatable() {
    let first = parse_topic_list(TAB_PAGE, &all_tab()).expect("first parse");
    let second = parse_topic_list(TAB_PAGE, &all_tab()).expect("second parse");

    assert_eq!(first, second);
}

#[test]
fn test_serializes_to_json() {
    let list = parse_topic_list(TAB_PAGE, &all_tab()).expect("tab page parses");
    let json = serde_json::to_value(&list).expect("serializes");

    assert_eq!(json["max_page"], 1);
    assert_eq!(json["favorited"], false);
    assert_eq!(json["topics"][0]["id"], 868_201);
    assert_eq!(json["topics"][0]["member"]["username"], "Livid");
    assert_eq!(json["topics"][0]["node"]["name"], "v2ex");
}
