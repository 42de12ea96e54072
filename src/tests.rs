#![cfg(test)]

use std::collections::HashMap;

use chrono::{TimeZone, Utc};

use crate::app::{App, Notice, Page};
use crate::content::{Content, ContentError, ContentState};
use crate::format::{decode_slug, encode_slug, escape_html, format_date};
use crate::models::{Newsletter, Post, Subscriber};
use crate::nav::NavToggle;
use crate::render;
use crate::routes::{Category, Route};
use crate::store::{KvStore, MemoryStore};
use crate::subscribers::{normalize_email, SubscribeError, SubscriberStore, SUBSCRIBERS_KEY};

// ═══════════════════════════════════════════════════════════
// Fixtures
// ═══════════════════════════════════════════════════════════

fn make_post(slug: &str, title: &str, category_key: &str, date: &str) -> Post {
    Post {
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: format!("{} excerpt", title),
        category: format!("{} label", category_key),
        category_key: category_key.to_string(),
        date: date.to_string(),
        tags: vec!["AI".to_string(), "趨勢".to_string()],
        word_count: 900,
        content_html: format!("<p>{} body</p>", title),
    }
}

fn make_newsletter(slug: &str, title: &str, date: &str) -> Newsletter {
    Newsletter {
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: format!("{} excerpt", title),
        date: date.to_string(),
        content_html: format!("<h2>{}</h2>", title),
    }
}

fn sample_content() -> Content {
    Content::new(
        vec![
            make_post("llm-factory", "LLM on the factory floor", "ai-engineering", "2024-01-10"),
            make_post("march-trends", "March trends", "monthly-trends", "2024-03-05"),
            make_post("philly-day-1", "Philly Tech Week day 1", "philly-week", "2023-12-31"),
            make_post("edge-ai", "Edge AI notes", "ai-engineering", "2024-02-20"),
        ],
        vec![
            make_newsletter("2024-q1", "2024 Q1 digest", "2024-03-31"),
            make_newsletter("2023-q4", "2023 Q4 digest", "2023-12-31"),
        ],
    )
}

/// Page that records what the router did to it.
#[derive(Default)]
struct FakePage {
    html: String,
    inputs: HashMap<String, String>,
    notice: Option<String>,
    renders: usize,
    wirings: usize,
}

impl FakePage {
    fn with_inputs(name: &str, email: &str) -> Self {
        let mut page = FakePage::default();
        page.inputs.insert("name".to_string(), name.to_string());
        page.inputs.insert("email".to_string(), email.to_string());
        page
    }
}

impl Page for FakePage {
    fn set_content(&mut self, html: &str) {
        self.html = html.to_string();
        self.renders += 1;
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn show_notice(&mut self, text: &str) {
        self.notice = Some(text.to_string());
    }

    fn wire_handlers(&mut self) {
        self.wirings += 1;
    }
}

/// Store whose writes always fail, like a full localStorage quota.
struct FullStore;

impl KvStore for FullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Err("QuotaExceededError".to_string())
    }
}

fn item_count(html: &str) -> usize {
    html.matches("<article class=\"item\">").count()
}

// ═══════════════════════════════════════════════════════════
// Formatter
// ═══════════════════════════════════════════════════════════

#[test]
fn format_date_plain_iso_date() {
    assert_eq!(format_date("2024-03-05"), "2024/03/05");
}

#[test]
fn format_date_returns_unparseable_input() {
    assert_eq!(format_date("not-a-date"), "not-a-date");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("2024-13-40"), "2024-13-40");
}

#[test]
fn format_date_timestamp_uses_taiwan_day() {
    // 20:00 UTC is already the next morning in Taipei
    assert_eq!(format_date("2024-03-04T20:00:00Z"), "2024/03/05");
    assert_eq!(format_date("2024-03-05T09:30:00+08:00"), "2024/03/05");
}

#[test]
fn format_date_naive_timestamp() {
    assert_eq!(format_date("2024-03-05T10:00:00"), "2024/03/05");
    assert_eq!(format_date("2024-03-05T10:00:00.250"), "2024/03/05");
}

#[test]
fn escape_html_script_tag() {
    assert_eq!(escape_html("<script>"), "&lt;script&gt;");
}

#[test]
fn escape_html_all_reserved_characters() {
    assert_eq!(
        escape_html(r#"Tom & "Jerry's" <b>"#),
        "Tom &amp; &quot;Jerry&#039;s&quot; &lt;b&gt;"
    );
}

#[test]
fn escape_html_twice_double_escapes() {
    assert_eq!(escape_html(&escape_html("&")), "&amp;amp;");
}

#[test]
fn slug_encoding_matches_uri_component() {
    assert_eq!(encode_slug("ai-week_1.0"), "ai-week_1.0");
    assert_eq!(encode_slug("a b/c"), "a%20b%2Fc");
    assert_eq!(encode_slug("趨勢"), "%E8%B6%A8%E5%8B%A2");
    assert_eq!(decode_slug("%E8%B6%A8%E5%8B%A2"), Some("趨勢".to_string()));
}

#[test]
fn slug_decoding_rejects_invalid_utf8() {
    assert_eq!(decode_slug("%FF"), None);
}

// ═══════════════════════════════════════════════════════════
// Routes
// ═══════════════════════════════════════════════════════════

#[test]
fn parse_fixed_routes() {
    assert_eq!(Route::parse("#/"), Route::Home);
    assert_eq!(Route::parse("#/ai-engineering"), Route::Category(Category::AiEngineering));
    assert_eq!(Route::parse("#/philly-week"), Route::Category(Category::PhillyWeek));
    assert_eq!(Route::parse("#/monthly-trends"), Route::Category(Category::MonthlyTrends));
    assert_eq!(Route::parse("#/post/edge-ai"), Route::Post("edge-ai".to_string()));
    assert_eq!(Route::parse("#/subscribe"), Route::Subscribe);
    assert_eq!(Route::parse("#/archive"), Route::Archive);
    assert_eq!(Route::parse("#/newsletter/2024-q1"), Route::Newsletter("2024-q1".to_string()));
    assert_eq!(Route::parse("#/about"), Route::About);
    assert_eq!(Route::parse("#/portfolio"), Route::Portfolio);
    assert_eq!(Route::parse("#/events"), Route::Events);
}

#[test]
fn parse_empty_fragments_are_home() {
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("#"), Route::Home);
    assert_eq!(Route::parse("#///"), Route::Home);
}

#[test]
fn parse_drops_empty_segments_and_extra_args() {
    assert_eq!(Route::parse("#//about//"), Route::About);
    assert_eq!(Route::parse("#/about/extra/stuff"), Route::About);
    assert_eq!(Route::parse("/archive"), Route::Archive);
}

#[test]
fn parse_unknown_and_malformed_are_not_found() {
    assert_eq!(Route::parse("#/nope"), Route::NotFound);
    assert_eq!(Route::parse("#/About"), Route::NotFound);
    assert_eq!(Route::parse("#/post"), Route::NotFound);
    assert_eq!(Route::parse("#/newsletter/"), Route::NotFound);
    assert_eq!(Route::parse("#/post/%FF"), Route::NotFound);
}

#[test]
fn parse_decodes_slugs() {
    assert_eq!(
        Route::parse("#/post/%E8%B6%A8%E5%8B%A2%20one"),
        Route::Post("趨勢 one".to_string())
    );
}

#[test]
fn href_round_trips_through_parse() {
    let routes = [
        Route::Home,
        Route::Category(Category::PhillyWeek),
        Route::Post("hello world/2".to_string()),
        Route::Newsletter("2024-q1".to_string()),
        Route::Subscribe,
        Route::Events,
    ];
    for route in routes {
        assert_eq!(Route::parse(&route.href()), route);
    }
}

#[test]
fn category_keys_are_consistent() {
    for c in Category::ALL {
        assert_eq!(Category::from_key(c.key()), Some(c));
        assert!(!c.title().is_empty());
        assert!(!c.hint().is_empty());
    }
}

// ═══════════════════════════════════════════════════════════
// Content
// ═══════════════════════════════════════════════════════════

#[test]
fn content_from_json_reads_camel_case_fields() {
    let posts = r#"[{"slug":"a","title":"A","excerpt":"x","category":"AI","categoryKey":"ai-engineering",
        "date":"2024-01-01","tags":["t1"],"wordCount":1000,"contentHtml":"<p>hi</p>"}]"#;
    let content = Content::from_json(posts, "[]").unwrap();
    let post = content.find_post("a").unwrap();
    assert_eq!(post.category_key, "ai-engineering");
    assert_eq!(post.word_count, 1000);
    assert_eq!(post.content_html, "<p>hi</p>");
    assert_eq!(content.newsletter_count(), 0);
}

#[test]
fn content_missing_fields_are_blank() {
    let content = Content::from_json(r#"[{"slug":"bare"}]"#, r#"[{"title":"T"}]"#).unwrap();
    let post = content.find_post("bare").unwrap();
    assert_eq!(post.title, "");
    assert!(post.tags.is_empty());
    assert_eq!(post.word_count, 0);
    assert_eq!(content.newsletters_by_date()[0].slug, "");
}

#[test]
fn content_null_and_mistyped_fields_are_blank() {
    let posts = r#"[
        {"slug":"ok","title":"Fine","date":"2024-01-01","tags":["a"],"wordCount":800},
        {"slug":"bad","title":null,"date":null,"tags":null,"wordCount":"many","excerpt":42}
    ]"#;
    let content = Content::from_json(posts, r#"[{"slug":"n","date":null,"title":7}]"#).unwrap();
    assert_eq!(content.post_count(), 2);

    let bad = content.find_post("bad").unwrap();
    assert_eq!(bad.title, "");
    assert_eq!(bad.date, "");
    assert!(bad.tags.is_empty());
    assert_eq!(bad.word_count, 0);
    assert_eq!(bad.excerpt, "42");

    let n = content.find_newsletter("n").unwrap();
    assert_eq!(n.date, "");
    assert_eq!(n.title, "7");

    // A blank date sorts last, after every real one
    let latest: Vec<&str> = content.latest_posts(5).iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(latest, vec!["ok", "bad"]);
}

#[test]
fn content_word_count_accepts_any_number() {
    let posts = r#"[{"slug":"f","wordCount":1000.0},{"slug":"s","wordCount":"950"},{"slug":"neg","wordCount":-3}]"#;
    let content = Content::from_json(posts, "[]").unwrap();
    assert_eq!(content.find_post("f").unwrap().word_count, 1000);
    assert_eq!(content.find_post("s").unwrap().word_count, 950);
    assert_eq!(content.find_post("neg").unwrap().word_count, 0);

    let html = render::render_post(&content, "f");
    assert!(html.contains("字數：約 1000 字"));
}

#[test]
fn content_tags_keep_scalars_only() {
    let content = Content::from_json(r#"[{"slug":"t","tags":["AI",2024,null,{"x":1},true]}]"#, "[]").unwrap();
    assert_eq!(content.find_post("t").unwrap().tags, vec!["AI", "2024", "true"]);
}

#[test]
fn content_skips_entries_that_are_not_objects() {
    let content = Content::from_json(r#"[null,{"slug":"kept"},"stray",3]"#, "[]").unwrap();
    assert_eq!(content.post_count(), 1);
    assert!(content.find_post("kept").is_some());
}

#[test]
fn content_parse_error_names_the_resource() {
    match Content::from_json("[]", "{oops") {
        Err(ContentError::Parse { resource, .. }) => assert_eq!(resource, "data/newsletters.json"),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(Content::from_json("{}", "[]").is_err());
}

#[test]
fn latest_posts_newest_first_and_limited() {
    let mut posts = Vec::new();
    for day in 1..=7 {
        posts.push(make_post(&format!("p{}", day), "T", "monthly-trends", &format!("2024-01-0{}", day)));
    }
    let content = Content::new(posts, vec![]);
    let latest: Vec<&str> = content.latest_posts(5).iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(latest, vec!["p7", "p6", "p5", "p4", "p3"]);
}

#[test]
fn posts_in_category_filters_exactly() {
    let content = sample_content();
    let ai: Vec<&str> = content
        .posts_in_category("ai-engineering")
        .iter()
        .map(|p| p.slug.as_str())
        .collect();
    assert_eq!(ai, vec!["edge-ai", "llm-factory"]);
    assert!(content.posts_in_category("AI-Engineering").is_empty());
    assert!(content.posts_in_category("unknown").is_empty());
}

#[test]
fn find_is_case_sensitive() {
    let content = sample_content();
    assert!(content.find_post("edge-ai").is_some());
    assert!(content.find_post("Edge-AI").is_none());
    assert!(content.find_newsletter("2024-q1").is_some());
    assert!(content.find_newsletter("2024-Q1").is_none());
}

#[test]
fn duplicate_slug_first_entry_wins() {
    let content = Content::new(
        vec![
            make_post("dup", "First", "philly-week", "2024-01-01"),
            make_post("dup", "Second", "philly-week", "2024-02-01"),
        ],
        vec![],
    );
    assert_eq!(content.find_post("dup").unwrap().title, "First");
}

#[test]
fn newsletters_newest_first() {
    let content = sample_content();
    let order: Vec<&str> = content.newsletters_by_date().iter().map(|n| n.slug.as_str()).collect();
    assert_eq!(order, vec!["2024-q1", "2023-q4"]);
}

// ═══════════════════════════════════════════════════════════
// Subscribers
// ═══════════════════════════════════════════════════════════

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  A@B.Com "), Some("a@b.com".to_string()));
    assert_eq!(normalize_email("not-an-email"), None);
    assert_eq!(normalize_email("   "), None);
}

#[test]
fn submit_twice_is_duplicate() {
    let store = MemoryStore::new();
    let subs = SubscriberStore::new(&store);

    assert!(subs.submit("Amy", "a@b.com").is_ok());
    assert_eq!(subs.count(), 1);

    assert_eq!(subs.submit("Someone else", "a@b.com"), Err(SubscribeError::Duplicate));
    assert_eq!(subs.count(), 1);
}

#[test]
fn submit_duplicate_ignores_case_and_whitespace() {
    let store = MemoryStore::new();
    let subs = SubscriberStore::new(&store);
    subs.submit("", "a@b.com").unwrap();
    assert_eq!(subs.submit("", "  A@B.COM "), Err(SubscribeError::Duplicate));
}

#[test]
fn submit_invalid_never_persists() {
    let store = MemoryStore::new();
    let subs = SubscriberStore::new(&store);
    assert_eq!(subs.submit("Amy", "not-an-email"), Err(SubscribeError::Invalid));
    assert_eq!(subs.submit("Amy", ""), Err(SubscribeError::Invalid));
    assert_eq!(store.get(SUBSCRIBERS_KEY), None);
    assert_eq!(subs.count(), 0);
}

#[test]
fn submit_records_shape() {
    let store = MemoryStore::new();
    let subs = SubscriberStore::new(&store);
    let at = Utc.with_ymd_and_hms(2024, 3, 5, 1, 2, 3).unwrap();

    let first = subs.submit_at("  Peng-Hsuan ", " Me@Example.com", at).unwrap();
    assert_eq!(first.name.as_deref(), Some("Peng-Hsuan"));
    assert_eq!(first.email, "me@example.com");
    assert_eq!(first.at, "2024-03-05T01:02:03.000Z");

    let second = subs.submit_at("   ", "you@example.com", at).unwrap();
    assert_eq!(second.name, None);

    assert_eq!(subs.list(), vec![first, second]);
}

#[test]
fn list_reads_records_from_older_versions() {
    let raw = r#"[{"name":"","email":"old@site.tw","at":"2023-01-01T00:00:00.000Z"}]"#;
    let store = MemoryStore::with_entry(SUBSCRIBERS_KEY, raw);
    let subs = SubscriberStore::new(&store);
    let list = subs.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].email, "old@site.tw");
    assert_eq!(list[0].name, None);
    assert_eq!(subs.submit("", "OLD@site.tw"), Err(SubscribeError::Duplicate));
}

#[test]
fn malformed_list_reads_as_empty_and_is_replaced() {
    let store = MemoryStore::with_entry(SUBSCRIBERS_KEY, "{broken");
    let subs = SubscriberStore::new(&store);
    assert!(subs.list().is_empty());

    subs.submit("", "a@b.com").unwrap();
    let saved: Vec<Subscriber> = serde_json::from_str(&store.get(SUBSCRIBERS_KEY).unwrap()).unwrap();
    assert_eq!(saved.len(), 1);
}

#[test]
fn unrecognised_records_survive_a_new_signup() {
    let raw = r#"[{"name":"A","email":"a@x.com","at":"2024-01-01T00:00:00.000Z"},{"name":"B","at":"2024-01-02T00:00:00.000Z"},{"name":3,"email":"c@x.com"},"stray"]"#;
    let store = MemoryStore::with_entry(SUBSCRIBERS_KEY, raw);
    let subs = SubscriberStore::new(&store);

    let list = subs.list();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].email, "a@x.com");
    assert_eq!(list[1].email, "");
    assert_eq!(list[1].name.as_deref(), Some("B"));
    assert_eq!(list[2].name.as_deref(), Some("3"));
    assert_eq!(subs.count(), 4);

    assert_eq!(subs.submit("", "C@x.com"), Err(SubscribeError::Duplicate));
    subs.submit("", "new@x.com").unwrap();

    let saved: Vec<serde_json::Value> =
        serde_json::from_str(&store.get(SUBSCRIBERS_KEY).unwrap()).unwrap();
    let before: Vec<serde_json::Value> = serde_json::from_str(raw).unwrap();
    assert_eq!(saved.len(), 5);
    assert_eq!(&saved[..4], &before[..]);
    assert_eq!(saved[4]["email"], "new@x.com");
}

#[test]
fn non_array_list_reads_as_empty() {
    let store = MemoryStore::with_entry(SUBSCRIBERS_KEY, r#"{"email":"a@b.com"}"#);
    let subs = SubscriberStore::new(&store);
    assert!(subs.list().is_empty());
    assert_eq!(subs.count(), 0);
}

#[test]
fn storage_failure_is_reported() {
    let subs = SubscriberStore::new(FullStore);
    match subs.submit("", "a@b.com") {
        Err(SubscribeError::Storage(e)) => assert!(e.contains("Quota")),
        other => panic!("expected storage error, got {:?}", other),
    }
}

// ═══════════════════════════════════════════════════════════
// Views
// ═══════════════════════════════════════════════════════════

#[test]
fn home_lists_latest_posts_newest_first() {
    let html = render::render_home(&sample_content());
    let march = html.find("March trends").unwrap();
    let edge = html.find("Edge AI notes").unwrap();
    let llm = html.find("LLM on the factory floor").unwrap();
    let philly = html.find("Philly Tech Week day 1").unwrap();
    assert!(march < edge && edge < llm && llm < philly);
    assert_eq!(item_count(&html), 4);
}

#[test]
fn post_item_escapes_text_and_encodes_link() {
    let mut post = make_post("a b", "<script>alert(1)</script>", "ai-engineering", "2024-03-05");
    post.tags = vec!["<i>".to_string()];
    let html = render::render_post_item(&post);
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("href=\"#/post/a%20b\""));
    assert!(html.contains("<span class=\"pill\">&lt;i&gt;</span>"));
    assert!(html.contains("2024/03/05"));
}

#[test]
fn category_page_with_no_posts_is_empty_list() {
    let content = Content::new(vec![make_post("x", "X", "ai-engineering", "2024-01-01")], vec![]);
    let html = render::render_category(&content, Category::PhillyWeek);
    assert!(html.contains("費城科技週觀察"));
    assert_eq!(item_count(&html), 0);

    let html = render::render_category_page(&content, "no-such-key", "Empty", "nothing here");
    assert!(html.contains("Empty"));
    assert_eq!(item_count(&html), 0);
}

#[test]
fn post_detail_keeps_body_html_trusted() {
    let html = render::render_post(&sample_content(), "edge-ai");
    assert!(html.contains("<p>Edge AI notes body</p>"));
    assert!(html.contains("字數：約 900 字"));
    assert!(html.contains("日期：2024/02/20"));
}

#[test]
fn unknown_slugs_render_not_found() {
    let content = sample_content();
    let not_found = render::render_not_found();
    assert_eq!(render::render_post(&content, "missing"), not_found);
    assert_eq!(render::render_newsletter(&content, "missing"), not_found);
}

#[test]
fn subscribe_view_shows_count_and_notice() {
    let html = render::render_subscribe(3, None);
    assert!(html.contains("<b>3</b>"));
    assert!(html.contains("id=\"subscribeBtn\""));
    assert!(html.contains("<div id=\"notice\" class=\"notice\"></div>"));

    let html = render::render_subscribe(4, Some("ok <done>"));
    assert!(html.contains("style=\"display:block\">ok &lt;done&gt;</div>"));
}

#[test]
fn archive_lists_newsletters_newest_first() {
    let html = render::render_archive(&sample_content());
    let q1 = html.find("2024 Q1 digest").unwrap();
    let q4 = html.find("2023 Q4 digest").unwrap();
    assert!(q1 < q4);
    assert!(html.contains("href=\"#/newsletter/2024-q1\""));
}

#[test]
fn events_page_closes_with_filtering_note() {
    let html = render::render_events();
    assert!(html.contains("可搜尋/可篩選"));
    assert!(html.contains("<h2>(b) 大學生競賽資訊</h2>"));
}

#[test]
fn unavailable_view_escapes_reason() {
    let html = render::render_unavailable("<boom>");
    assert!(html.contains("&lt;boom&gt;"));
}

// ═══════════════════════════════════════════════════════════
// Router
// ═══════════════════════════════════════════════════════════

#[test]
fn dispatch_fixed_routes_render_their_heading() {
    let store = MemoryStore::new();
    let mut app = App::with_content(&store, sample_content());
    let cases = [
        ("#/", "最新文章"),
        ("#/ai-engineering", "AI × 工程專題解析"),
        ("#/philly-week", "費城科技週觀察"),
        ("#/monthly-trends", "每月科技趨勢摘要"),
        ("#/post/march-trends", "March trends"),
        ("#/subscribe", "Email 訂閱"),
        ("#/archive", "季度電子報存檔"),
        ("#/newsletter/2023-q4", "2023 Q4 digest"),
        ("#/about", "關於我"),
        ("#/portfolio", "作品集 / 學習歷程"),
        ("#/events", "活動資訊"),
    ];
    for (fragment, heading) in cases {
        let mut page = FakePage::default();
        app.dispatch(fragment, &mut page);
        assert!(!page.html.trim().is_empty(), "{} rendered nothing", fragment);
        assert!(page.html.contains(heading), "{} missing heading {}", fragment, heading);
        assert!(!page.html.contains("找不到這頁"), "{} rendered not-found", fragment);
    }
}

#[test]
fn dispatch_unknown_routes_render_not_found() {
    let store = MemoryStore::new();
    let mut app = App::with_content(&store, sample_content());
    for fragment in ["#/nope", "#/post/missing", "#/newsletter", "#/POST/edge-ai", "#/post/%FF"] {
        let mut page = FakePage::default();
        let route = app.dispatch(fragment, &mut page);
        assert!(page.html.contains("找不到這頁"), "{} should be not-found", fragment);
        assert!(matches!(route, Route::NotFound | Route::Post(_) | Route::Newsletter(_)));
    }
}

#[test]
fn dispatch_rewires_handlers_every_render() {
    let store = MemoryStore::new();
    let mut app = App::with_content(&store, sample_content());
    let mut page = FakePage::default();
    app.dispatch("#/about", &mut page);
    app.dispatch("#/subscribe", &mut page);
    app.dispatch("#/subscribe", &mut page);
    assert_eq!(page.renders, 3);
    assert_eq!(page.wirings, 3);
}

#[test]
fn unavailable_content_keeps_static_pages() {
    let store = MemoryStore::new();
    let mut app = App::new(&store);
    app.finish_load(Content::from_json("not json", "[]"));
    assert!(matches!(app.content_state(), ContentState::Unavailable(_)));

    let mut page = FakePage::default();
    app.dispatch("#/", &mut page);
    assert!(page.html.contains("內容暫時無法載入"));
    app.dispatch("#/post/edge-ai", &mut page);
    assert!(page.html.contains("內容暫時無法載入"));

    app.dispatch("#/about", &mut page);
    assert!(page.html.contains("關於我"));
    app.dispatch("#/subscribe", &mut page);
    assert!(page.html.contains("Email 訂閱"));
    app.dispatch("#/missing", &mut page);
    assert!(page.html.contains("找不到這頁"));
}

#[test]
fn dispatch_before_load_shows_loading() {
    let store = MemoryStore::new();
    let mut app = App::new(&store);
    let mut page = FakePage::default();
    app.dispatch("#/archive", &mut page);
    assert_eq!(page.html, render::render_loading());
}

#[test]
fn successful_submit_rerenders_with_new_count() {
    let store = MemoryStore::new();
    let mut app = App::with_content(&store, sample_content());
    let mut page = FakePage::with_inputs("Amy", "a@b.com");
    app.dispatch("#/subscribe", &mut page);
    assert!(page.html.contains("<b>0</b>"));

    assert!(app.submit_subscription("#/subscribe", &mut page).is_ok());
    assert_eq!(page.renders, 2);
    assert!(page.html.contains("<b>1</b>"));
    assert!(page.html.contains(Notice::Subscribed.text()));
    assert_eq!(app.subscribers().count(), 1);

    // The confirmation is shown once only
    app.dispatch("#/subscribe", &mut page);
    assert!(!page.html.contains(Notice::Subscribed.text()));
}

#[test]
fn rejected_submit_shows_inline_notice_without_rerender() {
    let store = MemoryStore::new();
    let mut app = App::with_content(&store, sample_content());

    let mut page = FakePage::with_inputs("", "not-an-email");
    app.dispatch("#/subscribe", &mut page);
    assert_eq!(
        app.submit_subscription("#/subscribe", &mut page),
        Err(SubscribeError::Invalid)
    );
    assert_eq!(page.notice.as_deref(), Some(Notice::Invalid.text()));
    assert_eq!(page.renders, 1);
    assert_eq!(app.subscribers().count(), 0);

    let mut page = FakePage::with_inputs("", "a@b.com");
    app.submit_subscription("#/subscribe", &mut page).unwrap();
    let mut page = FakePage::with_inputs("Other", "A@b.com");
    assert_eq!(
        app.submit_subscription("#/subscribe", &mut page),
        Err(SubscribeError::Duplicate)
    );
    assert_eq!(page.notice.as_deref(), Some(Notice::Duplicate.text()));
    assert_eq!(app.subscribers().count(), 1);
}

#[test]
fn submit_without_form_inputs_is_invalid() {
    let store = MemoryStore::new();
    let mut app = App::with_content(&store, sample_content());
    let mut page = FakePage::default();
    assert_eq!(
        app.submit_subscription("#/subscribe", &mut page),
        Err(SubscribeError::Invalid)
    );
}

#[test]
fn storage_failure_maps_to_notice() {
    let mut app = App::with_content(FullStore, sample_content());
    let mut page = FakePage::with_inputs("", "a@b.com");
    assert!(matches!(
        app.submit_subscription("#/subscribe", &mut page),
        Err(SubscribeError::Storage(_))
    ));
    assert_eq!(page.notice.as_deref(), Some(Notice::StorageFailed.text()));
}

// ═══════════════════════════════════════════════════════════
// Navigation toggle
// ═══════════════════════════════════════════════════════════

#[test]
fn nav_toggle_tracks_aria_expanded() {
    let mut nav = NavToggle::default();
    assert_eq!(nav.aria_expanded(), "false");
    assert!(nav.toggle());
    assert_eq!(nav.aria_expanded(), "true");
    assert!(!nav.toggle());
    nav.toggle();
    nav.close();
    assert!(!nav.is_open());
    assert_eq!(nav.aria_expanded(), "false");
}
