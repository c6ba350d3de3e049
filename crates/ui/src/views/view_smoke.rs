use plan_core::model::{ChecklistKey, PhaseId, WeekNumber};
use storage::repository::Storage;

use crate::vm::WeekSection;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_phase_cards() {
    let storage = Storage::in_memory();
    storage
        .kv
        .set("checklist-0-1", "[true,true,true,true,true]")
        .await
        .expect("seed");
    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage);

    harness.rebuild();
    let html = harness
        .render_until(|html| html.contains("5 / 15 items"))
        .await;

    assert!(html.contains("Month 2: JavaScript Mastery"), "missing phase in {html}");
    assert!(html.contains("Weeks 1-3"), "missing weeks label in {html}");
    assert!(html.contains("65"), "missing checkpoint total in {html}");
    assert!(html.contains("33%"), "missing phase percent in {html}");
    assert!(html.contains("5 / 15 items"), "missing phase counts in {html}");
    assert!(html.contains("W1 5/5"), "missing week badge in {html}");
    assert!(html.contains("W2 0/5"), "missing week badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn phase_view_smoke_renders_weeks_and_creates_records() {
    let mut harness = setup_view_harness(ViewKind::Phase(0));

    harness.rebuild();
    let html = harness.render_until(|html| html.contains("0 / 5 done")).await;
    assert!(html.contains("Week 2: CSS Fundamentals"), "missing week in {html}");
    assert!(html.contains("Completion Checklist"), "missing section in {html}");
    assert!(html.contains("Next phase"), "missing pager in {html}");
    assert!(!html.contains("Previous phase"), "first phase has no previous in {html}");

    for _ in 0..10 {
        if harness.storage.kv.get("checklist-0-3").await.unwrap().is_some() {
            break;
        }
        harness.drive_async().await;
    }
    assert_eq!(
        harness.storage.kv.get("checklist-0-1").await.unwrap().as_deref(),
        Some("[false,false,false,false,false]")
    );
    assert!(harness.storage.kv.get("checklist-0-3").await.unwrap().is_some());
    assert!(harness.storage.kv.get("checklist-1-4").await.unwrap().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn phase_view_keeps_existing_progress() {
    let storage = Storage::in_memory();
    storage
        .kv
        .set("checklist-1-5", "[true,false,true,false,false]")
        .await
        .expect("seed");
    let mut harness = setup_view_harness_with_storage(ViewKind::Phase(1), storage);

    harness.rebuild();
    let html = harness.render_until(|html| html.contains("2 / 5 done")).await;
    assert!(html.contains("2 / 5 done"), "missing stored progress in {html}");
    assert!(html.contains("Previous phase"), "missing pager in {html}");
    assert_eq!(
        harness.storage.kv.get("checklist-1-5").await.unwrap().as_deref(),
        Some("[true,false,true,false,false]")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn phase_view_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Phase(9));

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Phase not found"), "missing not-found in {html}");
    assert!(!html.contains("week-card"), "unexpected weeks in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn header_smoke_tracks_overall_progress() {
    let storage = Storage::in_memory();
    storage
        .kv
        .set("checklist-0-1", "[true,true,false,false,false]")
        .await
        .expect("seed");
    let mut harness = setup_view_harness_with_storage(ViewKind::Header, storage);

    harness.rebuild();
    let html = harness.render_until(|html| html.contains("3%")).await;
    assert!(html.contains("Program Progress"), "missing label in {html}");
    assert!(html.contains("3%"), "missing percent in {html}");
    assert!(html.contains("2 / 65 items"), "missing counts in {html}");

    harness
        .storage
        .kv
        .set("checklist-2-13", "[true,true,true,true,true]")
        .await
        .expect("write");
    let html = harness.render_until(|html| html.contains("7 / 65 items")).await;
    assert!(html.contains("11%"), "header did not refresh in {html}");
}

fn week_key(phase: u8, week: u8) -> ChecklistKey {
    ChecklistKey::new(PhaseId::new(phase), WeekNumber::new(week))
}

#[tokio::test(flavor = "current_thread")]
async fn checking_items_updates_record_and_header() {
    let mut harness = setup_view_harness(ViewKind::PhaseWithHeader(0));
    harness.rebuild();
    harness.render_until(|html| html.contains("0 / 65 items")).await;
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let week = harness.handles.week(week_key(0, 1));
    harness.act(|| {
        let mut expanded = week.expanded;
        expanded.set(Some(WeekSection::Checklist));
        week.toggle.call(0);
        week.toggle.call(1);
    });

    let html = harness.render_until(|html| html.contains("2 / 65 items")).await;
    assert!(html.contains("3%"), "header did not refresh in {html}");
    assert!(html.contains("2 / 5 done"), "week badge did not refresh in {html}");
    assert_eq!(
        harness.storage.kv.get("checklist-0-1").await.unwrap().as_deref(),
        Some("[true,true,false,false,false]")
    );

    harness.act(|| week.toggle.call(0));
    let html = harness.render_until(|html| html.contains("1 / 65 items")).await;
    assert!(html.contains("2%"), "header did not refresh in {html}");
    assert_eq!(
        harness.storage.kv.get("checklist-0-1").await.unwrap().as_deref(),
        Some("[false,true,false,false,false]")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn out_of_range_item_leaves_week_untouched() {
    let mut harness = setup_view_harness(ViewKind::Phase(0));
    harness.rebuild();
    harness.render_until(|html| html.contains("0 / 5 done")).await;
    for _ in 0..5 {
        harness.drive_async().await;
    }

    let week = harness.handles.week(week_key(0, 2));
    harness.act(|| week.toggle.call(99));
    for _ in 0..5 {
        harness.drive_async().await;
    }

    assert_eq!(
        harness.storage.kv.get("checklist-0-2").await.unwrap().as_deref(),
        Some("[false,false,false,false,false]")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn resource_links_go_to_the_link_opener() {
    let mut harness = setup_view_harness(ViewKind::Phase(0));
    harness.rebuild();

    let week = harness.handles.week(week_key(0, 1));
    harness.act(|| {
        let mut expanded = week.expanded;
        expanded.set(Some(WeekSection::Resources));
    });
    let html = harness.render();
    assert!(html.contains("href=\"https://"), "resources not rendered in {html}");

    let url = plan_core::shipped_curriculum().unwrap().phases()[0].weeks[0].resources[0]
        .url
        .clone();
    harness.act(|| week.open_link.call(url.clone()));

    assert_eq!(harness.opened_links(), vec![url]);
}
