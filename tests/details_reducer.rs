mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{record, SlowSaveGateway};
use water::model::{Stage, COMPLETE};
use water::ui::details::{CompletionAlert, DetailsIntent, DetailsReducer, DetailsState};
use water::ui::{AppEnv, Store};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn saves_land_in_issue_order_when_first_is_slow() {
    let gateway = Arc::new(SlowSaveGateway::new(vec![
        Duration::from_millis(50),
        Duration::ZERO,
        Duration::ZERO,
    ]));
    let env = AppEnv::with_gateway(gateway.clone());
    let mut store = Store::<DetailsReducer>::new(DetailsState::new(record("Well")), env);

    store.send(DetailsIntent::MarkBoiled);
    store.send(DetailsIntent::MarkDisinfected);
    store.send(DetailsIntent::MarkFiltered);
    assert_eq!(store.settle().await, 3);

    let saved = gateway.saved();
    assert_eq!(saved.len(), 3);
    assert_eq!(saved[0].percent_disinfected, 0.0);
    assert_eq!(saved[1].percent_filtered, 0.0);
    assert!(saved[2].is_complete());
}

#[tokio::test]
async fn alert_can_be_dismissed() {
    let gateway = Arc::new(SlowSaveGateway::new(Vec::new()));
    let mut store = Store::<DetailsReducer>::new(
        DetailsState::new(record("Spring")),
        AppEnv::with_gateway(gateway),
    );

    for stage in Stage::ALL {
        store.send(DetailsIntent::mark(stage));
    }
    assert_eq!(store.state().alert, Some(CompletionAlert::SANITIZATION_COMPLETE));

    store.send(DetailsIntent::AlertDismissed);
    assert_eq!(store.state().alert, None);
    assert!(store.state().model.is_complete());
}

#[tokio::test]
async fn complete_record_ignores_marks() {
    let mut done = record("Done");
    done.percent_boiled = COMPLETE;
    done.percent_disinfected = COMPLETE;
    done.percent_filtered = COMPLETE;
    let gateway = Arc::new(SlowSaveGateway::new(Vec::new()));
    let mut store = Store::<DetailsReducer>::new(DetailsState::new(done), AppEnv::with_gateway(gateway.clone()));

    for stage in Stage::ALL {
        store.send(DetailsIntent::mark(stage));
    }
    assert_eq!(store.settle().await, 0);
    assert!(gateway.saved().is_empty());
    assert_eq!(store.state().alert, None);
}

#[test]
fn button_labels_follow_progress() {
    let mut model = record("Lake");
    model.percent_boiled = COMPLETE;
    model.percent_disinfected = 54.0;
    let state = DetailsState::new(model);

    assert_eq!(state.button_label(Stage::Boil), "Complete");
    assert_eq!(state.button_label(Stage::Disinfect), "Start Disinfecting");
    assert_eq!(state.button_label(Stage::Filter), "Start Filtering");
    assert!(!state.is_disinfecting_complete());
}
