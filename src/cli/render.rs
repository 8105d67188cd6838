//! Plain-text and GeoJSON views of the state units.

use std::fmt::Write;

use serde_json::{json, Value};

use crate::geo::{BoundingBox, Position};
use crate::model::Stage;
use crate::ui::app::AppState;
use crate::ui::details::DetailsState;
use crate::ui::info::{InfoState, ABOUT_TEXT, CDC_GUIDANCE};
use crate::ui::watersource::WatersourceState;

fn item_line(item: &WatersourceState) -> String {
    let check = if item.is_complete() { "[x]" } else { "[ ]" };
    let model = &item.model;
    format!(
        "{check} {:<20} boil {:>3.0}  disinfect {:>3.0}  filter {:>3.0}  {}",
        model.title, model.percent_boiled, model.percent_disinfected, model.percent_filtered, model.id
    )
}

/// The search list with a summary line.
pub fn list(state: &AppState) -> String {
    let mut out = String::new();
    for item in &state.watersources {
        let _ = writeln!(out, "{}", item_line(item));
    }
    let _ = writeln!(
        out,
        "{} water sources, {} in view",
        state.watersources.len(),
        state.visible_watersources().count()
    );
    out
}

/// One numbered section per sanitation step, then the alert if shown.
pub fn details(state: &DetailsState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", state.model.title);
    let _ = writeln!(out, "{}", state.id());
    for (step, stage) in Stage::ALL.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "Step {}. {:<10} {:>3.0}%  [{}]",
            step + 1,
            stage.label(),
            state.model.percent(stage),
            state.button_label(stage)
        );
    }
    if let Some(alert) = &state.alert {
        let _ = writeln!(out, "{}: {} ({})", alert.title, alert.message, alert.dismiss_label);
    }
    out
}

pub fn info(state: &InfoState) -> String {
    let mut out = String::new();
    match &state.author {
        Some(author) => {
            let _ = writeln!(out, "Author: {} ({})", author.name, author.title);
        }
        None => {
            let _ = writeln!(out, "Author: unavailable");
        }
    }
    let _ = writeln!(out, "{}: {}", CDC_GUIDANCE.title, CDC_GUIDANCE.url);
    let _ = writeln!(out, "{}", CDC_GUIDANCE.footer);
    let _ = writeln!(out, "{ABOUT_TEXT}");
    out
}

/// Map pins as a GeoJSON feature collection bounded by the region.
pub fn geojson(state: &AppState) -> Value {
    let features: Vec<Value> = state
        .watersources
        .iter()
        .map(|item| {
            let model = &item.model;
            json!({
                "type": "Feature",
                "id": model.id,
                "geometry": {
                    "type": "Point",
                    "coordinates": Position::from(model.location),
                },
                "properties": {
                    "title": model.title,
                    "imageURL": model.image_url,
                    "percentBoiled": model.percent_boiled,
                    "percentDisinfected": model.percent_disinfected,
                    "percentFiltered": model.percent_filtered,
                    "complete": item.is_complete(),
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "bbox": BoundingBox::from(state.region),
        "features": features,
    })
}
