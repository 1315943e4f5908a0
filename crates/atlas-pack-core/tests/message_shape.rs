use atlas_pack_core::{PackItem, PackRequest, PackResponse};
use serde_json::json;

/// The success envelope is tagged on `status` and carries `pages` plus the
/// additive `oversized`/`dropped` fields. These names are the boundary
/// contract; renaming any of them breaks consumers.
#[test]
fn success_wire_shape_is_stable() {
    let request = PackRequest::new(
        vec![PackItem::new(1, 100, 100), PackItem::new(2, 100, 100)],
        200,
        0,
    );
    let value = serde_json::to_value(request.run()).unwrap();

    assert_eq!(value["status"], "success");
    assert_eq!(value["pages"].as_array().unwrap().len(), 1);
    assert!(value["oversized"].as_array().unwrap().is_empty());
    assert!(value["dropped"].as_array().unwrap().is_empty());

    let page = &value["pages"][0];
    assert_eq!(page["index"], 0);
    assert_eq!(page["width"], 200);
    assert_eq!(page["height"], 200);
    assert_eq!(page["efficiency_percent"], 50.0);

    let placement = &page["placements"][0];
    assert_eq!(placement["item_id"], 1);
    assert!(placement["x"].is_u64());
    assert!(placement["y"].is_u64());
    assert_eq!(placement["width"], 100);
    assert_eq!(placement["height"], 100);
}

/// The failure envelope carries `status` and a human-readable `error`.
#[test]
fn failure_wire_shape_is_stable() {
    let request = PackRequest::new(vec![PackItem::new(1, 1, 1)], 0, 0);
    let value = serde_json::to_value(request.run()).unwrap();
    assert_eq!(value["status"], "failure");
    assert!(value["error"].is_string());
}

/// Requests round-trip through their serialized form.
#[test]
fn request_roundtrips() {
    let request = PackRequest::new(vec![PackItem::new(9, 4, 6)], 32, 1);
    let text = serde_json::to_string(&request).unwrap();
    assert!(text.contains("\"items\""));
    assert!(text.contains("\"page_size\":32"));
    assert!(text.contains("\"padding\":1"));

    let back: PackRequest = serde_json::from_str(&text).unwrap();
    assert_eq!(back, request);
}

/// Responses parse back from their JSON form (the consuming side of the
/// channel sees exactly this).
#[test]
fn responses_parse_from_json() {
    let failure: PackResponse = serde_json::from_value(json!({
        "status": "failure",
        "error": "boom"
    }))
    .unwrap();
    assert_eq!(
        failure,
        PackResponse::Failure {
            error: "boom".into()
        }
    );

    let success: PackResponse = serde_json::from_value(json!({
        "status": "success",
        "pages": [],
        "oversized": [7],
        "dropped": []
    }))
    .unwrap();
    match success {
        PackResponse::Success(output) => {
            assert!(output.pages.is_empty());
            assert_eq!(output.oversized, vec![7]);
        }
        PackResponse::Failure { .. } => panic!("expected success"),
    }
}
