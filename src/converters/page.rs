//! Page construction for the four page shapes.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::chain::{collapse, extract, kind_of, Step};
use super::runs::{join_runs_value, text_of, DEFAULT_SEPARATOR};
use crate::error::{Result, YtMusicError};
use crate::models::common::BROWSE_ID_KEY;
use crate::models::{Endpoint, Page};

const TITLE_TEXT: &[Step<'static>] = &[Step::Key("title"), Step::Key("text")];
const TITLE_RUNS: &[Step<'static>] = &[Step::Key("title"), Step::Key("runs")];
const TITLE_RUNS_TEXT: &[Step<'static>] =
    &[Step::Key("title"), Step::Key("runs"), Step::Key("text")];
const TITLE_BROWSE_ID: &[Step<'static>] = &[
    Step::Key("title"),
    Step::Key("navigationEndpoint"),
    Step::Key("browseEndpoint"),
    Step::Key("browseId"),
];
const SECTION_ITEMS: &[Step<'static>] =
    &[Step::Key("content"), Step::Key("contents"), Step::Key("items")];
const SECTION_CONTENTS: &[Step<'static>] = &[Step::Key("content"), Step::Key("contents")];
const SECTION_ITEMS_ONLY: &[Step<'static>] = &[Step::Key("items")];
const TRACKING_PARAMS: &[Step<'static>] = &[
    Step::Key("serviceTrackingParams"),
    Step::Index(0),
    Step::Key("params"),
];

/// Build a page from `header` and `contents`.
pub fn parse_full_page(
    header: &Value,
    contents: &Value,
    response_context: Option<&Value>,
) -> Result<Page> {
    let mut endpoint = response_context.and_then(parse_tracking_endpoint);

    let (title, raw_items) = match contents {
        // Home shelves: plain title text, contents already a list of items.
        Value::Array(_) => {
            let title = text_of(extract(header, Some(TITLE_TEXT))?)?;
            match extract(header, Some(TITLE_BROWSE_ID)) {
                Ok(browse_id) => endpoint = Some(browse_id_endpoint(browse_id.clone())),
                Err(e) if e.is_type_mismatch() => {
                    debug!("Shelf header has no browse endpoint: {}", e)
                }
                Err(e) => return Err(e),
            }
            (title, contents)
        }
        _ => {
            let title = join_runs_value(extract(header, Some(TITLE_RUNS))?, DEFAULT_SEPARATOR)?;
            let raw_items = match extract(contents, Some(SECTION_ITEMS)) {
                Ok(items) => items,
                // Moods and genres: sections hold no single items list.
                Err(e) if e.is_type_mismatch() => extract(contents, Some(SECTION_CONTENTS))?,
                Err(e) => return Err(e),
            };
            (title, raw_items)
        }
    };

    Ok(Page {
        title: Some(title),
        items: collapse_items(raw_items)?,
        endpoint,
    })
}

/// Build a page from `header` and `items`.
pub fn parse_inner_items_page(header: &Value, items: &Value) -> Result<Page> {
    let title = text_of(extract(header, Some(TITLE_RUNS_TEXT))?)?;

    Ok(Page {
        title: Some(title),
        items: collapse_items(items)?,
        endpoint: None,
    })
}

/// Build a page from `contents` alone (home and library landing pages).
pub fn parse_headerless_page(contents: &Value, response_context: Option<&Value>) -> Result<Page> {
    let endpoint = response_context.and_then(parse_tracking_endpoint);

    let collapsed = collapse(contents)?;
    let tab = match collapsed {
        Value::Object(tab) => tab,
        other => {
            warn!("Headerless contents collapsed to a {}, no items", kind_of(other));
            return Ok(Page {
                title: None,
                items: Vec::new(),
                endpoint,
            });
        }
    };

    let title = match tab.get("title") {
        Some(title) => headerless_title(title)?,
        None => None,
    };

    let raw_items = match extract(collapsed, Some(SECTION_CONTENTS))? {
        // Library landing: a single grid section wrapping the actual items.
        Value::Array(sections) if sections.len() == 1 => {
            extract(&sections[0], Some(SECTION_ITEMS_ONLY))?
        }
        other => other,
    };

    Ok(Page {
        title,
        items: collapse_items(raw_items)?,
        endpoint,
    })
}

/// Build a page from a category button.
pub fn parse_button_page(button_text: &Value, click_command: &Value) -> Result<Page> {
    let runs = lookup(button_text, "runs")?;
    let title = join_runs_value(runs, DEFAULT_SEPARATOR)?;

    let endpoint = match lookup(click_command, "browseEndpoint")? {
        Value::Object(browse_endpoint) => browse_endpoint.clone(),
        other => {
            return Err(YtMusicError::TypeMismatch {
                expected: "mapping",
                found: kind_of(other),
            })
        }
    };

    Ok(Page {
        title: Some(title),
        items: Vec::new(),
        endpoint: Some(endpoint),
    })
}

/// Resolve `{browse_id}` from a response's tracking params.
///
/// Any missing piece yields `None`.
pub fn parse_tracking_endpoint(response_context: &Value) -> Option<Endpoint> {
    let params = match extract(response_context, Some(TRACKING_PARAMS)) {
        Ok(Value::Array(params)) => params,
        Ok(other) => {
            debug!("Tracking params are a {}, not a list", kind_of(other));
            return None;
        }
        Err(e) => {
            debug!("No tracking params in response context: {}", e);
            return None;
        }
    };

    params
        .iter()
        .find(|param| param.get("key").and_then(|k| k.as_str()) == Some(BROWSE_ID_KEY))
        .and_then(|param| param.get("value"))
        .map(|value| browse_id_endpoint(value.clone()))
}

/// Tab titles are plain strings or runs; anything else leaves the page untitled.
fn headerless_title(title: &Value) -> Result<Option<String>> {
    match title {
        Value::String(text) => Ok(Some(text.clone())),
        Value::Array(_) => text_of(title).map(Some),
        Value::Object(map) if map.contains_key("runs") => text_of(title).map(Some),
        other => {
            debug!("Ignoring {} tab title", kind_of(other));
            Ok(None)
        }
    }
}

fn browse_id_endpoint(browse_id: Value) -> Endpoint {
    let mut endpoint = Map::new();
    endpoint.insert(BROWSE_ID_KEY.to_string(), browse_id);
    endpoint
}

/// Plain mapping lookup, no collapsing.
fn lookup<'a>(value: &'a Value, key: &str) -> Result<&'a Value> {
    match value {
        Value::Object(map) => map
            .get(key)
            .ok_or_else(|| YtMusicError::ShapeMismatch(format!("key {:?}", key))),
        other => Err(YtMusicError::TypeMismatch {
            expected: "mapping",
            found: kind_of(other),
        }),
    }
}

/// Collapse every raw item once.
fn collapse_items(raw_items: &Value) -> Result<Vec<Value>> {
    match raw_items {
        Value::Array(items) => items
            .iter()
            .map(|item| collapse(item).cloned())
            .collect(),
        other => Err(YtMusicError::TypeMismatch {
            expected: "list",
            found: kind_of(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_context(browse_id: &str) -> Value {
        json!({
            "serviceTrackingParams": [
                {
                    "service": "GFEEDBACK",
                    "params": [
                        {"key": "browse_id", "value": browse_id},
                        {"key": "logged_in", "value": "1"}
                    ]
                },
                {"service": "CSI", "params": []}
            ]
        })
    }

    #[test]
    fn test_full_page_with_section_contents() {
        let header = json!({"title": {"runs": [{"text": "Home"}]}});
        let contents = json!({"content": {"contents": {"items": [{"a": 1}]}}});

        let page = parse_full_page(&header, &contents, None).unwrap();
        assert_eq!(page.title.as_deref(), Some("Home"));
        assert_eq!(page.items, vec![json!(1)]);
        assert_eq!(page.endpoint, None);
    }

    #[test]
    fn test_full_page_falls_back_to_section_list() {
        let header = json!({"musicHeaderRenderer": {"title": {"runs": [{"text": "Moods & genres"}]}}});
        let contents = json!({
            "singleColumnBrowseResultsRenderer": {
                "content": {
                    "sectionListRenderer": {
                        "contents": [
                            {"gridRenderer": {"items": [1, 2]}},
                            {"gridRenderer": {"items": [3, 4]}}
                        ],
                        "trackingParams": "t"
                    }
                }
            }
        });

        let page = parse_full_page(&header, &contents, None).unwrap();
        assert_eq!(page.title.as_deref(), Some("Moods & genres"));
        assert_eq!(page.items, vec![json!([1, 2]), json!([3, 4])]);
    }

    #[test]
    fn test_full_page_list_contents_with_browse_endpoint() {
        let header = json!({
            "musicCarouselShelfBasicHeaderRenderer": {
                "title": {
                    "text": "Listen again",
                    "navigationEndpoint": {"browseEndpoint": {"browseId": "FEmusic_listen_again"}}
                },
                "accessibilityData": {}
            }
        });
        let contents = json!([
            {"musicTwoRowItemRenderer": {"title": "a"}},
            {"musicTwoRowItemRenderer": {"title": "b"}}
        ]);

        let page = parse_full_page(&header, &contents, Some(&response_context("FEmusic_home"))).unwrap();
        assert_eq!(page.title.as_deref(), Some("Listen again"));
        assert_eq!(page.items, vec![json!("a"), json!("b")]);
        assert_eq!(page.browse_id(), Some("FEmusic_listen_again"));
    }

    #[test]
    fn test_full_page_list_contents_keeps_tracking_endpoint() {
        let header = json!({"musicCarouselShelfBasicHeaderRenderer": {"title": {"runs": [{"text": "Quick picks"}]}}});
        let contents = json!([{"x": 1, "y": 2}]);

        let page = parse_full_page(&header, &contents, Some(&response_context("FEmusic_home"))).unwrap();
        assert_eq!(page.title.as_deref(), Some("Quick picks"));
        assert_eq!(page.items, vec![json!({"x": 1, "y": 2})]);
        assert_eq!(page.browse_id(), Some("FEmusic_home"));
    }

    #[test]
    fn test_inner_items_page() {
        let header = json!({"gridHeaderRenderer": {"title": {"runs": [{"text": "Pop"}]}}});
        let items = json!([{"musicNavigationButtonRenderer": {"buttonText": {}, "clickCommand": {}}}]);

        let page = parse_inner_items_page(&header, &items).unwrap();
        assert_eq!(page.title.as_deref(), Some("Pop"));
        assert_eq!(page.items, vec![json!({"buttonText": {}, "clickCommand": {}})]);
        assert_eq!(page.endpoint, None);
    }

    #[test]
    fn test_headerless_home_page() {
        let contents = json!({
            "singleColumnBrowseResultsRenderer": {
                "tabs": [{
                    "tabRenderer": {
                        "title": "Home",
                        "selected": true,
                        "content": {
                            "sectionListRenderer": {
                                "contents": [
                                    {"musicCarouselShelfRenderer": {"header": {}, "contents": []}},
                                    {"musicCarouselShelfRenderer": {"header": {}, "contents": [1]}}
                                ],
                                "continuations": []
                            }
                        }
                    }
                }]
            }
        });

        let page = parse_headerless_page(&contents, Some(&response_context("FEmusic_home"))).unwrap();
        assert_eq!(page.title.as_deref(), Some("Home"));
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0], json!({"header": {}, "contents": []}));
        assert_eq!(page.browse_id(), Some("FEmusic_home"));
    }

    #[test]
    fn test_headerless_library_page_unwraps_single_grid() {
        let contents = json!({
            "singleColumnBrowseResultsRenderer": {
                "tabs": [{
                    "tabRenderer": {
                        "title": "Library",
                        "content": {
                            "sectionListRenderer": {
                                "contents": [
                                    {"gridRenderer": {"items": [{"p": 1}, {"p": 2}], "header": {}}}
                                ],
                                "trackingParams": "t"
                            }
                        }
                    }
                }]
            }
        });

        let page = parse_headerless_page(&contents, None).unwrap();
        assert_eq!(page.title.as_deref(), Some("Library"));
        assert_eq!(page.items, vec![json!(1), json!(2)]);
        assert_eq!(page.endpoint, None);
    }

    #[test]
    fn test_headerless_single_grid_with_only_items() {
        let contents = json!({
            "tabRenderer": {
                "title": "Library",
                "content": {
                    "sectionListRenderer": {
                        "contents": [{"gridRenderer": {"items": [{"p": 1}, {"p": 2}]}}],
                        "trackingParams": "t"
                    }
                }
            }
        });

        let page = parse_headerless_page(&contents, None).unwrap();
        assert_eq!(page.items, vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_headerless_title_without_runs_is_dropped() {
        let contents = json!({
            "tabRenderer": {
                "title": {"simpleText": "Home"},
                "content": {"sectionListRenderer": {"contents": [1, 2], "x": 0}}
            }
        });

        let page = parse_headerless_page(&contents, None).unwrap();
        assert_eq!(page.title, None);
        assert_eq!(page.items, vec![json!(1), json!(2)]);

        let numeric = json!({
            "tabRenderer": {
                "title": 7,
                "content": {"sectionListRenderer": {"contents": [1, 2], "x": 0}}
            }
        });
        assert_eq!(parse_headerless_page(&numeric, None).unwrap().title, None);
    }

    #[test]
    fn test_headerless_title_from_runs() {
        let contents = json!({
            "tabRenderer": {
                "title": {"runs": [{"text": "Listen"}, {"text": "again"}]},
                "content": {"sectionListRenderer": {"contents": [1, 2], "x": 0}}
            }
        });

        let page = parse_headerless_page(&contents, None).unwrap();
        assert_eq!(page.title.as_deref(), Some("Listen again"));
    }

    #[test]
    fn test_headerless_non_mapping_is_empty() {
        let contents = json!([[1, 2]]);
        let page = parse_headerless_page(&contents, None).unwrap();
        assert_eq!(page.title, None);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_button_page_keeps_full_endpoint() {
        let button_text = json!({"runs": [{"text": "Chill"}]});
        let click_command = json!({
            "clickTrackingParams": "c",
            "browseEndpoint": {"browseId": "FEmusic_moods_and_genres_category", "params": "ggMP"}
        });

        let page = parse_button_page(&button_text, &click_command).unwrap();
        assert_eq!(page.title.as_deref(), Some("Chill"));
        assert!(page.items.is_empty());
        assert_eq!(
            page.endpoint,
            json!({"browseId": "FEmusic_moods_and_genres_category", "params": "ggMP"})
                .as_object()
                .cloned()
        );
    }

    #[test]
    fn test_button_without_browse_endpoint_fails() {
        let err = parse_button_page(&json!({"runs": []}), &json!({"watchEndpoint": {}})).unwrap_err();
        assert!(matches!(err, YtMusicError::ShapeMismatch(_)));
    }

    #[test]
    fn test_tracking_endpoint_missing_pieces() {
        assert_eq!(parse_tracking_endpoint(&json!({})), None);
        assert_eq!(
            parse_tracking_endpoint(&json!({"serviceTrackingParams": []})),
            None
        );
        assert_eq!(
            parse_tracking_endpoint(&json!({
                "serviceTrackingParams": [{"params": [{"key": "other", "value": "x"}], "service": "S"}]
            })),
            None
        );
    }
}
