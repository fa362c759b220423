// ABOUTME: Integration tests for catalog and detail normalization.
// ABOUTME: Exercises the public API against envelope shapes seen from the upstream content API.

use playfeed_normalize::{
    ensure_poster, extract_summaries, normalize_details, normalize_path, parse_duration_seconds,
    resolve_image, Details, Fallback, Summary,
};
use serde_json::json;

mod catalog_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_feed_items_with_nested_content() {
        let envelope = json!({
            "feed": {
                "items": [{
                    "content": {
                        "title": "Film A",
                        "path": "/a/b",
                        "image": {"url": "https://x/img?location=list"}
                    }
                }]
            }
        });

        let extraction = extract_summaries(&envelope);
        assert_eq!(extraction.raw_count, 1);
        assert_eq!(
            extraction.summaries,
            vec![Summary {
                id: "a/b".to_string(),
                title: "Film A".to_string(),
                url: "a/b".to_string(),
                image_url: Some("https://x/img?location=moviePoster".to_string()),
            }]
        );
    }

    #[test]
    fn test_unmappable_items_are_dropped() {
        let envelope = json!({
            "items": [
                {"title": "Keep", "url": "https://play.example.com/film/keep"},
                {"description": "no title, no url"},
                {"title": "No url"},
                "not an object",
                {"program": {"name": "Program", "productPath": "/program/p", "programId": "p-1"}}
            ]
        });

        let extraction = extract_summaries(&envelope);
        assert_eq!(extraction.raw_count, 5);
        assert_eq!(extraction.discarded(), 3);
        let titles: Vec<&str> = extraction.summaries.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Keep", "Program"]);
        assert_eq!(extraction.summaries[0].url, "film/keep");
        assert_eq!(extraction.summaries[1].id, "p-1");
    }

    #[test]
    fn test_sections_envelope() {
        let envelope = json!({
            "sections": [
                {"title": "Empty row", "items": []},
                {"title": "Films", "items": [{"target": {"title": "S", "url": "/s", "uuid": "u-1"}}]}
            ]
        });

        let extraction = extract_summaries(&envelope);
        assert_eq!(extraction.summaries.len(), 1);
        assert_eq!(extraction.summaries[0].id, "u-1");
    }

    #[test]
    fn test_empty_envelope_has_no_entries() {
        let extraction = extract_summaries(&json!({"items": []}));
        assert_eq!(extraction.raw_count, 0);
        assert!(extraction.summaries.is_empty());

        let unknown = extract_summaries(&json!({"data": {"rows": [1, 2]}}));
        assert_eq!(unknown.raw_count, 0);
    }
}

mod details_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detail_document_without_fallback() {
        let document = json!({"title": "Film B", "url": "b", "duration": "PT1H30M", "description": "D"});
        let details = normalize_details(&document, Fallback::None, "b");
        assert_eq!(
            details,
            Details {
                summary: Summary {
                    id: "b".to_string(),
                    title: "Film B".to_string(),
                    url: "b".to_string(),
                    image_url: None,
                },
                description: Some("D".to_string()),
                duration_seconds: Some(5400),
                raw_duration: Some("PT1H30M".to_string()),
            }
        );
    }

    #[test]
    fn test_sparse_document_keeps_fallback_summary() {
        let fallback = Summary {
            id: "42".to_string(),
            title: "Film C".to_string(),
            url: "film/c".to_string(),
            image_url: None,
        };
        let details = normalize_details(&json!({"durationInSeconds": 61.4}), &fallback, "film/c");
        assert_eq!(details.summary, fallback);
        assert_eq!(details.duration_seconds, Some(61));
        assert_eq!(details.raw_duration, None);
        assert_eq!(details.description, None);
    }
}

mod scalar_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duration_table() {
        assert_eq!(parse_duration_seconds("90"), Some(90));
        assert_eq!(parse_duration_seconds("PT1H5M"), Some(3900));
        assert_eq!(parse_duration_seconds("1:05"), Some(65));
        assert_eq!(parse_duration_seconds("1:02:03"), Some(3723));
        assert_eq!(parse_duration_seconds(""), None);
        assert_eq!(parse_duration_seconds("soon"), None);
    }

    #[test]
    fn test_image_shapes_resolve_to_same_url() {
        for value in [
            json!({"poster": [{"url": "X"}]}),
            json!({"url": "X"}),
            json!("X"),
            json!([{"href": "X"}]),
        ] {
            assert_eq!(resolve_image(&value).as_deref(), Some("X"), "value: {value}");
        }
    }

    #[test]
    fn test_poster_adjustment_touches_only_token() {
        let url = "https://cdn.example.com/p/1.jpg?location=list&width=400";
        assert_eq!(
            ensure_poster(url),
            "https://cdn.example.com/p/1.jpg?location=moviePoster&width=400"
        );
        assert_eq!(ensure_poster("https://cdn.example.com/p/1.jpg"), "https://cdn.example.com/p/1.jpg");
    }

    #[test]
    fn test_normalized_path_is_stable() {
        let once = normalize_path("https://play.example.com/film/abc");
        assert_eq!(once, "film/abc");
        assert_eq!(normalize_path(&once), once);
    }
}
