//! Human-readable renderings of the API responses.
//!
//! Pure functions from the typed response shapes to text. Raw-JSON mode
//! never calls into this module.

use std::fmt::Write as FmtWrite;
use std::path::PathBuf;

use crate::models::{
    DeleteResponse, InfoResponse, MAX_RENDERED_MATCHES, MatchItem, SearchResponse, UploadResponse,
};
use crate::utils::{group_thousands, truncate};

/// Characters of base64 shown as a thumbnail preview.
const PREVIEW_LEN: usize = 40;

const MISSING: &str = "N/A";

fn yes_no(value: Option<bool>) -> &'static str {
    if value.unwrap_or(false) { "Yes" } else { "No" }
}

pub fn render_upload(response: &UploadResponse) -> String {
    let mut output = String::new();
    writeln!(output, "Upload").unwrap();
    writeln!(output, "------").unwrap();
    writeln!(
        output,
        "Search ID:    {}",
        response.id_search.as_deref().unwrap_or(MISSING)
    )
    .unwrap();
    writeln!(
        output,
        "Message:      {}",
        response.message.as_deref().unwrap_or(MISSING)
    )
    .unwrap();
    writeln!(output, "Progress:     {}%", response.progress.unwrap_or(0)).unwrap();
    writeln!(output, "Was Updated:  {}", yes_no(response.was_updated)).unwrap();
    writeln!(output, "Images:       {}", response.input.len()).unwrap();
    for image in &response.input {
        writeln!(
            output,
            "  {}  {}",
            image.id_pic.as_deref().unwrap_or(MISSING),
            image.url_source.as_deref().unwrap_or(MISSING)
        )
        .unwrap();
    }
    output
}

/// Render a search response. `saved` holds the thumbnail path written for
/// each ranked match, aligned with the ranked order; pass an empty slice
/// when thumbnail saving is off.
pub fn render_search(response: &SearchResponse, saved: &[Option<PathBuf>]) -> String {
    let mut output = String::new();
    writeln!(output, "Search").unwrap();
    writeln!(output, "------").unwrap();
    writeln!(
        output,
        "Search ID:    {}",
        response.id_search.as_deref().unwrap_or(MISSING)
    )
    .unwrap();
    writeln!(
        output,
        "Message:      {}",
        response.message.as_deref().unwrap_or(MISSING)
    )
    .unwrap();
    writeln!(output, "Progress:     {}%", response.progress.unwrap_or(0)).unwrap();
    writeln!(output, "Was Updated:  {}", yes_no(response.was_updated)).unwrap();
    writeln!(
        output,
        "New Seen:     {}",
        response.new_seen_count.unwrap_or(0)
    )
    .unwrap();

    let Some(results) = &response.output else {
        return output;
    };

    writeln!(output).unwrap();
    writeln!(output, "Results").unwrap();
    writeln!(output, "-------").unwrap();
    writeln!(output, "Matches:        {}", results.items.len()).unwrap();
    writeln!(
        output,
        "Took:           {:.1}s",
        results.took_seconds.unwrap_or(0.0)
    )
    .unwrap();
    writeln!(
        output,
        "Faces Searched: {}",
        group_thousands(results.searched_faces.unwrap_or(0))
    )
    .unwrap();
    writeln!(output, "Max Score:      {}", results.max_score.unwrap_or(0)).unwrap();
    writeln!(output, "Demo:           {}", yes_no(results.demo)).unwrap();
    writeln!(
        output,
        "Faces/sec:      {}",
        group_thousands(results.face_per_sec.unwrap_or(0))
    )
    .unwrap();
    writeln!(output).unwrap();

    let ranked = results.ranked(MAX_RENDERED_MATCHES);
    if ranked.len() < results.items.len() {
        writeln!(output, "Showing top {} matches.", ranked.len()).unwrap();
        writeln!(output).unwrap();
    }

    for (i, item) in ranked.into_iter().enumerate() {
        render_match(&mut output, i + 1, item, saved.get(i).and_then(Option::as_ref));
    }

    output
}

fn render_match(output: &mut String, rank: usize, item: &MatchItem, saved: Option<&PathBuf>) {
    writeln!(
        output,
        "{:2}. [Score {}] {}",
        rank,
        item.score,
        item.url.as_deref().unwrap_or(MISSING)
    )
    .unwrap();
    if let Some(group) = item.group_label() {
        writeln!(output, "     Group: {}", group).unwrap();
    }
    if let Some(seen) = item.seen_label() {
        writeln!(output, "     Seen: {}", seen).unwrap();
    }
    if let Some(data) = item.base64.as_deref() {
        writeln!(output, "     Thumbnail: {}", truncate(data, PREVIEW_LEN)).unwrap();
    }
    if let Some(path) = saved {
        writeln!(output, "     Saved: {}", path.display()).unwrap();
    }
}

pub fn render_info(response: &InfoResponse) -> String {
    let mut output = String::new();
    writeln!(output, "Account").unwrap();
    writeln!(output, "-------").unwrap();
    writeln!(output, "Service Online:    {}", yes_no(response.is_online)).unwrap();
    writeln!(
        output,
        "Indexed Faces:     {}",
        group_thousands(response.faces.unwrap_or(0))
    )
    .unwrap();
    writeln!(
        output,
        "Remaining Credits: {}",
        response.remaining_credits.unwrap_or(0)
    )
    .unwrap();
    writeln!(
        output,
        "Can Search:        {}",
        yes_no(response.has_credits_to_search)
    )
    .unwrap();
    output
}

pub fn render_delete(response: &DeleteResponse) -> String {
    let mut output = String::new();
    writeln!(output, "Delete").unwrap();
    writeln!(output, "------").unwrap();
    writeln!(
        output,
        "Search ID:    {}",
        response.id_search.as_deref().unwrap_or(MISSING)
    )
    .unwrap();
    writeln!(
        output,
        "Message:      {}",
        response.message.as_deref().unwrap_or(MISSING)
    )
    .unwrap();
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_upload_example() {
        let response: UploadResponse = serde_json::from_value(json!({
            "id_search": "abc123",
            "message": "ok",
            "progress": 100,
            "was_updated": true,
            "input": [{"id_pic": "p1", "url_source": "http://x"}]
        }))
        .unwrap();

        let text = render_upload(&response);
        assert!(text.contains("Search ID:    abc123"));
        assert!(text.contains("Was Updated:  Yes"));
        assert!(text.contains("Images:       1"));
        assert!(text.contains("p1  http://x"));
    }

    #[test]
    fn test_render_upload_defaults() {
        let response: UploadResponse = serde_json::from_value(json!({})).unwrap();
        let text = render_upload(&response);
        assert!(text.contains("Search ID:    N/A"));
        assert!(text.contains("Progress:     0%"));
        assert!(text.contains("Was Updated:  No"));
        assert!(text.contains("Images:       0"));
    }

    #[test]
    fn test_render_search_orders_by_score() {
        let response: SearchResponse = serde_json::from_value(json!({
            "id_search": "s1",
            "output": {
                "items": [
                    {"score": 90, "url": "https://low.example"},
                    {"score": 95, "url": "https://high.example"}
                ]
            }
        }))
        .unwrap();

        let text = render_search(&response, &[]);
        let high = text.find("https://high.example").unwrap();
        let low = text.find("https://low.example").unwrap();
        assert!(high < low);
        assert!(text.contains("[Score 95]"));
    }

    #[test]
    fn test_render_search_without_output_has_no_results_block() {
        let response: SearchResponse =
            serde_json::from_value(json!({"id_search": "s1", "progress": 30})).unwrap();
        let text = render_search(&response, &[]);
        assert!(!text.contains("Results"));
        assert!(text.contains("Progress:     30%"));
    }

    #[test]
    fn test_render_search_suppresses_default_group() {
        let response: SearchResponse = serde_json::from_value(json!({
            "output": {
                "items": [
                    {"score": 80, "url": "u1", "group": 0},
                    {"score": 70, "url": "u2", "group": 2}
                ]
            }
        }))
        .unwrap();

        let text = render_search(&response, &[]);
        assert_eq!(text.matches("Group:").count(), 1);
        assert!(text.contains("Group: 2"));
    }

    #[test]
    fn test_render_search_truncates_to_twenty() {
        let items: Vec<_> = (0..25).map(|i| json!({"score": i, "url": "u"})).collect();
        let response: SearchResponse =
            serde_json::from_value(json!({"output": {"items": items}})).unwrap();
        let text = render_search(&response, &[]);
        assert!(text.contains("Showing top 20 matches."));
        assert_eq!(text.matches("[Score ").count(), 20);
    }

    #[test]
    fn test_render_search_saved_paths_follow_rank() {
        let response: SearchResponse = serde_json::from_value(json!({
            "output": {
                "items": [
                    {"score": 50, "url": "u1", "base64": "AAAA"},
                    {"score": 60, "url": "u2", "base64": "BBBB"}
                ]
            }
        }))
        .unwrap();

        let saved = vec![Some(PathBuf::from("thumb_s_1_score60.jpg")), None];
        let text = render_search(&response, &saved);
        assert!(text.contains("Saved: thumb_s_1_score60.jpg"));
        assert_eq!(text.matches("Saved:").count(), 1);
    }

    #[test]
    fn test_render_info() {
        let response: InfoResponse = serde_json::from_value(json!({
            "faces": 921000000,
            "is_online": true,
            "remaining_credits": 178,
            "has_credits_to_search": true
        }))
        .unwrap();

        let text = render_info(&response);
        assert!(text.contains("Service Online:    Yes"));
        assert!(text.contains("Indexed Faces:     921,000,000"));
        assert!(text.contains("Remaining Credits: 178"));
        assert!(text.contains("Can Search:        Yes"));
    }

    #[test]
    fn test_render_delete() {
        let response: DeleteResponse =
            serde_json::from_value(json!({"id_search": "s1", "message": "Picture removed"}))
                .unwrap();
        let text = render_delete(&response);
        assert!(text.contains("Search ID:    s1"));
        assert!(text.contains("Message:      Picture removed"));
    }
}
