//! 管理者サマリの整形

use serde_json::Value;

use crate::error::Result;
use crate::types::AdminSummary;

/// サマリをダッシュボード表示用テキストに整形する
///
/// previous/upcoming/liveを2スペースインデントで整形し、
/// liveが欠けている場合は空オブジェクトとして表示する
pub fn format_summary(summary: &AdminSummary) -> Result<String> {
    let live = summary
        .live
        .clone()
        .unwrap_or_else(|| Value::Object(Default::default()));
    Ok(format!(
        "Previous Elections:\n{}\n\nUpcoming Elections:\n{}\n\nLive Tallies:\n{}\n",
        serde_json::to_string_pretty(&summary.previous)?,
        serde_json::to_string_pretty(&summary.upcoming)?,
        serde_json::to_string_pretty(&live)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_live_renders_empty_object() {
        let summary = AdminSummary {
            previous: json!([]),
            upcoming: json!([]),
            live: None,
        };
        let text = format_summary(&summary).expect("整形失敗");
        assert!(text.contains("Live Tallies:\n{}\n"));
    }

    #[test]
    fn test_labels_in_order() {
        let summary = AdminSummary::default();
        let text = format_summary(&summary).expect("整形失敗");
        let previous = text.find("Previous Elections:").unwrap();
        let upcoming = text.find("Upcoming Elections:").unwrap();
        let live = text.find("Live Tallies:").unwrap();
        assert!(previous < upcoming);
        assert!(upcoming < live);
    }

    #[test]
    fn test_pretty_printed_blocks() {
        let summary = AdminSummary {
            previous: json!([{"year": 2018, "winner": "TRS/BRS"}]),
            upcoming: json!([{"year": 2028, "type": "Assembly Elections"}]),
            live: Some(json!({"INC": 3})),
        };
        let text = format_summary(&summary).expect("整形失敗");
        // 2スペースインデントの複数行になる
        assert!(text.contains("  {\n"));
        assert!(text.contains(r#""winner": "TRS/BRS""#));
        assert!(text.contains(r#""INC": 3"#));
        assert!(text.ends_with('\n'));
    }
}
