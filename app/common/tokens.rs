pub const SVM_COLOR: &str = "#4B3C91";
pub const BERT_COLOR: &str = "#FF6F61";

pub const NEGATIVE_TREND_COLOR: &str = "#FF6B6B";
pub const NEUTRAL_TREND_COLOR: &str = "#FFD93D";
pub const POSITIVE_TREND_COLOR: &str = "#6BCB77";

pub const POSITIVE_PIE_COLOR: &str = "#4CAF50";
pub const NEUTRAL_PIE_COLOR: &str = "#FFC107";
pub const NEGATIVE_PIE_COLOR: &str = "#F44336";

/// The categorical palette of the category donuts. Categories past the tenth reuse it from the start.
pub const TABLEAU10: [&str; 10] = [
	"#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
	"#9c755f", "#bab0ac",
];

pub fn category_color(index: usize) -> &'static str {
	TABLEAU10[index % TABLEAU10.len()]
}

pub fn trend_color(sentiment: &str) -> &'static str {
	match sentiment {
		"negative" => NEGATIVE_TREND_COLOR,
		"neutral" => NEUTRAL_TREND_COLOR,
		_ => POSITIVE_TREND_COLOR,
	}
}

#[test]
fn test_category_color_wraps() {
	assert_eq!(category_color(0), "#4e79a7");
	assert_eq!(category_color(10), "#4e79a7");
	assert_eq!(category_color(12), "#e15759");
}
