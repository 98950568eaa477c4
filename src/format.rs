//! Display helpers shared by the listing and detail views.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").unwrap());
static EDGE_HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-+|-+$").unwrap());

/// Badge palette for technologies without an entry of their own
pub const DEFAULT_TECH_COLOR: &str = "bg-primary/10 text-primary border-primary/20";

/// Cut `text` to `max_length` characters and append `...`.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length).collect();
    format!("{}...", cut.trim())
}

/// URL-friendly form of `text`
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lower, "");
    let hyphenated = SEPARATOR_RUNS.replace_all(&stripped, "-");
    EDGE_HYPHENS.replace_all(&hyphenated, "").into_owned()
}

/// Group digits in thousands with commas
pub fn format_number(num: i64) -> String {
    let digits = num.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if num < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Badge classes for a technology label
pub fn tech_color(tech: &str) -> &'static str {
    match tech {
        "Python" => "bg-blue-500/10 text-blue-500 border-blue-500/20",
        "JavaScript" => "bg-yellow-500/10 text-yellow-500 border-yellow-500/20",
        "TypeScript" => "bg-blue-400/10 text-blue-400 border-blue-400/20",
        "React" => "bg-cyan-500/10 text-cyan-500 border-cyan-500/20",
        "Next.js" => "bg-gray-500/10 text-gray-500 border-gray-500/20",
        "TensorFlow" => "bg-orange-500/10 text-orange-500 border-orange-500/20",
        "PyTorch" => "bg-red-500/10 text-red-500 border-red-500/20",
        "OpenCV" => "bg-green-500/10 text-green-500 border-green-500/20",
        "Node.js" => "bg-green-600/10 text-green-600 border-green-600/20",
        "Tailwind" => "bg-teal-500/10 text-teal-500 border-teal-500/20",
        _ => DEFAULT_TECH_COLOR,
    }
}

/// Fixed-decimal metric value; missing values render as `-`
pub fn format_metric(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "-".to_string(),
    }
}

/// Bucket items by the string `key` returns, keeping input order per bucket
pub fn group_by<T, F>(items: &[T], key: F) -> BTreeMap<String, Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let mut groups: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}
