//! Text and JSON rendering.

use anyhow::Result;
use chrono::Month;
use featureboard_client::filter::month_key;
use featureboard_client::FeatureView;

/// Render a feature list, one line per feature.
pub fn features(list: &[FeatureView], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(list)?);
    }
    if list.is_empty() {
        return Ok("No features.".to_string());
    }
    let lines: Vec<String> = list.iter().map(summary_line).collect();
    Ok(lines.join("\n"))
}

fn summary_line(view: &FeatureView) -> String {
    let star = if view.is_starred { "*" } else { " " };
    format!(
        "{} {:<16} {:<40} {:>4} up  {:.1}/5 ({})  [{}]",
        star,
        view.date,
        view.title,
        view.upvotes,
        view.rating,
        view.rating_count,
        view.id
    )
}

/// Render one feature in full.
pub fn detail(view: &FeatureView, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(view)?);
    }
    let mut out = vec![format!("{} {}  [{}]", view.icon, view.title, view.id)];
    let fields = [
        ("date", view.date.clone()),
        ("status", view.status.clone()),
        ("category", view.category.clone()),
        ("tags", view.tags.join(", ")),
        ("tl;dr", view.tldr.clone()),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            out.push(format!("  {:<9} {}", format!("{}:", label), value));
        }
    }
    out.push(format!("  {:<9} {}", "upvotes:", view.upvotes));
    let yours = if view.user_rating > 0.0 {
        format!(", yours {}", view.user_rating)
    } else {
        String::new()
    };
    out.push(format!(
        "  {:<9} {:.1} from {} ratings{}",
        "rating:", view.rating, view.rating_count, yours
    ));
    if view.is_starred {
        out.push("  starred".to_string());
    }
    if !view.description.is_empty() {
        out.push(String::new());
        out.push(format!("  {}", view.description));
    }
    for link in &view.links {
        out.push(format!("  - {} {}", link.title, link.url));
    }
    Ok(out.join("\n"))
}

/// Render the months that have features.
pub fn months(months: &[Month], json: bool) -> Result<String> {
    let names: Vec<String> = months.iter().map(|m| month_key(*m)).collect();
    if json {
        return Ok(serde_json::to_string(&names)?);
    }
    Ok(names.join("\n"))
}
