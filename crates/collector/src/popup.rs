use survey::{PointId, Theme};

/// Popup markup for a captured point: uppercased theme label, the comment
/// when present, and a delete affordance bound to the point's stable index.
///
/// The index rides along as a data attribute; the host wires it back to
/// `PointCollector::delete_point` however its UI toolkit prefers.
pub fn popup_html(theme: &Theme, comment: &str, id: PointId) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"popup-content\">\n");
    html.push_str(&format!(
        "  <div class=\"popup-theme\">{}</div>\n",
        theme.label()
    ));
    if !comment.is_empty() {
        html.push_str(&format!("  <div class=\"popup-comment\">{comment}</div>\n"));
    }
    html.push_str(&format!(
        "  <button class=\"popup-delete\" data-point-index=\"{}\">Delete point</button>\n",
        id.index()
    ));
    html.push_str("</div>");
    html
}
