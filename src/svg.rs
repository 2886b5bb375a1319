use crate::flower::IconImage;

impl IconImage {
    /// Serialize as a standalone SVG document: background rect, petal group, center circle.
    pub fn to_svg(&self) -> String {
        let Self {
            canvas,
            background,
            flower,
            stroke_width,
        } = self;
        let (w, h) = (canvas.width, canvas.height);

        let petals: String = flower
            .petal_paths
            .iter()
            .map(|d| format!(r#"<path d="{d}"/>"#))
            .collect();

        let mut out = String::with_capacity(256 + petals.len());
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push('\n');
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"  <rect width="100%" height="100%" fill="{background}"/>"#
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"  <g fill="{c}" stroke="{c}" stroke-width="{stroke_width}">"#,
            c = flower.petal_color
        ));
        out.push('\n');
        out.push_str(&format!("    {petals}\n"));
        out.push_str("  </g>\n");
        out.push_str(&format!(
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            flower.center.x, flower.center.y, flower.center_radius, flower.center_color
        ));
        out.push('\n');
        out.push_str("</svg>\n");
        out
    }
}

#[cfg(test)]
#[path = "../tests/unit/svg.rs"]
mod tests;
