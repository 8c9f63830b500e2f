//! Standalone SVG markup for a [`MapScene`].
//!
//! Element order matches the live component: every room's circle and label in
//! room order, then the connector lines.

use std::fmt::Write;

use super::scene::MapScene;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
}

impl MapScene {
	/// Serializes the scene as a standalone `<svg>` document.
	pub fn to_svg(&self) -> String {
		let mut out = String::new();
		// Writing into a String cannot fail.
		let _ = writeln!(
			out,
			r#"<svg xmlns="{SVG_NS}" width="{}" height="{}">"#,
			self.width, self.height
		);
		for marker in &self.markers {
			let _ = writeln!(
				out,
				r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
				marker.center.x,
				marker.center.y,
				marker.radius,
				escape(&marker.fill)
			);
			let _ = writeln!(
				out,
				r#"  <text x="{}" y="{}">{}</text>"#,
				marker.label.x,
				marker.label.y,
				escape(&marker.label.text)
			);
		}
		for line in &self.connectors {
			let _ = writeln!(
				out,
				r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
				line.start.x,
				line.start.y,
				line.end.x,
				line.end.y,
				escape(&line.stroke)
			);
		}
		out.push_str("</svg>\n");
		out
	}
}
