use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::NetworkState;
use super::types::{GraphNode, NodeKind};

const BACKGROUND: &str = "#004d4d";
const CURVE_BEND: f64 = 20.0;
const MARKER_DIAMETER: f64 = 3.0;

/// Control polygon of the connector from `a` to `b`.
pub fn curve(a: (f64, f64), b: (f64, f64)) -> [(f64, f64); 4] {
	[
		a,
		(a.0 + CURVE_BEND, a.1 - CURVE_BEND),
		(b.0 - CURVE_BEND, b.1 + CURVE_BEND),
		b,
	]
}

/// Point at parameter `t` on a cubic Bézier.
pub fn bezier_point(ctrl: &[(f64, f64); 4], t: f64) -> (f64, f64) {
	let u = 1.0 - t;
	let (w0, w1, w2, w3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
	(
		w0 * ctrl[0].0 + w1 * ctrl[1].0 + w2 * ctrl[2].0 + w3 * ctrl[3].0,
		w0 * ctrl[0].1 + w1 * ctrl[1].1 + w2 * ctrl[2].1 + w3 * ctrl[3].1,
	)
}

fn gold(alpha: f64) -> String {
	format!("rgba(255, 215, 0, {})", alpha.clamp(0.0, 1.0))
}

pub fn render(state: &NetworkState, ctx: &CanvasRenderingContext2d, selection: Option<&str>) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_springs(state, ctx, selection);
	draw_nodes(state, ctx, selection);
}

fn draw_springs(state: &NetworkState, ctx: &CanvasRenderingContext2d, selection: Option<&str>) {
	ctx.set_line_width(0.5);
	for spring in &state.springs {
		let (a, b) = (&state.nodes[spring.a], &state.nodes[spring.b]);
		let ctrl = curve((a.x, a.y), (b.x, b.y));
		let alpha = state.spring_alpha(spring, selection);

		ctx.set_stroke_style_str(&gold(alpha));
		ctx.begin_path();
		ctx.move_to(ctrl[0].0, ctrl[0].1);
		ctx.bezier_curve_to(ctrl[1].0, ctrl[1].1, ctrl[2].0, ctrl[2].1, ctrl[3].0, ctrl[3].1);
		ctx.stroke();

		let (mx, my) = bezier_point(&ctrl, state.marker_t(spring));
		ctx.set_fill_style_str(&gold(alpha + 50.0 / 255.0));
		ctx.begin_path();
		let _ = ctx.arc(mx, my, MARKER_DIAMETER / 2.0, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn text_style(node: &GraphNode) -> (f64, &'static str) {
	match node.kind {
		NodeKind::Anchor => (22.0, "left"),
		NodeKind::Project => (14.0, "center"),
		NodeKind::Topic => (10.0, "center"),
	}
}

fn draw_nodes(state: &NetworkState, ctx: &CanvasRenderingContext2d, selection: Option<&str>) {
	for (idx, node) in state.nodes.iter().enumerate() {
		let fill = if state.is_active(idx, selection) {
			gold(1.0)
		} else {
			format!("rgba(255, 255, 255, {})", state.node_alpha(idx, selection))
		};
		let (size, align) = text_style(node);

		ctx.save();
		let _ = ctx.translate(node.x, node.y);
		let _ = ctx.scale(node.z, node.z);
		ctx.set_fill_style_str(&fill);
		ctx.set_font(&format!("{size}px sans-serif"));
		ctx.set_text_align(align);
		let _ = ctx.fill_text(&node.label, 0.0, 0.0);
		ctx.restore();
	}
}
