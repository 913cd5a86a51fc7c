use std::collections::{HashMap, HashSet};

use log::info;

use super::noise::Noise;
use super::types::{GraphNode, NodeKind, SelectionEvent, Spring};
use crate::content::PortfolioContent;

/// Tunables of the drift/spring simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
	pub anchor_position: (f64, f64),
	pub anchor_spring_length: f64,
	pub topic_spring_length: f64,
	pub stiffness: f64,
	pub damping: f64,
	pub hit_radius: f64,
	pub coarse_drift_speed: f64,
	pub fine_drift_speed: f64,
	/// Fraction of the width beyond which the pointer selects the fine drift.
	pub drift_split: f64,
	pub right_bound: f64,
	pub margin: f64,
	pub boundary_step: f64,
	pub depth_range: (f64, f64),
	pub phase_range: f64,
	pub y_noise_offset: f64,
	pub project_spawn_width: f64,
	pub marker_speed: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			anchor_position: (60.0, 60.0),
			anchor_spring_length: 200.0,
			topic_spring_length: 120.0,
			stiffness: 0.01,
			damping: 0.9,
			hit_radius: 30.0,
			coarse_drift_speed: 0.02,
			fine_drift_speed: 0.005,
			drift_split: 0.66,
			right_bound: 0.8,
			margin: 40.0,
			boundary_step: 2.0,
			depth_range: (0.5, 1.5),
			phase_range: 1000.0,
			y_noise_offset: 100.0,
			project_spawn_width: 0.5,
			marker_speed: 0.01,
		}
	}
}

pub const ANCHOR_IDX: usize = 0;
pub const ANCHOR_ID: &str = "root";

pub struct NetworkState {
	pub nodes: Vec<GraphNode>,
	pub springs: Vec<Spring>,
	pub params: LayoutParams,
	pub width: f64,
	pub height: f64,
	pub frame_count: u64,
	pub pointer_x: f64,
	noise: Noise,
}

impl NetworkState {
	/// Builds the anchor, one node per project and one per referenced topic.
	///
	/// `random` yields values in `[0, 1)` and drives every initial position,
	/// depth and phase.
	pub fn new(
		content: &PortfolioContent,
		width: f64,
		height: f64,
		params: LayoutParams,
		random: &mut dyn FnMut() -> f64,
	) -> Self {
		let mut nodes = Vec::new();
		let mut springs = Vec::new();
		let (depth_lo, depth_hi) = params.depth_range;
		let mut spawn = |id: &str, label: &str, kind: NodeKind, x_span: f64| GraphNode {
			id: id.to_string(),
			label: label.to_string(),
			kind,
			x: random() * x_span,
			y: random() * height,
			vx: 0.0,
			vy: 0.0,
			z: depth_lo + random() * (depth_hi - depth_lo),
			fixed: false,
			phase: random() * params.phase_range,
		};

		let mut anchor = spawn(ANCHOR_ID, content.anchor_label, NodeKind::Anchor, width);
		(anchor.x, anchor.y) = params.anchor_position;
		anchor.fixed = true;
		nodes.push(anchor);

		let mut project_idx = HashMap::new();
		for project in content.projects {
			let idx = nodes.len();
			nodes.push(spawn(
				project.id,
				project.label,
				NodeKind::Project,
				width * params.project_spawn_width,
			));
			project_idx.insert(project.id, idx);
			springs.push(Spring {
				a: ANCHOR_IDX,
				b: idx,
				rest_length: params.anchor_spring_length,
			});
		}

		// Declared topics first, then any that only appear in a connection list.
		let mut seen = HashSet::new();
		let topic_order = content
			.topics
			.iter()
			.chain(content.connections.iter().flat_map(|(_, topics)| topics.iter()))
			.copied()
			.filter(|topic| seen.insert(*topic))
			.collect::<Vec<_>>();

		for topic in topic_order {
			let linked: Vec<usize> = content
				.projects
				.iter()
				.filter(|project| content.topics_for(project.id).contains(&topic))
				.filter_map(|project| project_idx.get(project.id).copied())
				.collect();
			if linked.is_empty() {
				continue;
			}
			let idx = nodes.len();
			nodes.push(spawn(topic, topic, NodeKind::Topic, width));
			springs.extend(linked.into_iter().map(|project| Spring {
				a: idx,
				b: project,
				rest_length: params.topic_spring_length,
			}));
		}

		info!(
			"Network built: {} nodes, {} springs ({}x{})",
			nodes.len(),
			springs.len(),
			width,
			height
		);

		let noise = Noise::new(random);
		Self {
			nodes,
			springs,
			params,
			width,
			height,
			frame_count: 0,
			pointer_x: 0.0,
			noise,
		}
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	pub fn is_connected(&self, i: usize, j: usize) -> bool {
		self.springs.iter().any(|s| s.joins(i, j))
	}

	pub fn set_pointer(&mut self, x: f64) {
		self.pointer_x = x;
	}

	/// Coarse drift while the pointer is over the left part of the canvas,
	/// fine drift over the right part.
	pub fn drift_speed(&self) -> f64 {
		if self.pointer_x < self.width * self.params.drift_split {
			self.params.coarse_drift_speed
		} else {
			self.params.fine_drift_speed
		}
	}

	/// Advances the simulation by one frame.
	pub fn tick(&mut self) {
		self.frame_count += 1;
		self.drift();
		self.relax_springs();
		self.integrate();
	}

	pub(super) fn drift(&mut self) {
		let t = self.frame_count as f64 * self.drift_speed();
		let p = &self.params;
		let (right, bottom) = (self.width * p.right_bound, self.height - p.margin);

		for node in self.nodes.iter_mut().filter(|n| !n.fixed) {
			node.x += self.noise.sample(node.phase + t) * 2.0 - 1.0;
			node.y += self.noise.sample(node.phase + p.y_noise_offset + t) * 2.0 - 1.0;

			if node.x > right {
				node.x -= p.boundary_step;
			}
			if node.x < p.margin {
				node.x += p.boundary_step;
			}
			if node.y > bottom {
				node.y -= p.boundary_step;
			}
			if node.y < p.margin {
				node.y += p.boundary_step;
			}
		}
	}

	pub(super) fn relax_springs(&mut self) {
		for spring in &self.springs {
			let (a, b) = (&self.nodes[spring.a], &self.nodes[spring.b]);
			let (dx, dy) = (b.x - a.x, b.y - a.y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < f64::EPSILON {
				continue;
			}
			let magnitude = (dist - spring.rest_length) * self.params.stiffness;
			let (fx, fy) = (dx / dist * magnitude, dy / dist * magnitude);

			let a = &mut self.nodes[spring.a];
			if !a.fixed {
				a.vx += fx;
				a.vy += fy;
			}
			let b = &mut self.nodes[spring.b];
			if !b.fixed {
				b.vx -= fx;
				b.vy -= fy;
			}
		}
	}

	pub(super) fn integrate(&mut self) {
		let damping = self.params.damping;
		for node in self.nodes.iter_mut().filter(|n| !n.fixed) {
			node.vx *= damping;
			node.vy *= damping;
			node.x += node.vx;
			node.y += node.vy;
		}
	}

	/// Every node within the hit radius of the press fires, not just the nearest.
	pub fn hit_test(&self, x: f64, y: f64) -> Vec<SelectionEvent> {
		if x < 0.0 || x > self.width || y < 0.0 || y > self.height {
			return Vec::new();
		}
		self.nodes
			.iter()
			.filter(|n| ((n.x - x).powi(2) + (n.y - y).powi(2)).sqrt() < self.params.hit_radius)
			.filter_map(|n| match n.kind {
				NodeKind::Anchor => Some(SelectionEvent::Clear),
				NodeKind::Project => Some(SelectionEvent::Select(n.id.clone())),
				NodeKind::Topic => None,
			})
			.collect()
	}

	pub fn is_active(&self, idx: usize, selection: Option<&str>) -> bool {
		selection.is_some_and(|id| self.nodes[idx].id == id)
	}

	/// A node is dimmed while something is selected unless it is the
	/// selected node or shares a spring with it.
	pub fn is_dimmed(&self, idx: usize, selection: Option<&str>) -> bool {
		let Some(id) = selection else {
			return false;
		};
		match self.index_of(id) {
			Some(active) => active != idx && !self.is_connected(idx, active),
			None => true,
		}
	}

	pub fn node_alpha(&self, idx: usize, selection: Option<&str>) -> f64 {
		let (lo, hi) = self.params.depth_range;
		let z = self.nodes[idx].z;
		let alpha = (100.0 + (z - lo) / (hi - lo) * 155.0) / 255.0;
		if self.is_dimmed(idx, selection) {
			alpha * 0.2
		} else {
			alpha
		}
	}

	pub fn spring_alpha(&self, spring: &Spring, selection: Option<&str>) -> f64 {
		let alpha = match selection {
			None => 80.0,
			Some(id) if self.index_of(id).is_some_and(|active| spring.touches(active)) => 200.0,
			Some(_) => 40.0,
		};
		alpha / 255.0
	}

	/// Position of the travelling marker along `spring`, in `[0, 1)`.
	pub fn marker_t(&self, spring: &Spring) -> f64 {
		(self.frame_count as f64 * self.params.marker_speed + self.nodes[spring.a].phase)
			.rem_euclid(1.0)
	}

	/// Changes the drawable area only; node positions are kept.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
