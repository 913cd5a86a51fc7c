#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Anchor,
	Project,
	Topic,
}

/// A positioned node in the layout arena.
#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Apparent depth, scales text size and opacity.
	pub z: f64,
	pub fixed: bool,
	/// Noise offset decorrelating this node's drift from its neighbours.
	pub phase: f64,
}

/// Spring between two arena indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	pub a: usize,
	pub b: usize,
	pub rest_length: f64,
}

impl Spring {
	pub fn touches(&self, idx: usize) -> bool {
		self.a == idx || self.b == idx
	}

	pub fn joins(&self, i: usize, j: usize) -> bool {
		(self.a == i && self.b == j) || (self.a == j && self.b == i)
	}
}

/// What a click on the network asks the owner of the selection to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
	Clear,
	Select(String),
}

impl SelectionEvent {
	/// Applies the event, returning whether the selection actually changed.
	pub fn apply(self, selection: &mut Option<String>) -> bool {
		let next = match self {
			SelectionEvent::Clear => None,
			SelectionEvent::Select(id) => Some(id),
		};
		if *selection == next {
			return false;
		}
		*selection = next;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reselecting_is_not_a_change() {
		let mut selection = None;
		assert!(SelectionEvent::Select("p1".into()).apply(&mut selection));
		assert!(!SelectionEvent::Select("p1".into()).apply(&mut selection));
		assert_eq!(selection.as_deref(), Some("p1"));
	}

	#[test]
	fn clear_only_changes_when_set() {
		let mut selection = None;
		assert!(!SelectionEvent::Clear.apply(&mut selection));
		selection = Some("p2".to_string());
		assert!(SelectionEvent::Clear.apply(&mut selection));
		assert_eq!(selection, None);
	}

	#[test]
	fn spring_joins_in_either_order() {
		let spring = Spring { a: 0, b: 3, rest_length: 200.0 };
		assert!(spring.joins(3, 0));
		assert!(spring.joins(0, 3));
		assert!(!spring.joins(0, 2));
		assert!(spring.touches(3));
	}
}
