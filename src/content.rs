//! Static portfolio content: projects, topics and project-topic connections.

use serde::Serialize;

/// A portfolio project shown as a node in the network and in the content panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Project {
	pub id: &'static str,
	pub label: &'static str,
	pub img: &'static str,
	pub text: &'static str,
}

/// Label of the fixed root node.
pub const ANCHOR_LABEL: &str = "alina schmeiß";

pub const PROJECTS: &[Project] = &[
	Project {
		id: "p1",
		label: "Refin(d)ing KISD",
		img: "https://picsum.photos/seed/kisd/800/600",
		text: "Every group of people needs a moment to step back and reflect on their ways of working. This project facilitated a structured reflection process for the Köln International School of Design, enabling students and faculty to rediscover their shared values.",
	},
	Project {
		id: "p2",
		label: "Real Life Quest",
		img: "https://picsum.photos/seed/quest/800/600",
		text: "A socio-effective concept brought to life in an everyday app. Real Life Quest gamifies daily social interactions to encourage users to step out of their digital bubbles and engage with their physical community in meaningful ways.",
	},
	Project {
		id: "p3",
		label: "Chaos Postcards",
		img: "https://picsum.photos/seed/chaos/800/600",
		text: "A set of postcards to bring awareness to landscape manipulation. Using generative design techniques, these postcards visualize the subtle yet profound impact of human intervention on natural landscapes.",
	},
	Project {
		id: "p4",
		label: "New Years Stage Design",
		img: "https://picsum.photos/seed/stage/800/600",
		text: "The entire suburban culture scene of Cologne has been facing huge financial cuttings. This stage design project utilized recycled materials and projection mapping to create an immersive experience on a near-zero budget.",
	},
	Project {
		id: "p5",
		label: "Co-Heat Wuppertal",
		img: "https://picsum.photos/seed/heat/800/600",
		text: "Product-service system for sustainable shared energy. Co-Heat connects neighbors with excess thermal energy to those in need, fostering a local micro-grid of warmth and community resilience.",
	},
	Project {
		id: "p6",
		label: "Lebendiges Köln",
		img: "https://picsum.photos/seed/koln/800/600",
		text: "A wilderness city map inviting you to discover shared habitats. This interactive map highlights the often-overlooked urban flora and fauna, encouraging citizens to view their city as a shared ecosystem.",
	},
	Project {
		id: "p7",
		label: "Masculine Desire in Fashion",
		img: "https://picsum.photos/seed/fashion/800/600",
		text: "What is sexy on a masculine body? Exploring tenderness and sensuality. This textile and fashion research project challenges traditional norms of masculinity through soft fabrics, fluid silhouettes, and vulnerable imagery.",
	},
];

/// Topic labels per project id.
pub const CONNECTIONS: &[(&str, &[&str])] = &[
	("p1", &["Social Design", "Community Building", "InDesign", "Event Planning"]),
	("p2", &["UX/UI Design", "Resonance", "Figma", "Perspective Change"]),
	("p3", &["Awareness", "Communication", "Nature"]),
	("p4", &["Event Design", "Stage Design", "Spatial Design"]),
	("p5", &["Sustainability", "Communication", "Future of Living"]),
	("p6", &["UX/UI Design", "Nature Connection", "Perspective Change"]),
	("p7", &["Gender Design", "Feminism", "Textile Making"]),
];

pub const TOPICS: &[&str] = &[
	"Social Design",
	"UX/UI Design",
	"Sustainability",
	"Community Building",
	"Resonance",
	"Perspective Change",
	"Feminism",
	"Event Planning",
	"InDesign",
	"Figma",
	"Textile Making",
	"Stage Design",
	"Nature",
	"Communication",
	"Awareness",
	"Future of Living",
	"Event Design",
	"Spatial Design",
	"Gender Design",
	"Nature Connection",
];

pub const BIOGRAPHY: &[&str] = &[
	"In my head, my work, and my life, nothing exists in isolation. I believe that we are all part of a living system—an interconnected web of humans, nature, and the universe.",
	"I am an Integrated Designer, which means I don’t just design objects; I design relationships. My work lives in the 'sweet spot' where social justice, environmental stewardship, and creative expression meet.",
	"Design is often used to fuel consumption and exploitation. I choose a different path. I design to improve—socially, environmentally, and globally. While aligning one’s work with one's deepest values can feel like a radical act in today's world, it is a Utopia I refuse to give up on. This portfolio is a living map of that journey.",
];

pub const INSTRUCTIONS: &str = "Drag nodes to explore connections. Click a project to see details.";

pub const PHILOSOPHY_QUOTE: &str = "“Design is not just what it looks like and feels like. Design is how it works... and who it works for.”";

/// The tables the network and the chat assistant are built from.
#[derive(Clone, Copy, Debug)]
pub struct PortfolioContent {
	pub anchor_label: &'static str,
	pub projects: &'static [Project],
	pub topics: &'static [&'static str],
	pub connections: &'static [(&'static str, &'static [&'static str])],
}

impl PortfolioContent {
	pub const fn builtin() -> Self {
		Self {
			anchor_label: ANCHOR_LABEL,
			projects: PROJECTS,
			topics: TOPICS,
			connections: CONNECTIONS,
		}
	}

	pub fn project_by_id(&self, id: &str) -> Option<&'static Project> {
		self.projects.iter().find(|p| p.id == id)
	}

	/// Topics listed for a project, empty when it has no connection entry.
	pub fn topics_for(&self, project_id: &str) -> &'static [&'static str] {
		self.connections
			.iter()
			.find(|(id, _)| *id == project_id)
			.map(|(_, topics)| *topics)
			.unwrap_or(&[])
	}
}

impl Default for PortfolioContent {
	fn default() -> Self {
		Self::builtin()
	}
}
