//! The editor context: the diagram, the active gesture, and the tunables that
//! drive both. The host owns exactly one [`Editor`] and hands it pointer events
//! and frames; there is no process-wide state.

use crate::diagram::{Diagram, DiagramError};
use crate::interaction::DragState;
use crate::model::{Anchor, Node, NodeKey};
use crate::render;
use crate::settings::Settings;
use crate::surface::Surface;

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

pub struct Editor {
    pub(crate) diagram: Diagram,
    pub(crate) drag: DragState,
    pub(crate) settings: Settings,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Editor {
    pub fn new(settings: Settings) -> Self {
        Self {
            diagram: Diagram::with_tolerance(settings.coincidence_tolerance),
            drag: DragState::Idle,
            settings,
        }
    }

    // --- Scene setup ---

    pub fn add_node(&mut self, node: Node) -> NodeKey {
        self.diagram.add_node(node)
    }

    pub fn connect(
        &mut self,
        source: NodeKey,
        source_anchor: Anchor,
        dest: NodeKey,
        dest_anchor: Anchor,
    ) -> Result<NodeKey, DiagramError> {
        self.diagram.connect(source, source_anchor, dest, dest_anchor)
    }

    // --- Queries ---

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // --- Render ---

    /// Draws the whole scene. Called once per frame by the host scheduler.
    pub fn render_frame(&self, surface: &mut dyn Surface) {
        render::render_frame(surface, self);
    }
}
