//! The single selection owner shared by the chip diagram and the fridge scene.

use crate::catalog::{ComponentCatalog, Material, StructuralComponent, ViewId};
use crate::resolve::{MaterialMatch, MaterialResolver};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Selection {
    #[default]
    Idle,
    Component {
        id: &'static str,
    },
    /// `component` is `None` only when the material was focused from outside the structure
    /// views (e.g. a chart click) with nothing selected.
    Material {
        component: Option<&'static str>,
        material: &'static Material,
    },
}

impl Selection {
    pub fn component_id(&self) -> Option<&'static str> {
        match *self {
            Self::Idle => None,
            Self::Component { id } => Some(id),
            Self::Material { component, .. } => component,
        }
    }

    pub fn material(&self) -> Option<&'static Material> {
        match *self {
            Self::Material { material, .. } => Some(material),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    fn component_or_idle(component: Option<&'static str>) -> Self {
        match component {
            Some(id) => Self::Component { id },
            None => Self::Idle,
        }
    }
}

/// Selection plus the view it belongs to.
///
/// Transitions never fail: unknown component ids and unresolvable material names leave a
/// well-defined state behind instead of erroring.
#[derive(Debug, Clone)]
pub struct SelectionState {
    view: ViewId,
    selection: Selection,
    resolver: MaterialResolver,
}

impl SelectionState {
    pub fn new(view: ViewId) -> Self {
        Self::with_resolver(view, MaterialResolver::default())
    }

    pub fn with_resolver(view: ViewId, resolver: MaterialResolver) -> Self {
        Self {
            view,
            selection: Selection::Idle,
            resolver,
        }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn components(&self) -> ComponentCatalog {
        ComponentCatalog::for_view(self.view)
    }

    pub fn resolver(&self) -> &MaterialResolver {
        &self.resolver
    }

    pub fn selected_component(&self) -> Option<&'static StructuralComponent> {
        self.selection
            .component_id()
            .and_then(|id| self.components().get(id))
    }

    pub fn selected_material(&self) -> Option<&'static Material> {
        self.selection.material()
    }

    /// Toggles `id`: selecting the current component again deselects it. Any material
    /// drill-down is cleared. Ids outside the active view's catalog are ignored.
    pub fn select_component(&mut self, id: &str) -> Selection {
        let Some(component) = self.components().get(id) else {
            tracing::debug!(view = %self.view, id, "ignoring unknown component id");
            return self.selection;
        };
        self.selection = if self.selection.component_id() == Some(component.id) {
            Selection::Idle
        } else {
            Selection::Component { id: component.id }
        };
        self.selection
    }

    /// Opens the material view for a display name from the selected component's material
    /// list. Unresolvable names fall back to the component view. Ignored while idle.
    pub fn select_material(&mut self, name: &str) -> Option<MaterialMatch> {
        if self.selection.is_idle() {
            tracing::debug!(view = %self.view, name, "ignoring material selection while idle");
            return None;
        }
        let component = self.selection.component_id();
        let hit = self.resolver.resolve(self.view, name);
        self.selection = match hit {
            Some(m) => Selection::Material {
                component,
                material: m.material,
            },
            None => Selection::component_or_idle(component),
        };
        hit
    }

    /// External navigation to a material by exact catalog name. The component, if any, is
    /// preserved so `back` returns to it. Unknown names leave the state unchanged.
    pub fn focus_material(&mut self, name: &str) -> Option<&'static Material> {
        let material = self.resolver.resolve_exact(name)?;
        self.selection = Selection::Material {
            component: self.selection.component_id(),
            material,
        };
        Some(material)
    }

    /// Leaves the material view. Outside the material view this is a no-op.
    pub fn back(&mut self) -> Selection {
        if let Selection::Material { component, .. } = self.selection {
            self.selection = Selection::component_or_idle(component);
        }
        self.selection
    }

    pub fn close(&mut self) -> Selection {
        self.selection = Selection::Idle;
        self.selection
    }

    /// Switches the active view level; selection always resets.
    pub fn switch_view(&mut self, view: ViewId) {
        self.view = view;
        self.selection = Selection::Idle;
    }
}
