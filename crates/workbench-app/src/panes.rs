//! Placeholder panes for every kind, wired to the hub's lifecycle events.
//!
//! They carry no editing or compiling logic; each one allocates its id,
//! announces itself and tracks the peers it hears about.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, info};

use workbench_common::{CompilerId, EditorId, Event, EventKind, HubError, LanguageId, PaneKind};
use workbench_hub::{ComponentRegistry, Container, EventHub, Hub, Pane};

type Built = Result<Box<dyn Pane>, HubError>;

/// Registry with a factory for every [`PaneKind`].
pub fn registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new()
        .with(PaneKind::Editor, build_editor)
        .with(PaneKind::Compiler, build_compiler);
    for kind in PaneKind::ALL {
        if !registry.is_registered(kind) {
            registry.register(kind, build_viewer);
        }
    }
    registry
}

fn persisted_id(state: &Value) -> Option<u32> {
    state
        .get("id")
        .and_then(Value::as_u64)
        .and_then(|id| u32::try_from(id).ok())
        .filter(|&id| id > 0)
}

// -- Editor --

pub struct EditorPane {
    id: EditorId,
    language: LanguageId,
    compilers: Rc<RefCell<BTreeSet<CompilerId>>>,
    events: EventHub,
}

impl Pane for EditorPane {
    fn kind(&self) -> PaneKind {
        PaneKind::Editor
    }

    fn title(&self) -> String {
        format!("{} ({})", self.id, self.language)
    }

    fn destroy(&mut self, _hub: &mut Hub) {
        debug!(editor = %self.id, compilers = self.compilers.borrow().len(), "editor closing");
        self.events.emit(Event::EditorClose(self.id));
        self.events.unsubscribe();
    }
}

fn build_editor(hub: &mut Hub, container: Container, state: &Value) -> Built {
    let id = match persisted_id(state) {
        Some(id) => {
            let id = EditorId(id);
            hub.adopt_editor_id(id);
            id
        }
        None => hub.next_editor_id()?,
    };
    let language = state
        .get("lang")
        .and_then(Value::as_str)
        .map(LanguageId::new)
        .unwrap_or_else(|| hub.language_for_new_pane());

    let compilers = Rc::new(RefCell::new(BTreeSet::new()));
    let mut events = hub.create_event_hub();
    {
        let compilers = Rc::clone(&compilers);
        events.on(EventKind::CompilerOpen, move |event| {
            if let Event::CompilerOpen(c) = event {
                compilers.borrow_mut().insert(*c);
            }
        });
    }
    {
        let compilers = Rc::clone(&compilers);
        events.on(EventKind::CompilerClose, move |event| {
            if let Event::CompilerClose(c) = event {
                compilers.borrow_mut().remove(c);
            }
        });
    }

    events.emit(Event::EditorOpen(id));
    events.emit(Event::LanguageChange {
        editor: id,
        language: language.clone(),
    });
    info!(editor = %id, %language, node = %container.node, "editor created");

    Ok(Box::new(EditorPane {
        id,
        language,
        compilers,
        events,
    }))
}

// -- Compiler --

pub struct CompilerPane {
    id: CompilerId,
    editors: Rc<RefCell<BTreeSet<EditorId>>>,
    events: EventHub,
}

impl Pane for CompilerPane {
    fn kind(&self) -> PaneKind {
        PaneKind::Compiler
    }

    fn title(&self) -> String {
        self.id.to_string()
    }

    fn destroy(&mut self, _hub: &mut Hub) {
        debug!(compiler = %self.id, editors = self.editors.borrow().len(), "compiler closing");
        self.events.emit(Event::CompilerClose(self.id));
        self.events.unsubscribe();
    }
}

fn build_compiler(hub: &mut Hub, container: Container, state: &Value) -> Built {
    let id = match persisted_id(state) {
        Some(id) => {
            let id = CompilerId(id);
            hub.adopt_compiler_id(id);
            id
        }
        None => hub.next_compiler_id()?,
    };

    let editors = Rc::new(RefCell::new(BTreeSet::new()));
    let mut events = hub.create_event_hub();
    {
        let editors = Rc::clone(&editors);
        events.on(EventKind::EditorOpen, move |event| {
            if let Event::EditorOpen(e) = event {
                editors.borrow_mut().insert(*e);
            }
        });
    }
    {
        let editors = Rc::clone(&editors);
        events.on(EventKind::EditorClose, move |event| {
            if let Event::EditorClose(e) = event {
                editors.borrow_mut().remove(e);
            }
        });
    }
    events.on(EventKind::LanguageChange, move |event| {
        if let Event::LanguageChange { editor, language } = event {
            debug!(compiler = %id, %editor, %language, "source language changed");
        }
    });

    events.emit(Event::CompilerOpen(id));
    info!(compiler = %id, node = %container.node, "compiler created");

    Ok(Box::new(CompilerPane {
        id,
        editors,
        events,
    }))
}

// -- Viewers --

/// Any pane that only reads compiler output: output, diff, ast and friends.
pub struct ViewerPane {
    kind: PaneKind,
    _events: EventHub,
}

impl Pane for ViewerPane {
    fn kind(&self) -> PaneKind {
        self.kind
    }
}

fn build_viewer(hub: &mut Hub, container: Container, _state: &Value) -> Built {
    let kind = container.kind;
    let mut events = hub.create_event_hub();
    if kind.is_compiler_view() {
        events.on(EventKind::CompilerClose, move |event| {
            if let Event::CompilerClose(c) = event {
                debug!(?kind, compiler = %c, "source compiler closed");
            }
        });
    }
    debug!(?kind, node = %container.node, "viewer created");
    Ok(Box::new(ViewerPane {
        kind,
        _events: events,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use workbench_hub::HubSettings;
    use workbench_layout::{ItemConfig, LayoutTree};

    fn start(items: &[ItemConfig]) -> Hub {
        Hub::start(
            LayoutTree::from_config(items),
            registry(),
            HubSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn registry_covers_every_kind() {
        assert_eq!(registry().kinds(), PaneKind::ALL.to_vec());
    }

    #[test]
    fn persisted_ids_are_adopted() {
        let hub = start(&[ItemConfig::row(vec![
            ItemConfig::component(PaneKind::Editor, json!({ "id": 4 })),
            ItemConfig::component(PaneKind::Editor, json!({})),
        ])]);
        assert_eq!(hub.editor_ids(), vec![EditorId(1), EditorId(4)]);
    }

    #[test]
    fn zero_or_negative_ids_are_not_persisted_ids() {
        assert_eq!(persisted_id(&json!({ "id": 0 })), None);
        assert_eq!(persisted_id(&json!({ "id": -3 })), None);
        assert_eq!(persisted_id(&json!({ "id": "7" })), None);
        assert_eq!(persisted_id(&json!({ "id": 7 })), Some(7));
    }

    #[test]
    fn editor_language_falls_back_to_hub_default() {
        let hub = start(&[ItemConfig::component(PaneKind::Editor, json!({}))]);
        assert_eq!(hub.last_opened_language(), Some(LanguageId::new("c++")));
    }

    #[test]
    fn editor_language_from_state() {
        let hub = start(&[ItemConfig::component(
            PaneKind::Editor,
            json!({ "lang": "rust" }),
        )]);
        assert_eq!(hub.last_opened_language(), Some(LanguageId::new("rust")));
        assert_eq!(hub.language_for_new_pane(), LanguageId::new("rust"));
    }

    #[test]
    fn closing_compiler_frees_its_id() {
        let mut hub = start(&[ItemConfig::row(vec![
            ItemConfig::component(PaneKind::Editor, json!({})),
            ItemConfig::component(PaneKind::Compiler, json!({})),
        ])]);
        assert_eq!(hub.compiler_ids(), vec![CompilerId(1)]);

        let compiler = hub
            .pane_nodes()
            .into_iter()
            .find(|&n| hub.pane(n).map(|p| p.kind()) == Some(PaneKind::Compiler))
            .unwrap();
        assert_eq!(hub.close_pane(compiler).unwrap(), 1);
        assert!(hub.compiler_ids().is_empty());
        assert_eq!(hub.next_compiler_id().unwrap(), CompilerId(1));
    }

    #[test]
    fn viewer_titles_use_kind_labels() {
        let hub = start(&[ItemConfig::component(PaneKind::Opt, json!({}))]);
        let node = hub.pane_nodes()[0];
        assert_eq!(hub.pane(node).unwrap().title(), "Opt Viewer");
    }
}
