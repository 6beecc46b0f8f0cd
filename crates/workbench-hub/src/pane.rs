use workbench_common::PaneKind;

use crate::hub::Hub;

/// A pane instance built by a registered component factory.
///
/// Pane implementations live outside the hub. They allocate their ids and
/// event hubs from the [`Hub`] passed to their factory, and announce
/// themselves with open/close events.
pub trait Pane {
    fn kind(&self) -> PaneKind;

    fn title(&self) -> String {
        self.kind().label().to_string()
    }

    /// Called before the pane's layout node is removed. Panes emit their
    /// close events here; their event hubs unsubscribe when dropped.
    fn destroy(&mut self, _hub: &mut Hub) {}
}
