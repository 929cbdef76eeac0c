/// Visibility state for the "new messages" affordance.
///
/// Shown when an append declined to move the viewport; cleared once the user
/// reaches the bottom again, by hand or via the jump action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorController {
    visible: bool,
}

impl IndicatorController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        if !self.visible {
            tracing::trace!("new-messages indicator shown");
        }
        self.visible = true;
    }

    pub fn hide(&mut self) {
        if self.visible {
            tracing::trace!("new-messages indicator hidden");
        }
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
