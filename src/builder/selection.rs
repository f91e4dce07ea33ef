use super::canvas::InstanceId;

/// At most one selected instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(InstanceId),
}

impl Selection {
    pub fn selected(&self) -> Option<InstanceId> {
        match *self {
            Selection::None => None,
            Selection::Selected(id) => Some(id),
        }
    }

    pub fn is_selected(&self, id: InstanceId) -> bool {
        self.selected() == Some(id)
    }

    /// Returns the previously selected id, if it differs from `id`.
    pub fn select(&mut self, id: InstanceId) -> Option<InstanceId> {
        let previous = self.selected().filter(|&prev| prev != id);
        *self = Selection::Selected(id);
        previous
    }

    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    /// Drops the selection if `id` was selected. Returns whether it was.
    pub fn forget(&mut self, id: InstanceId) -> bool {
        if self.is_selected(id) {
            self.clear();
            true
        } else {
            false
        }
    }
}
