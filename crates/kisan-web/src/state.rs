//! Shared UI state

use kisan_core::EnrollDialogForm;
use leptos::prelude::*;

/// Quick-enroll dialog data waiting to prefill the enroll page
#[derive(Clone, Copy)]
pub struct EnrollDraft(RwSignal<Option<EnrollDialogForm>>);

impl EnrollDraft {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn store(&self, draft: EnrollDialogForm) {
        self.0.set(Some(draft));
    }

    /// Whether a draft is waiting; tracked, so effects rerun on `store`
    pub fn is_pending(&self) -> bool {
        self.0.with(Option::is_some)
    }

    /// Hand the draft over once; later visits start blank
    pub fn take(&self) -> Option<EnrollDialogForm> {
        let draft = self.0.get_untracked();
        if draft.is_some() {
            self.0.set(None);
        }
        draft
    }
}

impl Default for EnrollDraft {
    fn default() -> Self {
        Self::new()
    }
}
