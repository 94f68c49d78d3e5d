use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::ui::dom;

/// Content of a result region together with the reveal it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct Revealed<T> {
    pub revision: u32,
    pub content: T,
}

/// Handle to a result region: hidden until the first reveal, then showing
/// the latest content.
///
/// Every reveal scrolls the region into view once it has rendered, even when
/// the content is identical to what was already shown.
pub struct ResultRegion<T: 'static> {
    state: UseStateHandle<Option<Revealed<T>>>,
    revisions: Rc<RefCell<u32>>,
    node: NodeRef,
}

impl<T> Clone for ResultRegion<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            revisions: self.revisions.clone(),
            node: self.node.clone(),
        }
    }
}

impl<T> ResultRegion<T> {
    pub fn reveal(&self, content: T) {
        let mut revisions = self.revisions.borrow_mut();
        *revisions = revisions.wrapping_add(1);
        self.state.set(Some(Revealed {
            revision: *revisions,
            content,
        }));
    }

    pub fn hide(&self) {
        self.state.set(None);
    }

    pub fn content(&self) -> Option<&T> {
        (*self.state).as_ref().map(|revealed| &revealed.content)
    }

    /// Number of the latest reveal, `None` while hidden
    pub fn revision(&self) -> Option<u32> {
        (*self.state).as_ref().map(|revealed| revealed.revision)
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_some()
    }

    pub fn node(&self) -> NodeRef {
        self.node.clone()
    }

    /// Inline style hiding the region until it is revealed
    pub fn style(&self) -> &'static str {
        if self.is_visible() {
            "display: block;"
        } else {
            "display: none;"
        }
    }
}

#[hook]
pub fn use_result_region<T: 'static>() -> ResultRegion<T> {
    let state = use_state(|| None::<Revealed<T>>);
    let revisions = use_mut_ref(|| 0u32);
    let node = use_node_ref();

    {
        let node = node.clone();
        let revision = (*state).as_ref().map(|revealed| revealed.revision);
        use_effect_with(revision, move |revision| {
            if revision.is_some() {
                dom::scroll_into_view(&node);
            }
            || ()
        });
    }

    ResultRegion {
        state,
        revisions,
        node,
    }
}
