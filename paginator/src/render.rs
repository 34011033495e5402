use alloc::string::String;
use core::fmt;

use crate::{PageEntry, PageKind, Paginator};

/// A strategy that turns a [`PageEntry`] into something the host UI can display.
///
/// Implement this for custom page buttons; [`DefaultPageRenderer`] is the built-in variant and
/// [`RenderFn`] adapts a closure.
pub trait PageRenderer {
    type Output;

    fn render_entry(&self, entry: &PageEntry, handle: &mut PageHandle<'_>) -> Self::Output;
}

impl<R: PageRenderer + ?Sized> PageRenderer for &R {
    type Output = R::Output;

    fn render_entry(&self, entry: &PageEntry, handle: &mut PageHandle<'_>) -> Self::Output {
        (**self).render_entry(entry, handle)
    }
}

/// Gives a renderer access to the navigation handler of the entry being rendered.
pub struct PageHandle<'a> {
    paginator: &'a mut Paginator,
    entry: &'a PageEntry,
}

impl<'a> PageHandle<'a> {
    pub(crate) fn new(paginator: &'a mut Paginator, entry: &'a PageEntry) -> Self {
        Self { paginator, entry }
    }

    pub fn entry(&self) -> &PageEntry {
        self.entry
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    /// Activates the entry. A no-op (returning `None`) when the entry is disabled or leads to
    /// the current page.
    pub fn activate(&mut self) -> Option<usize> {
        self.paginator.activate(self.entry)
    }
}

impl fmt::Debug for PageHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageHandle")
            .field("entry", &self.entry)
            .field("current_page", &self.paginator.current_page())
            .finish()
    }
}

/// The built-in page button description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageButton {
    pub kind: PageKind,
    pub label: String,
    pub title: Option<String>,
    /// `page-item`, plus `active`/`disabled` and any extra class configured on the renderer.
    pub class_name: String,
    pub active: bool,
    pub disabled: bool,
}

impl PageButton {
    /// Handles a click on this button. Disabled buttons never navigate.
    pub fn click(&self, paginator: &mut Paginator) -> Option<usize> {
        if self.disabled {
            return None;
        }
        paginator.navigate(self.kind)
    }
}

impl fmt::Display for PageButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.active {
            write!(f, "[{}]", self.label)
        } else if self.disabled {
            write!(f, "({})", self.label)
        } else {
            f.write_str(&self.label)
        }
    }
}

/// Renders entries as [`PageButton`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultPageRenderer {
    pub class_name: Option<String>,
}

impl DefaultPageRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl PageRenderer for DefaultPageRenderer {
    type Output = PageButton;

    fn render_entry(&self, entry: &PageEntry, _handle: &mut PageHandle<'_>) -> PageButton {
        let mut class_name = String::from("page-item");
        if entry.active {
            class_name.push_str(" active");
        }
        if entry.disabled {
            class_name.push_str(" disabled");
        }
        if let Some(extra) = self.class_name.as_deref().filter(|c| !c.is_empty()) {
            class_name.push(' ');
            class_name.push_str(extra);
        }
        PageButton {
            kind: entry.kind,
            label: entry.label.clone(),
            title: entry.title.clone(),
            class_name,
            active: entry.active,
            disabled: entry.disabled,
        }
    }
}

/// Adapts a closure into a [`PageRenderer`].
#[derive(Clone, Copy)]
pub struct RenderFn<F>(pub F);

impl<F> RenderFn<F> {
    /// Wraps `f`, pinning its signature so closure arguments need no type annotations.
    pub fn new<O>(f: F) -> Self
    where
        F: Fn(&PageEntry, &mut PageHandle<'_>) -> O,
    {
        Self(f)
    }
}

impl<F, O> PageRenderer for RenderFn<F>
where
    F: Fn(&PageEntry, &mut PageHandle<'_>) -> O,
{
    type Output = O;

    fn render_entry(&self, entry: &PageEntry, handle: &mut PageHandle<'_>) -> O {
        (self.0)(entry, handle)
    }
}

impl<F> fmt::Debug for RenderFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RenderFn(..)")
    }
}
