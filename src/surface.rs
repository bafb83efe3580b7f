//! The visual surface the resolver writes to.
//!
//! The resolver does not own any of these elements. It sets one root
//! attribute, adds and removes one root class, and, when the page has a
//! toggle control, updates that control's label and icon.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::mode::ColorMode;

/// Orientation of the toggle icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRotation {
    Upright,
    Flipped,
}

impl IconRotation {
    /// Flipped while dark, upright while light.
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => IconRotation::Flipped,
            ColorMode::Light => IconRotation::Upright,
        }
    }

    /// Rotation angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            IconRotation::Upright => 0,
            IconRotation::Flipped => 180,
        }
    }
}

impl fmt::Display for IconRotation {
    /// Formats as a CSS transform value, e.g. `rotate(180deg)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotate({}deg)", self.degrees())
    }
}

/// The clickable toggle and its two optional sub-elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleControl {
    label: Option<String>,
    icon: Option<IconRotation>,
}

impl ToggleControl {
    /// A control with both a label and an icon.
    pub fn new() -> Self {
        Self {
            label: Some(String::new()),
            icon: Some(IconRotation::Upright),
        }
    }

    /// A control with neither sub-element.
    pub fn bare() -> Self {
        Self::default()
    }

    /// Removes the label sub-element.
    pub fn without_label(mut self) -> Self {
        self.label = None;
        self
    }

    /// Removes the icon sub-element.
    pub fn without_icon(mut self) -> Self {
        self.icon = None;
        self
    }

    /// Current label text, if the label exists.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Current icon rotation, if the icon exists.
    pub fn icon(&self) -> Option<IconRotation> {
        self.icon
    }

    /// Replaces the label text. Does nothing if there is no label.
    pub fn set_label(&mut self, text: &str) {
        if let Some(label) = self.label.as_mut() {
            label.clear();
            label.push_str(text);
        }
    }

    /// Rotates the icon. Does nothing if there is no icon.
    pub fn set_icon(&mut self, rotation: IconRotation) {
        if let Some(icon) = self.icon.as_mut() {
            *icon = rotation;
        }
    }
}

/// Root-level state of a rendered page.
pub trait Surface {
    /// Reads a root attribute.
    fn root_attribute(&self, name: &str) -> Option<&str>;

    /// Sets a root attribute, replacing any previous value.
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Adds a class to the root. Adding a present class is a no-op.
    fn add_root_class(&mut self, class: &str);

    /// Removes a class from the root if present.
    fn remove_root_class(&mut self, class: &str);

    /// The toggle control, if this page has one.
    fn toggle_control(&mut self) -> Option<&mut ToggleControl>;
}

/// An in-memory document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    toggle: Option<ToggleControl>,
}

impl Document {
    /// A page without a toggle control.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with the given toggle control.
    pub fn with_toggle(toggle: ToggleControl) -> Self {
        Self {
            toggle: Some(toggle),
            ..Self::default()
        }
    }

    /// Returns `true` if the root carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// The toggle control, if this page has one.
    pub fn toggle(&self) -> Option<&ToggleControl> {
        self.toggle.as_ref()
    }
}

impl Surface for Document {
    fn root_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn add_root_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_root_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn toggle_control(&mut self) -> Option<&mut ToggleControl> {
        self.toggle.as_mut()
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn root_attribute(&self, name: &str) -> Option<&str> {
        (**self).root_attribute(name)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        (**self).set_root_attribute(name, value)
    }

    fn add_root_class(&mut self, class: &str) {
        (**self).add_root_class(class)
    }

    fn remove_root_class(&mut self, class: &str) {
        (**self).remove_root_class(class)
    }

    fn toggle_control(&mut self) -> Option<&mut ToggleControl> {
        (**self).toggle_control()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_rotation_css() {
        assert_eq!(IconRotation::for_mode(ColorMode::Dark).to_string(), "rotate(180deg)");
        assert_eq!(IconRotation::for_mode(ColorMode::Light).to_string(), "rotate(0deg)");
    }

    #[test]
    fn test_control_setters() {
        let mut control = ToggleControl::new();
        control.set_label("다크모드");
        control.set_icon(IconRotation::Flipped);
        assert_eq!(control.label(), Some("다크모드"));
        assert_eq!(control.icon(), Some(IconRotation::Flipped));
    }

    #[test]
    fn test_missing_sub_elements_are_ignored() {
        let mut control = ToggleControl::new().without_label().without_icon();
        control.set_label("ignored");
        control.set_icon(IconRotation::Flipped);
        assert_eq!(control, ToggleControl::bare());
    }

    #[test]
    fn test_document_root_state() {
        let mut doc = Document::new();
        doc.set_root_attribute("data-theme", "dark");
        doc.add_root_class("theme-transition");
        assert_eq!(doc.root_attribute("data-theme"), Some("dark"));
        assert!(doc.has_class("theme-transition"));

        doc.remove_root_class("theme-transition");
        assert!(!doc.has_class("theme-transition"));
        assert!(doc.toggle_control().is_none());
    }
}
