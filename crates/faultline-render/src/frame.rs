#![forbid(unsafe_code)]

//! Frame = Buffer + metadata for a render pass.
//!
//! The `Frame` is the render target a `view()` pass writes to. Alongside
//! the cell grid it accumulates two pieces of metadata:
//!
//! - the **component path**: the stack of component names currently being
//!   rendered. Widgets push their name on entry and pop on clean exit.
//!   The pops are deliberate calls, not drop guards, so a panic during a
//!   child render leaves the path frozen exactly at the failure site.
//!   That frozen path is the "component stack" a fault report carries.
//! - **role annotations**: semantic regions (`Role::Alert`,
//!   `Role::Button`, ...) widgets register for the areas they drew, so
//!   tests and assistive layers can ask "is there an alert on screen"
//!   instead of scraping text.

use crate::buffer::Buffer;
use faultline_core::geometry::Rect;
use faultline_core::role::Role;
use smallvec::SmallVec;

/// A region annotated with a semantic role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRegion {
    pub area: Rect,
    pub role: Role,
}

/// The render target for one pass.
#[derive(Debug)]
pub struct Frame {
    /// The cell grid being drawn.
    pub buffer: Buffer,
    path: SmallVec<[&'static str; 8]>,
    roles: Vec<RoleRegion>,
}

impl Frame {
    /// Create a frame with an empty buffer of the given size.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0 (see [`Buffer::new`]).
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            path: SmallVec::new(),
            roles: Vec::new(),
        }
    }

    /// Frame width in columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// The full frame area.
    #[inline]
    #[must_use]
    pub fn area(&self) -> Rect {
        self.buffer.area()
    }

    // --- component path ---

    /// Enter a named component for the rest of this pass.
    ///
    /// Pair with [`pop_component`](Self::pop_component) on clean exit. Do
    /// not wrap this in a drop guard: an unwinding child must leave its
    /// entry on the path so the failure site stays observable.
    pub fn push_component(&mut self, name: &'static str) {
        self.path.push(name);
    }

    /// Leave the innermost component after a successful render.
    pub fn pop_component(&mut self) {
        self.path.pop();
    }

    /// The component names currently on the path, outermost first.
    #[must_use]
    pub fn component_path(&self) -> &[&'static str] {
        &self.path
    }

    /// Seed the path with an ambient prefix (used when a supervised
    /// scratch frame should inherit its ancestors' names).
    pub fn seed_component_path(&mut self, prefix: &[&'static str]) {
        self.path.clear();
        self.path.extend_from_slice(prefix);
    }

    /// Render the path as a component-stack string, innermost first,
    /// one `    at Name` line per component.
    #[must_use]
    pub fn component_stack_string(&self) -> String {
        let mut out = String::new();
        for name in self.path.iter().rev() {
            out.push_str("    at ");
            out.push_str(name);
            out.push('\n');
        }
        out
    }

    // --- role annotations ---

    /// Annotate a region with a semantic role.
    ///
    /// Empty regions are dropped; later annotations win on overlap.
    pub fn annotate(&mut self, area: Rect, role: Role) {
        if area.is_empty() {
            return;
        }
        self.roles.push(RoleRegion { area, role });
    }

    /// All annotated regions, in registration order.
    #[must_use]
    pub fn role_regions(&self) -> &[RoleRegion] {
        &self.roles
    }

    /// The role at a cell position, if any (latest registration wins).
    #[must_use]
    pub fn role_at(&self, x: u16, y: u16) -> Option<Role> {
        self.roles
            .iter()
            .rev()
            .find(|r| r.area.contains(x, y))
            .map(|r| r.role)
    }

    /// Whether any annotated region carries the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r.role == role)
    }

    /// Drop annotations that intersect `area`.
    ///
    /// A supervisor clears the area it is about to repaint so stale child
    /// annotations never outlive the content that carried them.
    pub fn clear_annotations_in(&mut self, area: Rect) {
        self.roles.retain(|r| !r.area.intersects(&area));
    }

    // --- supervised commit ---

    /// Commit a scratch frame's output for `area` into this frame.
    ///
    /// Copies the cell region and adopts the scratch annotations that fall
    /// inside it. The scratch buffer must have the same dimensions; the
    /// supervisor creates it that way so child coordinates line up.
    pub fn commit(&mut self, scratch: &Frame, area: Rect) {
        self.buffer.copy_area_from(&scratch.buffer, area);
        for region in &scratch.roles {
            if region.area.intersects(&area) {
                self.roles.push(*region);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::style::Style;

    #[test]
    fn push_pop_component_path() {
        let mut frame = Frame::new(4, 2);
        frame.push_component("App");
        frame.push_component("Child");
        assert_eq!(frame.component_path(), &["App", "Child"]);
        frame.pop_component();
        assert_eq!(frame.component_path(), &["App"]);
    }

    #[test]
    fn component_stack_string_is_innermost_first() {
        let mut frame = Frame::new(4, 2);
        frame.push_component("App");
        frame.push_component("BombButton");
        assert_eq!(
            frame.component_stack_string(),
            "    at BombButton\n    at App\n"
        );
    }

    #[test]
    fn seed_replaces_path() {
        let mut frame = Frame::new(4, 2);
        frame.push_component("Old");
        frame.seed_component_path(&["App", "FaultBoundary"]);
        assert_eq!(frame.component_path(), &["App", "FaultBoundary"]);
    }

    #[test]
    fn annotate_and_query_roles() {
        let mut frame = Frame::new(10, 4);
        frame.annotate(Rect::new(0, 0, 5, 1), Role::Button);
        assert!(frame.has_role(Role::Button));
        assert!(!frame.has_role(Role::Alert));
        assert_eq!(frame.role_at(2, 0), Some(Role::Button));
        assert_eq!(frame.role_at(7, 0), None);
    }

    #[test]
    fn annotate_drops_empty_regions() {
        let mut frame = Frame::new(10, 4);
        frame.annotate(Rect::new(0, 0, 0, 1), Role::Alert);
        assert!(frame.role_regions().is_empty());
    }

    #[test]
    fn latest_annotation_wins() {
        let mut frame = Frame::new(10, 4);
        frame.annotate(Rect::new(0, 0, 4, 1), Role::Button);
        frame.annotate(Rect::new(0, 0, 4, 1), Role::Alert);
        assert_eq!(frame.role_at(0, 0), Some(Role::Alert));
    }

    #[test]
    fn clear_annotations_in_area() {
        let mut frame = Frame::new(10, 4);
        frame.annotate(Rect::new(0, 0, 4, 1), Role::Button);
        frame.annotate(Rect::new(0, 2, 4, 1), Role::Status);
        frame.clear_annotations_in(Rect::new(0, 0, 10, 1));
        assert!(!frame.has_role(Role::Button));
        assert!(frame.has_role(Role::Status));
    }

    #[test]
    fn commit_copies_cells_and_roles() {
        let mut frame = Frame::new(6, 2);
        let mut scratch = Frame::new(6, 2);
        scratch.buffer.set(1, 0, Cell::from_char('x'));
        scratch.buffer.set_string(0, 1, "below", Style::new(), 6);
        scratch.annotate(Rect::new(0, 0, 6, 1), Role::Button);

        frame.commit(&scratch, Rect::new(0, 0, 6, 1));
        assert_eq!(frame.buffer.get(1, 0).unwrap().as_char(), Some('x'));
        // Row outside the committed area is untouched.
        assert_eq!(frame.buffer.row_text(1), "");
        assert!(frame.has_role(Role::Button));
    }
}
