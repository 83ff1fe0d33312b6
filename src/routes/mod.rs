/// Router Module Index
///
/// Routes are grouped by who may reach them. Admin and visitor pages guard
/// themselves through the `AdminSession` / `VisitorSession` extractors, so a
/// handler added to the wrong group still cannot skip its role check.

/// Pages and actions open to anyone, signed in or not.
pub mod public;

/// Pages restricted to the 'admin' role.
pub mod admin;

/// Pages restricted to the 'visitor' role.
pub mod visitor;
