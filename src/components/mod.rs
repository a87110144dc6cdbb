//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the markup the theme controller binds to; behavior lives
//! in the controller so plain server-rendered pages work the same way.

pub mod theme_toggle;
