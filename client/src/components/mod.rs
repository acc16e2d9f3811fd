//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaf components render from props and report events through callbacks;
//! only `Nav` reads the shared session from context.

pub mod alert;
pub mod footer;
pub mod form;
pub mod nav;
pub mod opportunity_list;
pub mod search_bar;
