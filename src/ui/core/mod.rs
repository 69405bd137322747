//! Backend-independent UI primitives: geometry, styles, paint commands and
//! pointer hit-testing.

pub mod geom;
pub mod id;
pub mod input;
pub mod layout;
pub mod painter;
pub mod runtime;
pub mod theme;

#[path = "primitives/style.rs"]
pub mod style;

#[path = "scene/tree.rs"]
pub mod tree;
#[path = "scene/widget.rs"]
pub mod widget;
