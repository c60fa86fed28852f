//! The typed document model consumed and annotated by the analysis.

pub mod font;
pub mod role;
pub mod text;

pub use font::{Color, Font, FontFace};
pub use role::{Role, RoleState};
pub use text::{
    Character, Document, GraphicElement, GraphicKind, LineAlignment, Page, PageRect, Paragraph,
    TextLine, Word,
};
