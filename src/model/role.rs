//! Semantic roles and the monotonic role assignment state.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The semantic role of a paragraph.
///
/// The "not yet classified" state is not a member of this enumeration; it
/// is the [`RoleState::Unknown`] variant, so "still unclassified" is a
/// distinct, matchable case rather than a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Document title.
    Title,
    /// Keywords line ("Keywords: ...").
    Keywords,
    /// A section heading.
    SectionHeading,
    /// The heading of the abstract.
    AbstractHeading,
    /// A paragraph of the abstract.
    Abstract,
    /// The heading of the references section.
    ReferencesHeading,
    /// A bibliographic reference entry.
    Reference,
    /// The heading of an appendix.
    AppendixHeading,
    /// A paragraph of an appendix.
    Appendix,
    /// The heading of a table of contents.
    TableOfContentsHeading,
    /// An entry of a table of contents.
    TableOfContents,
    /// A table caption.
    TableCaption,
    /// A paragraph belonging to a table.
    Table,
    /// A figure caption.
    FigureCaption,
    /// A paragraph belonging to a figure.
    Figure,
    /// A displayed (separated) formula.
    Formula,
    /// An item of an itemized/numbered list.
    ItemizeItem,
    /// A running page header.
    PageHeader,
    /// A running page footer.
    PageFooter,
    /// Front-matter before the abstract (authors, affiliations, ...).
    HeaderOther,
    /// Ordinary body text.
    BodyText,
}

/// Every role, in declaration order.
const ALL_ROLES: &[Role] = &[
    Role::Title,
    Role::Keywords,
    Role::SectionHeading,
    Role::AbstractHeading,
    Role::Abstract,
    Role::ReferencesHeading,
    Role::Reference,
    Role::AppendixHeading,
    Role::Appendix,
    Role::TableOfContentsHeading,
    Role::TableOfContents,
    Role::TableCaption,
    Role::Table,
    Role::FigureCaption,
    Role::Figure,
    Role::Formula,
    Role::ItemizeItem,
    Role::PageHeader,
    Role::PageFooter,
    Role::HeaderOther,
    Role::BodyText,
];

impl Role {
    /// Stable lowercase name of the role, e.g. `"section_heading"`.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Title => "title",
            Role::Keywords => "keywords",
            Role::SectionHeading => "section_heading",
            Role::AbstractHeading => "abstract_heading",
            Role::Abstract => "abstract",
            Role::ReferencesHeading => "references_heading",
            Role::Reference => "reference",
            Role::AppendixHeading => "appendix_heading",
            Role::Appendix => "appendix",
            Role::TableOfContentsHeading => "table_of_contents_heading",
            Role::TableOfContents => "table_of_contents",
            Role::TableCaption => "table_caption",
            Role::Table => "table",
            Role::FigureCaption => "figure_caption",
            Role::Figure => "figure",
            Role::Formula => "formula",
            Role::ItemizeItem => "itemize_item",
            Role::PageHeader => "page_header",
            Role::PageFooter => "page_footer",
            Role::HeaderOther => "header_other",
            Role::BodyText => "body_text",
        }
    }

    /// Resolve a role by its stable name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRole`] identifying the offending name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_roles::model::Role;
    ///
    /// assert_eq!(Role::from_name("table_caption").unwrap(), Role::TableCaption);
    /// assert!(Role::from_name("chapter").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Role> {
        ALL_ROLES
            .iter()
            .copied()
            .find(|role| role.name() == name)
            .ok_or_else(|| Error::UnknownRole(name.to_string()))
    }

    /// Whether this role is one of the heading roles.
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            Role::SectionHeading
                | Role::AbstractHeading
                | Role::ReferencesHeading
                | Role::AppendixHeading
                | Role::TableOfContentsHeading
        )
    }

    /// Whether this role marks a running page margin element.
    pub fn is_page_margin(&self) -> bool {
        matches!(self, Role::PageHeader | Role::PageFooter)
    }
}

/// Role assignment state of a paragraph.
///
/// The transition Unknown → Assigned is the only one [`assign`]
/// performs, which makes the monotonic-write invariant of the
/// classification pipeline hold by construction. The single sanctioned
/// way back is [`reset`], used when a later references-heading match
/// supersedes an earlier one.
///
/// [`assign`]: RoleState::assign
/// [`reset`]: RoleState::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleState {
    /// No stage has classified the paragraph yet. A valid terminal state.
    #[default]
    Unknown,
    /// A stage has classified the paragraph.
    Assigned(Role),
}

impl RoleState {
    /// Whether no role has been assigned.
    pub fn is_unknown(&self) -> bool {
        matches!(self, RoleState::Unknown)
    }

    /// The assigned role, if any.
    pub fn role(&self) -> Option<Role> {
        match self {
            RoleState::Unknown => None,
            RoleState::Assigned(role) => Some(*role),
        }
    }

    /// Assign `role` if still unknown. Returns whether the write happened.
    pub fn assign(&mut self, role: Role) -> bool {
        if self.is_unknown() {
            *self = RoleState::Assigned(role);
            true
        } else {
            false
        }
    }

    /// Force the state back to unknown.
    pub fn reset(&mut self) {
        *self = RoleState::Unknown;
    }
}
