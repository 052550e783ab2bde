//! Collapsible tree rendering.
//!
//! A [TreeView] owns the [ExpansionState] of one tree surface and renders
//! the visible part of a catalog, recursing over
//! [`children_of`](TaxonCatalog::children_of) from the roots:
//!
//! ```text
//! [ ] Бактерии (Bacteria) [Домен]
//! [ ] Археи (Archaea) [Домен]
//! [-] Эукариоты (Eukarya) [Домен]
//!   ├─ [+] Животные (Animalia) [Царство]
//!   ├─ [ ] Растения (Plantae) [Царство]
//!   └─ [ ] Грибы (Fungi) [Царство]
//! ```
//!
//! `[-]` marks an expanded taxon, `[+]` a collapsed one, and `[ ]` a taxon
//! without toggle (a leaf, or a taxon the [ExpandPolicy] does not allow to
//! expand). Children are only shown below expanded taxa.

use crate::model::{Taxon, TaxonCatalog, TaxonomicLevel};
use crate::state::{ExpandPolicy, ExpansionState};

/// Finest level expanded when the full tree page opens.
pub const FULL_TREE_INITIAL_LEVEL: TaxonomicLevel = TaxonomicLevel::Class;

/// Finest level the compact tree allows to expand.
pub const COMPACT_TREE_MAX_LEVEL: TaxonomicLevel = TaxonomicLevel::Order;

// =#========================================================================#=
// TREE LINE
// =#========================================================================#=
/// Toggle shown in front of a taxon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeToggle {
    /// No toggle offered
    None,
    /// Toggle offered, subtree hidden
    Collapsed,
    /// Toggle offered, subtree shown
    Expanded,
}

impl NodeToggle {
    fn marker(self) -> &'static str {
        match self {
            NodeToggle::None => "[ ]",
            NodeToggle::Collapsed => "[+]",
            NodeToggle::Expanded => "[-]",
        }
    }
}

/// One visible line of a rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLine<'c> {
    /// Taxon shown on this line
    pub taxon: &'c Taxon,
    /// Nesting depth, `0` for roots
    pub depth: usize,
    /// Toggle state in front of the taxon
    pub toggle: NodeToggle,
    /// Indentation and connector drawn before the toggle
    pub guide: String,
}

// =#========================================================================#=
// TREE VIEW
// =#========================================================================#=
/// One tree surface: its expansion flags and the policy deciding which taxa
/// may be expanded.
///
/// Two surfaces exist, each with its own state:
/// [`full_page`](TreeView::full_page) and [`compact`](TreeView::compact).
#[derive(Debug, Clone, Default)]
pub struct TreeView {
    expansion: ExpansionState,
    policy: ExpandPolicy,
}

impl TreeView {
    /// Creates a tree view from given state and policy.
    pub fn new(expansion: ExpansionState, policy: ExpandPolicy) -> Self {
        TreeView { expansion, policy }
    }

    /// Full tree page: every taxon with children is expandable, and all taxa
    /// down to [FULL_TREE_INITIAL_LEVEL] start expanded.
    pub fn full_page(catalog: &TaxonCatalog) -> Self {
        TreeView::new(
            ExpansionState::expanded_through(catalog, FULL_TREE_INITIAL_LEVEL),
            ExpandPolicy::unrestricted(),
        )
    }

    /// Compact side tree: everything collapsed, taxa finer than
    /// [COMPACT_TREE_MAX_LEVEL] cannot be expanded.
    pub fn compact() -> Self {
        TreeView::new(
            ExpansionState::new(),
            ExpandPolicy::up_to(COMPACT_TREE_MAX_LEVEL),
        )
    }

    /// Returns the expansion flags of this view.
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Returns the expansion flags of this view, mutably.
    pub fn expansion_mut(&mut self) -> &mut ExpansionState {
        &mut self.expansion
    }

    /// Returns the policy of this view.
    pub fn policy(&self) -> ExpandPolicy {
        self.policy
    }

    /// Toggles the taxon `id` if it offers a toggle in this view.
    ///
    /// # Returns
    /// The new expansion flag, or `None` if `id` is unknown or not
    /// expandable (then nothing changes).
    pub fn toggle(&mut self, catalog: &TaxonCatalog, id: &str) -> Option<bool> {
        let taxon = catalog.by_id(id)?;
        if self.policy.is_expandable(catalog, taxon) {
            Some(self.expansion.toggle(id))
        } else {
            None
        }
    }

    /// Sets the expansion flag of `id` if it offers a toggle in this view.
    ///
    /// # Returns
    /// `false` if `id` is unknown or not expandable (then nothing changes).
    pub fn set_expanded(&mut self, catalog: &TaxonCatalog, id: &str, expanded: bool) -> bool {
        match catalog.by_id(id) {
            Some(taxon) if self.policy.is_expandable(catalog, taxon) => {
                if expanded {
                    self.expansion.expand(id);
                } else {
                    self.expansion.collapse(id);
                }
                true
            }
            _ => false,
        }
    }

    /// Returns the toggle shown in front of `taxon`.
    pub fn toggle_of(&self, catalog: &TaxonCatalog, taxon: &Taxon) -> NodeToggle {
        if !self.policy.is_expandable(catalog, taxon) {
            NodeToggle::None
        } else if self.expansion.is_expanded(&taxon.id) {
            NodeToggle::Expanded
        } else {
            NodeToggle::Collapsed
        }
    }

    /// Returns the visible lines of the tree, in pre-order.
    pub fn visible_lines<'c>(&self, catalog: &'c TaxonCatalog) -> Vec<TreeLine<'c>> {
        let mut lines = Vec::new();
        for taxon in catalog.children_of(None) {
            self.collect_lines(catalog, taxon, 0, "", true, &mut lines);
        }
        lines
    }

    /// Renders the visible tree, one taxon per line.
    pub fn render(&self, catalog: &TaxonCatalog) -> String {
        let mut out = String::new();
        for line in self.visible_lines(catalog) {
            let taxon = line.taxon;
            out.push_str(&format!(
                "{}{} {} ({}) [{}]\n",
                line.guide,
                line.toggle.marker(),
                taxon.name,
                taxon.latin_name,
                taxon.level
            ));
        }
        out
    }

    /// Recursive helper adding `taxon` and its visible descendants.
    fn collect_lines<'c>(
        &self,
        catalog: &'c TaxonCatalog,
        taxon: &'c Taxon,
        depth: usize,
        prefix: &str,
        is_last: bool,
        lines: &mut Vec<TreeLine<'c>>,
    ) {
        let connector = if depth == 0 {
            ""
        } else if is_last {
            "└─ "
        } else {
            "├─ "
        };
        let toggle = self.toggle_of(catalog, taxon);
        lines.push(TreeLine {
            taxon,
            depth,
            toggle,
            guide: format!("{prefix}{connector}"),
        });

        if toggle != NodeToggle::Expanded {
            return;
        }

        let child_prefix = if depth == 0 {
            "  ".to_string()
        } else {
            format!("{}{}  ", prefix, if is_last { " " } else { "│" })
        };
        let children = catalog.children_of(Some(&taxon.id));
        let num_children = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.collect_lines(catalog, child, depth + 1, &child_prefix, i + 1 == num_children, lines);
        }
    }
}
